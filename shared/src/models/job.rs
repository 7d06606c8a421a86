//! Job title catalog
//!
//! The closed set of job titles a role can carry, each with its fixed annual
//! salary. Roles are seeded from this table and validated against it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog entry: a job title and its fixed annual salary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum JobTitle {
    SoftwareEngineer,
    DataScientist,
    QaTester,
    SupportSpecialist,
    WebDeveloper,
    WebAdministrator,
    ItTechnician,
    UxDesigner,
    DatabaseAdministrator,
    ItDirector,
    CloudSystemEngineer,
}

impl JobTitle {
    /// Every catalog entry, in seeding order
    pub const ALL: [JobTitle; 11] = [
        JobTitle::SoftwareEngineer,
        JobTitle::DataScientist,
        JobTitle::QaTester,
        JobTitle::SupportSpecialist,
        JobTitle::WebDeveloper,
        JobTitle::WebAdministrator,
        JobTitle::ItTechnician,
        JobTitle::UxDesigner,
        JobTitle::DatabaseAdministrator,
        JobTitle::ItDirector,
        JobTitle::CloudSystemEngineer,
    ];

    /// Ordered catalog entries
    pub fn all() -> impl Iterator<Item = JobTitle> {
        Self::ALL.into_iter()
    }

    /// Look up an entry by title (case-insensitive, otherwise exact)
    pub fn by_title(title: &str) -> Option<JobTitle> {
        Self::all().find(|job| job.title().eq_ignore_ascii_case(title))
    }

    /// Human-readable title, also the persisted column value
    pub const fn title(&self) -> &'static str {
        match self {
            JobTitle::SoftwareEngineer => "Software Engineer",
            JobTitle::DataScientist => "Data Scientist",
            JobTitle::QaTester => "QA Tester",
            JobTitle::SupportSpecialist => "Support Specialist",
            JobTitle::WebDeveloper => "Web Developer",
            JobTitle::WebAdministrator => "Web Administrator",
            JobTitle::ItTechnician => "IT Technician",
            JobTitle::UxDesigner => "UX Designer",
            JobTitle::DatabaseAdministrator => "Database Administrator",
            JobTitle::ItDirector => "IT Director",
            JobTitle::CloudSystemEngineer => "Cloud System Engineer",
        }
    }

    /// Fixed annual salary, two decimal places
    pub fn annual_salary(&self) -> Decimal {
        let whole: i64 = match self {
            JobTitle::SoftwareEngineer => 45_000,
            JobTitle::DataScientist => 47_000,
            JobTitle::QaTester => 30_000,
            JobTitle::SupportSpecialist => 35_000,
            JobTitle::WebDeveloper => 34_000,
            JobTitle::WebAdministrator => 32_000,
            JobTitle::ItTechnician => 36_000,
            JobTitle::UxDesigner => 31_000,
            JobTitle::DatabaseAdministrator => 40_000,
            JobTitle::ItDirector => 67_000,
            JobTitle::CloudSystemEngineer => 55_000,
        };
        Decimal::new(whole * 100, 2)
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Error returned when a string names no catalog entry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job title: {0}")]
pub struct UnknownJobTitle(pub String);

impl FromStr for JobTitle {
    type Err = UnknownJobTitle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_title(s).ok_or_else(|| UnknownJobTitle(s.to_string()))
    }
}

impl From<JobTitle> for String {
    fn from(job: JobTitle) -> Self {
        job.title().to_string()
    }
}

impl TryFrom<String> for JobTitle {
    type Error = UnknownJobTitle;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eleven_distinct_titles() {
        let mut titles: Vec<_> = JobTitle::all().map(|j| j.title()).collect();
        assert_eq!(titles.len(), 11);
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 11);
    }

    #[test]
    fn test_by_title_ignores_case() {
        assert_eq!(
            JobTitle::by_title("data scientist"),
            Some(JobTitle::DataScientist)
        );
        assert_eq!(JobTitle::by_title("IT DIRECTOR"), Some(JobTitle::ItDirector));
        assert_eq!(JobTitle::by_title("Data  Scientist"), None);
        assert_eq!(JobTitle::by_title("Astronaut"), None);
        assert_eq!(JobTitle::by_title(""), None);
    }

    #[test]
    fn test_every_title_resolves_to_itself() {
        for job in JobTitle::all() {
            assert_eq!(JobTitle::by_title(job.title()), Some(job));
            assert_eq!(job.title().parse::<JobTitle>(), Ok(job));
        }
    }

    #[test]
    fn test_salaries_are_fixed() {
        assert_eq!(JobTitle::DataScientist.annual_salary().to_string(), "47000.00");
        assert_eq!(JobTitle::ItDirector.annual_salary().to_string(), "67000.00");
        assert_eq!(JobTitle::QaTester.annual_salary(), Decimal::new(30_000, 0));
    }

    #[test]
    fn test_serde_uses_title() {
        let json = serde_json::to_string(&JobTitle::UxDesigner).unwrap();
        assert_eq!(json, "\"UX Designer\"");
        let back: JobTitle = serde_json::from_str("\"ux designer\"").unwrap();
        assert_eq!(back, JobTitle::UxDesigner);
        assert!(serde_json::from_str::<JobTitle>("\"Astronaut\"").is_err());
    }
}
