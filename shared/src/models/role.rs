//! Role Model

use super::JobTitle;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Role entity (one persisted row per catalog entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub job_title: JobTitle,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub annual_salary: Decimal,
}

impl Role {
    /// Build a role whose salary is taken from the catalog
    pub fn from_catalog(id: i64, job_title: JobTitle) -> Self {
        Self {
            id,
            job_title,
            annual_salary: job_title.annual_salary(),
        }
    }

    /// Whether the salary still matches the catalog value for the title
    pub fn matches_catalog(&self) -> bool {
        self.annual_salary == self.job_title.annual_salary()
    }
}
