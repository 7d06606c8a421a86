//! Employee Model

use super::Role;
use serde::{Deserialize, Serialize};

/// Employee entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Role reference (foreign key, not owned)
    pub role_id: i64,
}

/// Employee together with its currently resolved role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeWithRole {
    pub employee: Employee,
    pub role: Role,
}

/// Role reference inside a submission: `{"id": 3}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Create / replace employee payload
///
/// Missing fields deserialize to empty values so that validation, not the
/// JSON decoder, reports what is wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: Option<RoleRef>,
}

impl EmployeeDraft {
    /// Example of a valid submission, returned with rejected requests
    pub const SUBMISSION_SHAPE: &'static str =
        r#"{"firstName":"value1", "lastName":"value2", "role": {"id": [1-11]}}"#;

    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, role_id: i64) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: Some(RoleRef { id: Some(role_id) }),
        }
    }

    /// The submitted role id, if any
    pub fn role_id(&self) -> Option<i64> {
        self.role.as_ref().and_then(|r| r.id)
    }
}
