//! Response types for the BambooHR API.
//!
//! Keys follow the service's camelCase spelling; the PascalCase spellings
//! are accepted as aliases.

use serde::{Deserialize, Deserializer, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Employees
// ─────────────────────────────────────────────────────────────────────────────

/// A single person in the company directory.
///
/// Every attribute is optional: the directory and the single-employee lookup
/// only return what was asked for, and blank values come back as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Employee ID. Accepted as a JSON string or number.
    #[serde(default, alias = "ID", deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, alias = "DisplayName")]
    pub display_name: Option<String>,
    #[serde(default, alias = "FirstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "LastName")]
    pub last_name: Option<String>,
    #[serde(default, alias = "PreferredName")]
    pub preferred_name: Option<String>,
    #[serde(default, alias = "Gender")]
    pub gender: Option<String>,
    #[serde(default, alias = "JobTitle")]
    pub job_title: Option<String>,
    #[serde(default, alias = "WorkPhone")]
    pub work_phone: Option<String>,
    #[serde(default, alias = "MobilePhone")]
    pub mobile_phone: Option<String>,
    #[serde(default, alias = "WorkEmail")]
    pub work_email: Option<String>,
    #[serde(default, alias = "Department")]
    pub department: Option<String>,
    #[serde(default, alias = "Location")]
    pub location: Option<String>,
    #[serde(default, alias = "Division")]
    pub division: Option<String>,
    #[serde(default, alias = "LinkedIn")]
    pub linked_in: Option<String>,
    #[serde(default, alias = "WorkPhoneExtension")]
    pub work_phone_extension: Option<String>,
    /// `None` when the service did not report it, distinct from `Some(false)`.
    #[serde(default, alias = "PhotoUploaded")]
    pub photo_uploaded: Option<bool>,
    #[serde(default, alias = "PhotoURL", alias = "photoURL")]
    pub photo_url: Option<String>,
    /// `None` when the service did not report it, distinct from `Some(0)`.
    #[serde(default, alias = "CanUploadPhoto")]
    pub can_upload_photo: Option<i64>,
}

/// Response wrapper for the employee directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeDirectory {
    #[serde(default, alias = "Employees")]
    pub employees: Vec<Employee>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Files
// ─────────────────────────────────────────────────────────────────────────────

/// Response wrapper for an employee's files view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeFilesResponse {
    #[serde(default, alias = "Employee")]
    pub employee: EmployeeRef,
    #[serde(default, alias = "Categories")]
    pub categories: Vec<EmployeeCategory>,
}

/// Employee identifier embedded in the files view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeRef {
    #[serde(default, alias = "ID")]
    pub id: i64,
}

/// A file category (folder) on an employee record.
///
/// The `can_*` and `display_if_empty` flags are the service's `"yes"`/`"no"`
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCategory {
    #[serde(default, alias = "ID")]
    pub id: i64,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "CanRenameCategory")]
    pub can_rename_category: Option<String>,
    #[serde(default, alias = "CanDeleteCategory")]
    pub can_delete_category: Option<String>,
    #[serde(default, alias = "CanUploadFiles")]
    pub can_upload_files: Option<String>,
    #[serde(default, alias = "DisplayIfEmpty")]
    pub display_if_empty: Option<String>,
    #[serde(default, alias = "Files")]
    pub files: Vec<EmployeeFile>,
}

/// A file stored in an employee category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFile {
    #[serde(default, alias = "ID")]
    pub id: i64,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "OriginalFileName")]
    pub original_file_name: Option<String>,
    /// Size in bytes.
    #[serde(default, alias = "Size")]
    pub size: Option<i64>,
    #[serde(default, alias = "DateCreated")]
    pub date_created: Option<String>,
    #[serde(default, alias = "CreatedBy")]
    pub created_by: Option<String>,
    #[serde(default, alias = "ShareWithEmployee")]
    pub share_with_employee: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    }))
}
