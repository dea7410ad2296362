//! Employee field selection for single-employee lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field that can be requested when fetching a single employee.
///
/// Serializes to the literal name the service expects in the `fields`
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeField {
    DisplayName,
    FirstName,
    LastName,
    PreferredName,
    Gender,
    JobTitle,
    WorkPhone,
    MobilePhone,
    WorkEmail,
    Department,
    Location,
    Division,
    LinkedIn,
    WorkPhoneExtension,
    PhotoUploaded,
    #[serde(rename = "PhotoURL")]
    PhotoUrl,
    CanUploadPhoto,
}

impl EmployeeField {
    /// Every known field, in the order sent when the caller asks for none.
    pub const ALL: [EmployeeField; 17] = [
        EmployeeField::DisplayName,
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::PreferredName,
        EmployeeField::Gender,
        EmployeeField::JobTitle,
        EmployeeField::WorkPhone,
        EmployeeField::MobilePhone,
        EmployeeField::WorkEmail,
        EmployeeField::Department,
        EmployeeField::Location,
        EmployeeField::Division,
        EmployeeField::LinkedIn,
        EmployeeField::WorkPhoneExtension,
        EmployeeField::PhotoUploaded,
        EmployeeField::PhotoUrl,
        EmployeeField::CanUploadPhoto,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeField::DisplayName => "DisplayName",
            EmployeeField::FirstName => "FirstName",
            EmployeeField::LastName => "LastName",
            EmployeeField::PreferredName => "PreferredName",
            EmployeeField::Gender => "Gender",
            EmployeeField::JobTitle => "JobTitle",
            EmployeeField::WorkPhone => "WorkPhone",
            EmployeeField::MobilePhone => "MobilePhone",
            EmployeeField::WorkEmail => "WorkEmail",
            EmployeeField::Department => "Department",
            EmployeeField::Location => "Location",
            EmployeeField::Division => "Division",
            EmployeeField::LinkedIn => "LinkedIn",
            EmployeeField::WorkPhoneExtension => "WorkPhoneExtension",
            EmployeeField::PhotoUploaded => "PhotoUploaded",
            EmployeeField::PhotoUrl => "PhotoURL",
            EmployeeField::CanUploadPhoto => "CanUploadPhoto",
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list of employee fields.
///
/// The default value holds every known field in [`EmployeeField::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields(Vec<EmployeeField>);

impl EmployeeFields {
    /// Wrap an explicit, ordered field list.
    pub fn new(fields: Vec<EmployeeField>) -> Self {
        Self(fields)
    }

    /// Every known field in default order.
    pub fn all() -> Self {
        Self(EmployeeField::ALL.to_vec())
    }

    /// Use the caller's fields, or every field when none were given.
    pub fn or_all(fields: &[EmployeeField]) -> Self {
        if fields.is_empty() {
            Self::all()
        } else {
            Self(fields.to_vec())
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &EmployeeField> {
        self.0.iter()
    }

    /// Concatenate the field names with `sep` between consecutive elements.
    pub fn join(&self, sep: &str) -> String {
        match self.0.as_slice() {
            [] => String::new(),
            [only] => only.as_str().to_string(),
            [first, rest @ ..] => {
                let len = sep.len() * rest.len()
                    + self.0.iter().map(|f| f.as_str().len()).sum::<usize>();
                let mut out = String::with_capacity(len);
                out.push_str(first.as_str());
                for field in rest {
                    out.push_str(sep);
                    out.push_str(field.as_str());
                }
                out
            }
        }
    }
}

impl Default for EmployeeFields {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Vec<EmployeeField>> for EmployeeFields {
    fn from(fields: Vec<EmployeeField>) -> Self {
        Self(fields)
    }
}

impl FromIterator<EmployeeField> for EmployeeFields {
    fn from_iter<I: IntoIterator<Item = EmployeeField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
