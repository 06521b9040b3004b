//! Nested value types shared by students and staff.

use serde::{Deserialize, Serialize};

use crate::record::FieldValue;

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: u32,
    pub country: String,
}

impl Address {
    /// Resolve `address.*` sub-fields.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "street" => Some(self.street.as_str().into()),
            "city" => Some(self.city.as_str().into()),
            "state" => Some(self.state.as_str().into()),
            "zipCode" => Some(self.zip_code.into()),
            "country" => Some(self.country.as_str().into()),
            _ => None,
        }
    }
}

/// Highest education attained.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub level: String,
    pub institution: String,
    pub graduation_year: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
}

impl Education {
    /// Resolve `education.*` sub-fields.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "level" => Some(self.level.as_str().into()),
            "institution" => Some(self.institution.as_str().into()),
            "graduationYear" => Some(self.graduation_year.into()),
            "gpa" => Some(self.gpa.clone().into()),
            "major" => Some(self.major.clone().into()),
            _ => None,
        }
    }
}

/// Person to call in an emergency.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub email: String,
}

impl EmergencyContact {
    /// Resolve `emergencyContact.*` sub-fields.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "relationship" => Some(self.relationship.as_str().into()),
            "phone" => Some(self.phone.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            _ => None,
        }
    }
}

/// Optional social profile links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Split `parent.child` into its two halves.
pub(crate) fn split_path(name: &str) -> Option<(&str, &str)> {
    name.split_once('.')
}
