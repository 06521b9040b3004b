//! Staff user records (teachers, trainers, HR and admins).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::contact::{Address, Education, EmergencyContact, SocialMedia, split_path};
use crate::record::{FieldValue, Record, RecordId, base_field};

/// A staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<String>,
    pub role: String,
    pub status: String,
    pub avatar: String,
    pub date_of_birth: NaiveDate,
    pub age: u32,
    pub hire_date: NaiveDate,
    pub experience: String,
    pub department: String,
    pub employee_id: String,
    pub salary: u32,
    pub address: Address,
    pub education: Education,
    pub emergency_contact: EmergencyContact,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub performance_rating: String,
    pub last_login: NaiveDate,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub social_media: SocialMedia,
}

/// Partial update for a [`User`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
    pub experience: Option<String>,
    pub salary: Option<u32>,
    pub address: Option<Address>,
    pub education: Option<Education>,
    pub emergency_contact: Option<EmergencyContact>,
    pub skills: Option<Vec<String>>,
    pub performance_rating: Option<String>,
    pub notes: Option<String>,
}

/// Dashboard aggregates for staff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Head count per role.
    pub by_role: BTreeMap<String, usize>,
}

impl Record for User {
    type Patch = UserPatch;
    type Summary = UserSummary;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        if let Some(value) = base_field(self, name) {
            return Some(value);
        }

        if let Some((parent, child)) = split_path(name) {
            return match parent {
                "address" => self.address.field(child),
                "education" => self.education.field(child),
                "emergencyContact" => self.emergency_contact.field(child),
                _ => None,
            };
        }

        match name {
            "phone" => Some(self.phone.as_str().into()),
            "alternatePhone" => Some(self.alternate_phone.clone().into()),
            "role" => Some(self.role.as_str().into()),
            "avatar" => Some(self.avatar.as_str().into()),
            "dateOfBirth" => Some(self.date_of_birth.into()),
            "age" => Some(self.age.into()),
            "hireDate" => Some(self.hire_date.into()),
            "experience" => Some(self.experience.as_str().into()),
            "department" => Some(self.department.as_str().into()),
            "employeeId" => Some(self.employee_id.as_str().into()),
            "salary" => Some(self.salary.into()),
            "skills" => Some(self.skills.join(", ").into()),
            "certifications" => Some(self.certifications.join(", ").into()),
            "performanceRating" => Some(self.performance_rating.as_str().into()),
            "lastLogin" => Some(self.last_login.into()),
            "notes" => Some(self.notes.as_str().into()),
            _ => None,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(education) = patch.education {
            self.education = education;
        }
        if let Some(contact) = patch.emergency_contact {
            self.emergency_contact = contact;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(rating) = patch.performance_rating {
            self.performance_rating = rating;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }

    fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    fn summarize(records: &[Self]) -> UserSummary {
        let mut by_role = BTreeMap::new();
        for user in records {
            *by_role.entry(user.role.clone()).or_insert(0) += 1;
        }
        UserSummary { by_role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::generator::generate_users;

    #[test]
    fn test_role_and_department_fields() {
        let user = generate_users().remove(0);
        assert_eq!(user.field("role"), Some("Teacher".into()));
        assert_eq!(user.field("department"), Some("Engineering".into()));
        assert_eq!(user.field("salary"), Some(FieldValue::Integer(50000)));
        assert_eq!(user.field("education.major"), Some("Engineering".into()));
    }

    #[test]
    fn test_summary_counts_roles() {
        let summary = User::summarize(&generate_users());
        assert_eq!(summary.by_role.get("Teacher"), Some(&8));
        assert_eq!(summary.by_role.get("Trainer"), Some(&8));
        assert_eq!(summary.by_role.get("HR"), Some(&7));
        assert_eq!(summary.by_role.get("Admin"), Some(&7));
    }
}
