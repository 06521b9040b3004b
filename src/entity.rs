//! Concrete entity types managed by the admin console.
//!
//! - [`student::Student`] - enrolled students with course, fee and attendance data
//! - [`user::User`] - staff members (teachers, trainers, HR, admins)
//! - [`course::Course`] - the course catalogue
//!
//! All three implement [`Record`](crate::record::Record) and serialize with the
//! camelCase field names the console's JSON uses. [`generator`] produces the
//! mock datasets the console starts with.

pub mod contact;
pub mod course;
pub mod generator;
pub mod student;
pub mod user;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{EduDeskError, Result};

pub use course::Course;
pub use student::Student;
pub use user::User;

/// The entity collections the console manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Students,
    Users,
    Courses,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Students => "students",
            EntityKind::Users => "users",
            EntityKind::Courses => "courses",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = EduDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "students" | "student" => Ok(EntityKind::Students),
            "users" | "user" | "staff" => Ok(EntityKind::Users),
            "courses" | "course" => Ok(EntityKind::Courses),
            other => Err(EduDeskError::invalid_argument(format!(
                "unknown entity type '{other}'"
            ))),
        }
    }
}

/// Load a JSON array of records from a file.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path)?;
    let records = serde_json::from_str(&text)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::entity::generator::generate_courses;

    #[test]
    fn test_entity_kind_parsing() {
        assert_eq!("Students".parse::<EntityKind>().unwrap(), EntityKind::Students);
        assert_eq!("staff".parse::<EntityKind>().unwrap(), EntityKind::Users);
        assert!("fees".parse::<EntityKind>().is_err());
        assert_eq!(EntityKind::Courses.to_string(), "courses");
    }

    #[test]
    fn test_load_records_from_file() {
        let courses = generate_courses();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&courses).unwrap().as_bytes())
            .unwrap();

        let loaded: Vec<Course> = load_records(file.path()).unwrap();
        assert_eq!(loaded, courses);
    }

    #[test]
    fn test_load_records_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"an array\"}").unwrap();

        let result: Result<Vec<Course>> = load_records(file.path());
        assert!(matches!(result, Err(EduDeskError::Json(_))));
    }
}
