//! Course catalogue records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, Record, RecordId, base_field, mean};

/// A course offered by the institute.
///
/// Courses have no contact address; `email` is kept empty so the record still
/// satisfies the shared [`Record`] shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub category: String,
    pub duration: String,
    pub description: String,
    pub enrolled_students: u32,
    pub active_students: u32,
    pub completed_students: u32,
    pub average_progress: u32,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub instructor: String,
    pub max_students: u32,
    pub price: u32,
    pub level: String,
}

/// Partial update for a [`Course`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub enrolled_students: Option<u32>,
    pub active_students: Option<u32>,
    pub completed_students: Option<u32>,
    pub average_progress: Option<u32>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub instructor: Option<String>,
    pub max_students: Option<u32>,
    pub price: Option<u32>,
    pub level: Option<String>,
}

/// Dashboard aggregates for courses.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub total_enrolled: u64,
    pub average_progress: f64,
}

impl Record for Course {
    type Patch = CoursePatch;
    type Summary = CourseSummary;

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

        match name {
            "category" => Some(self.category.as_str().into()),
            "duration" => Some(self.duration.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "enrolledStudents" => Some(self.enrolled_students.into()),
            "activeStudents" => Some(self.active_students.into()),
            "completedStudents" => Some(self.completed_students.into()),
            "averageProgress" => Some(self.average_progress.into()),
            "startDate" => Some(self.start_date.into()),
            "endDate" => Some(self.end_date.into()),
            "instructor" => Some(self.instructor.as_str().into()),
            "maxStudents" => Some(self.max_students.into()),
            "price" => Some(self.price.into()),
            "level" => Some(self.level.as_str().into()),
            _ => None,
        }
    }

    fn apply_patch(&mut self, patch: CoursePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(enrolled) = patch.enrolled_students {
            self.enrolled_students = enrolled;
        }
        if let Some(active) = patch.active_students {
            self.active_students = active;
        }
        if let Some(completed) = patch.completed_students {
            self.completed_students = completed;
        }
        if let Some(progress) = patch.average_progress {
            self.average_progress = progress;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(start) = patch.start_date {
            self.start_date = start;
        }
        if let Some(end) = patch.end_date {
            self.end_date = end;
        }
        if let Some(instructor) = patch.instructor {
            self.instructor = instructor;
        }
        if let Some(max) = patch.max_students {
            self.max_students = max;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
    }

    fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    fn summarize(records: &[Self]) -> CourseSummary {
        let total_enrolled = records
            .iter()
            .map(|c| u64::from(c.enrolled_students))
            .sum();
        let progress: f64 = records.iter().map(|c| f64::from(c.average_progress)).sum();

        CourseSummary {
            total_enrolled,
            average_progress: mean(progress, records.len()),
        }
    }
}
