//! Student records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::contact::{Address, Education, EmergencyContact, SocialMedia, split_path};
use crate::record::{FieldValue, Record, RecordId, base_field, mean};

/// A student's current course enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseEnrollment {
    pub name: String,
    pub enrollment_date: NaiveDate,
    pub duration: String,
    /// Completion percentage, 0..=100.
    pub progress: u32,
    pub status: String,
    pub remaining_days: u32,
    pub instructor: String,
    pub grade: String,
}

impl CourseEnrollment {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "enrollmentDate" => Some(self.enrollment_date.into()),
            "duration" => Some(self.duration.as_str().into()),
            "progress" => Some(self.progress.into()),
            "status" => Some(self.status.as_str().into()),
            "remainingDays" => Some(self.remaining_days.into()),
            "instructor" => Some(self.instructor.as_str().into()),
            "grade" => Some(self.grade.as_str().into()),
            _ => None,
        }
    }
}

/// Tuition and payment state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financial {
    pub tuition_fee: u32,
    pub paid_amount: u32,
    pub due_amount: u32,
    pub payment_method: String,
    pub scholarship_amount: u32,
}

impl Financial {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "tuitionFee" => Some(self.tuition_fee.into()),
            "paidAmount" => Some(self.paid_amount.into()),
            "dueAmount" => Some(self.due_amount.into()),
            "paymentMethod" => Some(self.payment_method.as_str().into()),
            "scholarshipAmount" => Some(self.scholarship_amount.into()),
            _ => None,
        }
    }
}

/// Class attendance counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub total_classes: u32,
    pub attended_classes: u32,
    pub attendance_percentage: u32,
}

impl Attendance {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "totalClasses" => Some(self.total_classes.into()),
            "attendedClasses" => Some(self.attended_classes.into()),
            "attendancePercentage" => Some(self.attendance_percentage.into()),
            _ => None,
        }
    }
}

/// An enrolled student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<String>,
    pub status: String,
    pub avatar: String,
    pub date_of_birth: NaiveDate,
    pub age: u32,
    pub gender: String,
    pub nationality: String,
    pub address: Address,
    pub education: Education,
    pub emergency_contact: EmergencyContact,
    pub join_date: NaiveDate,
    pub last_login: NaiveDate,
    pub course: CourseEnrollment,
    pub financial: Financial,
    pub attendance: Attendance,
    pub total_courses: u32,
    pub completed_courses: u32,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub social_media: SocialMedia,
}

/// Partial update for a [`Student`]. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,
    pub status: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub address: Option<Address>,
    pub education: Option<Education>,
    pub emergency_contact: Option<EmergencyContact>,
    pub course: Option<CourseEnrollment>,
    pub financial: Option<Financial>,
    pub attendance: Option<Attendance>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
}

/// Dashboard aggregates for students.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    /// Students whose current course is ongoing.
    pub enrolled: usize,
    /// Mean course progress across all students.
    pub average_progress: f64,
}

impl Record for Student {
    type Patch = StudentPatch;
    type Summary = StudentSummary;

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
                "course" => self.course.field(child),
                "financial" => self.financial.field(child),
                "attendance" => self.attendance.field(child),
                _ => None,
            };
        }

        match name {
            "phone" => Some(self.phone.as_str().into()),
            "alternatePhone" => Some(self.alternate_phone.clone().into()),
            "avatar" => Some(self.avatar.as_str().into()),
            "dateOfBirth" => Some(self.date_of_birth.into()),
            "age" => Some(self.age.into()),
            "gender" => Some(self.gender.as_str().into()),
            "nationality" => Some(self.nationality.as_str().into()),
            "joinDate" => Some(self.join_date.into()),
            "lastLogin" => Some(self.last_login.into()),
            "course" => Some(self.course.name.as_str().into()),
            "totalCourses" => Some(self.total_courses.into()),
            "completedCourses" => Some(self.completed_courses.into()),
            "notes" => Some(self.notes.as_str().into()),
            "tags" => Some(self.tags.join(", ").into()),
            _ => None,
        }
    }

    fn apply_patch(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(alternate_phone) = patch.alternate_phone {
            self.alternate_phone = Some(alternate_phone);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(nationality) = patch.nationality {
            self.nationality = nationality;
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
        if let Some(course) = patch.course {
            self.course = course;
        }
        if let Some(financial) = patch.financial {
            self.financial = financial;
        }
        if let Some(attendance) = patch.attendance {
            self.attendance = attendance;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }

    fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    fn summarize(records: &[Self]) -> StudentSummary {
        let enrolled = records
            .iter()
            .filter(|s| s.course.status == "Ongoing")
            .count();
        let progress: f64 = records.iter().map(|s| f64::from(s.course.progress)).sum();

        StudentSummary {
            enrolled,
            average_progress: mean(progress, records.len()),
        }
    }
}
