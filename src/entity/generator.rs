//! Deterministic mock datasets the admin console seeds itself with.
//!
//! Every generator is a pure function of the record index, except `lastLogin`,
//! which counts back from a reference day. The `*_as_of` variants take that day
//! explicitly; the plain variants use today's UTC date.

use chrono::{Days, NaiveDate, Utc};

use crate::entity::contact::{Address, Education, EmergencyContact, SocialMedia};
use crate::entity::course::Course;
use crate::entity::student::{Attendance, CourseEnrollment, Financial, Student};
use crate::entity::user::User;
use crate::record::RecordId;

pub const STUDENT_COUNT: usize = 50;
pub const USER_COUNT: usize = 30;
pub const COURSE_COUNT: usize = 15;

const STUDENT_NAMES: [&str; 5] = [
    "John Smith",
    "Sarah Johnson",
    "Mike Williams",
    "Emily Brown",
    "David Jones",
];
const STUDENT_COURSES: [&str; 3] = ["Web Development", "Data Science", "Mobile Development"];
const STATUSES: [&str; 2] = ["Active", "Inactive"];
const ROLES: [&str; 4] = ["Teacher", "Trainer", "HR", "Admin"];
const DEPARTMENTS: [&str; 3] = ["Engineering", "Business", "Design"];
const CATEGORIES: [&str; 4] = ["Programming", "Design", "Business", "Marketing"];
const LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

/// Build a date from a zero-based month index, as the console's data did.
fn date(year: usize, month0: usize, day: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(year as i32, (month0 % 12) as u32 + 1, day as u32).unwrap_or_default()
}

fn days_before(today: NaiveDate, days: usize) -> NaiveDate {
    today
        .checked_sub_days(Days::new(days as u64))
        .unwrap_or(today)
}

fn new_york(street: String, i: usize) -> Address {
    Address {
        street,
        city: "New York".to_string(),
        state: "NY".to_string(),
        zip_code: 10000 + i as u32,
        country: "USA".to_string(),
    }
}

/// Generate the student dataset relative to today.
pub fn generate_students() -> Vec<Student> {
    generate_students_as_of(Utc::now().date_naive())
}

/// Generate the student dataset with `lastLogin` counted back from `today`.
pub fn generate_students_as_of(today: NaiveDate) -> Vec<Student> {
    (0..STUDENT_COUNT)
        .map(|i| {
            let full_name = STUDENT_NAMES[i % STUDENT_NAMES.len()];
            let (first, last) = full_name.split_once(' ').unwrap_or((full_name, ""));
            let enrolled_on = date(2024, i % 6, i % 28 + 1);

            Student {
                id: (i + 1) as RecordId,
                name: full_name.to_string(),
                email: format!(
                    "{}.{}{}@email.com",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    i + 1
                ),
                phone: format!("+1 (555) {:03}-{:04}", i + 100, (i + 1) * 10),
                alternate_phone: None,
                status: STATUSES[i % STATUSES.len()].to_string(),
                avatar: "/placeholder.svg".to_string(),
                date_of_birth: date(1990 + i % 25, i % 12, i % 28 + 1),
                age: 24 + (i % 15) as u32,
                gender: if i % 3 == 0 { "Female" } else { "Male" }.to_string(),
                nationality: "USA".to_string(),
                address: new_york(format!("{} Main St", (i + 1) * 100), i),
                education: Education {
                    level: "Bachelor's Degree".to_string(),
                    institution: format!("University {}", i + 1),
                    graduation_year: 2020 + (i % 5) as u32,
                    gpa: Some(format!("{:.2}", 3.0 + (i % 10) as f64 / 10.0)),
                    major: None,
                },
                emergency_contact: EmergencyContact {
                    name: format!("Emergency {first}"),
                    relationship: "Parent".to_string(),
                    phone: format!("+1 (555) {:03}-0000", i + 500),
                    email: format!("emergency{}@email.com", i + 1),
                },
                join_date: enrolled_on,
                last_login: days_before(today, i % 30),
                course: CourseEnrollment {
                    name: STUDENT_COURSES[i % STUDENT_COURSES.len()].to_string(),
                    enrollment_date: enrolled_on,
                    duration: "12 weeks".to_string(),
                    progress: 60 + (i % 40) as u32,
                    status: "Ongoing".to_string(),
                    remaining_days: (i % 90) as u32 + 1,
                    instructor: format!("Prof. {first}"),
                    grade: "B".to_string(),
                },
                financial: Financial {
                    tuition_fee: 3000,
                    paid_amount: 2000,
                    due_amount: 1000,
                    payment_method: "Credit Card".to_string(),
                    scholarship_amount: 0,
                },
                attendance: Attendance {
                    total_classes: 40,
                    attended_classes: 35,
                    attendance_percentage: 87,
                },
                total_courses: 2,
                completed_courses: 1,
                achievements: vec!["Good Student".to_string()],
                tags: vec!["Regular".to_string()],
                notes: "Student shows potential.".to_string(),
                social_media: SocialMedia::default(),
            }
        })
        .collect()
}

/// Generate the staff dataset relative to today.
pub fn generate_users() -> Vec<User> {
    generate_users_as_of(Utc::now().date_naive())
}

/// Generate the staff dataset with `lastLogin` counted back from `today`.
pub fn generate_users_as_of(today: NaiveDate) -> Vec<User> {
    (0..USER_COUNT)
        .map(|i| {
            let role = ROLES[i % ROLES.len()];
            let department = DEPARTMENTS[i % DEPARTMENTS.len()];

            User {
                id: (i + 1) as RecordId,
                name: format!("User {}", i + 1),
                email: format!("user{}@example.com", i + 1),
                phone: format!("+1 (555) {:03}-0000", i + 100),
                alternate_phone: None,
                role: role.to_string(),
                status: STATUSES[i % STATUSES.len()].to_string(),
                avatar: "/placeholder.svg".to_string(),
                date_of_birth: date(1970 + i % 35, i % 12, i % 28 + 1),
                age: 35 + (i % 20) as u32,
                hire_date: date(2015 + i % 9, i % 12, i % 28 + 1),
                experience: format!("{} years", 5 + i % 10),
                department: department.to_string(),
                employee_id: format!("EMP{:04}", i + 1),
                salary: 50_000 + (i as u32) * 1000,
                address: new_york(format!("{} Business Ave", (i + 1) * 100), i),
                education: Education {
                    level: "Master's Degree".to_string(),
                    institution: format!("University {}", i + 1),
                    graduation_year: 2000 + (i % 24) as u32,
                    gpa: None,
                    major: Some(department.to_string()),
                },
                emergency_contact: EmergencyContact {
                    name: format!("Emergency Contact {}", i + 1),
                    relationship: "Spouse".to_string(),
                    phone: format!("+1 (555) {:03}-0000", i + 600),
                    email: format!("emergency{}@example.com", i + 1),
                },
                skills: vec!["Leadership".to_string(), "Communication".to_string()],
                certifications: vec!["Professional Certification".to_string()],
                performance_rating: "4.5".to_string(),
                last_login: days_before(today, i % 30),
                notes: format!("Experienced {}.", role.to_lowercase()),
                social_media: SocialMedia::default(),
            }
        })
        .collect()
}

/// Generate the course catalogue.
pub fn generate_courses() -> Vec<Course> {
    (0..COURSE_COUNT)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];

            Course {
                id: (i + 1) as RecordId,
                name: format!("{category} Course {}", i + 1),
                email: String::new(),
                category: category.to_string(),
                duration: format!("{} weeks", 8 + i % 8),
                description: format!(
                    "Comprehensive {category} course covering fundamentals and advanced topics."
                ),
                enrolled_students: 20 + (i % 30) as u32,
                active_students: 18 + (i % 25) as u32,
                completed_students: (i % 10) as u32,
                average_progress: 70 + (i % 30) as u32,
                status: if i % 5 == 0 { "Inactive" } else { "Active" }.to_string(),
                start_date: date(2024, i % 6, i % 28 + 1),
                end_date: date(2024, i % 6 + 3, i % 28 + 1),
                instructor: format!("Instructor {}", i + 1),
                max_students: 50,
                price: 1000 + (i as u32) * 100,
                level: LEVELS[i % LEVELS.len()].to_string(),
            }
        })
        .collect()
}
