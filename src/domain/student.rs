use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Course, Gpa, StudentEmail, StudentId, StudentName, StudentStatus};

/// Format used when an enrollment date is shown to users, e.g. `Mar 7, 2021`.
pub const ENROLLMENT_DISPLAY_FORMAT: &str = "%b %-d, %Y";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub name: StudentName,
    pub email: StudentEmail,
    pub course: Course,
    pub enrollment_date: NaiveDate,
    pub status: StudentStatus,
    pub gpa: Gpa,
}

impl Student {
    /// Enrollment date rendered for tables and detail pages.
    pub fn enrollment_display(&self) -> String {
        self.enrollment_date
            .format(ENROLLMENT_DISPLAY_FORMAT)
            .to_string()
    }
}

/// A student that has not been assigned an identifier yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewStudent {
    pub name: StudentName,
    pub email: StudentEmail,
    pub course: Course,
    pub enrollment_date: NaiveDate,
    pub status: StudentStatus,
    pub gpa: Gpa,
}

impl NewStudent {
    #[must_use]
    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            course: self.course,
            enrollment_date: self.enrollment_date,
            status: self.status,
            gpa: self.gpa,
        }
    }
}
