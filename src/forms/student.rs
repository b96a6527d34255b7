use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::student::NewStudent;
use crate::domain::types::{Course, Gpa, StudentEmail, StudentName, StudentStatus};
use crate::forms::FormError;

/// Date format accepted by the add-student form.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Shortest first or last name accepted, counted after trimming.
pub const MIN_NAME_PART_LEN: usize = 2;

fn default_status() -> String {
    "Active".to_string()
}

fn default_gpa() -> String {
    "0.0".to_string()
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for enrolling a new student.
pub struct AddStudentForm {
    #[validate(length(min = 2))]
    pub first_name: String,
    #[validate(length(min = 2))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    /// Course title as listed in the catalog.
    #[validate(length(min = 1))]
    pub course: String,
    /// Enrollment date as `YYYY-MM-DD`.
    #[validate(length(min = 1))]
    pub enrollment_date: String,
    #[serde(default = "default_status")]
    #[validate(length(min = 1))]
    pub status: String,
    #[serde(default = "default_gpa")]
    pub gpa: String,
}

/// Parsed and typed contents of [`AddStudentForm`].
pub struct AddStudentPayload {
    pub student: NewStudent,
}

impl TryFrom<AddStudentForm> for AddStudentPayload {
    type Error = FormError;

    fn try_from(form: AddStudentForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let first_name = form.first_name.trim();
        let last_name = form.last_name.trim();
        if first_name.chars().count() < MIN_NAME_PART_LEN
            || last_name.chars().count() < MIN_NAME_PART_LEN
        {
            return Err(FormError::InvalidName);
        }

        let full_name = format!("{first_name} {last_name}");
        let name = StudentName::new(full_name).map_err(|_| FormError::InvalidName)?;
        let email = StudentEmail::new(form.email).map_err(|_| FormError::InvalidEmail)?;
        let course = form
            .course
            .parse::<Course>()
            .map_err(|_| FormError::InvalidCourse)?;
        let enrollment_date = NaiveDate::parse_from_str(form.enrollment_date.trim(), FORM_DATE_FORMAT)
            .map_err(|_| FormError::InvalidDate)?;
        let status = form
            .status
            .parse::<StudentStatus>()
            .map_err(|_| FormError::InvalidStatus)?;
        let gpa = form.gpa.parse::<Gpa>().map_err(|_| FormError::InvalidGpa)?;

        Ok(Self {
            student: NewStudent {
                name,
                email,
                course,
                enrollment_date,
                status,
                gpa,
            },
        })
    }
}
