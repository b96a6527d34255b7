//! Course catalog and enrollment overview.

use crate::domain::course::catalog;
use crate::domain::student::Student;
use crate::domain::types::StudentStatus;
use crate::dto::courses::{CourseEnrollment, CourseOverview};
use crate::repository::StudentReader;
use crate::services::{ServiceError, ServiceResult};

/// Counts students per catalog course.
pub fn course_enrollment(students: &[Student]) -> CourseOverview {
    let courses: Vec<CourseEnrollment> = catalog()
        .into_iter()
        .map(|info| {
            let enrolled: Vec<&Student> = students
                .iter()
                .filter(|s| s.course == info.course)
                .collect();
            let active = enrolled
                .iter()
                .filter(|s| s.status == StudentStatus::Active)
                .count();
            CourseEnrollment {
                enrolled: enrolled.len(),
                active,
                info,
            }
        })
        .collect();

    let average_class_size = if courses.is_empty() {
        0
    } else {
        let total: usize = courses.iter().map(|c| c.enrolled).sum();
        (total + courses.len() / 2) / courses.len()
    };

    CourseOverview {
        courses,
        average_class_size,
    }
}

/// Loads the catalog together with live enrollment counts.
pub fn load_course_overview<R>(repo: &R) -> ServiceResult<CourseOverview>
where
    R: StudentReader + ?Sized,
{
    let students = repo.list_students().map_err(|err| {
        log::error!("Failed to list students: {err}");
        ServiceError::from(err)
    })?;

    Ok(course_enrollment(&students))
}
