use serde::Serialize;

use crate::domain::course::CourseInfo;

/// Catalog entry with the number of students currently enrolled.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CourseEnrollment {
    pub info: CourseInfo,
    pub enrolled: usize,
    pub active: usize,
}

/// Data behind the courses overview.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CourseOverview {
    pub courses: Vec<CourseEnrollment>,
    /// Mean enrolled students per course, rounded to the nearest whole student.
    pub average_class_size: usize,
}
