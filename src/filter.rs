//! Course and free-text filtering of student lists.

use serde::{Deserialize, Serialize};

use crate::domain::student::Student;

/// Course filter value meaning "every course".
pub const ALL_COURSES: &str = "all";

/// Course selection and search text applied to a student list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Course title to match exactly; empty or [`ALL_COURSES`] disables it.
    #[serde(default)]
    pub course: String,
    /// Search text; empty disables it.
    #[serde(default)]
    pub search: String,
}

impl FilterCriteria {
    pub fn new(course: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            search: search.into(),
        }
    }

    /// Whether the criteria let every student through.
    pub fn is_empty(&self) -> bool {
        self.course_constraint().is_none() && self.search.is_empty()
    }

    fn course_constraint(&self) -> Option<&str> {
        match self.course.as_str() {
            "" | ALL_COURSES => None,
            course => Some(course),
        }
    }

    /// Checks a single student against the criteria.
    ///
    /// Name and email are compared case-insensitively, the id is compared
    /// with the search text as typed.
    pub fn matches(&self, student: &Student) -> bool {
        if let Some(course) = self.course_constraint() {
            if student.course.title() != course {
                return false;
            }
        }

        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        student.name.to_lowercase().contains(&needle)
            || student.email.as_str().to_lowercase().contains(&needle)
            || student.id.as_str().contains(self.search.as_str())
    }
}

/// Returns the students matching `criteria`, keeping their original order.
pub fn filter_students(students: &[Student], criteria: &FilterCriteria) -> Vec<Student> {
    students
        .iter()
        .filter(|student| criteria.matches(student))
        .cloned()
        .collect()
}
