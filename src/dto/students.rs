use serde::{Deserialize, Serialize};

use crate::domain::student::Student;
use crate::filter::FilterCriteria;
use crate::pagination::Paginated;

/// Query parameters accepted by the student list service.
#[derive(Debug, Default, Deserialize)]
pub struct StudentListQuery {
    /// Selected course title, or `all`.
    pub course: Option<String>,
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

impl StudentListQuery {
    /// Criteria for the filter. The search text is kept exactly as typed.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.course.as_deref().unwrap_or_default().trim(),
            self.search.as_deref().unwrap_or_default(),
        )
    }
}

/// Data required to render the student table.
#[derive(Debug, Clone, Serialize)]
pub struct StudentListPage {
    /// Current page of matching students plus the page selector.
    pub students: Paginated<Student>,
    /// Criteria echoed back so inputs keep their values.
    pub criteria: FilterCriteria,
}

impl StudentListPage {
    /// True when nothing matched and the "no students found" state applies.
    pub fn is_empty(&self) -> bool {
        self.students.total_items == 0
    }
}

/// Data shown on a student's detail page.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDetailsData {
    pub student: Student,
    /// Enrollment date in display form.
    pub enrolled_on: String,
}
