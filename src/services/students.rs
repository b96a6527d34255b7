//! Student list, detail and enrollment workflows.

use crate::domain::auth::AuthenticatedUser;
use crate::domain::student::Student;
use crate::domain::types::StudentId;
use crate::dto::students::{StudentDetailsData, StudentListPage, StudentListQuery};
use crate::filter::{FilterCriteria, filter_students};
use crate::forms::student::{AddStudentForm, AddStudentPayload};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_PAGE_BUTTONS, Paginated, total_pages};
use crate::repository::{StudentReader, StudentWriter};
use crate::services::{ServiceError, ServiceResult, ensure_signed_in};

/// Filter and page position of the student table.
///
/// Every transition returns a new state. Changing the criteria or reloading
/// the source collection always lands on page 1; only navigation moves the
/// page elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentListState {
    criteria: FilterCriteria,
    page: usize,
    items_per_page: usize,
    max_page_buttons: usize,
}

impl Default for StudentListState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_PAGE_BUTTONS)
    }
}

impl StudentListState {
    pub fn new(items_per_page: usize, max_page_buttons: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            items_per_page: items_per_page.max(1),
            max_page_buttons,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Replaces the criteria and returns to the first page.
    #[must_use]
    pub fn apply_filters(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self.page = 1;
        self
    }

    /// Records that the underlying student collection was replaced.
    #[must_use]
    pub fn reload(mut self) -> Self {
        self.page = 1;
        self
    }

    /// Moves to `page`, clamped to `1..=max(1, total_pages)`.
    #[must_use]
    pub fn go_to_page(mut self, page: usize, total_pages: usize) -> Self {
        self.page = page.clamp(1, total_pages.max(1));
        self
    }

    #[must_use]
    pub fn next_page(self, total_pages: usize) -> Self {
        let page = self.page.saturating_add(1);
        self.go_to_page(page, total_pages)
    }

    #[must_use]
    pub fn previous_page(mut self) -> Self {
        self.page = self.page.saturating_sub(1).max(1);
        self
    }

    /// Page count for `students` under the current criteria.
    pub fn total_pages(&self, students: &[Student]) -> usize {
        total_pages(
            filter_students(students, &self.criteria).len(),
            self.items_per_page,
        )
    }

    /// Renders the visible page for `students`.
    pub fn view(&self, students: &[Student]) -> StudentListPage {
        self.render(&filter_students(students, &self.criteria))
    }

    fn render(&self, filtered: &[Student]) -> StudentListPage {
        StudentListPage {
            students: Paginated::from_slice(
                filtered,
                self.page,
                self.items_per_page,
                self.max_page_buttons,
            ),
            criteria: self.criteria.clone(),
        }
    }
}

/// Loads the student table for a list query.
///
/// The requested page is clamped to the pages available after filtering.
pub fn load_student_list<R>(
    repo: &R,
    state: StudentListState,
    query: &StudentListQuery,
) -> ServiceResult<StudentListPage>
where
    R: StudentReader + ?Sized,
{
    let students = repo.list_students().map_err(|err| {
        log::error!("Failed to list students: {err}");
        ServiceError::from(err)
    })?;

    let state = state.apply_filters(query.criteria());
    let filtered = filter_students(&students, state.criteria());
    let pages = total_pages(filtered.len(), state.items_per_page());
    let state = state.go_to_page(query.page.unwrap_or(1), pages);

    log::debug!(
        "Student list: {} of {} match, page {}/{}",
        filtered.len(),
        students.len(),
        state.page(),
        pages.max(1)
    );

    Ok(state.render(&filtered))
}

/// Loads a single student's details. Requires a signed-in user.
pub fn load_student_details<R>(
    repo: &R,
    user: Option<&AuthenticatedUser>,
    student_id: &str,
) -> ServiceResult<StudentDetailsData>
where
    R: StudentReader + ?Sized,
{
    ensure_signed_in(user)?;

    let student_id = StudentId::new(student_id)?;

    let student = repo
        .get_student_by_id(&student_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(StudentDetailsData {
        enrolled_on: student.enrollment_display(),
        student,
    })
}

/// Validates the add-student form and stores the new student.
pub fn add_student<R>(
    repo: &R,
    user: Option<&AuthenticatedUser>,
    form: AddStudentForm,
) -> ServiceResult<Student>
where
    R: StudentWriter + ?Sized,
{
    let user = ensure_signed_in(user)?;

    let payload = AddStudentPayload::try_from(form).map_err(|err| {
        log::error!("Failed to validate add-student form: {err}");
        ServiceError::from(err)
    })?;

    let student = repo.create_student(&payload.student).map_err(|err| {
        log::error!("Failed to add a student: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Student {} added by {}", student.id, user.email);

    Ok(student)
}
