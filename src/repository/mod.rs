use crate::{
    domain::{
        student::{NewStudent, Student},
        types::StudentId,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use memory::InMemoryStudentRepository;

pub trait StudentReader {
    /// Returns every student in insertion order.
    fn list_students(&self) -> RepositoryResult<Vec<Student>>;
    fn get_student_by_id(&self, id: &StudentId) -> RepositoryResult<Option<Student>>;
}

pub trait StudentWriter {
    /// Stores a new student under a freshly allocated identifier.
    fn create_student(&self, new_student: &NewStudent) -> RepositoryResult<Student>;
}
