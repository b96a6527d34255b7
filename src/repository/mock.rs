//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::student::{NewStudent, Student};
use crate::domain::types::StudentId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{StudentReader, StudentWriter};

mock! {
    pub Repository {}

    impl StudentReader for Repository {
        fn list_students(&self) -> RepositoryResult<Vec<Student>>;
        fn get_student_by_id(&self, id: &StudentId) -> RepositoryResult<Option<Student>>;
    }

    impl StudentWriter for Repository {
        fn create_student(&self, new_student: &NewStudent) -> RepositoryResult<Student>;
    }
}
