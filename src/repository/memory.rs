use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::student::{NewStudent, Student};
use crate::domain::types::StudentId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{StudentReader, StudentWriter};

/// First sequence number handed out when no canonical ids exist yet.
pub const FIRST_STUDENT_SEQUENCE: u32 = 10000;

/// Process-local student store. Clones share the same underlying list.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStudentRepository {
    students: Arc<RwLock<Vec<Student>>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store, rejecting collections that repeat an id.
    pub fn with_students(students: Vec<Student>) -> RepositoryResult<Self> {
        let mut seen: HashSet<&StudentId> = HashSet::with_capacity(students.len());
        if let Some(duplicate) = students.iter().find(|s| !seen.insert(&s.id)) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Duplicate student id: {}",
                duplicate.id
            )));
        }
        drop(seen);

        Ok(Self {
            students: Arc::new(RwLock::new(students)),
        })
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Vec<Student>>> {
        self.students
            .read()
            .map_err(|e| RepositoryError::Unexpected(format!("Poisoned student store: {e}")))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Vec<Student>>> {
        self.students
            .write()
            .map_err(|e| RepositoryError::Unexpected(format!("Poisoned student store: {e}")))
    }
}

fn next_student_id(students: &[Student]) -> RepositoryResult<StudentId> {
    let next = match students.iter().filter_map(|s| s.id.sequence()).max() {
        Some(highest) => highest.checked_add(1).ok_or_else(|| {
            RepositoryError::Unexpected("Student id sequence exhausted".to_string())
        })?,
        None => FIRST_STUDENT_SEQUENCE,
    };
    Ok(StudentId::from_sequence(next))
}

impl StudentReader for InMemoryStudentRepository {
    fn list_students(&self) -> RepositoryResult<Vec<Student>> {
        Ok(self.read()?.clone())
    }

    fn get_student_by_id(&self, id: &StudentId) -> RepositoryResult<Option<Student>> {
        Ok(self.read()?.iter().find(|s| &s.id == id).cloned())
    }
}

impl StudentWriter for InMemoryStudentRepository {
    fn create_student(&self, new_student: &NewStudent) -> RepositoryResult<Student> {
        let mut students = self.write()?;
        let id = next_student_id(&students)?;
        let student = new_student.clone().into_student(id);
        students.push(student.clone());
        Ok(student)
    }
}
