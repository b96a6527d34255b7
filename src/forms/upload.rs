//! CSV import of a student roster.
//!
//! Expected header: `id,name,email,course,enrollment_date,status,gpa`, with
//! dates written as `YYYY-MM-DD`.

use std::io::Read;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::student::Student;
use crate::domain::types::{StudentEmail, StudentId, StudentName, TypeConstraintError};
use crate::forms::FormError;
use crate::forms::student::FORM_DATE_FORMAT;

#[derive(Debug, Deserialize)]
struct StudentRow {
    id: String,
    name: String,
    email: String,
    course: String,
    enrollment_date: String,
    status: String,
    gpa: String,
}

impl StudentRow {
    fn into_student(self) -> Result<Student, TypeConstraintError> {
        Ok(Student {
            id: StudentId::new(self.id)?,
            name: StudentName::new(self.name)?,
            email: StudentEmail::new(self.email)?,
            course: self.course.parse()?,
            enrollment_date: NaiveDate::parse_from_str(self.enrollment_date.trim(), FORM_DATE_FORMAT)
                .map_err(|_| TypeConstraintError::InvalidDate)?,
            status: self.status.parse()?,
            gpa: self.gpa.parse()?,
        })
    }
}

/// Line on which the record read at `position` starts.
///
/// The reader positions a record before the blank lines it skips, so those
/// are counted here.
fn record_line(data: &[u8], position: &csv::Position) -> usize {
    let start = usize::try_from(position.byte()).unwrap_or(usize::MAX);
    let skipped = data
        .get(start..)
        .unwrap_or(&[])
        .iter()
        .take_while(|byte| matches!(byte, b'\r' | b'\n'))
        .filter(|byte| **byte == b'\n')
        .count();
    usize::try_from(position.line()).unwrap_or(usize::MAX).saturating_add(skipped)
}

/// Parses every row of a roster CSV into validated students.
///
/// Fails on the first invalid row, reporting the line the row starts on.
pub fn parse_students_csv<R: Read>(mut reader: R) -> Result<Vec<Student>, FormError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(csv::Error::from)?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_slice());
    let headers = rdr.headers()?.clone();
    let mut students = Vec::new();

    for record in rdr.records() {
        let record = record?;
        let line = record
            .position()
            .map(|position| record_line(&data, position))
            .unwrap_or_default();
        let row: StudentRow = record.deserialize(Some(&headers))?;
        let student = row
            .into_student()
            .map_err(|source| FormError::InvalidRow { line, source })?;
        students.push(student);
    }

    Ok(students)
}
