//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., GPA range, known course
//! titles, normalized/validated email) so that once a value reaches the domain
//! layer it can be treated as trusted.
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided student identifier was empty or contained whitespace.
    #[error("invalid student id")]
    InvalidStudentId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Course title is not part of the catalog.
    #[error("unknown course: {0}")]
    UnknownCourse(String),
    /// Enrollment status is not one of the supported values.
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    /// GPA could not be parsed as a number.
    #[error("invalid gpa value")]
    InvalidGpa,
    /// GPA fell outside of the `0.0..=4.0` scale.
    #[error("gpa must be between 0 and 4")]
    GpaOutOfRange,
    /// Date string did not match `YYYY-MM-DD`.
    #[error("invalid date, expected YYYY-MM-DD")]
    InvalidDate,
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Prefix used for generated student identifiers.
pub const STUDENT_ID_PREFIX: &str = "STU";

/// Textual student identifier such as `STU10000`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(String);

impl StudentId {
    /// Trims the value and rejects empty identifiers or embedded whitespace.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(TypeConstraintError::InvalidStudentId);
        }
        Ok(Self(trimmed))
    }

    /// Builds the canonical identifier for a sequence number.
    pub fn from_sequence(sequence: u32) -> Self {
        Self(format!("{STUDENT_ID_PREFIX}{sequence}"))
    }

    /// Numeric part of a canonical `STU<digits>` identifier.
    pub fn sequence(&self) -> Option<u32> {
        self.0
            .strip_prefix(STUDENT_ID_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
    }

    /// Borrow the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for StudentId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for StudentId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StudentId> for String {
    fn from(value: StudentId) -> Self {
        value.0
    }
}

/// Lower-cased and validated student email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct StudentEmail(String);

impl StudentEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for StudentEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for StudentEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for StudentEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StudentEmail> for String {
    fn from(value: StudentEmail) -> Self {
        value.0
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    StudentName,
    "Student display name enforcing trimmed, non-empty values."
);

/// Grade point average on the `0.0..=4.0` scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(try_from = "f32", into = "f32")]
pub struct Gpa(f32);

impl Gpa {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 4.0;

    /// Creates a GPA ensuring it lies on the supported scale.
    pub fn new(value: f32) -> Result<Self, TypeConstraintError> {
        if value.is_nan() {
            return Err(TypeConstraintError::InvalidGpa);
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(TypeConstraintError::GpaOutOfRange);
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Display for Gpa {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl FromStr for Gpa {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f32>()
            .map_err(|_| TypeConstraintError::InvalidGpa)?;
        Self::new(value)
    }
}

impl TryFrom<f32> for Gpa {
    type Error = TypeConstraintError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Gpa> for f32 {
    fn from(value: Gpa) -> Self {
        value.0
    }
}

/// Courses offered by the institution.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Course {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Business Administration")]
    BusinessAdministration,
    #[serde(rename = "Engineering")]
    Engineering,
    #[serde(rename = "Graphic Design")]
    GraphicDesign,
    #[serde(rename = "Psychology")]
    Psychology,
}

impl Course {
    /// Every course in catalog order.
    pub const ALL: [Course; 5] = [
        Course::ComputerScience,
        Course::BusinessAdministration,
        Course::Engineering,
        Course::GraphicDesign,
        Course::Psychology,
    ];

    /// Human readable course title, also used as the filter value.
    pub const fn title(self) -> &'static str {
        match self {
            Course::ComputerScience => "Computer Science",
            Course::BusinessAdministration => "Business Administration",
            Course::Engineering => "Engineering",
            Course::GraphicDesign => "Graphic Design",
            Course::Psychology => "Psychology",
        }
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Course {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.title() == trimmed)
            .ok_or_else(|| TypeConstraintError::UnknownCourse(trimmed.to_string()))
    }
}

/// Enrollment status of a student.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum StudentStatus {
    #[default]
    Active,
    Inactive,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl StudentStatus {
    pub const ALL: [StudentStatus; 3] = [
        StudentStatus::Active,
        StudentStatus::Inactive,
        StudentStatus::OnLeave,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            StudentStatus::Active => "Active",
            StudentStatus::Inactive => "Inactive",
            StudentStatus::OnLeave => "On Leave",
        }
    }
}

impl Display for StudentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        StudentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == trimmed)
            .ok_or_else(|| TypeConstraintError::UnknownStatus(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_id_rejects_blank_and_whitespace() {
        assert_eq!(
            StudentId::new("  "),
            Err(TypeConstraintError::InvalidStudentId)
        );
        assert_eq!(
            StudentId::new("STU 1"),
            Err(TypeConstraintError::InvalidStudentId)
        );
        assert_eq!(StudentId::new(" STU10000 ").unwrap().as_str(), "STU10000");
    }

    #[test]
    fn student_id_sequence_reads_canonical_ids_only() {
        assert_eq!(StudentId::from_sequence(10042).sequence(), Some(10042));
        assert_eq!(StudentId::new("STU").unwrap().sequence(), None);
        assert_eq!(StudentId::new("EXT-7").unwrap().sequence(), None);
        assert_eq!(StudentId::new("STU12a").unwrap().sequence(), None);
    }

    #[test]
    fn email_is_normalized() {
        let email = StudentEmail::new("  Alice@University.EDU ").unwrap();
        assert_eq!(email.as_str(), "alice@university.edu");
        assert_eq!(
            StudentEmail::new("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn gpa_enforces_scale() {
        assert_eq!("3.46".parse::<Gpa>().unwrap().to_string(), "3.5");
        assert_eq!("0".parse::<Gpa>().unwrap().get(), 0.0);
        assert_eq!("4.0".parse::<Gpa>().unwrap().get(), 4.0);
        assert_eq!("4.1".parse::<Gpa>(), Err(TypeConstraintError::GpaOutOfRange));
        assert_eq!("-0.5".parse::<Gpa>(), Err(TypeConstraintError::GpaOutOfRange));
        assert_eq!("abc".parse::<Gpa>(), Err(TypeConstraintError::InvalidGpa));
        assert_eq!("NaN".parse::<Gpa>(), Err(TypeConstraintError::InvalidGpa));
    }

    #[test]
    fn course_and_status_parse_titles() {
        assert_eq!(
            "Graphic Design".parse::<Course>().unwrap(),
            Course::GraphicDesign
        );
        assert_eq!(
            "graphic design".parse::<Course>(),
            Err(TypeConstraintError::UnknownCourse("graphic design".into()))
        );
        assert_eq!(
            "On Leave".parse::<StudentStatus>().unwrap(),
            StudentStatus::OnLeave
        );
        assert!("Graduated".parse::<StudentStatus>().is_err());
    }

    #[test]
    fn enums_serialize_as_titles() {
        assert_eq!(
            serde_json::to_string(&Course::BusinessAdministration).unwrap(),
            "\"Business Administration\""
        );
        assert_eq!(
            serde_json::to_string(&StudentStatus::OnLeave).unwrap(),
            "\"On Leave\""
        );
    }
}
