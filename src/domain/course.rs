//! Static course catalog shown on the courses page.

use serde::Serialize;

use crate::domain::types::Course;

/// Descriptive information about a course offering.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CourseInfo {
    pub code: &'static str,
    pub course: Course,
    pub description: &'static str,
    pub instructor: &'static str,
    pub duration: &'static str,
    /// Nominal number of seats advertised for the course.
    pub seats: u32,
}

impl Course {
    /// Catalog entry describing this course.
    pub fn info(self) -> CourseInfo {
        match self {
            Course::ComputerScience => CourseInfo {
                code: "cs101",
                course: self,
                description: "Introduction to programming concepts and algorithms",
                instructor: "Dr. Alan Turing",
                duration: "16 weeks",
                seats: 32,
            },
            Course::BusinessAdministration => CourseInfo {
                code: "ba200",
                course: self,
                description: "Principles of management, marketing, and operations",
                instructor: "Dr. Peter Drucker",
                duration: "12 weeks",
                seats: 28,
            },
            Course::Engineering => CourseInfo {
                code: "eng150",
                course: self,
                description: "Basics of mechanical, electrical, and civil engineering",
                instructor: "Dr. Grace Hopper",
                duration: "14 weeks",
                seats: 24,
            },
            Course::GraphicDesign => CourseInfo {
                code: "gd110",
                course: self,
                description: "Fundamentals of design theory, typography, and visual communication",
                instructor: "Prof. Sarah Jones",
                duration: "10 weeks",
                seats: 18,
            },
            Course::Psychology => CourseInfo {
                code: "psy201",
                course: self,
                description: "The science of behavior and mental processes",
                instructor: "Dr. Carl Jung",
                duration: "15 weeks",
                seats: 35,
            },
        }
    }
}

/// Full catalog in display order.
pub fn catalog() -> Vec<CourseInfo> {
    Course::ALL.into_iter().map(Course::info).collect()
}
