use std::fs::File;
use std::io::Write;

use student_roster::domain::auth::AuthenticatedUser;
use student_roster::domain::types::Course;
use student_roster::dto::students::StudentListQuery;
use student_roster::filter::FilterCriteria;
use student_roster::forms::student::AddStudentForm;
use student_roster::forms::upload::parse_students_csv;
use student_roster::pagination::PageLabel;
use student_roster::repository::{InMemoryStudentRepository, StudentReader};
use student_roster::services::ServiceError;
use student_roster::services::courses::load_course_overview;
use student_roster::services::students::{
    StudentListState, add_student, load_student_details, load_student_list,
};

const COURSES: [&str; 5] = [
    "Computer Science",
    "Business Administration",
    "Engineering",
    "Graphic Design",
    "Psychology",
];

/// Writes a roster of `count` students to a temporary CSV file.
fn write_roster(count: usize) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "id,name,email,course,enrollment_date,status,gpa").unwrap();
    for i in 0..count {
        writeln!(
            file,
            "STU{},Student Number {i},student{}@university.edu,{},2022-09-01,Active,3.0",
            10000 + i,
            10000 + i,
            COURSES[i % COURSES.len()]
        )
        .unwrap();
    }
    file.flush().unwrap();
    file
}

fn load_repo(count: usize) -> InMemoryStudentRepository {
    let csv = write_roster(count);
    let students = parse_students_csv(File::open(csv.path()).unwrap()).unwrap();
    InMemoryStudentRepository::with_students(students).unwrap()
}

fn registrar() -> AuthenticatedUser {
    AuthenticatedUser {
        uid: "registrar".to_string(),
        name: "Registrar".to_string(),
        email: "registrar@university.edu".to_string(),
    }
}

#[test]
fn course_filter_on_twenty_students() {
    let repo = load_repo(20);
    let students = repo.list_students().unwrap();

    let state = StudentListState::default().go_to_page(2, 2);
    let state = state.apply_filters(FilterCriteria::new("Computer Science", ""));
    assert_eq!(state.page(), 1);

    let view = state.view(&students);
    assert_eq!(view.students.total_items, 4);
    assert!(
        view.students
            .items
            .iter()
            .all(|s| s.course == Course::ComputerScience)
    );
}

#[test]
fn long_roster_builds_compact_selector() {
    let repo = load_repo(100);

    let query = StudentListQuery {
        page: Some(5),
        ..StudentListQuery::default()
    };
    let page = load_student_list(&repo, StudentListState::default(), &query).unwrap();

    assert_eq!(page.students.total_pages, 10);
    assert_eq!(
        page.students.pages,
        vec![
            PageLabel::Page(1),
            PageLabel::EllipsisStart,
            PageLabel::Page(4),
            PageLabel::Page(5),
            PageLabel::Page(6),
            PageLabel::EllipsisEnd,
            PageLabel::Page(10),
        ]
    );
    assert_eq!(page.students.items[0].id.as_str(), "STU10040");
}

#[test]
fn every_page_together_rebuilds_the_filtered_set() {
    let repo = load_repo(47);
    let students = repo.list_students().unwrap();
    let state = StudentListState::default();
    let total = state.total_pages(&students);
    assert_eq!(total, 5);

    let mut rebuilt = Vec::new();
    let mut state = state;
    for _ in 0..total {
        rebuilt.extend(state.view(&students).students.items);
        state = state.next_page(total);
    }

    assert_eq!(rebuilt, students);
}

#[test]
fn added_student_is_listed_and_viewable() {
    let repo = load_repo(3);
    let user = registrar();

    let form = AddStudentForm {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: "grace@university.edu".to_string(),
        course: "Engineering".to_string(),
        enrollment_date: "2024-01-15".to_string(),
        status: "Active".to_string(),
        gpa: "3.8".to_string(),
    };
    let created = add_student(&repo, Some(&user), form).unwrap();
    assert_eq!(created.id.as_str(), "STU10003");

    let query = StudentListQuery {
        search: Some("hopper".to_string()),
        ..StudentListQuery::default()
    };
    let page = load_student_list(&repo, StudentListState::default(), &query).unwrap();
    assert_eq!(page.students.items, vec![created.clone()]);

    let details = load_student_details(&repo, Some(&user), "STU10003").unwrap();
    assert_eq!(details.student, created);
    assert_eq!(details.enrolled_on, "Jan 15, 2024");
}

#[test]
fn anonymous_users_cannot_open_details() {
    let repo = load_repo(1);
    let result = load_student_details(&repo, None, "STU10000");
    assert!(matches!(result, Err(ServiceError::Unauthorized)));
}

#[test]
fn overview_counts_imported_students() {
    let repo = load_repo(12);
    let overview = load_course_overview(&repo).unwrap();

    let counts: Vec<usize> = overview.courses.iter().map(|c| c.enrolled).collect();
    assert_eq!(counts, vec![3, 3, 2, 2, 2]);
    assert_eq!(overview.average_class_size, 2);
}
