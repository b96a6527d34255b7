//! Prints one page of the student roster.
//!
//! Usage: `student-roster ["course=Engineering&search=smith&page=2"]`

use std::env;
use std::fs::File;

use config::Config;
use dotenvy::dotenv;

use student_roster::dto::students::{StudentListPage, StudentListQuery};
use student_roster::forms::upload::parse_students_csv;
use student_roster::models::config::{OutputFormat, RosterConfig};
use student_roster::repository::InMemoryStudentRepository;
use student_roster::services::students::load_student_list;

fn render_text(page: &StudentListPage) -> String {
    let mut out = String::new();
    let students = &page.students;

    if page.is_empty() {
        out.push_str("No students found\n");
        if !page.criteria.is_empty() {
            out.push_str("Try adjusting your search or filter criteria\n");
        }
    }

    for student in &students.items {
        out.push_str(&format!(
            "{:<10} {:<24} {:<32} {:<24} {:<13} {:<9} {}\n",
            student.id.as_str(),
            student.name.as_str(),
            student.email.as_str(),
            student.course.title(),
            student.enrollment_display(),
            student.status.as_str(),
            student.gpa
        ));
    }

    let bar: Vec<String> = students
        .pages
        .iter()
        .map(|label| match label.page() {
            Some(n) if n == students.page => format!("[{n}]"),
            Some(n) => n.to_string(),
            None => "...".to_string(),
        })
        .collect();

    out.push_str(&format!(
        "\n{}\nPage {} of {} ({} students)\n",
        bar.join(" "),
        students.page,
        students.total_pages,
        students.total_items
    ));

    out
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let roster_config = match settings.try_deserialize::<RosterConfig>() {
        Ok(roster_config) => roster_config,
        Err(err) => {
            log::error!("Error loading roster config: {}", err);
            std::process::exit(1);
        }
    };

    let raw_query = env::args().nth(1).unwrap_or_default();
    let query = match serde_html_form::from_str::<StudentListQuery>(&raw_query) {
        Ok(query) => query,
        Err(err) => {
            log::error!("Invalid list query {raw_query:?}: {err}");
            std::process::exit(1);
        }
    };

    let file = match File::open(&roster_config.students_csv) {
        Ok(file) => file,
        Err(err) => {
            log::error!("Cannot open {}: {err}", roster_config.students_csv);
            std::process::exit(1);
        }
    };

    let students = match parse_students_csv(file) {
        Ok(students) => students,
        Err(err) => {
            log::error!("Failed to import {}: {err}", roster_config.students_csv);
            std::process::exit(1);
        }
    };

    log::info!("Loaded {} students", students.len());

    let repo = match InMemoryStudentRepository::with_students(students) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Invalid roster: {err}");
            std::process::exit(1);
        }
    };

    let page = match load_student_list(&repo, roster_config.list_state(), &query) {
        Ok(page) => page,
        Err(err) => {
            log::error!("Failed to load student list: {err}");
            std::process::exit(1);
        }
    };

    match roster_config.output {
        OutputFormat::Text => print!("{}", render_text(&page)),
        OutputFormat::Json => match serde_json::to_string_pretty(&page) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("Failed to serialize page: {err}");
                std::process::exit(1);
            }
        },
    }
}
