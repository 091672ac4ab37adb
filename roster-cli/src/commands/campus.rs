//! Campus dialect subcommands

use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;
use roster_backend::campus::{COLUMNS, CampusBackend, DEFAULT_BASE_URL, StudentDraft};
use roster_core::rules::campus::{Rules, sanitize_name_input, sanitize_phone_input};
use roster_core::search::apply_filter;
use roster_core::{FormController, RemoveOutcome};

use crate::table;
use crate::util::confirm;

use super::{log_failure, rows_from_cells};

#[derive(Subcommand)]
pub enum CampusCommand {
    /// Show the student table
    List,
    /// Show the table filtered by a case-insensitive search term
    Search { term: String },
    /// Show the course catalog
    Courses,
    /// Add a student
    Add {
        #[arg(long)]
        roll_number: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Course catalog id
        #[arg(long)]
        course_id: Option<i64>,
        /// Birth date, yyyy-mm-dd
        #[arg(long)]
        date_of_birth: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
    },
    /// Edit a student; omitted fields keep their current values
    Edit {
        id: i64,
        #[arg(long)]
        roll_number: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        course_id: Option<i64>,
        /// Birth date, yyyy-mm-dd
        #[arg(long)]
        date_of_birth: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
    },
    /// Delete a student
    Remove {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(base_url: Option<String>, command: CampusCommand) -> Result<()> {
    let backend =
        CampusBackend::new(base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));
    let mut controller = FormController::<Rules, _>::new(backend);
    let today = chrono::Local::now().date_naive();

    match command {
        CampusCommand::List => {
            let roster = controller.load().await.map_err(|e| {
                log_failure(&e);
                e
            })?;
            print_roster(roster.iter().map(|s| s.cells()), "");
        }

        CampusCommand::Search { term } => {
            let roster = controller.load().await.map_err(|e| {
                log_failure(&e);
                e
            })?;
            print_roster(roster.iter().map(|s| s.cells()), &term);
        }

        CampusCommand::Courses => {
            let courses = controller.backend().list_courses().await?;
            for course in courses {
                println!("{:>4}  {}", course.id, course.course_name);
            }
        }

        CampusCommand::Add {
            roll_number,
            name,
            email,
            course_id,
            date_of_birth,
            phone_number,
        } => {
            let draft = assemble(
                StudentDraft {
                    roll_number: String::new(),
                    name: String::new(),
                    email: String::new(),
                    course_id: None,
                    date_of_birth: String::new(),
                    phone_number: String::new(),
                },
                roll_number,
                name,
                email,
                course_id,
                date_of_birth,
                phone_number,
            );
            submit(&mut controller, draft, today).await?;
        }

        CampusCommand::Edit {
            id,
            roll_number,
            name,
            email,
            course_id,
            date_of_birth,
            phone_number,
        } => {
            let current = controller.start_edit(id).await.map_err(|e| {
                log_failure(&e);
                e
            })?;
            let draft = assemble(
                current,
                roll_number,
                name,
                email,
                course_id,
                date_of_birth,
                phone_number,
            );
            submit(&mut controller, draft, today).await?;
        }

        CampusCommand::Remove { id, yes } => {
            let confirmed =
                yes || confirm("Are you sure you want to delete this student?")?;
            match controller.remove(id, confirmed).await.map_err(|e| {
                log_failure(&e);
                e
            })? {
                RemoveOutcome::Removed(roster) => {
                    println!("Student deleted successfully!");
                    print_roster(roster.iter().map(|s| s.cells()), "");
                }
                RemoveOutcome::Cancelled => println!("Cancelled."),
            }
        }
    }

    Ok(())
}

/// Overlay the provided options on a base candidate, running each value
/// through the same live sanitization the form fields apply.
fn assemble(
    mut draft: StudentDraft,
    roll_number: Option<String>,
    name: Option<String>,
    email: Option<String>,
    course_id: Option<i64>,
    date_of_birth: Option<String>,
    phone_number: Option<String>,
) -> StudentDraft {
    if let Some(value) = roll_number {
        draft.roll_number = value.trim().to_string();
    }
    if let Some(value) = name {
        draft.name = sanitize_name_input(value.trim());
    }
    if let Some(value) = email {
        draft.email = value.trim().to_string();
    }
    if let Some(value) = course_id {
        draft.course_id = Some(value);
    }
    if let Some(value) = date_of_birth {
        draft.date_of_birth = value.trim().to_string();
    }
    if let Some(value) = phone_number {
        draft.phone_number = sanitize_phone_input(value.trim());
    }
    draft
}

async fn submit(
    controller: &mut FormController<Rules, CampusBackend>,
    draft: StudentDraft,
    today: NaiveDate,
) -> Result<()> {
    match controller.submit(draft, today).await {
        Ok(outcome) => {
            if outcome.created {
                println!("Student added successfully!");
            } else {
                println!("Student updated successfully!");
            }
            print_roster(outcome.roster.iter().map(|s| s.cells()), "");
            Ok(())
        }
        Err(err) => {
            log_failure(&err);
            Err(err.into())
        }
    }
}

fn print_roster(cells: impl Iterator<Item = Vec<String>>, term: &str) {
    let mut rows = rows_from_cells(cells);
    apply_filter(&mut rows, term);
    print!("{}", table::render(&COLUMNS, &rows));
}
