//! Simple dialect subcommands

use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;
use roster_backend::simple::{COLUMNS, DEFAULT_BASE_URL, SimpleBackend, StudentDraft};
use roster_core::rules::simple::Rules;
use roster_core::{FormController, RemoveOutcome};

use crate::table;
use crate::util::confirm;

use super::{log_failure, rows_from_cells};

#[derive(Subcommand)]
pub enum SimpleCommand {
    /// Show the student table
    List,
    /// Add a student
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        age: Option<u32>,
    },
    /// Edit a student; omitted fields keep their current values
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        age: Option<u32>,
    },
    /// Delete a student
    Remove {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(base_url: Option<String>, command: SimpleCommand) -> Result<()> {
    let backend =
        SimpleBackend::new(base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));
    let mut controller = FormController::<Rules, _>::new(backend);
    let today = chrono::Local::now().date_naive();

    match command {
        SimpleCommand::List => {
            let roster = controller.load().await.map_err(|e| {
                log_failure(&e);
                e
            })?;
            print_roster(roster.iter().map(|s| s.cells()));
        }

        SimpleCommand::Add {
            name,
            email,
            course,
            age,
        } => {
            let draft = assemble(
                StudentDraft {
                    name: String::new(),
                    email: String::new(),
                    course: String::new(),
                    age: None,
                },
                name,
                email,
                course,
                age,
            );
            submit(&mut controller, draft, today).await?;
        }

        SimpleCommand::Edit {
            id,
            name,
            email,
            course,
            age,
        } => {
            let current = controller.start_edit(id).await.map_err(|e| {
                log_failure(&e);
                e
            })?;
            let draft = assemble(current, name, email, course, age);
            submit(&mut controller, draft, today).await?;
        }

        SimpleCommand::Remove { id, yes } => {
            let confirmed =
                yes || confirm("Are you sure you want to delete this student?")?;
            match controller.remove(id, confirmed).await.map_err(|e| {
                log_failure(&e);
                e
            })? {
                RemoveOutcome::Removed(roster) => {
                    println!("Student deleted successfully!");
                    print_roster(roster.iter().map(|s| s.cells()));
                }
                RemoveOutcome::Cancelled => println!("Cancelled."),
            }
        }
    }

    Ok(())
}

fn assemble(
    mut draft: StudentDraft,
    name: Option<String>,
    email: Option<String>,
    course: Option<String>,
    age: Option<u32>,
) -> StudentDraft {
    if let Some(value) = name {
        draft.name = value.trim().to_string();
    }
    if let Some(value) = email {
        draft.email = value.trim().to_string();
    }
    if let Some(value) = course {
        draft.course = value.trim().to_string();
    }
    if let Some(value) = age {
        draft.age = Some(value);
    }
    draft
}

async fn submit(
    controller: &mut FormController<Rules, SimpleBackend>,
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
            print_roster(outcome.roster.iter().map(|s| s.cells()));
            Ok(())
        }
        Err(err) => {
            log_failure(&err);
            Err(err.into())
        }
    }
}

fn print_roster(cells: impl Iterator<Item = Vec<String>>) {
    let rows = rows_from_cells(cells);
    print!("{}", table::render(&COLUMNS, &rows));
}
