//! Board summary entry point.
//!
//! Opens the configured database and prints column counts, progress and the
//! day's agenda. Useful as a quick sanity check of a stored board.

use log::error;
use std::process::ExitCode;
use taskboard_core::schedule::due::today_local;
use taskboard_core::{init_from_config, open_db, CoreConfig, Organizer, SqliteKeyValueStore};

fn main() -> ExitCode {
    let config = CoreConfig::from_env();
    if let Err(err) = init_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("taskboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("taskboard_core version={}", taskboard_core::core_version());

    let conn = open_db(&config.db_path)?;
    let store = SqliteKeyValueStore::try_new(&conn)?;
    let organizer = Organizer::with_keys(store, config.storage_keys.clone());

    let tasks = organizer.tasks();
    for (status, column) in tasks.columns() {
        println!("{:<12} {}", status.label(), column.len());
    }
    println!("{}", tasks.progress());

    let projects = organizer.projects();
    for project in projects.projects() {
        let progress = projects.subtask_progress(project.id)?;
        println!(
            "project {} ({}): {progress}, {} pending",
            project.id,
            project.name,
            project.pending_count()
        );
    }

    let schedule = organizer.schedule();
    println!(
        "scheduled: {} entries on {} days",
        schedule.entry_count(),
        schedule.len()
    );

    let today = today_local();
    let agenda = organizer.agenda(today);
    println!(
        "{today}: {} due today, {} overdue",
        agenda.due_today.len(),
        agenda.overdue.len()
    );
    for item in &agenda.due_today {
        match &item.project {
            Some(project) => println!("  due  [{project}] {}", item.text),
            None => println!("  due  {}", item.text),
        }
    }
    for label in &agenda.overdue {
        println!("  late {label}");
    }
    Ok(())
}
