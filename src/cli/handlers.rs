use std::path::{Path, PathBuf};

use crate::cli::commands::{AddArgs, Cli, Commands, RemoveArgs};
use crate::cli::output::list_to_json;
use crate::io::store_io::{default_store_dir, load_list, save_list};
use crate::model::list::TaskList;
use crate::ops::list_ops;

/// Resolve the store directory: the -C override or the platform default
pub fn resolve_store_dir(overridden: Option<&str>) -> PathBuf {
    match overridden {
        Some(dir) => PathBuf::from(dir),
        None => default_store_dir(),
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store_dir = resolve_store_dir(cli.dir.as_deref());

    match cli.command {
        // No subcommand → TUI, handled in main.rs
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::List => cmd_list(&store_dir, json),
            Commands::Add(args) => cmd_add(&store_dir, args),
            Commands::Remove(args) => cmd_remove(&store_dir, args),
            Commands::Clear => cmd_clear(&store_dir),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Persistence is best-effort: a failed write is logged (and its payload
/// captured by the store), never fatal
fn save_best_effort(store_dir: &Path, list: &mut TaskList) {
    if let Err(e) = save_list(store_dir, list) {
        eprintln!("warning: {}", e);
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_list(store_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let list = load_list(store_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&list_to_json(&list))?);
    } else if list.task_count() == 0 {
        println!("(no tasks)");
    } else {
        for task in list.tasks() {
            println!("{}", task);
        }
    }
    Ok(())
}

fn cmd_add(store_dir: &Path, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut list = load_list(store_dir)?;
    list_ops::add_task(&mut list, &args.text)?;

    // Echo the task as stored (newlines flattened)
    if let Some(task) = list.entries.last() {
        println!("{}", task);
    }

    save_best_effort(store_dir, &mut list);
    Ok(())
}

fn cmd_remove(store_dir: &Path, args: RemoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut list = load_list(store_dir)?;
    if !list_ops::remove_task(&mut list, &args.text) {
        return Err(format!("no such task: {}", args.text).into());
    }
    save_best_effort(store_dir, &mut list);
    println!("removed: {}", args.text);
    Ok(())
}

fn cmd_clear(store_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut list = load_list(store_dir)?;
    let removed = list.task_count();
    list_ops::clear_all(&mut list);
    save_best_effort(store_dir, &mut list);
    println!(
        "cleared {} task{}",
        removed,
        if removed == 1 { "" } else { "s" }
    );
    Ok(())
}
