use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kp", about = concat!("[>] keep v", env!("CARGO_PKG_VERSION"), " - your task list is plain text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different store directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    List,
    /// Add a task
    Add(AddArgs),
    /// Remove the first task matching the given text
    Remove(RemoveArgs),
    /// Remove every task
    Clear,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text (a single line; newlines are flattened to spaces)
    pub text: String,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Exact text of the task to remove
    pub text: String,
}
