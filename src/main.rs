use clap::Parser;
use keep::cli::commands::Cli;
use keep::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let store_dir = handlers::resolve_store_dir(cli.dir.as_deref());

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = keep::tui::run(&store_dir) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
