use clap::Parser;
use trivia_board::utils::validation::validate_required_field;
use trivia_board::utils::logger;
use trivia_board::{serialize_draft, FileStore, SessionStore};

#[derive(Parser)]
#[command(name = "draft-export")]
#[command(about = "Export the saved in-progress draft as shareable text")]
struct Args {
    /// Directory holding the session slots
    #[arg(short, long, default_value = "./state")]
    store_path: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let store = SessionStore::new(FileStore::new(&args.store_path));
    let stored = store.form_draft();
    let snapshot = match validate_required_field("form_draft", &stored) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Save a draft in the editor first");
            std::process::exit(1);
        }
    };

    let text = serialize_draft(
        &snapshot.to_draft_board(),
        &snapshot.teams,
        snapshot.last_modified,
    );

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)?;
            tracing::info!("📁 Draft written to: {}", path);
            println!("✅ Draft written to: {}", path);
        }
        None => print!("{}", text),
    }

    Ok(())
}
