use chrono::Utc;
use clap::Parser;
use trivia_board::domain::model::{FormDraftSnapshot, Team};
use trivia_board::utils::error::ErrorSeverity;
use trivia_board::utils::{logger, validation::Validate};
use trivia_board::{
    activate_board, assemble, classify_upload, extract, reconcile, BoardConfig, CliConfig,
    FileStore, SessionStore, StartupState, UploadKind,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting trivia-board CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let board_config = match &config.config {
        Some(path) => match BoardConfig::from_file(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => BoardConfig::default(),
    };
    if let Err(e) = board_config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 命令列覆蓋存儲目錄
    let store_dir = config
        .store_path
        .clone()
        .unwrap_or_else(|| board_config.storage_path().to_string());
    let store = SessionStore::new(FileStore::new(&store_dir));

    if config.reset {
        match store.clear_all() {
            Ok(()) => {
                tracing::info!("🧹 All session slots cleared");
                println!("✅ Session cleared, starting with an empty board");
            }
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(3);
            }
        }
    }

    if let Some(input) = &config.input {
        tracing::info!("📁 Reading board text from: {}", input);
        let text = match std::fs::read_to_string(input) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("❌ Could not read '{}': {}", input, e);
                std::process::exit(3);
            }
        };

        if config.play {
            match activate_board(&store, &text) {
                Ok(board) => {
                    tracing::info!("✅ Board accepted for play");
                    println!("✅ '{}' is ready to play", board.title);
                }
                Err(e) => {
                    tracing::error!(
                        "❌ Cannot start the game: {} (Category: {:?}, Severity: {:?})",
                        e,
                        e.category(),
                        e.severity()
                    );
                    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());

                    let exit_code = match e.severity() {
                        ErrorSeverity::Low => 0,
                        ErrorSeverity::Medium => 2,
                        ErrorSeverity::High => 1,
                        ErrorSeverity::Critical => 3,
                    };
                    if exit_code > 0 {
                        std::process::exit(exit_code);
                    }
                }
            }
        } else {
            // 任何非遊戲路徑的上傳都進編輯器，即使結構已完整
            let kind = classify_upload(&text);
            let tree = extract(&text);
            let draft = assemble(&tree);
            let teams: Vec<Team> = tree.teams.iter().map(Team::new).collect();

            let snapshot = FormDraftSnapshot {
                title: draft.title.clone(),
                categories: draft.categories.clone(),
                teams,
                last_modified: Utc::now(),
            };
            if let Err(e) = store.set_form_draft(&snapshot) {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(3);
            }

            match kind {
                UploadKind::Complete => {
                    tracing::info!("📋 Upload is structurally complete");
                    println!(
                        "📋 '{}' looks complete, opened in the editor (re-run with --play to start a game)",
                        draft.title
                    );
                }
                UploadKind::Draft => {
                    println!(
                        "📝 Imported draft '{}' ({} categories)",
                        draft.title,
                        draft.categories.len()
                    );
                }
            }
        }
    }

    // 啟動調和：決定顯示哪個狀態
    match reconcile(&store) {
        StartupState::ActiveGame {
            title,
            used_cells,
            teams,
            ..
        } => {
            println!(
                "🎮 Active game: '{}' ({} cells used, {} teams)",
                title,
                used_cells.len(),
                teams.len()
            );
        }
        StartupState::ResumeDraftPrompt { draft } => {
            println!(
                "📝 A draft from {} is waiting, resume it in the editor?",
                draft.last_modified.format("%Y-%m-%d %H:%M")
            );
        }
        StartupState::Fresh => {
            println!("🆕 No saved game yet, author a new board to get started");
        }
    }

    Ok(())
}
