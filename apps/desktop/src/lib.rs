//! # Inventory Desktop Library
//!
//! Product manager window for the terminal.
//!
//! ## Module Organization
//! ```text
//! inventory_desktop/
//! ├── lib.rs          ◄─── Startup & prompt loop
//! ├── window.rs       ◄─── ProductWindow and its handlers
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── form.rs     ◄─── Form inputs and parsing rules
//! │   └── table.rs    ◄─── Table rows
//! ├── commands/
//! │   └── mod.rs      ◄─── Line commands → handlers
//! ├── render.rs       ◄─── Text drawing of the window
//! └── error.rs        ◄─── Error type shown on the status line
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;
pub mod window;

use std::io::Write;
use std::path::PathBuf;

use directories::ProjectDirs;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{Command, Outcome};
use error::{DesktopError, DesktopResult};
use inventory_db::{Database, DbConfig};
use state::DbState;
use window::ProductWindow;

pub use error::DesktopError as Error;

/// Runs the application until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging (stderr, RUST_LOG override)                      │
/// │                                                                         │
/// │  2. Determine Database Path ──────────────────────────────────────────► │
/// │     • INVENTORY_DB_PATH if set                                          │
/// │     • Linux: ~/.local/share/inventory/inventory.db                      │
/// │     • macOS: ~/Library/Application Support/com.inventory.inventory/     │
/// │     • Windows: %APPDATA%\inventory\inventory\data\                      │
/// │                                                                         │
/// │  3. Connect to Database (WAL, migrations)                               │
/// │                                                                         │
/// │  4. Open ProductWindow (loads the table)                                │
/// │                                                                         │
/// │  5. Read commands from stdin, redraw after each one                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> DesktopResult<()> {
    init_tracing();

    info!("Starting Inventory Desktop");

    let db_path = get_database_path()?;
    info!(?db_path, "Database path determined");

    let db = DbState::new(Database::new(DbConfig::new(db_path)).await?);
    let (total, applied) = db.inner().migration_status().await?;
    info!(total, applied, "Database connected and migrations applied");

    let mut window = ProductWindow::open(db.clone()).await;
    print!("{}", render::render(&window));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let outcome = match line.parse::<Command>() {
            Ok(command) => commands::execute(&mut window, command).await,
            Err(e) => {
                window.set_status(format!("Error: {}", e));
                Outcome::Redraw
            }
        };

        match outcome {
            Outcome::Redraw => print!("{}", render::render(&window)),
            Outcome::ShowHelp => println!("{}", commands::HELP),
            Outcome::Quit => break,
        }
    }

    db.inner().close().await;
    info!("Desktop shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber on stderr so logs stay off the window.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=inventory=trace` - Show trace for inventory crates only
/// - Default: `info,inventory=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inventory=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the database file path based on the platform.
///
/// Set `INVENTORY_DB_PATH` to use a custom path.
fn get_database_path() -> DesktopResult<PathBuf> {
    if let Ok(path) = std::env::var("INVENTORY_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "inventory", "inventory").ok_or(DesktopError::DataDir)?;
    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("inventory.db"))
}
