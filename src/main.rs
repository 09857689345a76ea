use rentscope::app::{self, App};
use rentscope::data::{Datasets, MockStatsProvider};
use rentscope::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};

use color_eyre::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing when `RENTSCOPE_LOG` names a log file.
///
/// The dashboard owns the alternate screen, so stderr logging would be
/// invisible or corrupt the display; logs go to a file instead. Without the
/// env var, tracing stays uninitialized and all spans are no-ops.
fn init_tracing() -> Result<()> {
    let Ok(path) = std::env::var("RENTSCOPE_LOG") else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("rentscope=debug".parse()?))
        .with_writer(file)
        .with_ansi(false)
        .init();

    Ok(())
}

/// Print the mock datasets as JSON and exit. Debug surface for inspecting
/// exactly what the dashboard renders.
fn dump_stats() -> Result<()> {
    let datasets = Datasets::load(&MockStatsProvider::new());
    println!("{}", datasets.to_json_pretty()?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("rentscope {}", VERSION);
        return Ok(());
    }
    if args.iter().any(|a| a == "--dump-stats") {
        return dump_stats();
    }

    init_tracing()?;
    setup_panic_hook();

    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&MockStatsProvider::new());
    let result = app::run(&mut terminal, &mut app).await;

    // Restore the terminal before reporting any error
    leave_tui_mode(&mut io::stdout());

    result?;
    Ok(())
}
