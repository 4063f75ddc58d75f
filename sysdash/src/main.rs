//! Entry point for the sysdash TUI. Sets up logging and runs the App.

use std::io::IsTerminal;

use sysdash::app::App;
use sysdash::config::DashboardConfig;
use sysdash_sampler::{Sampler, SysinfoSource};
use tracing_subscriber::EnvFilter;

// Log lines would corrupt the TUI, so only log when stderr is redirected,
// e.g. `sysdash 2>sysdash.log`.
fn init_tracing() {
    if std::io::stderr().is_terminal() {
        return;
    }
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sysdash=info,sysdash_sampler=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let config = DashboardConfig::default();
    let mut app = App::new(&config, Sampler::new(SysinfoSource::new()));
    match app.run().await {
        Ok(()) => {
            tracing::info!("exiting");
            println!("Thanks for using sysdash!");
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "fatal terminal error");
            println!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
