use chatbox::app::App;
use chatbox::config::WidgetConfig;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    init_tracing()?;
    color_eyre::install()?;

    let config_path = std::env::args().nth(1);
    let config = WidgetConfig::load(config_path.as_deref())?;
    let mouse_capture = config.enable_send_button;

    let terminal = ratatui::init();
    if mouse_capture {
        execute!(std::io::stdout(), EnableMouseCapture)?;
    }

    let result = App::new(config)?.run(terminal).await;

    if mouse_capture {
        execute!(std::io::stdout(), DisableMouseCapture)?;
    }
    ratatui::restore();
    result
}

/// The terminal is in raw mode while the app runs, so logs go to a file
/// instead of stdout.
fn init_tracing() -> color_eyre::Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("chatbox.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
