use crossterm::{
    execute,
    terminal::{SetSize, SetTitle},
};
use samaritan::{app::App, util::log, UiConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = UiConfig::embedded()?;
    log::init(config.log_level_filter()?)?;
    info!(title = %config.title, "starting");

    let (cols, rows) = config.viewport().cells_for_window(config.window());
    let mut terminal = ratatui::init();
    if let Err(e) = execute!(std::io::stdout(), SetTitle(&config.title), SetSize(cols, rows)) {
        warn!("could not size terminal window: {}", e);
    }

    let result = match terminal.size() {
        Ok(size) => App::new(config, size.width, size.height).run(terminal).await,
        Err(e) => Err(e.into()),
    };
    ratatui::restore();
    result
}
