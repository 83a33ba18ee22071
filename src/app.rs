use crate::config::UiConfig;
use crate::event::{AppEvent, Event, EventHandler, TokioScheduler};
use crate::ui::widgets::RootView;
use color_eyre::Result;
use ratatui::{
    crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal,
};
use tracing::{debug, info};

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Display settings.
    pub config: UiConfig,
    /// The widget tree.
    pub root: RootView,
    /// Event handler.
    pub events: EventHandler,
    /// Posts blink ticks back into `events`.
    scheduler: TokioScheduler,
}

impl App {
    /// Constructs a new instance of [`App`] for a terminal of `cols` x `rows`
    /// cells. Must be called inside a tokio runtime.
    pub fn new(config: UiConfig, cols: u16, rows: u16) -> Self {
        Self::with_events(config, EventHandler::new(), cols, rows)
    }

    pub fn with_events(config: UiConfig, events: EventHandler, cols: u16, rows: u16) -> Self {
        let mut scheduler = events.scheduler();
        let root = RootView::new(&config, &mut scheduler);

        let mut app = Self {
            running: true,
            config,
            root,
            events,
            scheduler,
        };
        app.handle_resize(cols, rows);
        app
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Crossterm(event) => match event {
                    CrosstermEvent::Key(key_event) => self.handle_key_events(key_event),
                    CrosstermEvent::Resize(cols, rows) => {
                        self.handle_resize(cols, rows);
                        needs_redraw = true;
                    }
                    _ => {}
                },
                Event::Blink(token) => {
                    self.root.on_blink_tick(token, &mut self.scheduler);
                    needs_redraw = true;
                }
                Event::App(AppEvent::Quit) => self.quit(),
            }
        }

        info!("shutting down");
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            _ => {}
        }
    }

    /// Relayout for a terminal of `cols` x `rows` cells.
    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        let window = self.config.viewport().window_for_cells(cols, rows);
        debug!(cols, rows, "terminal resized");
        self.root.on_resize(window.width, window.height);
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
