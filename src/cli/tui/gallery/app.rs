use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame,
};
use tokio::time;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::events::AppEvent;
use super::screens;
use super::screens::gallery::GalleryView;
use super::theme::Theme;
use super::modal;
use crate::api::ApiClient;
use crate::gallery::state::{FetchPhase, GalleryState};
use crate::Result;

/// Main application struct
pub struct App {
    /// Core gallery state: records, phase, filter criteria, selection
    state: GalleryState,
    /// Search box contents; mirrored into `state.search_query`
    search_input: Input,
    /// Whether keystrokes go to the search box
    search_active: bool,
    /// Cursor position within the visible list
    cursor: usize,
    /// API client handed to background fetch tasks
    client: ApiClient,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    /// Event sender for background tasks
    event_tx: Option<tokio::sync::mpsc::UnboundedSender<AppEvent>>,
}

impl App {
    /// Create a new app instance
    pub fn new(client: ApiClient) -> Self {
        Self {
            state: GalleryState::new(),
            search_input: Input::default(),
            search_active: false,
            cursor: 0,
            client,
            should_quit: false,
            theme: Theme::default(),
            event_tx: None,
        }
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // Create event channel
        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        // Spawn input handler
        let input_tx = event_tx.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(event) = event::read() {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            let _ = input_tx.send(AppEvent::Key(key));
                        }
                        Event::Mouse(mouse) => {
                            let _ = input_tx.send(AppEvent::Mouse(mouse));
                        }
                        Event::Resize(width, height) => {
                            let _ = input_tx.send(AppEvent::Resize(width, height));
                        }
                        _ => {}
                    }
                }
            }
        });

        // Kick off the initial fetch
        self.spawn_fetch();

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout so the refresh indicator stays live
            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the current state
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match self.state.phase() {
            FetchPhase::Loading if self.state.records().is_empty() => {
                screens::loading::render(frame, &self.theme);
            }
            FetchPhase::Failed => {
                let error = self.state.error().unwrap_or("error desconocido");
                screens::failed::render(frame, error, &self.theme);
            }
            _ => {
                let visible = self.state.visible();
                let alphabet = self.state.alphabet();
                let view = GalleryView {
                    cursor: clamp_cursor(self.cursor, visible.len()),
                    visible: &visible,
                    search_value: self.search_input.value(),
                    search_active: self.search_active,
                    alphabet: &alphabet,
                    selected_letter: self.state.selected_letter,
                    total: self.state.records().len(),
                    refreshing: self.state.phase() == FetchPhase::Loading,
                    error_note: self.state.error(),
                };
                screens::gallery::render(frame, &view, &self.theme);

                if let Some(record) = self.state.selected_record() {
                    modal::render_detail_modal(frame, area, record, &self.theme);
                }
            }
        }
    }

    /// Handle an event
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::FetchCompleted { seq, records } => {
                if self.state.complete_fetch(seq, Ok(records)) {
                    self.cursor = clamp_cursor(self.cursor, self.state.visible().len());
                }
            }
            AppEvent::FetchFailed { seq, error } => {
                self.state.complete_fetch(seq, Err(error));
            }
            AppEvent::Mouse(_) | AppEvent::Resize(_, _) | AppEvent::Tick => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always exits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Modal consumes input while open
        if self.state.selected_record().is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.state.clear_selection();
            }
            return;
        }

        if self.search_active {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.search_active = false;
                }
                _ => {
                    self.search_input.handle_event(&Event::Key(key));
                    self.state.search_query = self.search_input.value().to_string();
                    self.cursor = 0;
                }
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('/') => {
                self.search_active = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                // Safe while a fetch is in flight: stale responses are dropped
                self.spawn_fetch();
            }
            KeyCode::Left => {
                self.state.cycle_letter(false);
                self.cursor = 0;
            }
            KeyCode::Right => {
                self.state.cycle_letter(true);
                self.cursor = 0;
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                let len = self.state.visible().len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => {
                let id = self
                    .state
                    .visible()
                    .get(clamp_cursor(self.cursor, self.state.visible().len()))
                    .map(|record| record.id.clone());
                if let Some(id) = id {
                    self.state.select(&id);
                }
            }
            KeyCode::Esc => {
                // Clear filters when nothing else is open
                self.search_input.reset();
                self.state.search_query.clear();
                self.state.selected_letter = None;
                self.cursor = 0;
            }
            _ => {}
        }
    }

    /// Spawn a background fetch tagged with a fresh sequence number
    fn spawn_fetch(&mut self) {
        let seq = self.state.begin_fetch();
        if let Some(tx) = &self.event_tx {
            let event_tx = tx.clone();
            let client = self.client.clone();
            tokio::spawn(async move {
                match client.fetch_records().await {
                    Ok(records) => {
                        let _ = event_tx.send(AppEvent::FetchCompleted { seq, records });
                    }
                    Err(err) => {
                        let _ = event_tx.send(AppEvent::FetchFailed {
                            seq,
                            error: err.to_string(),
                        });
                    }
                }
            });
        }
    }
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}
