use ratatui::crossterm::event::{KeyEvent, MouseEvent};

use crate::gallery::record::Record;
use crate::gallery::state::FetchSeq;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    // Async task events - listing fetch
    FetchCompleted { seq: FetchSeq, records: Vec<Record> },
    FetchFailed { seq: FetchSeq, error: String },

    // UI events
    Tick,
}
