//! The gallery state container.
//!
//! Owns the fetched record set, the fetch phase, the user's filter criteria,
//! and the current selection. All mutation goes through the methods here; the
//! view layer only reads.

use super::filter;
use super::record::Record;

/// Fetch lifecycle: `Loading → {Ready, Failed}`, re-entered on refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Loading,
    Ready,
    Failed,
}

impl FetchPhase {
    pub fn name(&self) -> &'static str {
        match self {
            FetchPhase::Loading => "Loading",
            FetchPhase::Ready => "Ready",
            FetchPhase::Failed => "Failed",
        }
    }
}

/// Sequence number handed out per fetch. Responses carrying a stale sequence
/// are discarded, so the last-issued fetch always wins even when a refresh
/// overlaps an in-flight request.
pub type FetchSeq = u64;

#[derive(Debug)]
pub struct GalleryState {
    records: Vec<Record>,
    phase: FetchPhase,
    error: Option<String>,
    issued_seq: FetchSeq,
    pub search_query: String,
    pub selected_letter: Option<char>,
    selected: Option<String>,
}

impl GalleryState {
    /// Initial state: loading, empty record set, no error.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            phase: FetchPhase::Loading,
            error: None,
            issued_seq: 0,
            search_query: String::new(),
            selected_letter: None,
            selected: None,
        }
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Start a fetch, returning the sequence number the response must carry.
    /// Safe to call while another fetch is in flight.
    pub fn begin_fetch(&mut self) -> FetchSeq {
        self.issued_seq += 1;
        self.phase = FetchPhase::Loading;
        self.issued_seq
    }

    /// Apply a completed fetch. Returns false when the response was stale and
    /// ignored.
    ///
    /// Success replaces the record set wholesale and clears the error. Failure
    /// keeps any previously loaded records and only enters `Failed` when none
    /// are held; with records on screen the error is kept as a background note.
    pub fn complete_fetch(
        &mut self,
        seq: FetchSeq,
        outcome: std::result::Result<Vec<Record>, String>,
    ) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        match outcome {
            Ok(records) => {
                self.records = records;
                self.error = None;
                self.phase = FetchPhase::Ready;
                if let Some(id) = &self.selected {
                    if !self.records.iter().any(|r| &r.id == id) {
                        self.selected = None;
                    }
                }
            }
            Err(message) => {
                self.error = Some(message);
                self.phase = if self.records.is_empty() {
                    FetchPhase::Failed
                } else {
                    FetchPhase::Ready
                };
            }
        }
        true
    }

    /// The filtered, sorted subset currently shown.
    pub fn visible(&self) -> Vec<&Record> {
        filter::visible_records(&self.records, &self.search_query, self.selected_letter)
    }

    /// Letters offered by the filter row.
    pub fn alphabet(&self) -> Vec<char> {
        filter::derive_alphabet(&self.records)
    }

    /// Move the letter filter one step through `All` plus the alphabet.
    pub fn cycle_letter(&mut self, forward: bool) {
        let alphabet = self.alphabet();
        if alphabet.is_empty() {
            self.selected_letter = None;
            return;
        }
        let pos = self
            .selected_letter
            .and_then(|l| alphabet.iter().position(|&c| c == l));
        self.selected_letter = match (pos, forward) {
            (None, true) => Some(alphabet[0]),
            (None, false) => Some(alphabet[alphabet.len() - 1]),
            (Some(i), true) => alphabet.get(i + 1).copied(),
            (Some(0), false) => None,
            (Some(i), false) => Some(alphabet[i - 1]),
        };
    }

    pub fn select(&mut self, id: &str) {
        if self.records.iter().any(|r| r.id == id) {
            self.selected = Some(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_record(&self) -> Option<&Record> {
        let id = self.selected.as_deref()?;
        self.records.iter().find(|r| r.id == id)
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}
