//! Main gallery screen: search bar, letter filter row, record list

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::cli::tui::gallery::theme::Theme;
use crate::gallery::record::Record;

/// Everything the gallery screen needs, read from the state container.
pub struct GalleryView<'a> {
    pub visible: &'a [&'a Record],
    pub cursor: usize,
    pub search_value: &'a str,
    pub search_active: bool,
    pub alphabet: &'a [char],
    pub selected_letter: Option<char>,
    pub total: usize,
    pub refreshing: bool,
    pub error_note: Option<&'a str>,
}

pub fn render(frame: &mut Frame, view: &GalleryView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Letter filter row
            Constraint::Min(5),    // Record list
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    render_header(frame, chunks[0], view, theme);
    render_search_bar(frame, chunks[1], view, theme);
    render_letter_row(frame, chunks[2], view, theme);
    render_record_list(frame, chunks[3], view, theme);
    render_help(frame, chunks[4], theme);
}

fn render_header(frame: &mut Frame, area: Rect, view: &GalleryView, theme: &Theme) {
    let mut spans = vec![Span::raw(format!(
        " {} de {} registros",
        view.visible.len(),
        view.total
    ))];
    if view.refreshing {
        spans.push(Span::styled("  ⟳ Actualizando...", theme.muted));
    }
    if let Some(note) = view.error_note {
        spans.push(Span::styled(format!("  ⚠ {note}"), theme.error));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Galería de Corruptos ")
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, view: &GalleryView, theme: &Theme) {
    let border_style = if view.search_active {
        theme.focused
    } else {
        Style::default()
    };

    let mut spans = vec![Span::raw("Buscar por nombre: "), Span::raw(view.search_value)];
    if view.search_active {
        spans.push(Span::styled("█", theme.focused));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

fn render_letter_row(frame: &mut Frame, area: Rect, view: &GalleryView, theme: &Theme) {
    let mut spans = vec![Span::raw(" Filtrar: ")];

    let all_style = if view.selected_letter.is_none() {
        theme.letter_active
    } else {
        theme.letter_idle
    };
    spans.push(Span::styled(" Todos ", all_style));

    for &letter in view.alphabet {
        let style = if view.selected_letter == Some(letter) {
            theme.letter_active
        } else {
            theme.letter_idle
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {letter} "), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_record_list(frame: &mut Frame, area: Rect, view: &GalleryView, theme: &Theme) {
    if view.visible.is_empty() {
        let empty = Paragraph::new(
            "No se encontraron registros que coincidan con tus criterios de búsqueda.",
        )
        .alignment(Alignment::Center)
        .style(theme.muted)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor within the viewport
    let height = area.height.saturating_sub(2) as usize;
    let offset = view.cursor.saturating_sub(height.saturating_sub(1));

    let items: Vec<ListItem> = view
        .visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(height.max(1))
        .map(|(idx, record)| {
            let line = Line::from(vec![
                Span::styled(&record.name, theme.highlight),
                Span::raw("  "),
                Span::styled(&record.job_title, theme.muted),
            ]);
            let item = ListItem::new(line);
            if idx == view.cursor {
                item.style(theme.selected)
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help = Line::from(vec![
        Span::styled("[/]", theme.highlight),
        Span::raw(" Buscar  "),
        Span::styled("[←→]", theme.highlight),
        Span::raw(" Letra  "),
        Span::styled("[↑↓]", theme.highlight),
        Span::raw(" Mover  "),
        Span::styled("[Enter]", theme.highlight),
        Span::raw(" Detalle  "),
        Span::styled("[r]", theme.highlight),
        Span::raw(" Actualizar  "),
        Span::styled("[q]", theme.highlight),
        Span::raw(" Salir"),
    ]);
    frame.render_widget(
        Paragraph::new(help)
            .alignment(Alignment::Center)
            .style(theme.muted),
        area,
    );
}
