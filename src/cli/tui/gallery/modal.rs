//! Modal overlay for the record detail view

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::Theme;
use crate::gallery::record::Record;

/// Calculate centered modal area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the detail modal for the inspected record
pub fn render_detail_modal(frame: &mut Frame, area: Rect, record: &Record, theme: &Theme) {
    let modal_area = centered_rect(70, 70, area);
    frame.render_widget(Clear, modal_area);

    let modal_block = Block::default()
        .title(format!(" {} ", record.name))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.modal_border);

    let inner_area = modal_block.inner(modal_area);
    frame.render_widget(modal_block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Cargo / departamento / municipio / foto
            Constraint::Length(1), // Spacing
            Constraint::Min(3),    // Descripción
            Constraint::Length(1), // Enlace
            Constraint::Length(1), // Help text
        ])
        .split(inner_area);

    let facts = vec![
        labeled_line("Cargo: ", &record.job_title, theme),
        labeled_line("Departamento: ", &record.department, theme),
        labeled_line("Municipio: ", &record.location, theme),
        labeled_line("Foto: ", &record.image_url, theme),
    ];
    frame.render_widget(Paragraph::new(facts), chunks[0]);

    let description = Paragraph::new(vec![
        Line::from(Span::styled("Descripción:", theme.highlight)),
        Line::from(record.description.as_str()),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(description, chunks[2]);

    if let Some(link) = &record.more_info_link {
        frame.render_widget(
            Paragraph::new(labeled_line("Más información: ", link, theme)),
            chunks[3],
        );
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled("[Esc]", theme.highlight),
        Span::raw(" Cerrar"),
    ]))
    .alignment(Alignment::Center)
    .style(theme.muted);
    frame.render_widget(help, chunks[4]);
}

fn labeled_line<'a>(label: &'a str, value: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![Span::styled(label, theme.highlight), Span::raw(value)])
}
