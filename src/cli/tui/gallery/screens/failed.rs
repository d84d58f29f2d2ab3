//! Failure screen, shown when a fetch failed with no records to fall back on

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::cli::tui::gallery::modal::centered_rect;
use crate::cli::tui::gallery::theme::Theme;

pub fn render(frame: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, frame.area());

    let lines = vec![
        Line::from(Span::styled(format!("Error: {error}"), theme.error)),
        Line::from(""),
        Line::from("Verifica que la API de la galería esté disponible."),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r]", theme.highlight),
            Span::raw(" Reintentar  "),
            Span::styled("[q]", theme.highlight),
            Span::raw(" Salir"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Galería de Corruptos ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    frame.render_widget(paragraph, area);
}
