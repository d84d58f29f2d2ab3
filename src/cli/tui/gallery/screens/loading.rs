//! Initial loading screen, shown only while no records are held yet

use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::gallery::modal::centered_rect;
use crate::cli::tui::gallery::theme::Theme;

pub fn render(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(50, 20, frame.area());

    let paragraph = Paragraph::new("Cargando galería...")
        .alignment(Alignment::Center)
        .style(theme.highlight)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
