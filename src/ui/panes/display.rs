//! Display pane rendering

use crate::calculator::{Calculator, format_display};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the calculator display.
///
/// The top line carries the indicators (`M` when memory holds a value, the
/// pending operator and the grand total); the value sits right-aligned below.
pub fn render_display_pane(frame: &mut Frame, area: Rect, calculator: &Calculator) {
    let block = Block::default()
        .title(" Total Recall ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .style(Style::default().bg(DEFAULT_THEME.display_bg));

    let indicator_style = Style::default()
        .fg(DEFAULT_THEME.accent)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(DEFAULT_THEME.comment);

    let mut indicators = Vec::new();
    if calculator.memory_has_value() {
        indicators.push(Span::styled("M", indicator_style));
        indicators.push(Span::raw(" "));
    }
    if let Some(op) = calculator.pending_operator() {
        indicators.push(Span::styled(
            op.to_string(),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
        indicators.push(Span::raw(" "));
    }
    if calculator.grand_total() != 0.0 {
        indicators.push(Span::styled("GT ", dim_style));
        indicators.push(Span::styled(
            format_display(calculator.grand_total()),
            dim_style,
        ));
    }

    let value_style = if calculator.is_error() {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.number)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(indicators).alignment(Alignment::Left),
        Line::from(Span::styled(calculator.display().to_string(), value_style))
            .alignment(Alignment::Right),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
