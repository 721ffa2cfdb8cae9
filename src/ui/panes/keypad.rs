//! Keypad pane rendering

use crate::calculator::Input;
use crate::ui::keypad::{Button, ButtonKind, KEYPAD_COLUMNS, Keypad, KeypadCursor};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Render the keypad grid.
///
/// `cursor` is highlighted only while the keypad has focus. `pressed` is the
/// input whose button should flash, if any.
pub fn render_keypad_pane(
    frame: &mut Frame,
    area: Rect,
    keypad: &Keypad,
    cursor: KeypadCursor,
    is_focused: bool,
    pressed: Option<Input>,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Keypad ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_count = keypad.row_count().max(1) as u32;
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count); row_count as usize])
        .split(inner);

    for (row, buttons) in keypad.rows().iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, KEYPAD_COLUMNS as u32);
                KEYPAD_COLUMNS
            ])
            .split(row_areas[row]);

        let mut column = 0;
        for (index, button) in buttons.iter().enumerate() {
            let first = columns[column.min(KEYPAD_COLUMNS - 1)];
            let last = columns[(column + button.span - 1).min(KEYPAD_COLUMNS - 1)];
            let button_area = Rect {
                x: first.x,
                y: first.y,
                width: last.right().saturating_sub(first.x),
                height: first.height,
            };

            let is_selected = is_focused && cursor == KeypadCursor { row, index };
            let is_pressed = pressed == Some(button.input);
            render_button(frame, button_area, button, is_selected, is_pressed);

            column += button.span;
        }
    }
}

fn render_button(frame: &mut Frame, area: Rect, button: &Button, selected: bool, pressed: bool) {
    let base = match button.kind {
        ButtonKind::Primary => DEFAULT_THEME.primary,
        ButtonKind::Accent => DEFAULT_THEME.accent,
        ButtonKind::Secondary => DEFAULT_THEME.secondary,
    };

    let (bg, border): (Color, Color) = if pressed {
        (DEFAULT_THEME.pressed_bg, DEFAULT_THEME.pressed_bg)
    } else if selected {
        (DEFAULT_THEME.selected_bg, DEFAULT_THEME.border_focused)
    } else {
        (base, DEFAULT_THEME.border_normal)
    };

    // Tiny terminals: drop the border and keep the label
    let block = if area.height >= 3 {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
    } else {
        Block::default()
    };

    let label_style = Style::default()
        .bg(bg)
        .fg(DEFAULT_THEME.button_fg)
        .add_modifier(Modifier::BOLD);

    let paragraph = Paragraph::new(format!(" {} ", button.input.label()))
        .style(label_style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
