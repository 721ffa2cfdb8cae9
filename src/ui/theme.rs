use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub accent: Color,    // Teal
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub display_bg: Color,
    pub button_fg: Color,
    pub selected_bg: Color, // Keypad cursor
    pub pressed_bg: Color,  // Brief flash after a press
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    accent: Color::Rgb(148, 226, 213),    // Cyan/teal for memory and totals
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    display_bg: Color::Rgb(24, 24, 37),
    button_fg: Color::Black,
    selected_bg: Color::Rgb(249, 226, 175),
    pressed_bg: Color::Rgb(245, 194, 231), // Pink
};
