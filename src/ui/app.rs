//! Main TUI application state and logic

use crate::calculator::{Calculator, Input};
use crate::tape::Tape;
use crate::ui::keypad::{Keypad, KeypadCursor};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// How long a pressed button stays highlighted
const PRESS_FLASH: Duration = Duration::from_millis(150);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Keypad,
    Tape,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Keypad => FocusedPane::Tape,
            FocusedPane::Tape => FocusedPane::Keypad,
        }
    }
}

/// The main application state
pub struct App {
    /// The calculator engine
    pub calculator: Calculator,

    /// History of every input pressed
    pub tape: Tape,

    /// Button layout
    pub keypad: Keypad,

    /// Keyboard character -> input
    keymap: FxHashMap<char, Input>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Selected keypad button
    pub cursor: KeypadCursor,

    /// Tape scroll offset (clamped by the tape pane)
    pub tape_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last pressed input and when, for the button flash
    pub last_press: Option<(Input, Instant)>,
}

impl App {
    pub fn new(tape: Tape) -> Self {
        let keypad = Keypad::standard();
        let keymap = keypad.keymap();
        App {
            calculator: Calculator::new(),
            tape,
            keypad,
            keymap,
            focused_pane: FocusedPane::Keypad,
            cursor: KeypadCursor::default(),
            tape_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_press: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("calculator started");

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so the press flash can expire without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        info!(entries = self.tape.len(), "calculator closed");
        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: Display (top) | Keypad (bottom). Right column: Tape
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(columns[0]);

        super::panes::render_display_pane(frame, left_rows[0], &self.calculator);

        let pressed = self
            .last_press
            .filter(|(_, at)| at.elapsed() < PRESS_FLASH)
            .map(|(input, _)| input);

        super::panes::render_keypad_pane(
            frame,
            left_rows[1],
            &self.keypad,
            self.cursor,
            self.focused_pane == FocusedPane::Keypad,
            pressed,
        );

        super::panes::render_tape_pane(
            frame,
            columns[1],
            &self.tape,
            self.focused_pane == FocusedPane::Tape,
            &mut self.tape_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            &self.calculator,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                if let Some(button) = self.keypad.button(self.cursor) {
                    let input = button.input;
                    self.press(input);
                }
            }
            KeyCode::Char(c) => match self.keymap.get(&c).copied() {
                Some(input) => self.press(input),
                None => self.status_message = format!("Unknown key '{}'", c),
            },
            KeyCode::Enter => self.press(Input::Equals),
            KeyCode::Esc | KeyCode::Delete => self.press(Input::Clear),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left if self.focused_pane == FocusedPane::Keypad => {
                self.cursor = self.keypad.move_left(self.cursor);
            }
            KeyCode::Right if self.focused_pane == FocusedPane::Keypad => {
                self.cursor = self.keypad.move_right(self.cursor);
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Keypad => self.cursor = self.keypad.move_up(self.cursor),
                FocusedPane::Tape => self.tape_scroll = self.tape_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Keypad => self.cursor = self.keypad.move_down(self.cursor),
                FocusedPane::Tape => self.tape_scroll = self.tape_scroll.saturating_add(1),
            },
            _ => {}
        }
    }

    /// Forward an input to the calculator and record it on the tape
    pub fn press(&mut self, input: Input) {
        self.calculator.apply(input);
        self.tape.record(input, &self.calculator);
        self.last_press = Some((input, Instant::now()));
        if let Some(cursor) = self.keypad.find(input) {
            self.cursor = cursor;
        }

        self.status_message = if self.calculator.is_error() {
            String::from("Error: enter a digit or clear")
        } else {
            format!("Pressed {}", input)
        };
        // Auto-scroll tape to bottom
        self.tape_scroll = usize::MAX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Digit, Operator};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_keys_drive_calculator() {
        let mut app = App::new(Tape::default());
        type_keys(&mut app, "12+30");
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.calculator.display(), "42");
        assert_eq!(app.tape.len(), 6);
        assert_eq!(app.status_message, "Pressed =");
    }

    #[test]
    fn test_escape_clears() {
        let mut app = App::new(Tape::default());
        type_keys(&mut app, "9*");
        app.handle_key_event(key(KeyCode::Esc));

        assert_eq!(app.calculator.display(), "0");
        assert_eq!(app.calculator.pending_operator(), None);
    }

    #[test]
    fn test_space_presses_selected_button() {
        let mut app = App::new(Tape::default());
        // Cursor starts on MC; walk down to "7"
        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(
            app.keypad.button(app.cursor).map(|b| b.input),
            Some(Input::Digit(Digit::new(7).unwrap()))
        );

        app.handle_key_event(key(KeyCode::Char(' ')));
        assert_eq!(app.calculator.display(), "7");
    }

    #[test]
    fn test_press_moves_cursor_to_button() {
        let mut app = App::new(Tape::default());
        app.press(Input::Operator(Operator::Add));
        assert_eq!(app.cursor, app.keypad.find(Input::Operator(Operator::Add)).unwrap());
    }

    #[test]
    fn test_unknown_key_reports_status() {
        let mut app = App::new(Tape::default());
        type_keys(&mut app, "#");
        assert_eq!(app.status_message, "Unknown key '#'");
        assert!(app.tape.is_empty());
    }

    #[test]
    fn test_division_by_zero_status() {
        let mut app = App::new(Tape::default());
        type_keys(&mut app, "5/0=");
        assert_eq!(app.status_message, "Error: enter a digit or clear");
        assert_eq!(app.tape.last().map(|e| e.display.as_str()), Some("Error"));
    }

    #[test]
    fn test_tab_switches_focus_and_arrows_scroll_tape() {
        let mut app = App::new(Tape::default());
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.focused_pane, FocusedPane::Tape);

        let cursor = app.cursor;
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.cursor, cursor);
        assert_eq!(app.tape_scroll, 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Tape::default());
        type_keys(&mut app, "q");
        assert!(app.should_quit);

        let mut app = App::new(Tape::default());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.tape.is_empty());
    }

    #[test]
    fn test_render_shows_display_and_memory_indicator() {
        let mut app = App::new(Tape::default());
        type_keys(&mut app, "7m");

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("Total Recall"));
        assert!(screen.contains("M+"));
        assert!(screen.contains("Tape (2/256)"));
        // Memory indicator on the first line inside the display border
        let indicator_line = screen.lines().nth(1).unwrap();
        assert!(indicator_line.starts_with("│M "));
        assert!(screen.contains("READY"));
    }
}
