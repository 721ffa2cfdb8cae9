//! Keypad layout and keyboard shortcuts
//!
//! The keypad is a four-column grid. Buttons normally occupy one column; the
//! `0` button spans two. Rows are addressed by index and buttons by their
//! position within the row, while grid columns are used when moving the
//! cursor vertically so that it lands on the button visually below.

use crate::calculator::{Digit, Input, Operator};
use rustc_hash::FxHashMap;

/// Number of grid columns on the keypad
pub const KEYPAD_COLUMNS: usize = 4;

/// Visual group a button belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits, decimal point and operators
    Primary,
    /// Memory, grand total and equals
    Accent,
    /// Clear
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub input: Input,
    pub kind: ButtonKind,
    /// Grid columns covered by the button
    pub span: usize,
}

impl Button {
    fn new(input: Input, kind: ButtonKind) -> Self {
        Button {
            input,
            kind,
            span: 1,
        }
    }

    fn wide(input: Input, kind: ButtonKind) -> Self {
        Button {
            input,
            kind,
            span: 2,
        }
    }
}

/// Position of the keypad cursor: row index and button index within the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeypadCursor {
    pub row: usize,
    pub index: usize,
}

pub struct Keypad {
    rows: Vec<Vec<Button>>,
}

impl Keypad {
    /// The standard layout:
    ///
    /// ```text
    /// MC  MR  M-  M+
    /// GT  GC  C   /
    /// 7   8   9   *
    /// 4   5   6   -
    /// 1   2   3   +
    /// 0 (wide) .  =
    /// ```
    pub fn standard() -> Self {
        use ButtonKind::*;

        let digit = |d: u8| Input::Digit(Digit::new(d).expect("keypad digits are 0-9"));
        let key = |d: u8| Button::new(digit(d), Primary);
        let op = |op: Operator| Button::new(Input::Operator(op), Primary);

        let rows = vec![
            vec![
                Button::new(Input::MemoryClear, Accent),
                Button::new(Input::MemoryRecall, Accent),
                Button::new(Input::MemorySubtract, Accent),
                Button::new(Input::MemoryAdd, Accent),
            ],
            vec![
                Button::new(Input::GrandTotalRecall, Accent),
                Button::new(Input::GrandTotalClear, Accent),
                Button::new(Input::Clear, Secondary),
                op(Operator::Divide),
            ],
            vec![key(7), key(8), key(9), op(Operator::Multiply)],
            vec![key(4), key(5), key(6), op(Operator::Subtract)],
            vec![key(1), key(2), key(3), op(Operator::Add)],
            vec![
                Button::wide(digit(0), Primary),
                Button::new(Input::Decimal, Primary),
                Button::new(Input::Equals, Accent),
            ],
        ];

        Keypad { rows }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    pub fn button(&self, cursor: KeypadCursor) -> Option<&Button> {
        self.rows.get(cursor.row)?.get(cursor.index)
    }

    /// Position of the button that produces `input`, if it is on the keypad
    pub fn find(&self, input: Input) -> Option<KeypadCursor> {
        self.rows.iter().enumerate().find_map(|(row, buttons)| {
            buttons
                .iter()
                .position(|b| b.input == input)
                .map(|index| KeypadCursor { row, index })
        })
    }

    /// First grid column covered by the button at `cursor`
    pub fn grid_column(&self, cursor: KeypadCursor) -> usize {
        self.rows
            .get(cursor.row)
            .map(|buttons| buttons.iter().take(cursor.index).map(|b| b.span).sum())
            .unwrap_or(0)
    }

    /// Index of the button in `row` that covers grid column `column`
    fn index_covering(&self, row: usize, column: usize) -> usize {
        let Some(buttons) = self.rows.get(row) else {
            return 0;
        };
        let mut start = 0;
        for (index, button) in buttons.iter().enumerate() {
            if column < start + button.span {
                return index;
            }
            start += button.span;
        }
        buttons.len().saturating_sub(1)
    }

    pub fn move_left(&self, cursor: KeypadCursor) -> KeypadCursor {
        KeypadCursor {
            row: cursor.row,
            index: cursor.index.saturating_sub(1),
        }
    }

    pub fn move_right(&self, cursor: KeypadCursor) -> KeypadCursor {
        let last = self
            .rows
            .get(cursor.row)
            .map_or(0, |buttons| buttons.len().saturating_sub(1));
        KeypadCursor {
            row: cursor.row,
            index: (cursor.index + 1).min(last),
        }
    }

    pub fn move_up(&self, cursor: KeypadCursor) -> KeypadCursor {
        self.move_vertical(cursor, cursor.row.saturating_sub(1))
    }

    pub fn move_down(&self, cursor: KeypadCursor) -> KeypadCursor {
        let last_row = self.rows.len().saturating_sub(1);
        self.move_vertical(cursor, (cursor.row + 1).min(last_row))
    }

    fn move_vertical(&self, cursor: KeypadCursor, row: usize) -> KeypadCursor {
        let column = self.grid_column(cursor);
        KeypadCursor {
            row,
            index: self.index_covering(row, column),
        }
    }

    /// Keyboard shortcut table for every button on the keypad
    pub fn keymap(&self) -> FxHashMap<char, Input> {
        let mut map: FxHashMap<char, Input> = self
            .buttons()
            .map(|button| (button.input.key(), button.input))
            .collect();
        // Common aliases
        map.insert('C', Input::Clear);
        map.insert('X', Input::Operator(Operator::Multiply));
        map.insert(',', Input::Decimal);
        map
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}
