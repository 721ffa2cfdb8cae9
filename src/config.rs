//! Command-line configuration

use crate::logging::LogTarget;
use crate::tape::DEFAULT_TAPE_LIMIT;
use clap::Parser;
use std::path::PathBuf;

/// Four-function calculator with memory and grand-total registers.
///
/// Without arguments an interactive keypad opens in the terminal. With
/// `--keys` the sequence is replayed and the final display printed.
#[derive(Parser, Debug)]
#[command(name = "totalrecall")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Replay a key sequence instead of opening the keypad.
    /// Keys: 0-9 . + - * / = c (clear) m n r x (M+ M- MR MC) g z (GT GC)
    #[arg(long, short = 'k', value_name = "KEYS", allow_hyphen_values = true)]
    pub keys: Option<String>,

    /// Print the tape after a replay
    #[arg(long, requires = "keys")]
    pub show_tape: bool,

    /// Number of tape entries kept in history
    #[arg(long, default_value_t = DEFAULT_TAPE_LIMIT)]
    pub tape_limit: usize,

    /// Write logs to this file (interactive mode only logs when set)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Where logs should go for this invocation
    pub fn log_target(&self) -> LogTarget {
        match (&self.log_file, &self.keys) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Some(_)) => LogTarget::Stderr,
            (None, None) => LogTarget::Disabled,
        }
    }
}
