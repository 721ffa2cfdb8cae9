// Total Recall: four-function terminal calculator with memory and grand total

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::error;

use totalrecall::config::Cli;
use totalrecall::logging;
use totalrecall::tape::{self, Tape};
use totalrecall::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init(&cli.log_target())?;

    let mut tape = Tape::new(cli.tape_limit);

    // Headless replay
    if let Some(keys) = &cli.keys {
        let calculator = match tape::replay(keys, &mut tape) {
            Ok(calculator) => calculator,
            Err(e) => {
                error!(error = %e, "invalid key sequence");
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        };

        if cli.show_tape {
            for entry in tape.entries() {
                println!("{}", entry.render(24));
            }
            println!("{}", "-".repeat(24));
        }
        println!("{}", calculator.display());
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(tape);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "terminal error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
