use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::process::ExitCode;
use std::time::Duration;
use std::{error::Error, io};

use blackjack::GameSession;

mod app;
use app::App;

mod cli;
use cli::Cli;

mod tui_logger;
use tui_logger::TuiLogger;

mod ui;

const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<ExitCode, Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Bad configuration is reported before the terminal is taken over
    let rules = cli.rules();
    rules.validate()?;
    let mut rng = cli.rng();
    let game = GameSession::new(rules, &mut rng)?;

    let log_buffer = TuiLogger::init(cli.log_level)?;
    log::info!(
        "Shoe ready: {} decks, {} shuffles, {} cards",
        rules.num_decks,
        rules.num_shuffles,
        game.shoe_remaining()
    );

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(game, log_buffer);
    let res = run_app(&mut terminal, app);

    // restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match final_report(res) {
        Ok(score) => {
            println!("{score}");
            Ok(ExitCode::SUCCESS)
        }
        Err(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Final score after a clean exit, or the error that ended the session
fn final_report(res: Result<App, Box<dyn Error>>) -> Result<String, String> {
    match res {
        Ok(app) => {
            let score = app.game.scoreboard();
            Ok(format!(
                "Dealer {} and Player {} after {} games!",
                score.dealer_wins, score.player_wins, score.hands_played
            ))
        }
        Err(err) => Err(format!("blackjack: {err}")),
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App, Box<dyn Error>>
where
    B::Error: 'static,
{
    app.start_round()?;

    loop {
        app.sync_logs();
        terminal.draw(|f| ui::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code)?;
                }
            }
        }

        if app.should_quit {
            return Ok(app);
        }

        app.on_tick()?;
    }
}
