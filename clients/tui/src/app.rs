use blackjack::{Decision, GamePhase, GameSession, Hand, Outcome, RoundSummary};
use crossterm::event::KeyCode;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// What the screen is showing, on top of the engine's own phase
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Round,
    RoundOver(RoundSummary),
    SessionOver(String),
}

pub struct App {
    pub game: GameSession,
    pub screen: Screen,
    pub logs: Vec<String>,
    pub log_visible: bool,
    pub prompt: String,
    pub should_quit: bool,
    log_buffer: Arc<Mutex<Vec<String>>>,
    dealer_delay: Duration,
    next_dealer_step: Option<Instant>,
}

impl App {
    pub fn new(game: GameSession, log_buffer: Arc<Mutex<Vec<String>>>) -> App {
        let dealer_delay = Duration::from_millis(game.rules().dealer_draw_delay_ms);
        App {
            game,
            screen: Screen::Round,
            logs: vec!["Starting a new game of BLACKJACK!".to_string()],
            log_visible: true,
            prompt: String::new(),
            should_quit: false,
            log_buffer,
            dealer_delay,
            next_dealer_step: None,
        }
    }

    pub fn sync_logs(&mut self) {
        let messages: Vec<String> = if let Ok(mut buffer) = self.log_buffer.lock() {
            buffer.drain(..).collect()
        } else {
            Vec::new()
        };

        for msg in messages {
            self.add_log(msg);
        }
    }

    pub fn add_log(&mut self, message: String) {
        self.logs.push(message);
        if self.logs.len() > 20 {
            self.logs.remove(0);
        }
    }

    /// Deal the next round unless the shoe is too thin to continue
    pub fn start_round(&mut self) -> Result<(), Box<dyn Error>> {
        if self.game.needs_new_shoe() {
            let message = "Shoe is getting empty, time for a break!".to_string();
            log::info!("{message} ({} cards left)", self.game.shoe_remaining());
            self.screen = Screen::SessionOver(message);
            return Ok(());
        }

        self.game.deal_hand()?;
        self.screen = Screen::Round;
        self.prompt = "(h)it or (s)tand?".to_string();
        Ok(())
    }

    pub fn on_key(&mut self, code: KeyCode) -> Result<(), Box<dyn Error>> {
        if code == KeyCode::Char('l') || code == KeyCode::Char('L') {
            self.log_visible = !self.log_visible;
            return Ok(());
        }

        match self.screen.clone() {
            Screen::Round if self.game.phase() == GamePhase::PlayerTurn => self.on_player_key(code),
            Screen::Round => Ok(()),
            Screen::RoundOver(_) => match code {
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => self.start_round(),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('x') | KeyCode::Esc => {
                    self.should_quit = true;
                    Ok(())
                }
                _ => Ok(()),
            },
            Screen::SessionOver(_) => {
                self.should_quit = true;
                Ok(())
            }
        }
    }

    fn on_player_key(&mut self, code: KeyCode) -> Result<(), Box<dyn Error>> {
        let decision = match code {
            KeyCode::Up => Decision::Hit,
            KeyCode::Down => Decision::Stand,
            KeyCode::Esc => Decision::Quit,
            KeyCode::Char(c) => match Decision::try_from(c) {
                Ok(decision) => decision,
                Err(e) => {
                    self.prompt = format!("{e}");
                    return Ok(());
                }
            },
            _ => return Ok(()),
        };

        match self.game.apply_decision(decision)? {
            GamePhase::Quit => self.should_quit = true,
            GamePhase::DealerTurn => {
                self.prompt = "Dealer's turn...".to_string();
                self.next_dealer_step = Some(Instant::now() + self.dealer_delay);
            }
            _ => self.prompt = "(h)it or (s)tand?".to_string(),
        }
        Ok(())
    }

    /// Advance the dealer one draw at a time, pausing between draws
    pub fn on_tick(&mut self) -> Result<(), Box<dyn Error>> {
        if self.game.phase() != GamePhase::DealerTurn {
            return Ok(());
        }
        let due = self.next_dealer_step.map_or(true, |at| Instant::now() >= at);
        if !due {
            return Ok(());
        }

        let step = self.game.dealer_step()?;
        if step.ends_turn() {
            self.next_dealer_step = None;
            self.finish_round()?;
        } else {
            self.next_dealer_step = Some(Instant::now() + self.dealer_delay);
        }
        Ok(())
    }

    fn finish_round(&mut self) -> Result<(), Box<dyn Error>> {
        let summary = self.game.settle()?;
        self.add_log(outcome_line(&summary));
        self.prompt = "ENTER to continue, or 'q' to quit...".to_string();
        self.screen = Screen::RoundOver(summary);
        Ok(())
    }

    /// Dealer's hole card stays face down until the player is done
    pub fn hide_hole_card(&self) -> bool {
        self.screen == Screen::Round && self.game.phase() == GamePhase::PlayerTurn
    }
}

/// Hand total for panel titles, e.g. `soft 17`
pub fn value_label(hand: &Hand) -> String {
    if hand.is_soft() {
        format!("soft {}", hand.value())
    } else {
        hand.value().to_string()
    }
}

pub fn outcome_line(summary: &RoundSummary) -> String {
    match summary.outcome {
        Outcome::Draw => "We have a DRAW! No winner this hand :(".to_string(),
        Outcome::PlayerWin => format!("Player wins with a hand of {}!", summary.player_value),
        Outcome::DealerWin => format!("Dealer wins with a hand of {}!", summary.dealer_value),
    }
}

pub fn score_line(summary: &RoundSummary) -> String {
    let score = summary.scoreboard;
    format!(
        "Dealer {} and Player {} after {} games!",
        score.dealer_wins, score.player_wins, score.hands_played
    )
}
