//! Rules engine for single-player blackjack against a house dealer.
//!
//! A [`GameSession`] owns the [`Shoe`] and both participants. Callers drive it
//! one operation at a time: deal, apply player decisions, step the dealer, settle.

mod card;
mod decision;
mod error;
mod game_state;
mod hand;
mod player;
mod rules;
mod shoe;

pub use card::{all_suits, all_values, Card, Rank, Suit};
pub use decision::{Decision, ParseDecisionError};
pub use error::{Error, Result};
pub use game_state::{
    DealerStep, GamePhase, GameSession, Outcome, RoundSummary, Scoreboard, DEALER_NAME,
    PLAYER_NAME,
};
pub use hand::{
    calculate_hand_value, is_busted, is_natural, is_soft_hand, Hand, BLACKJACK, HIDDEN_CARD,
};
pub use player::Participant;
pub use rules::GameRules;
pub use shoe::{Shoe, DECK_SIZE};
