use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Session configuration for a game against the house dealer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Number of 52-card decks in the shoe
    pub num_decks: u32,

    /// Shuffle passes applied when the shoe is built
    pub num_shuffles: u32,

    /// Dealer stands once the hand reaches this value (soft totals included)
    pub dealer_stands_on: u8,

    /// Below this many cards the shoe should be retired before another round
    pub min_cards_to_continue: usize,

    /// Pause between automatic dealer draws, in milliseconds. Display only.
    pub dealer_draw_delay_ms: u64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            num_decks: 6,
            num_shuffles: 5,
            dealer_stands_on: 17,
            min_cards_to_continue: 10,
            dealer_draw_delay_ms: 500,
        }
    }
}

impl GameRules {
    /// Single deck, one shuffle, no dealer pause
    pub fn single_deck() -> Self {
        Self {
            num_decks: 1,
            num_shuffles: 1,
            dealer_draw_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_decks == 0 {
            return Err(Error::InvalidConfig("deck count must be at least 1".to_string()));
        }
        if self.num_shuffles == 0 {
            return Err(Error::InvalidConfig("shuffle count must be at least 1".to_string()));
        }
        if !(2..=21).contains(&self.dealer_stands_on) {
            return Err(Error::InvalidConfig(format!(
                "dealer stand value must be between 2 and 21, got {}",
                self.dealer_stands_on
            )));
        }
        Ok(())
    }

    /// Total cards in a freshly built shoe
    pub fn shoe_size(&self) -> usize {
        self.num_decks as usize * crate::shoe::DECK_SIZE
    }
}
