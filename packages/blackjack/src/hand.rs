use crate::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const BLACKJACK: u8 = 21;

/// Face-down card shown in place of a hidden hole card
pub const HIDDEN_CARD: &str = "🂠";

/// Calculate the value of a blackjack hand.
///
/// Aces count 1, and a single ace is promoted to 11 when that does not bust the hand.
///
/// Totals past `u8::MAX` saturate, they are busted either way.
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    let total = hard_total(cards);
    let value = if is_soft_hand(cards) { total + 10 } else { total };
    u8::try_from(value).unwrap_or(u8::MAX)
}

/// Check if a hand is soft (an ace is counted as 11)
pub fn is_soft_hand(cards: &[Card]) -> bool {
    cards.iter().any(|c| c.is_ace()) && hard_total(cards) + 10 <= u32::from(BLACKJACK)
}

fn hard_total(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.value())).sum()
}

/// Check if a hand is busted
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > BLACKJACK
}

/// Check if a hand totals 21. Card count is not checked.
pub fn is_natural(cards: &[Card]) -> bool {
    calculate_hand_value(cards) == BLACKJACK
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discard every card. Cards do not go back to the shoe.
    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Render the hand as `card card ...`, optionally hiding the first card (dealer's hole card)
    pub fn output(&self, hide_first: bool) -> String {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if i == 0 && hide_first {
                    HIDDEN_CARD.to_string()
                } else {
                    card.to_display()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.output(false))
    }
}
