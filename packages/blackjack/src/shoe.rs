use crate::card::{all_suits, Card, Rank};
use crate::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;

pub const DECK_SIZE: usize = 52;

/// Draw pile made of one or more shuffled decks, shared by every round of a session
#[derive(Debug, Clone, Serialize)]
pub struct Shoe {
    cards: VecDeque<Card>,
    initial_len: usize,
}

impl Shoe {
    /// Build a shoe of `decks` standard decks and shuffle it `shuffles` times.
    ///
    /// Every pass is a full Fisher-Yates permutation drawn from `rng`, so extra
    /// passes add nothing statistically. Pass a seeded rng for a reproducible shoe.
    pub fn new<R: Rng + ?Sized>(decks: u32, shuffles: u32, rng: &mut R) -> Result<Self> {
        if decks == 0 {
            return Err(Error::InvalidConfig("deck count must be at least 1".to_string()));
        }
        if shuffles == 0 {
            return Err(Error::InvalidConfig("shuffle count must be at least 1".to_string()));
        }

        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            for suit in all_suits() {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        for _ in 0..shuffles {
            cards.shuffle(rng);
        }
        log::debug!("Built shoe of {} cards ({decks} decks, {shuffles} shuffles)", cards.len());

        Ok(Self::from_cards(cards))
    }

    /// Stacked shoe that deals `cards` front to back
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let initial_len = cards.len();
        Self {
            cards: cards.into(),
            initial_len,
        }
    }

    pub fn draw_card(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(Error::ShoeEmpty)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn initial_len(&self) -> usize {
        self.initial_len
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
