use crate::{Card, Decision, Error, GameRules, Hand, Participant, Result, Shoe};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const PLAYER_NAME: &str = "Player";
pub const DEALER_NAME: &str = "Dealer";

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No round in progress. Initial state and the state after settlement.
    Idle,
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settlement,
    /// The player quit. Terminal for the whole session.
    Quit,
}

/// Result of a settled round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    DealerWin,
    PlayerWin,
    Draw,
}

/// One unit of dealer play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerStep {
    /// Dealer drew a card and must act again
    Hit(Card),
    /// Dealer drew a card and went over 21
    Busted(Card),
    /// Dealer reached the stand value
    Stood,
    /// Player already busted, dealer does not draw
    Skipped,
}

impl DealerStep {
    pub fn ends_turn(&self) -> bool {
        !matches!(self, DealerStep::Hit(_))
    }
}

/// Running totals across the rounds of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub draws: u32,
    pub hands_played: u32,
}

/// Final state of a round, captured before the hands are cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub player_hand: Hand,
    pub dealer_hand: Hand,
    pub player_value: u8,
    pub dealer_value: u8,
    pub cards_drawn: usize,
    pub scoreboard: Scoreboard,
}

/// A session against the dealer: one shoe, two participants, any number of rounds.
///
/// Serializable for inspection only. Sessions are built through [`GameSession::new`]
/// or [`GameSession::with_shoe`].
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    shoe: Shoe,
    player: Participant,
    dealer: Participant,
    rules: GameRules,
    phase: GamePhase,
    outcome: Option<Outcome>,
    last_status: String,
    hands_played: u32,
    draws: u32,
    shoe_at_deal: usize,
}

impl GameSession {
    /// Start a session with a freshly built and shuffled shoe
    pub fn new<R: Rng + ?Sized>(rules: GameRules, rng: &mut R) -> Result<Self> {
        rules.validate()?;
        let shoe = Shoe::new(rules.num_decks, rules.num_shuffles, rng)?;
        Ok(Self::with_shoe(rules, shoe))
    }

    /// Start a session on a prepared shoe (e.g. a stacked one)
    pub fn with_shoe(rules: GameRules, shoe: Shoe) -> Self {
        let shoe_at_deal = shoe.remaining();
        Self {
            shoe,
            player: Participant::new(PLAYER_NAME),
            dealer: Participant::new(DEALER_NAME),
            rules,
            phase: GamePhase::Idle,
            outcome: None,
            last_status: String::new(),
            hands_played: 0,
            draws: 0,
            shoe_at_deal,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    pub fn last_status(&self) -> &str {
        &self.last_status
    }

    /// Winner decided so far this round, if any
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    pub fn shoe_initial(&self) -> usize {
        self.shoe.initial_len()
    }

    /// True when the shoe is below the configured threshold. Play is never refused.
    pub fn needs_new_shoe(&self) -> bool {
        self.shoe.remaining() < self.rules.min_cards_to_continue
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            player_wins: self.player.wins,
            dealer_wins: self.dealer.wins,
            draws: self.draws,
            hands_played: self.hands_played,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Quit
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<()> {
        if self.phase == GamePhase::Quit {
            return Err(Error::SessionOver);
        }
        if self.phase != expected {
            return Err(Error::InvalidPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn set_status(&mut self, status: &str) {
        log::debug!("{status}");
        self.last_status = status.to_string();
    }

    fn draw_for_player(&mut self) -> Result<Card> {
        let card = self.shoe.draw_card()?;
        self.player.hand.add_card(card);
        Ok(card)
    }

    fn draw_for_dealer(&mut self) -> Result<Card> {
        let card = self.shoe.draw_card()?;
        self.dealer.hand.add_card(card);
        Ok(card)
    }

    /// Deal two cards each, alternating dealer first, and hand the turn to the player
    pub fn deal_hand(&mut self) -> Result<()> {
        self.expect_phase(GamePhase::Idle)?;
        self.phase = GamePhase::Dealing;
        self.outcome = None;
        self.shoe_at_deal = self.shoe.remaining();

        for _ in 0..2 {
            self.draw_for_dealer()?;
            self.draw_for_player()?;
        }
        log::debug!(
            "Dealt player {} ({}), dealer shows {}",
            self.player.hand,
            self.player.hand.value(),
            self.dealer.hand.output(true)
        );

        self.set_status("Cards dealt");
        self.phase = GamePhase::PlayerTurn;
        Ok(())
    }

    /// Apply one player decision and return the phase the round moved to
    pub fn apply_decision(&mut self, decision: Decision) -> Result<GamePhase> {
        self.expect_phase(GamePhase::PlayerTurn)?;

        match decision {
            Decision::Hit => {
                let card = self.draw_for_player()?;
                self.set_status("Player Hit");
                log::debug!("Player drew {card}, has {}", self.player.hand.value());
                if self.player.hand.is_busted() {
                    self.set_status("Player Busted");
                    self.outcome = Some(Outcome::DealerWin);
                    self.phase = GamePhase::DealerTurn;
                }
            }
            Decision::Stand => {
                self.set_status("Standing");
                self.phase = GamePhase::DealerTurn;
            }
            Decision::Quit => {
                self.set_status("Player Quit");
                log::info!("Player quit with the round unsettled");
                self.phase = GamePhase::Quit;
            }
        }

        Ok(self.phase)
    }

    fn dealer_should_hit(&self) -> bool {
        self.dealer.hand.value() < self.rules.dealer_stands_on
    }

    /// Play one dealer action. Call until the step ends the turn, pausing between calls if desired.
    pub fn dealer_step(&mut self) -> Result<DealerStep> {
        self.expect_phase(GamePhase::DealerTurn)?;

        // A busted player has already lost, including against a dealer natural
        if self.player.hand.is_busted() {
            self.phase = GamePhase::Settlement;
            return Ok(DealerStep::Skipped);
        }

        if !self.dealer_should_hit() {
            self.set_status("Dealer Stand");
            self.phase = GamePhase::Settlement;
            return Ok(DealerStep::Stood);
        }

        let card = self.draw_for_dealer()?;
        self.set_status("Dealer Hit");
        log::debug!("Dealer drew {card}, has {}", self.dealer.hand.value());

        if self.dealer.hand.is_busted() {
            self.set_status("Dealer Busted");
            self.outcome = Some(Outcome::PlayerWin);
            self.phase = GamePhase::Settlement;
            return Ok(DealerStep::Busted(card));
        }

        Ok(DealerStep::Hit(card))
    }

    /// Run the dealer's turn to completion without pauses
    pub fn play_dealer_turn(&mut self) -> Result<Vec<DealerStep>> {
        let mut steps = Vec::new();
        loop {
            let step = self.dealer_step()?;
            steps.push(step);
            if step.ends_turn() {
                return Ok(steps);
            }
        }
    }

    fn compare_hands(&self) -> Outcome {
        let player = self.player.hand.value();
        let dealer = self.dealer.hand.value();
        if player > dealer {
            Outcome::PlayerWin
        } else if dealer > player {
            Outcome::DealerWin
        } else {
            Outcome::Draw
        }
    }

    /// Decide the winner, update the tallies and clear both hands for the next round
    pub fn settle(&mut self) -> Result<RoundSummary> {
        self.expect_phase(GamePhase::Settlement)?;

        let outcome = match self.outcome {
            Some(outcome) => outcome,
            None => self.compare_hands(),
        };
        match outcome {
            Outcome::PlayerWin => self.player.wins += 1,
            Outcome::DealerWin => self.dealer.wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.hands_played += 1;
        self.outcome = Some(outcome);

        let summary = RoundSummary {
            outcome,
            player_value: self.player.hand.value(),
            dealer_value: self.dealer.hand.value(),
            player_hand: self.player.hand.clone(),
            dealer_hand: self.dealer.hand.clone(),
            cards_drawn: self.shoe_at_deal.saturating_sub(self.shoe.remaining()),
            scoreboard: self.scoreboard(),
        };
        log::info!(
            "Round {} settled: {:?} (player {}, dealer {})",
            self.hands_played,
            outcome,
            summary.player_value,
            summary.dealer_value
        );

        self.player.hand.reset();
        self.dealer.hand.reset();
        self.phase = GamePhase::Idle;
        Ok(summary)
    }

    /// Play a whole round, asking `decide` for each player decision.
    ///
    /// Returns `Ok(None)` when the player quits.
    pub fn play_round_with<F>(&mut self, mut decide: F) -> Result<Option<RoundSummary>>
    where
        F: FnMut(&GameSession) -> Decision,
    {
        self.deal_hand()?;
        while self.phase == GamePhase::PlayerTurn {
            let decision = decide(self);
            if self.apply_decision(decision)? == GamePhase::Quit {
                return Ok(None);
            }
        }
        self.play_dealer_turn()?;
        self.settle().map(Some)
    }
}

#[cfg(test)]
mod tests;
