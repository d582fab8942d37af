use blackjack::GameRules;
use clap::Parser;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(name = "blackjack", about = "Play blackjack against the house dealer in your terminal")]
pub struct Cli {
    /// Number of 52-card decks in the shoe
    #[arg(long, env = "BLACKJACK_DECKS", default_value_t = 6)]
    pub decks: u32,

    /// Shuffle passes applied to the shoe
    #[arg(long, env = "BLACKJACK_SHUFFLES", default_value_t = 5)]
    pub shuffles: u32,

    /// Seed for a reproducible shoe (random when omitted)
    #[arg(long, env = "BLACKJACK_SEED")]
    pub seed: Option<u64>,

    /// Stop the session once fewer cards than this remain
    #[arg(long, env = "BLACKJACK_MIN_CARDS", default_value_t = 10)]
    pub min_cards: usize,

    /// Pause between dealer draws in milliseconds
    #[arg(long, env = "BLACKJACK_DEALER_DELAY_MS", default_value_t = 500)]
    pub dealer_delay_ms: u64,

    /// Log level for the in-game log pane
    #[arg(long, env = "BLACKJACK_LOG", default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl Cli {
    pub fn rules(&self) -> GameRules {
        GameRules {
            num_decks: self.decks,
            num_shuffles: self.shuffles,
            min_cards_to_continue: self.min_cards,
            dealer_draw_delay_ms: self.dealer_delay_ms,
            ..GameRules::default()
        }
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
