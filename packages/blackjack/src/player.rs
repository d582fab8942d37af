use crate::Hand;
use serde::{Deserialize, Serialize};

/// A seat at the table: the human player or the dealer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub hand: Hand,
    pub wins: u32,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            wins: 0,
        }
    }
}
