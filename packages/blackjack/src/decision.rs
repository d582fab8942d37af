use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// What the player can do on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Hit,
    Stand,
    Quit,
}

/// Input that is not a decision. Callers ignore it and ask again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized decision {0:?}, expected (h)it, (s)tand or (q)uit")]
pub struct ParseDecisionError(pub String);

impl FromStr for Decision {
    type Err = ParseDecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "hit" => Ok(Decision::Hit),
            "s" | "stand" => Ok(Decision::Stand),
            "q" | "quit" | "x" => Ok(Decision::Quit),
            _ => Err(ParseDecisionError(s.to_string())),
        }
    }
}

impl TryFrom<char> for Decision {
    type Error = ParseDecisionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_string().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_forms() {
        assert_eq!("h".parse::<Decision>(), Ok(Decision::Hit));
        assert_eq!("Hit".parse::<Decision>(), Ok(Decision::Hit));
        assert_eq!(" S ".parse::<Decision>(), Ok(Decision::Stand));
        assert_eq!("stand".parse::<Decision>(), Ok(Decision::Stand));
        assert_eq!("q".parse::<Decision>(), Ok(Decision::Quit));
        assert_eq!("X".parse::<Decision>(), Ok(Decision::Quit));
    }

    #[test]
    fn test_parse_unrecognized() {
        assert!("d".parse::<Decision>().is_err());
        assert!("".parse::<Decision>().is_err());
        assert_eq!(
            Decision::try_from('z'),
            Err(ParseDecisionError("z".to_string()))
        );
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Decision::try_from('H'), Ok(Decision::Hit));
        assert_eq!(Decision::try_from('s'), Ok(Decision::Stand));
    }
}
