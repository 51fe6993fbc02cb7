use super::*;

/// Result of a round, seen from the bot's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// Judge the bot's move against the human's.
    pub fn judge(bot: Move, human: Move) -> Self {
        if bot.beats(&human) {
            Self::Win
        } else if human.beats(&bot) {
            Self::Loss
        } else {
            Self::Tie
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "Bot wins!"),
            Self::Loss => write!(f, "You win!"),
            Self::Tie => write!(f, "It's a tie!"),
        }
    }
}
