use crate::*;

/// Everything that happened in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub human: Move,
    pub bot: Move,
    pub outcome: Outcome,
}

impl From<(Move, Move)> for Round {
    fn from((human, bot): (Move, Move)) -> Self {
        Self {
            human,
            bot,
            outcome: Outcome::judge(bot, human),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}: {}", self.human, self.bot, self.outcome)
    }
}
