use crate::*;

/// Running tally of outcomes, from the bot's side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    wins: usize,
    losses: usize,
    ties: usize,
}

impl Scoreboard {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn ties(&self) -> usize {
        self.ties
    }
    pub fn total(&self) -> usize {
        self.wins + self.losses + self.ties
    }
    /// Share of decided rounds the bot won. `None` before any decisive round.
    pub fn win_rate(&self) -> Option<Probability> {
        match self.wins + self.losses {
            0 => None,
            n => Some(self.wins as Probability / n as Probability),
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: bot {} / you {} / ties {}",
            self.total(),
            self.wins,
            self.losses,
            self.ties
        )
    }
}
