use crate::*;

/// A game in progress: the predictor watching the human, and the score.
///
/// Each round the human's move is recorded first, then the predictor is asked
/// for the most likely move and the bot plays its counter.
#[derive(Debug, Clone, Default)]
pub struct Session {
    predictor: IntentPredictor,
    scoreboard: Scoreboard,
}

impl From<IntentPredictor> for Session {
    fn from(predictor: IntentPredictor) -> Self {
        Self {
            predictor,
            scoreboard: Scoreboard::default(),
        }
    }
}

impl Session {
    /// Play one round against the human's move.
    pub fn play(&mut self, human: Move) -> Round {
        self.predictor.record(Code::from(human));
        let predicted = self.predictor.predict();
        let bot = Move::all()[predicted].counter();
        let round = Round::from((human, bot));
        self.scoreboard.add(round.outcome);
        log::debug!(
            "round {} [{:?}] predicted {} -> {}",
            self.rounds(),
            self.predictor.mode(),
            predicted,
            round
        );
        round
    }
    pub fn rounds(&self) -> usize {
        self.predictor.len()
    }
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }
    pub fn predictor(&self) -> &IntentPredictor {
        &self.predictor
    }
}
