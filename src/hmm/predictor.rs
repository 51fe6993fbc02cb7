use super::*;
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Operating phase of an [`IntentPredictor`].
///
/// The transition is one way: once the second observation lands the
/// predictor decodes for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Too little history to decode; predictions are uniform guesses.
    ColdStart,
    /// Predictions come from the decoded state path.
    Decoding,
}

/// Forecasts the human's next move from everything they've played so far.
///
/// Parameters are frozen at construction. History is append-only and owned
/// here exclusively; each prediction re-decodes it from scratch.
#[derive(Debug, Clone)]
pub struct IntentPredictor {
    params: Parameters,
    history: Vec<Code>,
    rng: SmallRng,
}

impl IntentPredictor {
    /// Predictor whose cold-start guesses are seeded from the thread RNG.
    pub fn new(params: Parameters) -> Self {
        Self::with_rng(params, SmallRng::from_rng(&mut rand::rng()))
    }
    /// Predictor with reproducible cold-start guesses.
    pub fn seeded(params: Parameters, seed: u64) -> Self {
        Self::with_rng(params, SmallRng::seed_from_u64(seed))
    }
    fn with_rng(params: Parameters, rng: SmallRng) -> Self {
        Self {
            params,
            history: Vec::new(),
            rng,
        }
    }

    /// Append one observed move code. Panics on a code outside `0..MOVES`.
    pub fn record(&mut self, code: Code) {
        assert!(code < MOVES, "{}", Error::InvalidCode(code));
        self.history.push(code);
    }

    /// Most likely next move code. Uniformly random during cold start,
    /// deterministic afterwards.
    pub fn predict(&mut self) -> Code {
        match self.forecast() {
            Some(moves) => argmax(moves.iter().copied()).0,
            None => {
                let guess = self.rng.random_range(0..MOVES);
                log::debug!("cold start ({} seen), guessing {}", self.len(), guess);
                guess
            }
        }
    }

    /// Expected distribution over the next move:
    /// `transition[last decoded state] · emission`.
    /// `None` during cold start.
    pub fn forecast(&self) -> Option<[Probability; MOVES]> {
        let path = self.decode()?;
        let moves = self.params.project(path.last());
        log::debug!("decoded {} -> forecast {:.3?}", path, moves);
        Some(moves)
    }

    /// Viterbi path over the full history. `None` during cold start.
    pub fn decode(&self) -> Option<Path> {
        match self.mode() {
            Mode::ColdStart => None,
            Mode::Decoding => Path::decode(&self.params, &OneHot::encode(&self.history)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.history.len() < MIN_DECODE_HISTORY {
            true => Mode::ColdStart,
            false => Mode::Decoding,
        }
    }
    pub fn history(&self) -> &[Code] {
        &self.history
    }
    pub fn len(&self) -> usize {
        self.history.len()
    }
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }
}

impl Default for IntentPredictor {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}
