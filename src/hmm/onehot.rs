use crate::*;

/// Indicator vector for a single observed move: exactly one 1, at the code.
///
/// This is the observation format the decoder consumes. Scoring it against an
/// emission row is the multinomial log-likelihood with one trial, which for an
/// indicator collapses to the log-probability of the observed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneHot([u8; MOVES]);

impl OneHot {
    /// Encode a full history, one row per observation.
    pub fn encode(history: &[Code]) -> Vec<Self> {
        history.iter().copied().map(Self::from).collect()
    }
    /// Position of the hot entry.
    pub fn code(&self) -> Code {
        self.0.iter().position(|&x| x == 1).unwrap_or_default()
    }
    /// `Σ x_k · ln(p_k)` with `0 · ln(0) = 0`, so cold entries never
    /// contribute, even where the emission probability is zero.
    pub fn log_likelihood(&self, emission: &[Probability; MOVES]) -> LogProbability {
        self.0
            .iter()
            .zip(emission.iter())
            .filter(|(x, _)| **x > 0)
            .map(|(x, p)| *x as LogProbability * p.ln())
            .sum()
    }
}

impl From<Code> for OneHot {
    fn from(code: Code) -> Self {
        assert!(code < MOVES, "{}", Error::InvalidCode(code));
        let mut row = [0; MOVES];
        row[code] = 1;
        Self(row)
    }
}

impl From<Move> for OneHot {
    fn from(m: Move) -> Self {
        Self::from(Code::from(m))
    }
}

impl AsRef<[u8; MOVES]> for OneHot {
    fn as_ref(&self) -> &[u8; MOVES] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_hot() {
        for rows in OneHot::encode(&[0, 2, 1, 1]) {
            assert_eq!(rows.as_ref().iter().map(|&x| x as usize).sum::<usize>(), 1);
        }
        assert_eq!(OneHot::from(Move::Scissors).as_ref(), &[0, 0, 1]);
    }

    #[test]
    fn preserves_order() {
        let history = [2, 0, 1, 0];
        let codes = OneHot::encode(&history).iter().map(OneHot::code).collect::<Vec<_>>();
        assert_eq!(codes, history);
    }

    #[test]
    #[should_panic(expected = "invalid move code: 3")]
    fn out_of_range_code_is_fatal() {
        OneHot::from(3usize);
    }

    #[test]
    fn likelihood_picks_observed_entry() {
        let row = [0.7, 0.2, 0.1];
        assert!((OneHot::from(1usize).log_likelihood(&row) - 0.2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn zero_emission_is_not_nan() {
        let row = [0.0, 1.0, 0.0];
        assert_eq!(OneHot::from(1usize).log_likelihood(&row), 0.);
        assert_eq!(OneHot::from(0usize).log_likelihood(&row), LogProbability::NEG_INFINITY);
    }
}
