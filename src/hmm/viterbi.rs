use super::*;
use crate::*;

/// Most probable hidden-state sequence for an observation sequence,
/// with its joint log-probability `ln P(states, observations)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    states: Vec<State>,
    score: LogProbability,
}

impl Path {
    /// Max-product dynamic programming over the 3-state trellis, in log space.
    ///
    /// Forward pass keeps, per state, the best score of any path ending there
    /// plus a backpointer to its predecessor; backward pass follows the
    /// pointers from the best final state. Ties resolve to the lowest state.
    /// Returns `None` for an empty observation sequence.
    pub fn decode(params: &Parameters, observations: &[OneHot]) -> Option<Self> {
        let (first, rest) = observations.split_first()?;
        let transition = params.transition().map(|row| row.map(Probability::ln));
        let emission = params.emission();
        let mut delta: [LogProbability; STATES] = std::array::from_fn(|s| {
            params.initial()[s].ln() + first.log_likelihood(&emission[s])
        });
        let mut backpointers = Vec::<[State; STATES]>::with_capacity(rest.len());
        for observation in rest {
            let mut next = [LogProbability::NEG_INFINITY; STATES];
            let mut back = [0; STATES];
            for j in 0..STATES {
                let (i, best) = argmax((0..STATES).map(|i| delta[i] + transition[i][j]));
                next[j] = best + observation.log_likelihood(&emission[j]);
                back[j] = i;
            }
            delta = next;
            backpointers.push(back);
        }
        let (last, score) = argmax(delta.iter().copied());
        let mut states = Vec::with_capacity(observations.len());
        states.push(last);
        for back in backpointers.iter().rev() {
            let head = states[states.len() - 1];
            states.push(back[head]);
        }
        states.reverse();
        Some(Self { states, score })
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }
    /// Hidden state assigned to the most recent observation.
    pub fn last(&self) -> State {
        self.states[self.states.len() - 1]
    }
    pub fn score(&self) -> LogProbability {
        self.score
    }
    pub fn len(&self) -> usize {
        self.states.len()
    }
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let states = self
            .states
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("");
        write!(f, "{} (ln p = {:.4})", states, self.score)
    }
}
