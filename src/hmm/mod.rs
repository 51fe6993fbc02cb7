//! Fixed-parameter hidden Markov model over the human's intent.
//!
//! Three hidden states, three observable moves. Nothing here learns: the
//! [`Parameters`] are validated once and frozen, and every prediction is a
//! fresh Viterbi decode of the full history.
//!
//! - [`Parameters`] — initial, transition and emission distributions
//! - [`OneHot`] — indicator encoding of observed moves
//! - [`Path`] — Viterbi decoder and its result
//! - [`IntentPredictor`] — history plus the cold-start / decoding policy
mod onehot;
mod parameters;
mod predictor;
mod viterbi;

pub use onehot::*;
pub use parameters::*;
pub use predictor::*;
pub use viterbi::*;

/// Index and value of the largest element. Ties go to the lowest index.
pub(crate) fn argmax(values: impl Iterator<Item = f64>) -> (usize, f64) {
    values
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(i, best), (j, x)| match x > best {
            true => (j, x),
            false => (i, best),
        })
}
