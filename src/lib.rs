//! Rock-paper-scissors opponent modeling.
//!
//! The human's hidden "intent" is modeled as a 3-state Markov chain whose
//! states noisily emit the moves we observe. Each round we Viterbi-decode the
//! full move history under frozen parameters, project the last decoded state
//! one step forward, and play the counter to the most likely next move.
pub mod codec;
#[cfg(feature = "cli")]
pub mod cli;
mod error;
pub mod game;
pub mod hmm;

pub use codec::*;
pub use error::*;
pub use game::*;
pub use hmm::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Dense integer representation of a move, always in `0..MOVES`.
pub type Code = usize;
/// Index of a hidden intent state, always in `0..STATES`.
pub type State = usize;
/// Probabilities in the model parameters and forecasts.
pub type Probability = f64;
/// Natural-log probabilities accumulated along the Viterbi trellis.
pub type LogProbability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MODEL SHAPE
// ============================================================================
/// Number of distinct moves (observable symbols).
pub const MOVES: usize = 3;
/// Number of hidden intent states.
pub const STATES: usize = 3;
/// Observations required before decoding replaces the uniform cold-start guess.
pub const MIN_DECODE_HISTORY: usize = 2;
/// Allowed deviation from 1.0 when checking that a distribution sums to one.
pub const STOCHASTIC_TOLERANCE: Probability = 1e-6;

// ============================================================================
// DEFAULT PARAMETERS
// Sticky transitions and self-favoring emissions: a player who just showed
// a preference is assumed to keep it.
// ============================================================================
/// Belief over the hidden state at the first observation.
pub const DEFAULT_INITIAL: [Probability; STATES] = [1. / 3., 1. / 3., 1. / 3.];
/// P(next state | current state).
pub const DEFAULT_TRANSITION: [[Probability; STATES]; STATES] = [
    [0.8, 0.1, 0.1],
    [0.1, 0.8, 0.1],
    [0.1, 0.1, 0.8],
];
/// P(observed move | state).
pub const DEFAULT_EMISSION: [[Probability; MOVES]; STATES] = [
    [0.70, 0.15, 0.15],
    [0.15, 0.70, 0.15],
    [0.15, 0.15, 0.70],
];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging, plus an optional DEBUG-level log file.
/// Terminal level is INFO unless `verbose` is set.
#[cfg(feature = "cli")]
pub fn log(verbose: bool, file: Option<&std::path::Path>) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    let mut loggers = Vec::<Box<dyn simplelog::SharedLogger>>::new();
    loggers.push(simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ));
    if let Some(path) = file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}
