//! One game against one human: rounds, scoring, and the predictor behind them.
mod round;
mod scoreboard;
mod session;

pub use round::*;
pub use scoreboard::*;
pub use session::*;
