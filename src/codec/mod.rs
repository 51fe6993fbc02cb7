//! Move codec: symbolic moves, their dense codes, and who beats whom.
//!
//! - [`Move`] maps "Rock"/"Paper"/"Scissors" to codes 0/1/2 and back
//! - [`Outcome`] judges a round from the bot's side of the table
mod moves;
mod outcome;

pub use moves::*;
pub use outcome::*;
