use crate::*;

/// One of the three rock-paper-scissors moves.
///
/// The discriminant is the move's dense code. Each move is beaten by the
/// move whose code is one higher (mod 3): Paper beats Rock, Scissors beats
/// Paper, Rock beats Scissors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// All three moves in code order.
    pub const fn all() -> [Move; MOVES] {
        [Move::Rock, Move::Paper, Move::Scissors]
    }
    /// Parse a symbol into its code.
    pub fn encode(symbol: &str) -> Result<Code, Error> {
        Self::try_from(symbol).map(Code::from)
    }
    /// Recover the move for a code.
    pub fn decode(code: Code) -> Result<Self, Error> {
        Self::try_from(code)
    }
    /// The code of the move that beats `code`.
    pub fn counter_of(code: Code) -> Result<Code, Error> {
        Self::try_from(code).map(|m| Code::from(m.counter()))
    }
    /// The move that beats this one.
    pub fn counter(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    /// True if this move defeats `other`.
    pub fn beats(&self, other: &Self) -> bool {
        *self == other.counter()
    }
    /// Single-letter label used at the prompt.
    pub fn letter(&self) -> char {
        match self {
            Self::Rock => 'R',
            Self::Paper => 'P',
            Self::Scissors => 'S',
        }
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Self::all()[rand::random_range(0..MOVES)]
    }
}

/// usize isomorphism
impl From<Move> for Code {
    fn from(m: Move) -> Code {
        m as Code
    }
}
impl TryFrom<Code> for Move {
    type Error = Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Rock),
            1 => Ok(Self::Paper),
            2 => Ok(Self::Scissors),
            _ => Err(Error::InvalidCode(code)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Move {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            _ => Err(Error::InvalidMove(s.to_string())),
        }
    }
}
impl std::str::FromStr for Move {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Paper => write!(f, "Paper"),
            Self::Scissors => write!(f, "Scissors"),
        }
    }
}
