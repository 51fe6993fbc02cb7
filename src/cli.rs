//! Interactive terminal game.
//!
//! Reads R/P/S/Q at a prompt, answers with the bot's move, and prints the
//! outcome. All game logic lives in [`Session`]; this is prompt plumbing.
use crate::*;
use clap::Parser;
use colored::*;
use dialoguer::Input;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed for the opening guesses, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
    /// JSON file with `initial`, `transition` and `emission` distributions
    #[arg(long)]
    pub params: Option<PathBuf>,
    /// Log decoding details to the terminal
    #[arg(short, long)]
    pub verbose: bool,
    /// Also write debug logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// A line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Quit,
}

impl TryFrom<&str> for Command {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Move::try_from(s).map(Self::Play),
        }
    }
}

pub struct CLI(Session);

impl TryFrom<&Args> for CLI {
    type Error = anyhow::Error;
    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let params = match args.params {
            Some(ref path) => Parameters::from_file(path)?,
            None => Parameters::default(),
        };
        let predictor = match args.seed {
            Some(seed) => IntentPredictor::seeded(params, seed),
            None => IntentPredictor::new(params),
        };
        Ok(Self(Session::from(predictor)))
    }
}

impl CLI {
    pub fn run(mut self) -> anyhow::Result<()> {
        log::info!("entering game");
        println!("Let's play Rock-Paper-Scissors!");
        println!("Enter your move: R (rock), P (paper), S (scissors), or Q to quit.");
        while let Command::Play(human) = Self::prompt()? {
            let round = self.0.play(human);
            println!("Bot plays: {}", round.bot);
            println!("{}", Self::paint(round.outcome));
        }
        println!("{}", self.0.scoreboard());
        if let Some(rate) = self.0.scoreboard().win_rate() {
            log::info!("bot win rate {:.1}%", 100. * rate);
        }
        println!("Thanks for playing!");
        Ok(())
    }
    fn prompt() -> anyhow::Result<Command> {
        let line = Input::<String>::new()
            .with_prompt(Self::label())
            .validate_with(|i: &String| -> Result<(), String> {
                Command::try_from(i.as_str())
                    .map(|_| ())
                    .map_err(|_| String::from("Please enter R, P, S, or Q"))
            })
            .report(false)
            .interact_text()?;
        Ok(Command::try_from(line.as_str())?)
    }
    /// Prompt text listing the accepted letters, e.g. "Your move [R/P/S/Q]".
    fn label() -> String {
        let letters = Move::all()
            .iter()
            .map(|m| m.letter().to_string())
            .chain(std::iter::once(String::from("Q")))
            .collect::<Vec<_>>()
            .join("/");
        format!("Your move [{}]", letters)
    }
    fn paint(outcome: Outcome) -> ColoredString {
        let text = outcome.to_string();
        match outcome {
            Outcome::Win => text.red(),
            Outcome::Loss => text.green(),
            Outcome::Tie => text.yellow(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::try_from("q"), Ok(Command::Quit));
        assert_eq!(Command::try_from(" QUIT "), Ok(Command::Quit));
        assert_eq!(Command::try_from("r"), Ok(Command::Play(Move::Rock)));
        assert_eq!(Command::try_from("Scissors"), Ok(Command::Play(Move::Scissors)));
    }

    #[test]
    fn prompt_lists_every_letter() {
        assert_eq!(CLI::label(), "Your move [R/P/S/Q]");
        for m in Move::all() {
            assert_eq!(Command::try_from(m.letter().to_string().as_str()), Ok(Command::Play(m)));
        }
    }

    #[test]
    fn invalid_input_is_recoverable() {
        assert!(matches!(Command::try_from("x"), Err(Error::InvalidMove(_))));
    }

    #[test]
    fn args_build_a_seeded_game() {
        let args = Args::try_parse_from(["roshambo", "--seed", "9"]).unwrap();
        assert_eq!(args.seed, Some(9));
        let cli = CLI::try_from(&args).unwrap();
        assert_eq!(cli.0.rounds(), 0);
    }

    #[test]
    fn missing_params_file_fails() {
        let args = Args::try_parse_from(["roshambo", "--params", "/nonexistent/params.json"]).unwrap();
        assert!(CLI::try_from(&args).is_err());
    }
}
