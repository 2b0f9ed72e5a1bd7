//! Text commands typed at the prompt.

use core::str::FromStr;

use parlor_core::Coord2;
use parlor_core::blackjack::ChipColor;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type `help` for a list")]
    Unknown(String),
    #[error("Missing {0}")]
    MissingArgument(&'static str),
    #[error("Not a number: {0:?}")]
    BadNumber(String),
    #[error("Unknown chip color {0:?}, pick white, red, green or black")]
    UnknownColor(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlackjackCommand {
    Bet(u64),
    Max,
    Deal,
    Hit,
    Stand,
    Buy(ChipColor),
    Status,
    Help,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MinesweeperCommand {
    Reveal(Coord2),
    Flag(Coord2),
    New,
    Help,
    Quit,
}

fn number<T: FromStr>(arg: Option<&str>, what: &'static str) -> Result<T, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(what))?;
    arg.parse().map_err(|_| CommandError::BadNumber(arg.to_owned()))
}

fn coords<'a>(mut args: impl Iterator<Item = &'a str>) -> Result<Coord2, CommandError> {
    Ok((number(args.next(), "row")?, number(args.next(), "column")?))
}

impl FromStr for BlackjackCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        match verb.as_str() {
            "bet" | "b" => Ok(Self::Bet(number(words.next(), "bet amount")?)),
            "max" => Ok(Self::Max),
            "deal" | "d" => Ok(Self::Deal),
            "hit" | "h" => Ok(Self::Hit),
            "stand" | "s" => Ok(Self::Stand),
            "buy" => {
                let color = words.next().ok_or(CommandError::MissingArgument("chip color"))?;
                ChipColor::from_name(color)
                    .map(Self::Buy)
                    .ok_or_else(|| CommandError::UnknownColor(color.to_owned()))
            }
            "status" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(verb)),
        }
    }
}

impl FromStr for MinesweeperCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        match verb.as_str() {
            "r" | "reveal" => Ok(Self::Reveal(coords(words)?)),
            "f" | "flag" => Ok(Self::Flag(coords(words)?)),
            "new" | "n" => Ok(Self::New),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(verb)),
        }
    }
}

pub const BLACKJACK_HELP: &str = "\
commands:
  bet N       stake N chips on the next round
  max         stake every chip
  deal        deal a round with the current bet
  hit         take a card
  stand       let the dealer play
  buy COLOR   buy a chip (white 1, red 5, green 25, black 100)
  status      show the table
  quit        save and leave";

pub const MINESWEEPER_HELP: &str = "\
commands:
  r ROW COL   reveal a square
  f ROW COL   cycle flag / question mark
  new         start over
  quit        leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blackjack_commands_parse() {
        assert_eq!("bet 25".parse(), Ok(BlackjackCommand::Bet(25)));
        assert_eq!("  DEAL ".parse(), Ok(BlackjackCommand::Deal));
        assert_eq!("buy Black".parse(), Ok(BlackjackCommand::Buy(ChipColor::Black)));
        assert_eq!("q".parse(), Ok(BlackjackCommand::Quit));
    }

    #[test]
    fn blackjack_command_errors() {
        assert_eq!("".parse::<BlackjackCommand>(), Err(CommandError::Empty));
        assert_eq!(
            "bet".parse::<BlackjackCommand>(),
            Err(CommandError::MissingArgument("bet amount"))
        );
        assert_eq!(
            "bet -3".parse::<BlackjackCommand>(),
            Err(CommandError::BadNumber("-3".into()))
        );
        assert_eq!(
            "buy pink".parse::<BlackjackCommand>(),
            Err(CommandError::UnknownColor("pink".into()))
        );
        assert_eq!(
            "split".parse::<BlackjackCommand>(),
            Err(CommandError::Unknown("split".into()))
        );
    }

    #[test]
    fn minesweeper_commands_parse() {
        assert_eq!("r 8 15".parse(), Ok(MinesweeperCommand::Reveal((8, 15))));
        assert_eq!("f 0 0".parse(), Ok(MinesweeperCommand::Flag((0, 0))));
        assert_eq!("new".parse(), Ok(MinesweeperCommand::New));
        assert_eq!(
            "r 3".parse::<MinesweeperCommand>(),
            Err(CommandError::MissingArgument("column"))
        );
        assert_eq!(
            "r 300 1".parse::<MinesweeperCommand>(),
            Err(CommandError::BadNumber("300".into()))
        );
    }
}
