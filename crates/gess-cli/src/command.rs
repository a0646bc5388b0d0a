//! Parsing of interactive commands.

use thiserror::Error;

/// Errors produced while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' expects {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),
}

/// Commands accepted on the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the group centered on `from` to `to`.
    Move { from: String, to: String },
    /// The side to move resigns.
    Resign,
    /// Print the game state label.
    State,
    /// Print the side to move.
    Turn,
    /// Print the board.
    Board,
    /// Print the position as JSON.
    Json,
    /// List the ring centers of both players.
    Rings,
    /// Start a new game from a board diagram.
    Load(String),
    /// Print the current position as a diagram.
    Diagram,
    /// Start a new game from the configured start position.
    New,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    /// Parse one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = match parts.next() {
            Some(cmd) => cmd,
            None => return Ok(Command::Empty),
        };
        let args: Vec<&str> = parts.collect();

        match cmd {
            "move" => match args.as_slice() {
                [from, to] => Ok(Self::mv(from, to)),
                [single] => match single.split_once('-') {
                    Some((from, to)) => Ok(Self::mv(from, to)),
                    None => Err(CommandError::MissingArgument("move", "<from> <to>")),
                },
                _ => Err(CommandError::MissingArgument("move", "<from> <to>")),
            },
            "load" => {
                if args.is_empty() {
                    Err(CommandError::MissingArgument("load", "a board diagram"))
                } else {
                    Ok(Command::Load(args.join(" ")))
                }
            }
            "resign" => Self::bare(Command::Resign, "resign", &args),
            "state" => Self::bare(Command::State, "state", &args),
            "turn" => Self::bare(Command::Turn, "turn", &args),
            "board" => Self::bare(Command::Board, "board", &args),
            "json" => Self::bare(Command::Json, "json", &args),
            "rings" => Self::bare(Command::Rings, "rings", &args),
            "diagram" => Self::bare(Command::Diagram, "diagram", &args),
            "new" => Self::bare(Command::New, "new", &args),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            // bare "c2 c3" or "c2-c3"
            from if args.len() == 1 && starts_with_file(from) => Ok(Self::mv(from, args[0])),
            single if args.is_empty() && starts_with_file(single) => match single.split_once('-') {
                Some((from, to)) => Ok(Self::mv(from, to)),
                None => Err(CommandError::Unknown(input.to_string())),
            },
            _ => Err(CommandError::Unknown(input.to_string())),
        }
    }

    fn mv(from: &str, to: &str) -> Self {
        Command::Move {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn bare(cmd: Command, name: &'static str, args: &[&str]) -> Result<Self, CommandError> {
        if args.is_empty() {
            Ok(cmd)
        } else {
            Err(CommandError::UnexpectedArgument(name))
        }
    }
}

fn starts_with_file(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && word.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
}

/// Text printed by the `help` command.
pub const HELP: &str = "\
commands:
  move <from> <to>   move the group centered on <from> (also '<from> <to>' or '<from>-<to>')
  resign             the side to move resigns
  state              print UNFINISHED, WHITE_WON or BLACK_WON
  turn               print the side to move
  board              print the board
  json               print the position as JSON
  rings              list ring centers
  load <diagram>     start a game from a board diagram
  diagram            print the current board diagram
  new                start a new game
  quit               leave";

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: &str, to: &str) -> Command {
        Command::Move {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn parse_move_forms() {
        assert_eq!(Command::parse("move c2 c3").unwrap(), mv("c2", "c3"));
        assert_eq!(Command::parse("move c2-c3").unwrap(), mv("c2", "c3"));
        assert_eq!(Command::parse("c2 c3").unwrap(), mv("c2", "c3"));
        assert_eq!(Command::parse("  l18-l15\n").unwrap(), mv("l18", "l15"));
    }

    #[test]
    fn move_keeps_raw_squares() {
        // square validation happens when the move is played
        assert_eq!(Command::parse("move z9 c3").unwrap(), mv("z9", "c3"));
    }

    #[test]
    fn parse_move_missing_destination() {
        assert_eq!(
            Command::parse("move c2"),
            Err(CommandError::MissingArgument("move", "<from> <to>"))
        );
        assert!(Command::parse("move").is_err());
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(Command::parse("resign").unwrap(), Command::Resign);
        assert_eq!(Command::parse("state").unwrap(), Command::State);
        assert_eq!(Command::parse("turn").unwrap(), Command::Turn);
        assert_eq!(Command::parse("board").unwrap(), Command::Board);
        assert_eq!(Command::parse("json").unwrap(), Command::Json);
        assert_eq!(Command::parse("rings").unwrap(), Command::Rings);
        assert_eq!(Command::parse("diagram").unwrap(), Command::Diagram);
        assert_eq!(Command::parse("new").unwrap(), Command::New);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_empty_line() {
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
        assert_eq!(Command::parse("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn parse_load_joins_diagram() {
        assert_eq!(
            Command::parse("load abc/def w").unwrap(),
            Command::Load("abc/def w".to_string())
        );
        assert!(Command::parse("load").is_err());
    }

    #[test]
    fn reject_arguments_on_bare_commands() {
        assert_eq!(
            Command::parse("resign now"),
            Err(CommandError::UnexpectedArgument("resign"))
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            Command::parse("castle kingside"),
            Err(CommandError::Unknown("castle kingside".to_string()))
        );
        assert!(Command::parse("c2").is_err());
    }
}
