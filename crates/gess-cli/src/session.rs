//! Interactive play over a line-based text protocol.

use crate::command::{Command, HELP};
use crate::config::{CliConfig, ConfigError};
use crate::render::render;
use gess_core::Color;
use gess_engine::{rings, Game, GameError, Position};
use std::fmt;
use std::io::{BufRead, Write};

/// Reply to one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The command succeeded, optionally followed by extra output.
    Ok(Option<String>),
    /// Plain output for queries.
    Text(String),
    /// The move was refused by the rules.
    Illegal(String),
    /// The command could not be carried out.
    Error(String),
    /// Nothing to print.
    Silent,
    Quit,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok(None) => write!(f, "ok"),
            Response::Ok(Some(extra)) => write!(f, "ok\n{}", extra),
            Response::Text(text) => write!(f, "{}", text),
            Response::Illegal(reason) => write!(f, "illegal: {}", reason),
            Response::Error(message) => write!(f, "error: {}", message),
            Response::Silent | Response::Quit => Ok(()),
        }
    }
}

/// A game in progress plus the front-end settings.
pub struct Session {
    game: Game,
    start: Position,
    config: CliConfig,
}

impl Session {
    /// Creates a session whose games begin from the configured start position.
    pub fn new(config: CliConfig) -> Result<Self, ConfigError> {
        let start = config.start_position()?;
        Ok(Session {
            game: Game::from_position(start.clone()),
            start,
            config,
        })
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Executes one command.
    pub fn execute(&mut self, cmd: Command) -> Response {
        match cmd {
            Command::Move { from, to } => match self.game.play_notation(&from, &to) {
                Ok(_) if self.config.show_board_after_move => {
                    Response::Ok(Some(render(self.game.board(), &self.config.display)))
                }
                Ok(_) => Response::Ok(None),
                Err(GameError::Notation(e)) => Response::Error(e.to_string()),
                Err(GameError::Illegal(reason)) => Response::Illegal(reason.to_string()),
                Err(e @ GameError::GameAlreadyOver) => Response::Illegal(e.to_string()),
            },
            Command::Resign => {
                if self.game.is_game_over() {
                    Response::Error(GameError::GameAlreadyOver.to_string())
                } else {
                    self.game.resign();
                    Response::Ok(None)
                }
            }
            Command::State => Response::Text(self.game.state().to_string()),
            Command::Turn => Response::Text(self.game.side_to_move().to_string()),
            Command::Board => Response::Text(render(self.game.board(), &self.config.display)),
            Command::Json => match serde_json::to_string(self.game.position()) {
                Ok(json) => Response::Text(json),
                Err(e) => Response::Error(e.to_string()),
            },
            Command::Rings => Response::Text(
                Color::ALL
                    .iter()
                    .map(|&color| {
                        let centers: Vec<String> = rings(self.game.board(), color)
                            .into_iter()
                            .map(|sq| sq.to_string())
                            .collect();
                        format!("{}: {}", color, centers.join(" "))
                            .trim_end()
                            .to_string()
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Command::Load(diagram) => match Game::from_diagram(&diagram) {
                Ok(game) => {
                    tracing::info!(state = %game.state(), "loaded position");
                    self.game = game;
                    Response::Ok(None)
                }
                Err(e) => Response::Error(e.to_string()),
            },
            Command::Diagram => Response::Text(self.game.position().to_diagram()),
            Command::New => {
                self.game = Game::from_position(self.start.clone());
                Response::Ok(None)
            }
            Command::Help => Response::Text(HELP.to_string()),
            Command::Quit => Response::Quit,
            Command::Empty => Response::Silent,
        }
    }

    /// Reads commands from `reader` until `quit` or end of input, writing one
    /// response per command to `writer`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        mut writer: W,
    ) -> std::io::Result<()> {
        for line in reader.lines() {
            let response = match Command::parse(&line?) {
                Ok(cmd) => self.execute(cmd),
                Err(e) => Response::Error(e.to_string()),
            };
            match response {
                Response::Quit => break,
                Response::Silent => {}
                other => writeln!(writer, "{}", other)?,
            }
            writer.flush()?;
        }
        Ok(())
    }

    /// Plays `moves` in order, stopping at the first one that is refused,
    /// then writes the board and the game state.
    ///
    /// Returns the number of moves played.
    pub fn replay<W: Write>(
        &mut self,
        moves: &[String],
        mut writer: W,
    ) -> std::io::Result<usize> {
        let mut played = 0;
        for text in moves {
            let response = match Command::parse(text) {
                Ok(cmd @ Command::Move { .. }) => self.execute(cmd),
                Ok(_) => Response::Error(format!("'{}' is not a move", text)),
                Err(e) => Response::Error(e.to_string()),
            };
            if !matches!(response, Response::Ok(_)) {
                writeln!(writer, "{}: {}", text, response)?;
                break;
            }
            played += 1;
        }
        writeln!(writer, "{}", render(self.game.board(), &self.config.display))?;
        writeln!(writer, "{}", self.game.state())?;
        Ok(played)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gess_engine::GameState;

    fn session() -> Session {
        Session::new(CliConfig::default()).unwrap()
    }

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        session().run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn accepted_and_rejected_moves() {
        assert_eq!(run("c2 c3\nturn\n"), "ok\nWhite\n");
        assert_eq!(
            run("move b5 b6\n"),
            "illegal: moving north needs a stone on the north edge of the group\n"
        );
    }

    #[test]
    fn bad_square_is_an_error() {
        let out = run("move z1 c3\n");
        assert!(out.starts_with("error: "), "{}", out);
    }

    #[test]
    fn unknown_command() {
        assert_eq!(run("castle\n"), "error: unknown command 'castle'\n");
    }

    #[test]
    fn resign_and_state() {
        assert_eq!(run("state\nresign\nstate\n"), "UNFINISHED\nok\nWHITE_WON\n");
        assert_eq!(run("resign\nresign\n"), "ok\nerror: game has already ended\n");
    }

    #[test]
    fn moves_after_the_end_are_illegal() {
        let out = run("resign\nc2 c3\n");
        assert_eq!(out, "ok\nillegal: game has already ended\n");
    }

    #[test]
    fn quit_stops_reading() {
        assert_eq!(run("turn\nquit\nturn\n"), "Black\n");
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(run("\n\nturn\n"), "Black\n");
    }

    #[test]
    fn rings_at_start() {
        assert_eq!(run("rings\n"), "Black: l3\nWhite: l18\n");
    }

    #[test]
    fn diagram_round_trip_through_load() {
        let mut s = session();
        assert_eq!(
            s.execute(Command::parse("c2-c3").unwrap()),
            Response::Ok(None)
        );
        let Response::Text(diagram) = s.execute(Command::Diagram) else {
            panic!("diagram should print text");
        };
        let board = s.game().board().clone();

        s.execute(Command::New);
        assert_eq!(s.game().side_to_move(), Color::Black);
        assert_eq!(s.execute(Command::Load(diagram)), Response::Ok(None));
        assert_eq!(s.game().board(), &board);
        assert_eq!(s.game().side_to_move(), Color::White);
    }

    #[test]
    fn load_rejects_bad_diagram() {
        let mut s = session();
        let response = s.execute(Command::Load("x/y b".to_string()));
        assert!(matches!(response, Response::Error(_)));
        assert_eq!(s.game().state(), GameState::Unfinished);
    }

    #[test]
    fn json_snapshot() {
        let mut s = session();
        let Response::Text(json) = s.execute(Command::Json) else {
            panic!("json should print text");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["side_to_move"], "black");
    }

    #[test]
    fn replay_stops_at_first_refusal() {
        let moves: Vec<String> = ["c2-c3", "l18-l15", "b5-b6", "c3-c4"]
            .iter()
            .map(|m| m.to_string())
            .collect();
        let mut out = Vec::new();
        let mut s = session();
        assert_eq!(s.replay(&moves, &mut out).unwrap(), 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("b5-b6: illegal: "), "{}", text);
        assert!(text.ends_with("UNFINISHED\n"));
        assert_eq!(s.game().ply_count(), 2);
    }

    #[test]
    fn replay_to_a_win() {
        let moves: Vec<String> = [
            "c2-c3", "l18-l15", "c3-c4", "l15-l12", "c4-c5", "l12-l9", "c6-c7", "l9-l8", "l3-l6",
        ]
        .iter()
        .map(|m| m.to_string())
        .collect();
        let mut out = Vec::new();
        let mut s = session();
        assert_eq!(s.replay(&moves, &mut out).unwrap(), 9);
        assert!(String::from_utf8(out).unwrap().ends_with("BLACK_WON\n"));
    }

    #[test]
    fn board_after_move_when_configured() {
        let config = CliConfig {
            show_board_after_move: true,
            ..CliConfig::default()
        };
        let mut s = Session::new(config).unwrap();
        let response = s.execute(Command::parse("c2 c3").unwrap());
        let text = response.to_string();
        assert!(text.starts_with("ok\n"));
        assert_eq!(text.lines().count(), 22);
    }
}
