//! Command-line interface for obstacle-tictactoe.

use clap::{Parser, Subcommand};
use derive_more::{Display, Error};
use obstacle_tictactoe::Coord;
use std::path::PathBuf;

/// Obstacle Tic-Tac-Toe - drive the game engine from the terminal
#[derive(Parser, Debug)]
#[command(name = "obstacle-tictactoe")]
#[command(about = "5x5 tic-tac-toe with fixed obstacles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board configuration file (TOML). Uses the standard layout if omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the empty board and its playable cell count
    Layout,

    /// Replay a sequence of moves, X first
    Play {
        /// Moves as `row,col`, zero-based
        #[arg(required = true, value_parser = parse_coord)]
        moves: Vec<Coord>,

        /// Print the recorded events as JSON instead of the board
        #[arg(long)]
        json: bool,
    },
}

/// A move argument that is not `row,col`.
#[derive(Debug, Clone, Display, Error)]
#[display("expected `row,col`, got `{input}`")]
pub struct CoordParseError {
    /// The rejected argument.
    pub input: String,
}

/// Parses `row,col` into a coordinate.
pub fn parse_coord(input: &str) -> Result<Coord, CoordParseError> {
    let err = || CoordParseError {
        input: input.to_string(),
    };
    let (row, col) = input.split_once(',').ok_or_else(err)?;
    let row = row.trim().parse().map_err(|_| err())?;
    let col = col.trim().parse().map_err(|_| err())?;
    Ok(Coord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("2,3").unwrap(), Coord::new(2, 3));
        assert_eq!(parse_coord(" 0 , 4 ").unwrap(), Coord::new(0, 4));
        assert!(parse_coord("2").is_err());
        assert!(parse_coord("-1,0").is_err());
        assert!(parse_coord("a,b").is_err());
    }

    #[test]
    fn test_play_arguments() {
        let args = ["obstacle-tictactoe", "play", "0,0", "4,4", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Play { moves, json } => {
                assert_eq!(moves, vec![Coord::new(0, 0), Coord::new(4, 4)]);
                assert!(json);
            }
            Command::Layout => panic!("Expected play"),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_play_requires_moves() {
        assert!(Cli::try_parse_from(["obstacle-tictactoe", "play"]).is_err());
    }
}
