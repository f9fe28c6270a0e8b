//! Errors raised by the outer surfaces of the game.
//!
//! Gameplay itself never fails: stray clicks, off-board cells and blocked
//! destinations are filtered out or ignored. `GameError` only covers input
//! that arrives from outside the state machine, such as board layouts typed
//! into the front-end, configuration options and malformed commands.

use thiserror::Error;

use crate::game_state::chess_types::Position;

/// Unified error type for layout parsing, configuration and front-end
/// commands.
#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    /// The layout did not contain exactly eight `/`-separated rows.
    ///
    /// Payload: number of rows found.
    #[error("layout must contain 8 rows, found {0}")]
    WrongRowCount(usize),

    /// A row described more or fewer than eight cells.
    ///
    /// Payload: (rank, number of cells described).
    #[error("layout row for rank {0} describes {1} cells, expected 8")]
    WrongRowWidth(i8, usize),

    /// Unknown character in a layout row.
    #[error("invalid layout token '{0}'")]
    InvalidLayoutToken(char),

    /// Two pieces were placed on the same cell.
    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    /// A piece was placed outside the 8x8 board.
    #[error("cell {0} is outside the board")]
    OffBoard(Position),

    #[error("unknown player '{0}'")]
    UnknownPlayer(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// Option value failed to parse or is out of range.
    ///
    /// Payload: (option name, offending value).
    #[error("invalid value '{1}' for option {0}")]
    InvalidOptionValue(String, String),

    #[error("malformed command: {0}")]
    MalformedCommand(String),

    /// Writing a command's report failed.
    #[error("output failed: {0}")]
    Output(String),
}
