
use super::player::PlayerId;
use super::point::Point;

///
/// The ways an operation on a round or a player can be refused.
///
/// Only `InvalidId` and `DuplicateId` are construction-time failures; the rest are 
/// recoverable rejections of a single move, after which the same player keeps the turn.
///
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError 
{
    #[error("Player id {id} is invalid; ids must be strictly positive.")]
    InvalidId { id: i64 },

    #[error("Player id {id} is used by both players.")]
    DuplicateId { id: PlayerId },

    #[error("Cell {point} is already taken by player {owner}.")]
    CellOccupied { point: Point, owner: PlayerId },

    #[error("Cell ({column},{row}) is outside the grid.")]
    OutOfRange { column: i32, row: i32 },

    #[error("No round is in progress.")]
    NotStarted
}
