
use super::player::PlayerId;

use utils::notate::Notate;
use utils::*;

///
/// A single square of the grid: either empty or claimed by exactly one player.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell 
{
    #[default]
    Empty,
    Taken(PlayerId)
}

impl std::fmt::Display for Cell 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self 
        {
            Cell::Empty                      => write!(f, "⬛"),
            Cell::Taken(id) if id.get() == 1 => write!(f, "⭕"),
            Cell::Taken(id) if id.get() == 2 => write!(f, "❌"),
            Cell::Taken(id)                  => write!(f, "{:^2}", id)
        }
    }
}

impl notate::Notate for Cell 
{
    fn notate (& self) -> String 
    {
        match self 
        {
            Cell::Empty     => "-".to_string(),
            Cell::Taken(id) => id.notate()
        }
    }

    fn parse (s: & str) -> Result<Cell>
    {
        match s.trim()
        {
            "-" | "_" | "." => Ok(Cell::Empty),
            token           => Ok(Cell::Taken(PlayerId::parse(token).with_context(|| format!("Invalid notation '{}' for cell.", s))?))
        }
    }
}

impl Cell 
{
    pub fn is_empty (& self) -> bool 
    {
        * self == Cell::Empty
    }

    ///
    /// Returns the player holding this cell, if any.
    ///
    pub fn owner (& self) -> Option<PlayerId>
    {
        match self 
        {
            Cell::Empty     => None,
            Cell::Taken(id) => Some(* id)
        }
    }
}
