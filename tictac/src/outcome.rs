
use super::player::PlayerId;

use utils::*;

///
/// An enum that represents how a round finished.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome 
{
    Won(PlayerId),
    Draw,
    TimedOut
}

impl std::fmt::Display for Outcome 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        match self 
        {
            Outcome::Won(id)  => write!(f, "Winner: Player {}", id),
            Outcome::Draw     => write!(f, "Draw"),
            Outcome::TimedOut => write!(f, "Time is up")
        }
    }
}

impl Outcome 
{
    ///
    /// Returns the player credited with the round, if anyone is.
    ///
    pub fn winner (& self) -> Option<PlayerId>
    {
        match self 
        {
            Outcome::Won(id) => Some(* id),
            _                => None 
        }
    }
}
