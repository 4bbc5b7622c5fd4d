
use super::countdown::{format_clock, Countdown};
use super::grid::Grid;
use super::outcome::Outcome;
use super::player::{PlayerId, Scoreboard};

use utils::*;

///
/// The state of one round: the grid, whose turn it is, and the clock.
///
/// A round state is created whole when a round starts and replaced whole when the 
/// next one does; scores live outside it, on the engine.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoundState 
{
    number: u64,
    grid: Grid,
    active_seat: usize,
    countdown: Countdown
}

impl RoundState 
{
    ///
    /// The state before any round has started.
    ///
    pub(crate) fn idle () -> RoundState 
    {
        RoundState { number: 0, grid: Grid::empty(), active_seat: 0, countdown: Countdown::idle() }
    }

    ///
    /// A fresh round: empty grid, first seat to move, the given countdown running.
    ///
    pub(crate) fn fresh (number: u64, countdown: Countdown) -> RoundState 
    {
        RoundState { number, grid: Grid::empty(), active_seat: 0, countdown }
    }

    pub fn active_seat (& self) -> usize 
    {
        self.active_seat
    }

    pub fn countdown (& self) -> & Countdown 
    {
        & self.countdown
    }

    pub(crate) fn countdown_mut (& mut self) -> & mut Countdown 
    {
        & mut self.countdown
    }

    pub fn grid (& self) -> & Grid 
    {
        & self.grid
    }

    pub(crate) fn grid_mut (& mut self) -> & mut Grid 
    {
        & mut self.grid
    }

    ///
    /// The one-based round number within the session; zero before the first round.
    ///
    pub fn number (& self) -> u64 
    {
        self.number
    }

    pub fn time_remaining (& self) -> u32 
    {
        self.countdown.remaining()
    }

    ///
    /// Passes the turn to the other seat.
    ///
    pub(crate) fn toggle_turn (& mut self)
    {
        self.active_seat = 1 - self.active_seat;
    }
}

///
/// Everything a display needs to draw the session at one instant.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot 
{
    pub round: u64,
    pub grid: Grid,
    pub active_player: PlayerId,
    pub time_remaining: u32,
    pub scores: Scoreboard,
    pub in_progress: bool
}

impl std::fmt::Display for Snapshot 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        writeln!(
            f, "Round {} | Player {} to move | {} | {}",
            self.round, self.active_player, format_clock(self.time_remaining), self.scores
        )?;
        write!(f, "{}", self.grid)
    }
}

///
/// The notice published when a round ends: how it ended and the scores afterwards.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport 
{
    pub round: u64,
    pub outcome: Outcome,
    pub scores: Scoreboard
}

impl std::fmt::Display for RoundReport 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "{} - {}", self.outcome, self.scores)
    }
}
