
use super::round::RoundReport;

use utils::*;

///
/// Identifies one armed countdown. Every round arms a countdown with a fresh, strictly 
/// larger id, so a tick carrying an older id can be recognized as stale.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountdownId(u64);

impl std::fmt::Display for CountdownId 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "#{}", self.0)
    }
}

impl CountdownId 
{
    pub fn get (& self) -> u64 
    {
        self.0
    }

    ///
    /// Returns the id following this one.
    ///
    pub fn next (& self) -> CountdownId 
    {
        CountdownId(self.0 + 1)
    }
}

///
/// The per-round clock: whole seconds left, and whether ticks are still accepted.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Countdown 
{
    id: CountdownId,
    remaining: u32,
    armed: bool
}

///
/// What a single accepted or refused tick did to a countdown.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step 
{
    Stale,
    Running(u32),
    Expired
}

///
/// What a timer tick did to the engine.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick 
{
    ///
    /// The tick was for a cancelled countdown, or no round was running; nothing changed.
    ///
    Stale,

    ///
    /// One second elapsed; this many remain.
    ///
    Running(u32),

    ///
    /// The clock ran out. The round ended without a winner and a new one has started.
    ///
    Expired(RoundReport)
}

impl Countdown 
{
    ///
    /// Returns a countdown running from the given number of seconds.
    ///
    pub fn armed (id: CountdownId, seconds: u32) -> Countdown 
    {
        Countdown { id, remaining: seconds, armed: true }
    }

    ///
    /// Stops accepting ticks. Cancelling twice is harmless.
    ///
    pub fn cancel (& mut self)
    {
        self.armed = false;
    }

    ///
    /// Renders the remaining time as `MM:SS`.
    ///
    pub fn clock (& self) -> String 
    {
        format_clock(self.remaining)
    }

    pub fn id (& self) -> CountdownId 
    {
        self.id
    }

    ///
    /// Returns a countdown that was never armed.
    ///
    pub fn idle () -> Countdown 
    {
        Countdown { id: CountdownId::default(), remaining: 0, armed: false }
    }

    pub fn is_armed (& self) -> bool 
    {
        self.armed
    }

    pub fn remaining (& self) -> u32 
    {
        self.remaining
    }

    ///
    /// Consumes one second if the tick belongs to this countdown. Reaching zero disarms it.
    ///
    pub(crate) fn step (& mut self, id: CountdownId) -> Step 
    {
        if ! self.armed || id != self.id 
        {
            return Step::Stale;
        }

        self.remaining = self.remaining.saturating_sub(1);
        match self.remaining 
        {
            0 => { self.armed = false; Step::Expired },
            n => Step::Running(n)
        }
    }
}

///
/// Formats whole seconds as zero-padded minutes and seconds.
///
pub fn format_clock (seconds: u32) -> String 
{
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
