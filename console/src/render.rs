
use std::io::Write;

use tictac::{RoundObserver, RoundReport, Snapshot};
use tictac::countdown::format_clock;

use utils::log;

///
/// Draws the session as text. The board is redrawn whenever the grid, the turn or the 
/// round changes; pure clock changes only print the time every half minute and during 
/// the last ten seconds.
///
pub struct TextDisplay<W>
    where W: Write
{
    out: W,
    last: Option<Snapshot>
}

impl<W> RoundObserver for TextDisplay<W>
    where W: Write
{
    fn state_changed (& mut self, snapshot: & Snapshot)
    {
        let redraw = match & self.last 
        {
            Some(last) => last.round != snapshot.round || last.grid != snapshot.grid || last.active_player != snapshot.active_player,
            None       => true
        };

        let seconds = snapshot.time_remaining;
        if redraw 
        {
            self.emit(format_args!("\n{}", snapshot));
        }
        else if seconds % 30 == 0 || seconds <= 10 
        {
            self.emit(format_args!("{} left", format_clock(seconds)));
        }

        self.last = Some(snapshot.clone());
    }

    fn round_ended (& mut self, report: & RoundReport)
    {
        self.emit(format_args!("*** Round {} - {} ***", report.round, report));
    }
}

impl<W> TextDisplay<W>
    where W: Write
{
    pub fn new (out: W) -> TextDisplay<W>
    {
        TextDisplay { out, last: None }
    }

    ///
    /// Writes one line of output; a broken output stream is logged, not fatal.
    ///
    pub fn emit (& mut self, line: std::fmt::Arguments<'_>)
    {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush())
        {
            log::error!("Failed to write to the console: {}", e);
        }
    }

    pub fn output (& self) -> & W 
    {
        & self.out
    }
}
