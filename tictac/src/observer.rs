
use super::round::{RoundReport, Snapshot};

///
/// The display side of the engine. The engine calls `state_changed` after every 
/// mutation (round started, move applied, clock ticked) and `round_ended` once per 
/// finished round, before the next round is started.
///
/// Both calls are plain notifications; nothing blocks waiting for the display.
///
pub trait RoundObserver 
{
    fn state_changed (& mut self, _snapshot: & Snapshot) {}

    fn round_ended (& mut self, _report: & RoundReport) {}
}

///
/// An observer that ignores everything, for hosts that poll the engine instead.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl RoundObserver for NullObserver {}

///
/// An observer that keeps every notification it receives, oldest first.
///
#[derive(Clone, Debug, Default)]
pub struct Recorder 
{
    snapshots: Vec<Snapshot>,
    reports: Vec<RoundReport>
}

impl RoundObserver for Recorder 
{
    fn state_changed (& mut self, snapshot: & Snapshot)
    {
        self.snapshots.push(snapshot.clone());
    }

    fn round_ended (& mut self, report: & RoundReport)
    {
        self.reports.push(report.clone());
    }
}

impl Recorder 
{
    pub fn last_snapshot (& self) -> Option<& Snapshot>
    {
        self.snapshots.last()
    }

    pub fn reports (& self) -> & [RoundReport]
    {
        & self.reports
    }

    pub fn snapshots (& self) -> & [Snapshot]
    {
        & self.snapshots
    }
}
