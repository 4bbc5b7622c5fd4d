
use super::cell::Cell;
use super::config::Config;
use super::countdown::{Countdown, CountdownId, Step, Tick};
use super::error::GameError;
use super::grid::Grid;
use super::observer::{NullObserver, RoundObserver};
use super::outcome::Outcome;
use super::player::{PlayerId, PlayerRecord, Scoreboard};
use super::point::Point;
use super::round::{RoundReport, RoundState, Snapshot};

use utils::log;
use utils::notate;
use utils::notate::Notate;

///
/// What happened to the turn after an accepted move.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn 
{
    ///
    /// The round goes on; this player moves next.
    ///
    Next(PlayerId),

    ///
    /// The move finished the round; a new round has already started.
    ///
    RoundOver(RoundReport)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase 
{
    Idle,
    Active
}

///
/// Runs a session of rounds between two local players.
///
/// The engine owns the scores and the current round outright. It reacts to two kinds 
/// of stimulus, a chosen cell and a clock tick, each handled to completion before the 
/// call returns, and reports every change to its observer.
///
/// Lifecycle:
/// - a new engine is idle until `start_round` is called;
/// - moves and ticks then drive the round until a line is completed, the grid fills, 
///     or the clock runs out;
/// - every finished round is reported and immediately replaced by a fresh one, so 
///     after the first start the engine never idles again.
///
#[derive(Debug)]
pub struct RoundEngine<O = NullObserver>
    where O: RoundObserver
{
    config: Config,
    scores: Scoreboard,
    state: RoundState,
    phase: Phase,
    last_countdown: CountdownId,
    observer: O
}

impl Default for RoundEngine<NullObserver>
{
    fn default () -> RoundEngine<NullObserver>
    {
        RoundEngine::new()
    }
}

impl RoundEngine<NullObserver>
{
    ///
    /// Returns an idle engine for players 1 and 2 with the default round length.
    ///
    pub fn new () -> RoundEngine<NullObserver>
    {
        RoundEngine::with_observer(Config::default(), NullObserver)
    }
}

impl<O> RoundEngine<O>
    where O: RoundObserver
{
    ///
    /// Returns an idle engine for players 1 and 2 reporting to the given observer.
    ///
    pub fn with_observer (config: Config, observer: O) -> RoundEngine<O>
    {
        RoundEngine 
        {
            config,
            scores: Scoreboard::default(),
            state: RoundState::idle(),
            phase: Phase::Idle,
            last_countdown: CountdownId::default(),
            observer 
        }
    }

    ///
    /// Returns an idle engine for two custom players; `first` opens every round.
    ///
    pub fn with_players (config: Config, first: PlayerRecord, second: PlayerRecord, observer: O) -> Result<RoundEngine<O>, GameError>
    {
        let scores = Scoreboard::new(first, second)?;
        Ok(RoundEngine { scores, ..RoundEngine::with_observer(config, observer) })
    }

    ///
    /// Returns the player whose move is awaited.
    ///
    pub fn active_player (& self) -> PlayerId 
    {
        self.scores.seat(self.state.active_seat())
    }

    ///
    /// Places the active player's mark at (column, row).
    ///
    /// A refused move changes nothing and the same player keeps the turn. An accepted 
    /// move either passes the turn or, by completing a line or filling the grid, ends 
    /// the round and starts the next.
    ///
    pub fn apply_move (& mut self, column: i32, row: i32) -> Result<Turn, GameError>
    {
        if self.phase != Phase::Active 
        {
            return Err(self.reject(GameError::NotStarted));
        }

        let point = Point::checked(column, row).map_err(|e| self.reject(e))?;
        if let Some(Cell::Taken(owner)) = self.state.grid().get(point)
        {
            return Err(self.reject(GameError::CellOccupied { point, owner }));
        }

        let player = self.active_player();
        self.state.grid_mut().place(point, player);
        log::debug!("Round {}: {}", self.state.number(), notate!("player {} took {}, grid {}.", player, point, self.state.grid()));

        if let Some(winner) = self.state.grid().winner()
        {
            self.notify();
            return Ok(Turn::RoundOver(self.finish_round(Outcome::Won(winner))));
        }

        if self.state.grid().is_full()
        {
            self.notify();
            return Ok(Turn::RoundOver(self.finish_round(Outcome::Draw)));
        }

        self.state.toggle_turn();
        self.notify();
        Ok(Turn::Next(self.active_player()))
    }

    pub fn config (& self) -> & Config 
    {
        & self.config
    }

    ///
    /// Returns the id of the running countdown; ticks must carry it to be counted.
    ///
    pub fn countdown_id (& self) -> CountdownId 
    {
        self.state.countdown().id()
    }

    ///
    /// Finishes the current round: stops its clock, credits the winner if there is 
    /// one, publishes the report, and starts the next round. Only a running round can 
    /// end; an idle engine refuses with `NotStarted` and credits nobody.
    ///
    pub fn end_round (& mut self, outcome: Outcome) -> Result<RoundReport, GameError>
    {
        if self.phase != Phase::Active 
        {
            log::warn!("Refusing to end a round with '{}': no round is in progress.", outcome);
            return Err(GameError::NotStarted);
        }
        Ok(self.finish_round(outcome))
    }

    fn finish_round (& mut self, outcome: Outcome) -> RoundReport 
    {
        self.state.countdown_mut().cancel();
        self.phase = Phase::Idle;

        if let Some(winner) = outcome.winner()
        {
            if ! self.scores.credit(winner)
            {
                log::warn!("Player {} is not seated; round {} credits nobody.", winner, self.state.number());
            }
        }

        let report = RoundReport { round: self.state.number(), outcome, scores: self.scores };
        log::info!("Round {} over: {}.", report.round, report);
        self.observer.round_ended(& report);

        self.start_round();
        report
    }

    pub fn grid (& self) -> & Grid 
    {
        self.state.grid()
    }

    ///
    /// Determines whether a round is running.
    ///
    pub fn is_active (& self) -> bool 
    {
        self.phase == Phase::Active
    }

    pub fn observer (& self) -> & O 
    {
        & self.observer
    }

    pub fn observer_mut (& mut self) -> & mut O 
    {
        & mut self.observer
    }

    ///
    /// Counts one elapsed second against the countdown with the given id.
    ///
    /// Ticks for a cancelled countdown, or while idle, are ignored. The tick that empties 
    /// the clock ends the round with nobody credited and starts the next one.
    ///
    pub fn on_timer_tick (& mut self, id: CountdownId) -> Tick 
    {
        if self.phase != Phase::Active 
        {
            log::warn!("Ignoring tick for countdown {}: no round is in progress.", id);
            return Tick::Stale;
        }

        match self.state.countdown_mut().step(id)
        {
            Step::Stale => 
            {
                log::warn!("Ignoring tick for stale countdown {} (current is {}).", id, self.countdown_id());
                Tick::Stale
            },
            Step::Running(remaining) => 
            {
                log::trace!("Round {}: {} left.", self.state.number(), self.state.countdown().clock());
                self.notify();
                Tick::Running(remaining)
            },
            Step::Expired => 
            {
                self.notify();
                Tick::Expired(self.finish_round(Outcome::TimedOut))
            }
        }
    }

    ///
    /// Returns the current round.
    ///
    pub fn round (& self) -> & RoundState 
    {
        & self.state
    }

    pub fn scores (& self) -> & Scoreboard 
    {
        & self.scores
    }

    ///
    /// Captures the current state for display.
    ///
    pub fn snapshot (& self) -> Snapshot 
    {
        Snapshot 
        {
            round: self.state.number(),
            grid: * self.state.grid(),
            active_player: self.active_player(),
            time_remaining: self.state.time_remaining(),
            scores: self.scores,
            in_progress: self.is_active()
        }
    }

    ///
    /// Starts a fresh round: empty grid, first player to move, full clock. Any 
    /// countdown still running is cancelled before the new one is armed. Scores carry over.
    ///
    pub fn start_round (& mut self)
    {
        self.state.countdown_mut().cancel();

        // An unvalidated zero-length config still gets one tick per round.

        self.last_countdown = self.last_countdown.next();
        let countdown = Countdown::armed(self.last_countdown, self.config.round_seconds.max(1));
        self.state = RoundState::fresh(self.state.number() + 1, countdown);
        self.phase = Phase::Active;

        log::info!(
            "Round {} started: player {} to move, {} on the clock, scores {}.",
            self.state.number(), self.active_player(), countdown.clock(), self.scores
        );
        self.notify();
    }

    ///
    /// Returns the remaining seconds of the current round.
    ///
    pub fn time_remaining (& self) -> u32 
    {
        self.state.time_remaining()
    }

    fn notify (& mut self)
    {
        let snapshot = self.snapshot();
        self.observer.state_changed(& snapshot);
    }

    fn reject (& self, error: GameError) -> GameError 
    {
        log::warn!("Rejected move by player {}: {}", self.active_player(), error);
        error
    }
}
