
pub mod cell;
pub mod config;
pub mod countdown;
pub mod engine;
pub mod error;
pub mod grid;
pub mod observer;
pub mod outcome;
pub mod player;
pub mod point;
pub mod round;

pub use cell::Cell;
pub use config::Config;
pub use countdown::{Countdown, CountdownId, Tick};
pub use engine::{RoundEngine, Turn};
pub use error::GameError;
pub use grid::Grid;
pub use observer::{NullObserver, Recorder, RoundObserver};
pub use outcome::Outcome;
pub use player::{PlayerId, PlayerRecord, Scoreboard};
pub use point::Point;
pub use round::{RoundReport, RoundState, Snapshot};
