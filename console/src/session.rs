
use std::io::{BufRead, Write};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

use tictac::{CountdownId, PlayerId, RoundEngine, Turn};

use super::command::{Command, HELP};
use super::config::Config;
use super::render::TextDisplay;
use super::ticker::Ticker;

use utils::*;

///
/// Everything the session loop reacts to, in arrival order.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event 
{
    Line(String),
    Tick(CountdownId),
    Closed
}

///
/// Whether the session keeps going after a command.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow 
{
    Continue,
    Quit
}

///
/// Where round time comes from.
///
pub enum Clock 
{
    ///
    /// Time only advances with the `tick` command.
    ///
    Manual,

    ///
    /// A ticker thread sends one tick per period for the running countdown.
    ///
    Automatic { period: Duration, ticker: Option<Ticker> }
}

impl Clock 
{
    pub fn every (period: Duration) -> Clock 
    {
        Clock::Automatic { period, ticker: None }
    }
}

///
/// One console session: a single engine, fed by stdin lines and clock ticks over one 
/// channel so that every event is handled to completion, in order, on one thread.
///
pub struct Session<W>
    where W: Write
{
    engine: RoundEngine<TextDisplay<W>>,
    clock: Clock,
    sender: Sender<Event>,
    receiver: Receiver<Event>
}

impl<W> Session<W>
    where W: Write
{
    ///
    /// Handles one input line.
    ///
    pub fn handle_line (& mut self, line: & str) -> Flow 
    {
        let command = match Command::parse(line)
        {
            Ok(Some(command)) => command,
            Ok(None)          => return Flow::Continue,
            Err(e)            => 
            {
                log::warn!("{:#}", e);
                self.say(format_args!("{:#} (type 'help' for commands)", e));
                return Flow::Continue;
            }
        };

        match command 
        {
            Command::Play(column, row) => 
            {
                let player = self.engine.active_player();
                match self.engine.apply_move(column, row)
                {
                    Ok(Turn::Next(next))   => log::debug!("Player {} moved; player {} is up.", player, next),
                    Ok(Turn::RoundOver(_)) => {},
                    Err(e)                 => self.say(format_args!("Rejected: {} Player {}, try again.", e, player))
                }
            },

            Command::Tick => 
            {
                let id = self.engine.countdown_id();
                self.engine.on_timer_tick(id);
            },

            Command::Show => 
            {
                let snapshot = self.engine.snapshot();
                self.say(format_args!("{}", snapshot));
            },

            Command::State => 
            {
                match to_json(& self.engine.snapshot())
                {
                    Ok(json) => self.say(format_args!("{}", json)),
                    Err(e)   => log::error!("{:#}", e)
                }
            },

            Command::Scores => 
            {
                let players = * self.engine.scores().players();
                for player in players 
                {
                    self.say(format_args!("Player {}: {}", player.id(), player.score()));
                }
            },

            Command::Help => self.say(format_args!("{}", HELP)),

            Command::Quit => return Flow::Quit
        };

        Flow::Continue
    }

    ///
    /// Handles one event from the channel.
    ///
    pub fn handle_event (& mut self, event: Event) -> Flow 
    {
        let flow = match event 
        {
            Event::Line(line) => self.handle_line(& line),
            Event::Tick(id)   => { self.engine.on_timer_tick(id); Flow::Continue },
            Event::Closed     => Flow::Quit
        };

        self.sync_clock();
        flow 
    }

    pub fn engine (& self) -> & RoundEngine<TextDisplay<W>>
    {
        & self.engine
    }

    ///
    /// Creates a session around a fresh engine; no round is running yet.
    ///
    pub fn new (config: & Config, clock: Clock, out: W) -> Session<W>
    {
        let (sender, receiver) = channel();
        let engine = RoundEngine::with_observer(config.round, TextDisplay::new(out));
        Session { engine, clock, sender, receiver }
    }

    ///
    /// Starts the first round and serves events until `quit` or the end of input.
    ///
    pub fn run<R> (mut self, input: R) -> Result<()>
        where R: BufRead + Send + 'static
    {
        let lines = self.sender.clone();
        thread::Builder::new()
            .name("input".to_owned())
            .spawn(move || 
            {
                for line in input.lines()
                {
                    match line 
                    {
                        Ok(line) => if lines.send(Event::Line(line)).is_err() { return; },
                        Err(e)   => { log::error!("Failed to read input: {}", e); break; }
                    }
                }
                let _ = lines.send(Event::Closed);
            })
            .context("Failed to start the input thread.")?;

        self.say(format_args!("Players {} (⭕) and {} (❌). Type 'help' for commands.", PlayerId::FIRST, PlayerId::SECOND));
        self.start();

        while let Ok(event) = self.receiver.recv()
        {
            if self.handle_event(event) == Flow::Quit 
            {
                break;
            }
        }

        log::info!("Session over after {} round(s); final scores {}.", self.engine.round().number(), self.engine.scores());
        Ok(())
    }

    ///
    /// Starts the first round and arms the clock for it.
    ///
    pub fn start (& mut self)
    {
        self.engine.start_round();
        self.sync_clock();
    }

    fn say (& mut self, line: std::fmt::Arguments<'_>)
    {
        self.engine.observer_mut().emit(line);
    }

    ///
    /// Replaces the ticker whenever the engine has armed a new countdown.
    ///
    fn sync_clock (& mut self)
    {
        if let Clock::Automatic { period, ticker } = & mut self.clock 
        {
            let current = self.engine.countdown_id();
            if ticker.as_ref().map(|t| t.id()) != Some(current)
            {
                if let Some(old) = ticker.take()
                {
                    old.halt();
                }
                * ticker = Some(Ticker::spawn(current, * period, self.sender.clone()));
                log::debug!("Clock armed for countdown {}.", current);
            }
        }
    }
}
