
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use tictac::CountdownId;

use super::session::Event;

///
/// A background thread that sends one tick per period for a single countdown.
///
/// The ticker stops on request, when dropped, or when the receiving end goes away. 
/// A tick already in flight when it stops is still delivered; the engine discards it 
/// as stale because its countdown id no longer matches.
///
pub struct Ticker 
{
    id: CountdownId,
    stop: Arc<AtomicBool>
}

impl Drop for Ticker 
{
    fn drop (& mut self)
    {
        self.halt();
    }
}

impl Ticker 
{
    ///
    /// Stops sending ticks.
    ///
    pub fn halt (& self)
    {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn id (& self) -> CountdownId 
    {
        self.id
    }

    ///
    /// Starts a ticker for the given countdown.
    ///
    pub fn spawn (id: CountdownId, period: Duration, sender: Sender<Event>) -> Ticker 
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();

        thread::spawn(move || 
        {
            loop 
            {
                thread::sleep(period);
                if flag.load(Ordering::SeqCst) || sender.send(Event::Tick(id)).is_err()
                {
                    break;
                }
            }
        });

        Ticker { id, stop }
    }
}

#[cfg(test)]
mod tests 
{
    use std::sync::mpsc::channel;

    use super::*;

    #[test]
    fn sends_ticks_tagged_with_its_countdown ()
    {
        let (sender, receiver) = channel();
        let id = CountdownId::default().next();
        let ticker = Ticker::spawn(id, Duration::from_millis(5), sender);

        for _ in 0 .. 3 
        {
            match receiver.recv_timeout(Duration::from_secs(5)).unwrap()
            {
                Event::Tick(tick) => assert_eq!(tick, id),
                other             => panic!("unexpected event {:?}", other)
            }
        }
        assert_eq!(ticker.id(), id);
    }

    #[test]
    fn halted_ticker_goes_quiet ()
    {
        let (sender, receiver) = channel();
        let ticker = Ticker::spawn(CountdownId::default(), Duration::from_millis(5), sender);
        ticker.halt();
        drop(ticker);

        // At most one tick may already have been in flight.

        let mut received = 0;
        while receiver.recv_timeout(Duration::from_millis(100)).is_ok()
        {
            received += 1;
        }
        assert!(received <= 1);
    }
}
