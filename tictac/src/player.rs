
use super::error::GameError;

use utils::*;

///
/// Identifies one of the two players of a session. Ids are strictly positive.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PlayerId(u32);

impl TryFrom<i64> for PlayerId 
{
    type Error = GameError;

    fn try_from (raw: i64) -> std::result::Result<PlayerId, GameError>
    {
        PlayerId::new(raw)
    }
}

impl From<PlayerId> for u32 
{
    fn from (id: PlayerId) -> u32 
    {
        id.0
    }
}

impl std::fmt::Display for PlayerId 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "{}", self.0)
    }
}

impl notate::Notate for PlayerId 
{
    fn notate (& self) -> String 
    {
        self.0.to_string()
    }

    fn parse (s: & str) -> Result<PlayerId>
    {
        let raw = s.trim().parse::<i64>().with_context(|| format!("Invalid notation '{}' for player id.", s))?;
        Ok(PlayerId::new(raw)?)
    }
}

impl PlayerId 
{
    ///
    /// The player who moves first in every round.
    ///
    pub const FIRST : PlayerId = PlayerId(1);

    ///
    /// The player who moves second in every round.
    ///
    pub const SECOND : PlayerId = PlayerId(2);

    ///
    /// Validates a raw id.
    ///
    pub fn new (raw: i64) -> std::result::Result<PlayerId, GameError>
    {
        match u32::try_from(raw)
        {
            Ok(id) if id > 0 => Ok(PlayerId(id)),
            _                => Err(GameError::InvalidId { id: raw })
        }
    }

    ///
    /// Returns the raw id.
    ///
    pub fn get (& self) -> u32 
    {
        self.0
    }
}

///
/// A player's identity and the number of rounds they have won this session.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRecord 
{
    id: PlayerId,
    score: u32
}

impl PlayerRecord 
{
    ///
    /// Creates a record with no wins, refusing non-positive ids.
    ///
    pub fn new (id: i64) -> std::result::Result<PlayerRecord, GameError>
    {
        Ok(PlayerRecord::from_id(PlayerId::new(id)?))
    }

    ///
    /// Creates a record with no wins for an already validated id.
    ///
    pub fn from_id (id: PlayerId) -> PlayerRecord 
    {
        PlayerRecord { id, score: 0 }
    }

    pub fn id (& self) -> PlayerId 
    {
        self.id
    }

    pub fn score (& self) -> u32 
    {
        self.score
    }

    ///
    /// Credits this player with one more won round.
    ///
    pub fn record_win (& mut self)
    {
        self.score += 1;
    }

    ///
    /// Hook for per-session player state. Scores live for the whole session, so there 
    /// is currently nothing to clear; this is not the same thing as clearing the grid.
    ///
    pub fn reset_for_new_session (& mut self)
    {
    }
}

///
/// The two players of a session, in seat order: the first seat opens every round.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Seats")]
pub struct Scoreboard 
{
    players: [PlayerRecord; 2]
}

///
/// The unchecked wire form of a scoreboard; it only becomes one through `Scoreboard::new`.
///
#[derive(Deserialize)]
struct Seats 
{
    players: [PlayerRecord; 2]
}

impl TryFrom<Seats> for Scoreboard 
{
    type Error = GameError;

    fn try_from (seats: Seats) -> std::result::Result<Scoreboard, GameError>
    {
        let [first, second] = seats.players;
        Scoreboard::new(first, second)
    }
}

impl std::fmt::Display for Scoreboard 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "{}/{}", self.players[0].score(), self.players[1].score())
    }
}

impl Default for Scoreboard 
{
    fn default () -> Scoreboard 
    {
        Scoreboard 
        {
            players: [PlayerRecord::from_id(PlayerId::FIRST), PlayerRecord::from_id(PlayerId::SECOND)]
        }
    }
}

impl Scoreboard 
{
    ///
    /// Seats two players; their ids must differ.
    ///
    pub fn new (first: PlayerRecord, second: PlayerRecord) -> std::result::Result<Scoreboard, GameError>
    {
        if first.id() == second.id()
        {
            return Err(GameError::DuplicateId { id: first.id() });
        }
        Ok(Scoreboard { players: [first, second] })
    }

    ///
    /// Credits a win to the player with the given id. Returns false, changing nothing, 
    /// if no seated player has that id.
    ///
    pub fn credit (& mut self, id: PlayerId) -> bool 
    {
        match self.players.iter_mut().find(|p| p.id() == id)
        {
            Some(player) => { player.record_win(); true },
            None         => false
        }
    }

    ///
    /// Returns the record of the player with the given id.
    ///
    pub fn get (& self, id: PlayerId) -> Option<& PlayerRecord>
    {
        self.players.iter().find(|p| p.id() == id)
    }

    ///
    /// Returns the id of the player in the given seat (0 or 1).
    ///
    pub fn seat (& self, seat: usize) -> PlayerId 
    {
        self.players[seat % 2].id()
    }

    pub fn players (& self) -> & [PlayerRecord; 2]
    {
        & self.players
    }

    ///
    /// Returns the score of the player with the given id, or zero for a stranger.
    ///
    pub fn score_of (& self, id: PlayerId) -> u32 
    {
        self.get(id).map(|p| p.score()).unwrap_or(0)
    }

    ///
    /// Applies the per-session reset hook to both players.
    ///
    pub fn reset_for_new_session (& mut self)
    {
        self.players.iter_mut().for_each(|p| p.reset_for_new_session());
    }
}

#[cfg(test)]
mod tests 
{
    use utils::notate::Notate;

    use super::*;

    #[test]
    fn ids_must_be_strictly_positive ()
    {
        assert_eq!(PlayerRecord::new(0), Err(GameError::InvalidId { id: 0 }));
        assert_eq!(PlayerRecord::new(-3), Err(GameError::InvalidId { id: -3 }));
        assert_eq!(PlayerId::new(i64::from(u32::MAX) + 1), Err(GameError::InvalidId { id: i64::from(u32::MAX) + 1 }));

        let record = PlayerRecord::new(7).unwrap();
        assert_eq!(record.id().get(), 7);
        assert_eq!(record.score(), 0);
    }

    #[test]
    fn wins_accumulate_and_survive_session_reset ()
    {
        let mut record = PlayerRecord::new(1).unwrap();
        record.record_win();
        record.record_win();
        record.reset_for_new_session();
        assert_eq!(record.score(), 2);
    }

    #[test]
    fn scoreboard_rejects_shared_ids ()
    {
        let a = PlayerRecord::new(4).unwrap();
        let b = PlayerRecord::new(4).unwrap();
        assert_eq!(Scoreboard::new(a, b), Err(GameError::DuplicateId { id: a.id() }));
    }

    #[test]
    fn scoreboard_credits_only_seated_players ()
    {
        let mut board = Scoreboard::default();
        assert!(board.credit(PlayerId::SECOND));
        assert!(! board.credit(PlayerId::new(9).unwrap()));

        assert_eq!(board.score_of(PlayerId::FIRST), 0);
        assert_eq!(board.score_of(PlayerId::SECOND), 1);
        assert_eq!(board.to_string(), "0/1");
    }

    #[test]
    fn deserializing_checks_ids ()
    {
        assert_eq!(serde_json::from_str::<PlayerId>("3").unwrap(), PlayerId::new(3).unwrap());
        assert!(serde_json::from_str::<PlayerId>("0").is_err());
        assert!(serde_json::from_str::<PlayerId>("-2").is_err());
        assert!(serde_json::from_str::<PlayerRecord>(r#"{"id":0,"score":4}"#).is_err());

        let record : PlayerRecord = serde_json::from_str(r#"{"id":2,"score":4}"#).unwrap();
        assert_eq!((record.id(), record.score()), (PlayerId::SECOND, 4));
        assert_eq!(serde_json::to_string(& record).unwrap(), r#"{"id":2,"score":4}"#);
    }

    #[test]
    fn deserializing_checks_seats ()
    {
        let board : Scoreboard = serde_json::from_str(r#"{"players":[{"id":1,"score":2},{"id":2,"score":0}]}"#).unwrap();
        assert_eq!(board.to_string(), "2/0");

        assert!(serde_json::from_str::<Scoreboard>(r#"{"players":[{"id":1,"score":0},{"id":1,"score":0}]}"#).is_err());
        assert_eq!(serde_json::to_string(& Scoreboard::default()).unwrap(), r#"{"players":[{"id":1,"score":0},{"id":2,"score":0}]}"#);
    }

    #[test]
    fn player_id_notation ()
    {
        assert_eq!(PlayerId::parse("12").unwrap().notate(), "12");
        assert!(PlayerId::parse("0").is_err());
        assert!(PlayerId::parse("x").is_err());
    }
}
