
use utils::*;

///
/// The commands understood on the console, one per line.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command 
{
    Play(i32, i32),     // Places the active player's mark at (column, row).
    Tick,               // Advances the round clock by one second.
    Show,               // Draws the board.
    State,              // Prints the current snapshot as JSON.
    Scores,             // Prints both players' win tallies.
    Help,
    Quit
}

///
/// A short usage summary.
///
pub const HELP : & str = "\
commands:
  play <column> <row>   place the active player's mark; columns and rows run 0..2
  tick                  advance the clock by one second
  show                  draw the board
  state                 print the current state as JSON
  scores                print the win tallies
  help                  print this summary
  quit                  end the session";

impl Command 
{
    ///
    /// Parses one input line. Blank lines parse to nothing.
    ///
    pub fn parse (line: & str) -> Result<Option<Command>>
    {
        let args : Vec<& str> = line.split_whitespace().collect();
        let cmd : & str = match args.first()
        {
            Some(cmd) => cmd,
            None      => return Ok(None)
        };

        let command = match (cmd, args.len())
        {
            ("play", 3) => 
            {
                let column = args[1].parse::<i32>().with_context(|| format!("Invalid column '{}'.", args[1]))?;
                let row = args[2].parse::<i32>().with_context(|| format!("Invalid row '{}'.", args[2]))?;
                Command::Play(column, row)
            },
            ("play", _)   => return Err(error::error!("Usage: play <column> <row>")),
            ("tick", 1)   => Command::Tick,
            ("show", 1)   => Command::Show,
            ("state", 1)  => Command::State,
            ("scores", 1) => Command::Scores,
            ("help", 1)   => Command::Help,
            ("quit", 1) 
            | ("exit", 1) => Command::Quit,
            _             => return Err(error::error!("Unknown command '{}'.", line.trim()))
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;

    #[test]
    fn parses_known_commands ()
    {
        assert_eq!(Command::parse("play 2 0").unwrap(), Some(Command::Play(2, 0)));
        assert_eq!(Command::parse("  play  -1 7 ").unwrap(), Some(Command::Play(-1, 7)));
        assert_eq!(Command::parse("tick").unwrap(), Some(Command::Tick));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn rejects_malformed_commands ()
    {
        assert!(Command::parse("play 1").is_err());
        assert!(Command::parse("play a 1").is_err());
        assert!(Command::parse("show me").is_err());
        assert!(Command::parse("undo").is_err());
    }
}
