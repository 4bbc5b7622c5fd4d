
use utils::*;

///
/// Represents a round configuration.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default = "round_seconds")]
    pub round_seconds: u32
}

impl Default for Config 
{
    fn default () -> Config 
    {
        Config 
        {
            round_seconds: round_seconds()
        }
    }
}

impl Config 
{
    ///
    /// Checks the values a round can actually run with: a round lasts at least one second.
    ///
    pub fn validate (& self) -> Result<()>
    {
        if self.round_seconds == 0 
        {
            return Err(error::error!("round_seconds must be at least 1, found 0."));
        }
        Ok(())
    }
}

///
/// Returns the default length of a round, in seconds.
///
fn round_seconds () -> u32 
{
    180
}
