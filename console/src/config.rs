
use std::path::Path;

use utils::*;

pub use tictac::Config as RoundConfig;

///
/// Represents a full configuration.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default)]
    pub round: RoundConfig,

    #[serde(default = "tick_millis")]
    pub tick_millis: u64,

    #[serde(default = "log_path")]
    pub log_path: String,

    #[serde(default = "log_level")]
    pub log_level: String
}

impl Default for Config 
{
    fn default () -> Config 
    {
        Config 
        {
            round: RoundConfig::default(),
            tick_millis: tick_millis(),
            log_path: log_path(),
            log_level: log_level()
        }
    }
}

impl Config 
{
    ///
    /// Reads the configuration at the given path, falling back to defaults if the file 
    /// is absent, and refuses values a session cannot run with.
    ///
    pub fn load (path: impl AsRef<Path>) -> Result<Config>
    {
        let path = path.as_ref();
        let config : Config = load_toml(path)?;

        let context = || format!("Invalid configuration in '{}'.", path.display());
        config.round.validate().with_context(context)?;
        if config.tick_millis == 0 
        {
            return Err(error::error!("tick_millis must be at least 1, found 0.")).with_context(context);
        }

        Ok(config)
    }
}

///
/// Returns the default clock period; one tick is one second of round time.
///
fn tick_millis () -> u64 
{
    1000
}

///
/// Returns the default log path.
///
fn log_path () -> String 
{
    "logs".to_owned()
}

fn log_level () -> String 
{
    "info".to_owned()
}

#[cfg(test)]
mod tests 
{
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_falls_back_per_field ()
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_millis = 250\n\n[round]\nround_seconds = 60").unwrap();

        let config : Config = utils::load_toml(file.path()).unwrap();
        assert_eq!(config.tick_millis, 250);
        assert_eq!(config.round.round_seconds, 60);
        assert_eq!(config.log_path, "logs");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn empty_round_table_keeps_the_default_length ()
    {
        let config : Config = toml::from_str("[round]\n").unwrap();
        assert_eq!(config.round.round_seconds, 180);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_length_rounds_are_refused_at_load ()
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[round]\nround_seconds = 0").unwrap();

        assert!(utils::load_toml::<Config>(file.path()).is_ok());
        let error = Config::load(file.path()).unwrap_err();
        assert!(format!("{:#}", error).contains("round_seconds must be at least 1"));
    }

    #[test]
    fn load_accepts_defaults_and_valid_files ()
    {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path().join("absent.toml")).unwrap(), Config::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_millis = 0").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn wrong_types_are_rejected ()
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_millis = \"soon\"").unwrap();

        assert!(utils::load_toml::<Config>(file.path()).is_err());
    }
}
