
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::error::*;

pub use serde::{Deserialize, Serialize};

///
/// Reads a TOML document from the given path into a configuration structure.
///
/// A missing file is not an error: the structure's defaults are returned instead, so 
/// a fresh checkout runs without any configuration on disk.
///
pub fn load_toml<T> (path: impl AsRef<Path>) -> Result<T>
    where T: DeserializeOwned + Default
{
    let path = path.as_ref();
    if ! path.exists()
    {
        return Ok(T::default());
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'.", path.display()))?;

    toml::from_str(& text).with_context(|| format!("Invalid TOML in config file '{}'.", path.display()))
}

///
/// Renders a serializable value as a single-line JSON document.
///
pub fn to_json<T> (value: & T) -> Result<String>
    where T: Serialize
{
    serde_json::to_string(value).context("Failed to serialize value to JSON.")
}

#[cfg(test)]
mod tests 
{
    use std::io::Write;

    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Sample 
    {
        #[serde(default)]
        name: String,

        #[serde(default)]
        count: u32
    }

    #[test]
    fn missing_file_yields_defaults ()
    {
        let dir = tempfile::tempdir().unwrap();
        let sample : Sample = load_toml(dir.path().join("absent.toml")).unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn present_file_is_parsed ()
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"grid\"\ncount = 3").unwrap();

        let sample : Sample = load_toml(file.path()).unwrap();
        assert_eq!(sample, Sample { name: "grid".to_owned(), count: 3 });
    }

    #[test]
    fn malformed_file_is_an_error ()
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "count = \"three\"").unwrap();

        assert!(load_toml::<Sample>(file.path()).is_err());
    }
}
