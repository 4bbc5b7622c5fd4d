
use flexi_logger::{FileSpec, Logger, LoggerHandle, with_thread, WriteMode};
use super::error::*;

///
/// Macros to write to the backing file logger.
///
pub use ::log::{trace as trace, debug as debug, info as info, warn as warn, error as error};

///
/// Initializes the logstream to write to a timestamped file in the given directory, 
/// filtered by the given flexi_logger spec (e.g. "info" or "tictac=debug").
///
/// The returned handle must be kept alive for as long as logging is wanted; dropping 
/// it flushes and closes the file.
///
pub fn initialize (path: & str, filename: & str, spec: & str) -> Result<LoggerHandle>
{
    let file_spec = FileSpec::default()
        .directory(path)
        .basename(filename)
        .use_timestamp(true)
        .suffix("log");

    let handle = Logger::try_with_str(spec)
        .with_context(|| format!("Invalid log specification '{}'.", spec))?
        .log_to_file(file_spec)
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(with_thread)
        .start()
        .with_context(|| format!("Failed to start the file logger in '{}'.", path))?;

    Ok(handle)
}
