
///
/// The application-level result and error types shared by every crate in the workspace.
///
pub use anyhow::{Context, Error, Result};

///
/// Builds an ad-hoc error from a format string, e.g. `error::error!("bad token '{}'", s)`.
///
pub use anyhow::anyhow as error;

///
/// Alias kept so callers can write `error::bail!` next to `error::error!`.
///
pub use anyhow::bail;

#[cfg(test)]
mod tests 
{
    #[test]
    fn error_macro_is_unambiguous_at_the_root ()
    {
        let e = crate::error!("root {}", 2);
        assert_eq!(e.to_string(), "root 2");

        let e = crate::error::error!("bad token '{}'", "x");
        assert_eq!(e.to_string(), "bad token 'x'");

        // Without an installed logger this is a no-op; it only has to resolve.

        crate::log::error!("logged {}", 1);
    }
}
