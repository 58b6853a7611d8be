//! Running configuration tests inside `figment::Jail`.
//!
//! A jail gives each test a scratch working directory and restores any
//! environment variables it sets, which is what layered
//! `NOTIFICATIONS_`-prefixed configuration tests need. The helpers here turn
//! the jail's `figment::Error` plumbing into `anyhow::Result` so tests can
//! use `?` throughout.

use anyhow::{Result, anyhow};

/// Runs `f` inside a [`figment::Jail`] and returns what it produced.
///
/// Jails are serialised process-wide, so tests using this helper never
/// observe each other's environment variables or files.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts a crate error into a [`figment::Error`] so it can cross a jail
/// boundary with `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a `map_err` adapter, which hands over ownership"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
