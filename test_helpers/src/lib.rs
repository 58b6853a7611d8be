//! Test helpers shared by the localized-notifications crates.
//!
//! - [`figment`] isolates configuration tests inside a `figment::Jail`.
//! - [`fs`] lays out temporary catalogue directories.
//! - [`text`] normalises rendered notification text.

pub mod figment;
pub mod fs;
pub mod text;
