//! Library half of `notices-demo`: everything except process setup.
//!
//! [`run`] performs the startup sequence an application would (load and
//! validate options, load the catalogue, build the service) and then drives a
//! single request, writing the resulting snapshot as JSON.

pub mod cli;
pub mod error;

use std::io::Write;
use std::sync::Arc;

use localized_notifications::{
    FluentCatalog, FluentValue, NotificationOptions, NotificationService, NotificationSnapshot,
};
use serde::Serialize;

use crate::cli::Args;
use crate::error::Result;

/// JSON document printed for each run.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Locale negotiated for the request.
    pub locale: String,
    /// Notifications recorded during the request.
    pub notifications: NotificationSnapshot,
}

/// Builds the service described by `args`.
///
/// # Errors
///
/// Returns configuration errors and catalogue loading errors.
pub fn build_service(args: &Args) -> Result<NotificationService> {
    let negotiator = NotificationOptions::load(args.config.as_deref())?.validate()?;
    let catalog = FluentCatalog::builder()
        .with_domain_dir(
            &args.locales_dir,
            &args.domain,
            negotiator.supported_locales(),
        )?
        .with_fallback_locale(negotiator.default_locale().clone())
        .try_build()?;
    Ok(NotificationService::new(negotiator, Arc::new(catalog)))
}

/// Records the notification named by `args` in a fresh request.
///
/// # Errors
///
/// Returns [`NotificationError`](localized_notifications::NotificationError)
/// when the key is blank or its template rejects the arguments.
pub fn simulate_request(service: &NotificationService, args: &Args) -> Result<Report> {
    let mut notifications = service.begin_request(args.locale.as_deref());
    let values: Vec<FluentValue<'_>> = args
        .args
        .iter()
        .map(|raw| FluentValue::try_number(raw.as_str()))
        .collect();
    notifications.add_notification(&args.key, &values)?;
    Ok(Report {
        locale: notifications.locale().to_string(),
        notifications: notifications.into_snapshot(),
    })
}

/// Runs the whole demo, writing pretty-printed JSON to `out`.
///
/// # Errors
///
/// Returns any setup, request or output failure.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let service = build_service(args)?;
    let report = simulate_request(&service, args)?;
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests;
