//! Output helpers shared across commands.

use serde::Serialize;
use serde_json::json;

use crate::{
    error::AnalyticsError,
    espn::{FetchOutcome, UnavailableReason},
    Result,
};

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// User-facing message for expected query failures, `None` for the rest.
pub fn query_error_message(err: &AnalyticsError) -> Option<String> {
    match err {
        AnalyticsError::DatasetUnavailable { dataset } => {
            Some(format!("{dataset} data not available"))
        }
        AnalyticsError::PlayerNotFound { name } => Some(format!("No player matching {name}")),
        AnalyticsError::TeamNotFound { team } => Some(format!("No team matching {team}")),
        _ => None,
    }
}

/// Print expected query failures and carry on; propagate anything else.
pub fn report_query_error(err: AnalyticsError, as_json: bool) -> Result<()> {
    let Some(message) = query_error_message(&err) else {
        return Err(err);
    };
    if as_json {
        let kind = if err.is_record_not_found() {
            "not_found"
        } else {
            "unavailable"
        };
        print_json(&json!({ "error": kind, "message": message }))
    } else {
        println!("⚠ {message}");
        Ok(())
    }
}

/// Neutral "could not fetch" notice for a live request.
pub fn report_unavailable(what: &str, reason: &UnavailableReason, as_json: bool) -> Result<()> {
    if as_json {
        print_json(&json!({ "error": "unavailable", "what": what, "reason": reason }))
    } else {
        println!("⚠ Could not fetch {what}; try again later");
        Ok(())
    }
}

/// Print an available live payload with `show`, or the unavailable notice.
pub fn render_outcome<T: Serialize>(
    what: &str,
    outcome: FetchOutcome<T>,
    as_json: bool,
    show: impl FnOnce(&T),
) -> Result<()> {
    match outcome {
        FetchOutcome::Available(value) if as_json => print_json(&value),
        FetchOutcome::Available(value) => {
            show(&value);
            Ok(())
        }
        FetchOutcome::Unavailable(reason) => report_unavailable(what, &reason, as_json),
    }
}

/// Format an optional value, or `-`.
pub fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
