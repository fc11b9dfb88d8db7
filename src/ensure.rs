//! Argument checks run before any request leaves the client.

use crate::error::Error;

/// Reject empty or whitespace-only strings.
pub(crate) fn not_blank(value: &str, name: &'static str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(name, "must not be empty"));
    }
    Ok(())
}
