//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// How many characters of an opaque ID the tables show.
const SHORT_ID_LEN: usize = 8;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Truncates an opaque entity ID for table display.
///
/// Usage in templates: `{{ order.id|short_id }}`
#[askama::filter_fn]
pub fn short_id(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(truncate_id(&value.to_string()))
}

fn truncate_id(id: &str) -> String {
    if id.chars().count() > SHORT_ID_LEN {
        let head: String = id.chars().take(SHORT_ID_LEN).collect();
        format!("{head}...")
    } else {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_id_long() {
        assert_eq!(truncate_id("64f1c2aa9d3e"), "64f1c2aa...");
    }

    #[test]
    fn test_truncate_id_short_passes_through() {
        assert_eq!(truncate_id("p1"), "p1");
        assert_eq!(truncate_id("12345678"), "12345678");
    }
}
