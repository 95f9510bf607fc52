use ::time::OffsetDateTime;
use ::time::format_description::BorrowedFormatItem;
use ::time::macros::format_description;

/// ISO 8601 with microsecond precision and no timezone designator (naive UTC).
pub(crate) const NAIVE_ISO: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]");

/// Returns the current UTC time as a naive ISO 8601 timestamp
/// (no trailing `Z` or offset suffix).
pub fn now_iso() -> String {
    OffsetDateTime::now_utc().format(NAIVE_ISO).unwrap_or_default()
}
