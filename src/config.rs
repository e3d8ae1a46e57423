//! Terminal layout derived from the environment.

/// Assumed terminal width when `COLUMNS` is unset or unreadable.
pub const DEFAULT_COLUMNS: usize = 100;
/// Columns kept free on the right of wrapped narration.
const RIGHT_MARGIN: usize = 4;
pub const MAX_WRAP_WIDTH: usize = 96;
pub const MIN_WRAP_WIDTH: usize = 20;

/// Narration wrap width for a `COLUMNS` value.
pub fn wrap_width(columns: Option<&str>) -> usize {
    let columns = columns
        .and_then(|c| c.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_COLUMNS);
    columns
        .saturating_sub(RIGHT_MARGIN)
        .clamp(MIN_WRAP_WIDTH, MAX_WRAP_WIDTH)
}
