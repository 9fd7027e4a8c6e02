use chrono::Month;

/// The fixed 12-month label sequence used when a snapshot carries no
/// price history to derive the month axis from.
pub const CALENDAR_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Months in which quarterly dividends are assumed to be paid.
pub const QUARTERLY_PAYMENT_MONTHS: [&str; 4] = ["Mar", "Jun", "Sep", "Dec"];

/// Map a month spelling to its 3-letter label.
///
/// Full and abbreviated names in any case parse directly ("January",
/// "jan", "JAN"). Anything else is matched on its first three letters, so
/// "Sept" and "SEPT." both give `"Sep"`. Returns `None` when neither
/// names a month.
pub fn normalize_month_label(label: &str) -> Option<&'static str> {
    month_index(label).map(|idx| CALENDAR_MONTHS[idx])
}

/// Zero-based calendar position of a month label (`"Jan"` → 0), accepting
/// the same spellings as [`normalize_month_label`].
pub fn month_index(label: &str) -> Option<usize> {
    let label = label.trim();
    if let Ok(month) = label.parse::<Month>() {
        return Some(month.number_from_month() as usize - 1);
    }
    let prefix = label.get(..3)?;
    CALENDAR_MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(prefix))
}

/// Owned copy of the fixed calendar sequence.
pub fn calendar_labels() -> Vec<String> {
    CALENDAR_MONTHS.iter().map(|m| m.to_string()).collect()
}
