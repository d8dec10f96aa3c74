//! Time helpers

/// Parse an "HH:MM" string.
///
/// Accepts a one- or two-digit hour and a two-digit minute, matching the
/// slot strings stored on reservations and settings.
pub fn parse_hhmm(s: &str) -> Option<(u32, u32)> {
    let (h, m) = s.split_once(':')?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return None;
    }
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;
    (hour <= 23 && minute <= 59).then_some((hour, minute))
}

/// Whether the string is a well-formed "HH:MM" time
pub fn is_valid_hhmm(s: &str) -> bool {
    parse_hhmm(s).is_some()
}
