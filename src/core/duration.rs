//! Human-readable elapsed time

/// Format a millisecond count for timer output.
///
/// ```
/// use tagged_logger::core::format_milliseconds;
///
/// assert_eq!(format_milliseconds(999), "999ms");
/// assert_eq!(format_milliseconds(1_500), "1.500s");
/// assert_eq!(format_milliseconds(61_000), "1:01.000 (min:sec.ms)");
/// assert_eq!(format_milliseconds(3_661_000), "1:01:01 (hr:min:sec)");
/// ```
pub fn format_milliseconds(milliseconds: u64) -> String {
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let millis_remainder = milliseconds % 1000;

    if seconds < 1 {
        return format!("{}ms", milliseconds);
    }

    // Sub-second remainder is not padded.
    if minutes < 1 {
        return format!("{}.{}s", seconds, millis_remainder);
    }

    let secs = seconds % 60;
    if hours < 1 {
        return format!("{}:{:02}.{:03} (min:sec.ms)", minutes, secs, millis_remainder);
    }

    format!("{}:{:02}:{:02} (hr:min:sec)", hours, minutes % 60, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(format_milliseconds(0), "0ms");
        assert_eq!(format_milliseconds(999), "999ms");
        assert_eq!(format_milliseconds(1000), "1.0s");
        assert_eq!(format_milliseconds(59_999), "59.999s");
        assert_eq!(format_milliseconds(60_000), "1:00.000 (min:sec.ms)");
        assert_eq!(format_milliseconds(61_000), "1:01.000 (min:sec.ms)");
        assert_eq!(format_milliseconds(3_599_999), "59:59.999 (min:sec.ms)");
        assert_eq!(format_milliseconds(3_600_000), "1:00:00 (hr:min:sec)");
        assert_eq!(format_milliseconds(3_661_000), "1:01:01 (hr:min:sec)");
    }

    #[test]
    fn test_seconds_remainder_not_padded() {
        assert_eq!(format_milliseconds(1_005), "1.5s");
        assert_eq!(format_milliseconds(12_050), "12.50s");
    }

    #[test]
    fn test_hours_drop_milliseconds() {
        assert_eq!(format_milliseconds(3_600_999), "1:00:00 (hr:min:sec)");
        assert_eq!(format_milliseconds(90_061_000), "25:01:01 (hr:min:sec)");
    }
}
