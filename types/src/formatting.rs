//! Time formatting for timeline output.
//!
//! Timeline positions are normalized milliseconds and may be negative when
//! the upstream event source reports events before the pull offset.

/// Format a timeline position as `M:SS.s`.
///
/// Negative positions get a leading `-`.
///
/// # Examples
/// ```
/// use buffline_types::formatting::format_timestamp;
/// assert_eq!(format_timestamp(0), "0:00.0");
/// assert_eq!(format_timestamp(61_250), "1:01.3");
/// assert_eq!(format_timestamp(-1_500), "-0:01.5");
/// ```
pub fn format_timestamp(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    // Round to tenths before splitting so 59_960 becomes 1:00.0, not 0:60.0
    let tenths = (ms.unsigned_abs() + 50) / 100;
    let secs = tenths / 10;
    format!("{}{}:{:02}.{}", sign, secs / 60, secs % 60, tenths % 10)
}

/// Format an interval length in milliseconds as seconds with one decimal.
///
/// # Examples
/// ```
/// use buffline_types::formatting::format_span;
/// assert_eq!(format_span(4_000), "4.0s");
/// assert_eq!(format_span(1_500), "1.5s");
/// ```
pub fn format_span(ms: i64) -> String {
    format!("{:.1}s", ms as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "0:00.0");
        assert_eq!(format_timestamp(1_000), "0:01.0");
        assert_eq!(format_timestamp(8_000), "0:08.0");
        assert_eq!(format_timestamp(61_250), "1:01.3");
        assert_eq!(format_timestamp(59_960), "1:00.0");
    }

    #[test]
    fn test_format_timestamp_negative() {
        assert_eq!(format_timestamp(-1_500), "-0:01.5");
        assert_eq!(format_timestamp(-61_000), "-1:01.0");
    }

    #[test]
    fn test_format_span() {
        assert_eq!(format_span(0), "0.0s");
        assert_eq!(format_span(4_000), "4.0s");
        assert_eq!(format_span(-500), "-0.5s");
    }
}
