//! Time unit conversion

/// Nanoseconds in one millisecond
pub const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Convert a nanosecond value to milliseconds
#[inline]
pub fn nanos_to_millis(nanos: f64) -> f64 {
    nanos / NANOS_PER_MILLI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanos_to_millis() {
        assert_eq!(nanos_to_millis(2_000_000.0), 2.0);
        assert_eq!(nanos_to_millis(1_500.0), 0.0015);
        assert_eq!(nanos_to_millis(0.0), 0.0);
    }
}
