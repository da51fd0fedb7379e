// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value formatting for tooltips, static labels, and tick labels.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

/// Formats a raw value for display.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Returns the formatter used when none is configured ([`format_value`]).
pub fn default_value_formatter() -> ValueFormatter {
    Arc::new(format_value)
}

/// Formats a value with the shortest representation that round-trips.
///
/// Integral values print without a fractional part and negative zero prints as `0`.
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        return String::from("0");
    }
    alloc::format!("{v}")
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn formats_integral_and_fractional_values() {
        assert_eq!(format_value(50.0), "50");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(-1.5), "-1.5");
    }

    #[test]
    fn default_formatter_matches_format_value() {
        let f = default_value_formatter();
        assert_eq!(f(12.0), format_value(12.0));
    }
}
