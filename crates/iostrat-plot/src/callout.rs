// iostrat - I/O strategy benchmark summariser
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text of the minimum-duration callouts.
//!
//! Durations of at least [`SECONDS_THRESHOLD`] are shown in seconds,
//! shorter ones in milliseconds. Both branches use
//! [`SIGNIFICANT_FIGURES`] significant figures, so every label on a chart
//! carries the same precision.

/// Smallest duration, in seconds, rendered in seconds rather than
/// milliseconds. Inclusive.
pub const SECONDS_THRESHOLD: f64 = 0.1;

/// Significant figures in callout labels.
pub const SIGNIFICANT_FIGURES: usize = 3;

/// Format a duration in seconds as a callout label.
///
/// # Examples
///
/// ```
/// use iostrat_plot::format_duration;
///
/// assert_eq!(format_duration(0.099), "99.0ms");
/// assert_eq!(format_duration(0.1), "0.1s");
/// assert_eq!(format_duration(1.6), "1.6s");
/// assert_eq!(format_duration(0.0069), "6.9ms");
/// ```
pub fn format_duration(seconds: f64) -> String {
    if seconds >= SECONDS_THRESHOLD {
        format!("{}s", format_significant(seconds, SIGNIFICANT_FIGURES))
    } else {
        format!(
            "{}ms",
            format_significant(seconds * 1000.0, SIGNIFICANT_FIGURES)
        )
    }
}

/// Format a number with at most `digits` significant figures.
///
/// Trailing zeros in the fraction are dropped, but a whole number with
/// fewer than `digits` significant figures keeps one fractional digit
/// (`99.0`, not `99`). Very small or very large magnitudes switch to
/// exponent notation (`1.23e-05`, `4.5e+03`).
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);

    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    // Rounding to `digits` figures first tells us the decimal exponent of
    // the rounded value, including carries such as 9.996 -> 1.00e1.
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        );
    }

    let decimals = (digits as i32 - 1 - exponent) as usize;
    let fixed = format!("{:.*}", decimals, value);
    let trimmed = trim_fraction(&fixed);

    if !trimmed.contains('.') && significant_digits(trimmed) < digits {
        format!("{}.0", trimmed)
    } else {
        trimmed.to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn significant_digits(integer: &str) -> usize {
    integer
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|c| *c == '0')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_uses_milliseconds() {
        assert_eq!(format_duration(0.099), "99.0ms");
        assert_eq!(format_duration(0.069), "69.0ms");
        assert_eq!(format_duration(0.0123456), "12.3ms");
    }

    #[test]
    fn test_threshold_is_inclusive_on_seconds_side() {
        assert_eq!(format_duration(0.1), "0.1s");
        assert!(format_duration(0.09999).ends_with("ms"));
    }

    #[test]
    fn test_seconds_three_significant_figures() {
        assert_eq!(format_duration(1.6), "1.6s");
        assert_eq!(format_duration(1.595), "1.59s");
        assert_eq!(format_duration(1.5951), "1.6s");
        assert_eq!(format_duration(12.345), "12.3s");
        assert_eq!(format_duration(0.25), "0.25s");
        assert_eq!(format_duration(0.123456), "0.123s");
    }

    #[test]
    fn test_whole_numbers_keep_one_fractional_digit() {
        assert_eq!(format_significant(2.0, 3), "2.0");
        assert_eq!(format_significant(45.0, 3), "45.0");
        assert_eq!(format_significant(100.0, 3), "100");
        assert_eq!(format_significant(250.0, 3), "250");
    }

    #[test]
    fn test_carry_into_next_decade() {
        assert_eq!(format_significant(9.9996, 3), "10.0");
        assert_eq!(format_significant(99.96, 3), "100");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(format_significant(0.0000123456, 3), "1.23e-05");
        assert_eq!(format_significant(4500.0, 3), "4.5e+03");
    }

    #[test]
    fn test_zero_and_non_finite() {
        assert_eq!(format_duration(0.0), "0.0ms");
        assert_eq!(format_significant(f64::NAN, 3), "NaN");
    }
}
