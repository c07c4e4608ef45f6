//! Compact, human-readable duration text such as `1.234s` or `2m3.5s`.
//!
//! This is the on-disk format of the highscore file, so formatting and
//! parsing must agree with each other and with files written by earlier
//! versions.

use std::time::Duration;

use crate::error::{Error, Result};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

/// Format with the largest fitting unit below one second, and as
/// `[h]h[m]m[s.frac]s` above it. Trailing fractional zeros are dropped.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();

    match nanos {
        0 => "0s".to_string(),
        n if n < NANOS_PER_MICRO => format!("{n}ns"),
        n if n < NANOS_PER_MILLI => format!("{}µs", decimal(n, NANOS_PER_MICRO)),
        n if n < NANOS_PER_SEC => format!("{}ms", decimal(n, NANOS_PER_MILLI)),
        n => {
            let hours = n / NANOS_PER_HOUR;
            let minutes = n % NANOS_PER_HOUR / NANOS_PER_MIN;
            let seconds = decimal(n % NANOS_PER_MIN, NANOS_PER_SEC);

            if hours > 0 {
                format!("{hours}h{minutes}m{seconds}s")
            } else if minutes > 0 {
                format!("{minutes}m{seconds}s")
            } else {
                format!("{seconds}s")
            }
        }
    }
}

fn decimal(value: u128, unit: u128) -> String {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return whole.to_string();
    }

    let width = unit.ilog10() as usize;
    let digits = format!("{frac:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MIN),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Parse a sequence of `<number>[.<fraction>]<unit>` terms, e.g. `1h2m3.5s`.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let malformed = |reason: &'static str| Error::MalformedDuration {
        input: input.to_string(),
        reason,
    };

    let mut rest = input;
    if rest.starts_with('-') {
        return Err(malformed("negative durations are not allowed"));
    }
    if let Some(unsigned) = rest.strip_prefix('+') {
        rest = unsigned;
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(malformed("empty duration"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after) = split_digits(rest);
        let (frac, after) = match after.strip_prefix('.') {
            Some(after) => split_digits(after),
            None => ("", after),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(malformed("expected a number"));
        }

        let unit_end = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_end);
        let scale = match unit_nanos(unit) {
            Some(scale) => scale,
            None if unit.is_empty() => return Err(malformed("missing unit")),
            None => return Err(malformed("unknown unit")),
        };

        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| malformed("number out of range"))?
        };
        let mut term = whole
            .checked_mul(scale)
            .ok_or_else(|| malformed("duration out of range"))?;

        let mut place = scale;
        for digit in frac.bytes() {
            place /= 10;
            if place == 0 {
                break;
            }
            term = term
                .checked_add(u128::from(digit - b'0') * place)
                .ok_or_else(|| malformed("duration out of range"))?;
        }

        total = total
            .checked_add(term)
            .ok_or_else(|| malformed("duration out of range"))?;
        rest = after;
    }

    u64::try_from(total)
        .map(Duration::from_nanos)
        .map_err(|_| malformed("duration out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_format_sub_second_units() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_nanos(950)), "950ns");
        assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.5µs");
        assert_eq!(format_duration(Duration::from_micros(12_345)), "12.345ms");
        assert_eq!(format_duration(Duration::from_millis(750)), "750ms");
    }

    #[test]
    fn test_format_seconds_and_up() {
        assert_eq!(format_duration(Duration::from_millis(1_234)), "1.234s");
        assert_eq!(format_duration(Duration::from_secs(42)), "42s");
        assert_eq!(format_duration(Duration::from_millis(123_500)), "2m3.5s");
        assert_eq!(format_duration(Duration::from_secs(120)), "2m0s");
        assert_eq!(format_duration(Duration::from_secs(3_600)), "1h0m0s");
        assert_eq!(format_duration(Duration::from_nanos(1_000_000_001)), "1.000000001s");
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_duration("1.234s").unwrap(), Duration::from_millis(1_234));
        assert_eq!(parse_duration("750ms").unwrap(), Duration::from_millis(750));
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("+5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_compound() {
        assert_eq!(
            parse_duration("1h2m3.5s").unwrap(),
            Duration::from_millis(3_723_500)
        );
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_parse_micro_spellings() {
        let expected = Duration::from_nanos(2_500);
        assert_eq!(parse_duration("2.5us").unwrap(), expected);
        assert_eq!(parse_duration("2.5µs").unwrap(), expected);
        assert_eq!(parse_duration("2.5μs").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "-1s",
            "12",
            "1x",
            "s",
            "1.2.3s",
            "abc",
            "340282366920938463463374607431.9s",
            "18446744073709551616ns",
        ] {
            assert_matches!(
                parse_duration(bad),
                Err(Error::MalformedDuration { .. }),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_formatted_values_parse_back() {
        for d in [
            Duration::from_millis(1_234),
            Duration::from_millis(123_500),
            Duration::from_secs(3_600),
            Duration::from_nanos(987_654_321),
        ] {
            assert_eq!(parse_duration(&format_duration(d)).unwrap(), d);
        }
    }
}
