use core::fmt;
use core::str::FromStr;

use fw_reflect::derive::Reflect;
use fw_reflect::registry::{ConversionError, FromText};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// -----------------------------------------------------------------------------
// Duration

/// A signed span of time with nanosecond precision.
///
/// The text form is a sequence of decimal numbers, each with an optional
/// fraction and a unit suffix, such as `"300ms"`, `"-1.5h"` or `"2h45m"`.
/// Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.
///
/// # Examples
///
/// ```
/// use fw_api::Duration;
///
/// let d: Duration = "1h30m".parse().unwrap();
/// assert_eq!(d.as_secs_f64(), 5400.0);
/// assert_eq!(d.to_string(), "1h30m0s");
/// ```
#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[reflect(opaque, auto_register)]
pub struct Duration {
    nanos: i64,
}

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1000 * NANOSECOND;
const MILLISECOND: u64 = 1000 * MICROSECOND;
const SECOND: u64 = 1000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Magnitude of `i64::MIN`, the largest value a sign may be applied to.
const MAX_MAGNITUDE: u64 = 1 << 63;

impl Duration {
    pub const ZERO: Self = Self { nanos: 0 };

    #[inline]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self {
            nanos: secs.saturating_mul(SECOND as i64),
        }
    }

    #[inline]
    pub const fn as_nanos(&self) -> i64 {
        self.nanos
    }

    #[inline]
    pub fn as_secs_f64(&self) -> f64 {
        self.nanos as f64 / SECOND as f64
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.nanos < 0
    }

    /// Convert to an unsigned [`core::time::Duration`], or `None` if negative.
    pub fn to_std(&self) -> Option<core::time::Duration> {
        u64::try_from(self.nanos)
            .ok()
            .map(core::time::Duration::from_nanos)
    }
}

impl From<core::time::Duration> for Duration {
    fn from(value: core::time::Duration) -> Self {
        Self {
            nanos: i64::try_from(value.as_nanos()).unwrap_or(i64::MAX),
        }
    }
}

// -----------------------------------------------------------------------------
// Parsing

/// Why a text is not a valid duration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseDurationError {
    #[error("invalid duration")]
    Invalid,
    #[error("missing unit in duration")]
    MissingUnit,
    #[error("unknown unit {0:?} in duration")]
    UnknownUnit(String),
    #[error("duration out of range")]
    Overflow,
}

fn unit_scale(unit: &str) -> Option<u64> {
    Some(match unit {
        "ns" => NANOSECOND,
        "us" | "µs" | "μs" => MICROSECOND,
        "ms" => MILLISECOND,
        "s" => SECOND,
        "m" => MINUTE,
        "h" => HOUR,
        _ => return None,
    })
}

/// Split the leading decimal digits off `s`.
fn leading_int(s: &str) -> Result<(u64, &str), ParseDurationError> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    for digit in s[..end].bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit - b'0')))
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(ParseDurationError::Overflow)?;
    }
    Ok((value, &s[end..]))
}

/// Split the leading fraction digits off `s`, returning `(digits, scale, rest)`
/// where the fraction is `digits / scale`. Digits past `u64` precision are
/// dropped.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for digit in s[..end].bytes() {
        if overflow {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit - b'0')))
        {
            Some(v) => {
                value = v;
                scale *= 10.0;
            }
            None => overflow = true,
        }
    }
    (value, scale, &s[end..])
}

fn parse_duration(text: &str) -> Result<Duration, ParseDurationError> {
    let (negative, mut s) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(ParseDurationError::Invalid);
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(ParseDurationError::Invalid);
        }

        let before = s.len();
        let (int, rest) = leading_int(s)?;
        let has_int = rest.len() != before;
        s = rest;

        let (mut frac, mut scale, mut has_frac) = (0, 1.0, false);
        if let Some(rest) = s.strip_prefix('.') {
            let before = rest.len();
            (frac, scale, s) = leading_fraction(rest);
            has_frac = s.len() != before;
        }
        if !has_int && !has_frac {
            return Err(ParseDurationError::Invalid);
        }

        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(ParseDurationError::MissingUnit);
        }
        let (unit, rest) = s.split_at(unit_len);
        s = rest;
        let scale_ns =
            unit_scale(unit).ok_or_else(|| ParseDurationError::UnknownUnit(unit.to_owned()))?;

        let mut value = int
            .checked_mul(scale_ns)
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(ParseDurationError::Overflow)?;
        if frac > 0 {
            value = value
                .checked_add((frac as f64 * (scale_ns as f64 / scale)) as u64)
                .filter(|v| *v <= MAX_MAGNITUDE)
                .ok_or(ParseDurationError::Overflow)?;
        }
        total = total
            .checked_add(value)
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(ParseDurationError::Overflow)?;
    }

    let nanos = if negative {
        0i64.checked_sub_unsigned(total)
    } else {
        i64::try_from(total).ok()
    };
    nanos
        .map(Duration::from_nanos)
        .ok_or(ParseDurationError::Overflow)
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}

impl FromText for Duration {
    fn from_text(text: &str) -> Result<Self, ConversionError> {
        parse_duration(text)
            .map_err(|err| ConversionError::new(text, "Duration").with_reason(err.to_string()))
    }
}

// -----------------------------------------------------------------------------
// Formatting

/// Write `value / 10^prec` with trailing zeros of the fraction removed.
fn fmt_frac(f: &mut fmt::Formatter<'_>, value: u64, prec: u32) -> fmt::Result {
    let pow = 10u64.pow(prec);
    let (int, mut frac) = (value / pow, value % pow);
    write!(f, "{int}")?;
    if frac != 0 {
        let mut width = prec as usize;
        while frac % 10 == 0 {
            frac /= 10;
            width -= 1;
        }
        write!(f, ".{frac:0width$}")?;
    }
    Ok(())
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanos == 0 {
            return f.write_str("0s");
        }
        if self.nanos < 0 {
            f.write_str("-")?;
        }
        let u = self.nanos.unsigned_abs();

        if u < MICROSECOND {
            return write!(f, "{u}ns");
        }
        if u < MILLISECOND {
            fmt_frac(f, u, 3)?;
            return f.write_str("µs");
        }
        if u < SECOND {
            fmt_frac(f, u, 6)?;
            return f.write_str("ms");
        }

        let hours = u / HOUR;
        let minutes = (u % HOUR) / MINUTE;
        if hours > 0 {
            write!(f, "{hours}h")?;
        }
        if u >= MINUTE {
            write!(f, "{minutes}m")?;
        }
        fmt_frac(f, u % MINUTE, 9)?;
        f.write_str("s")
    }
}

// -----------------------------------------------------------------------------
// Serde

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <alloc::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        parse_duration(&text).map_err(serde::de::Error::custom)
    }
}

// -----------------------------------------------------------------------------
// Tests
