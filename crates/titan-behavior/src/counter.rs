//! Animated statistic counters.
//!
//! A counter counts from zero up to its target with an ease-out-quart
//! curve. Large targets are abbreviated (`2.5M`) or grouped with
//! thousands separators (`12,500`). The suffix only appears on the
//! final frame so that e.g. `+` or `%` lands with the last value.

/// Parse an integer the way `parseInt(text, 10)` does.
///
/// Leading whitespace and an optional sign are accepted; parsing stops
/// at the first non-digit. Returns `None` when no digit was found.
/// Digit runs beyond the `i64` range clamp to `i64::MAX` in magnitude.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // Only overflow can fail here: the run is all ASCII digits.
    let magnitude: i64 = rest[..digits].parse().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Ease-out-quart: fast start, gentle landing.
#[must_use]
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Render `value` the way a counter with `target` displays it.
#[must_use]
pub fn format_display(value: i64, target: i64) -> String {
    if target >= 1_000_000 {
        #[allow(clippy::cast_precision_loss)]
        let millions = value as f64 / 1e6;
        format!("{}M", one_decimal(millions))
    } else if target >= 1000 {
        group_thousands(value)
    } else {
        value.to_string()
    }
}

/// `x` with one decimal, rounding the exact binary value of `x` and
/// breaking true ties away from zero.
///
/// `1.15` is stored as `1.1499999...` and so becomes `1.1`, while the
/// exactly representable `1.25` becomes `1.3`.
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn one_decimal(x: f64) -> String {
    // A tie sits exactly halfway between tenths. The only such doubles
    // are odd multiples of 0.25, for which scaling by 4 and 10 is exact.
    let quarters = x * 4.0;
    if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
        let tenths = (x.abs() * 10.0).ceil() as u64;
        let sign = if x < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{}", tenths / 10, tenths % 10);
    }
    format!("{x:.1}")
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The content of one counter element, read from its data attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: i64,
    pub prefix: String,
    pub suffix: String,
}

/// One rendered animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    /// No further frames are needed.
    pub finished: bool,
}

impl CounterSpec {
    /// Build from `data-target`, `data-prefix` and `data-suffix`.
    ///
    /// Returns `None` when the target is missing or not a number.
    #[must_use]
    pub fn from_data(
        target: Option<&str>,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> Option<Self> {
        Some(Self {
            target: parse_leading_int(target?)?,
            prefix: prefix.unwrap_or_default().to_owned(),
            suffix: suffix.unwrap_or_default().to_owned(),
        })
    }

    /// The frame to show `elapsed_ms` into an animation of `duration_ms`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn frame(&self, elapsed_ms: f64, duration_ms: f64) -> CounterFrame {
        let progress = if duration_ms > 0.0 {
            (elapsed_ms / duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return CounterFrame {
                text: format!(
                    "{}{}{}",
                    self.prefix,
                    format_display(self.target, self.target),
                    self.suffix
                ),
                finished: true,
            };
        }
        let value = (ease_out_quart(progress) * self.target as f64).floor() as i64;
        CounterFrame {
            text: format!("{}{}", self.prefix, format_display(value, self.target)),
            finished: false,
        }
    }
}
