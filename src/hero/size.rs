//! Image size strings (`"1680 510"`) to numeric dimensions.
//!
//! Parsing is syntactic only and never fails: tokens that are not numbers
//! become `NaN`, which later shows up verbatim in `width`/`height` attributes.

use std::fmt;

/// Pixel dimensions of one image variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDimensions {
    pub width: f64,
    pub height: f64,
}

impl ImageDimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Parse `"<width> <height>"`, split on single spaces.
    ///
    /// A missing token yields `NaN`; an empty token (e.g. from a doubled
    /// space) yields `0`.
    pub fn parse(size: &str) -> Self {
        let mut tokens = size.split(' ');
        let width = tokens.next().map_or(f64::NAN, number);
        let height = tokens.next().map_or(f64::NAN, number);
        Self { width, height }
    }

    /// Both dimensions are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Width divided by height (`NaN` when undefined).
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", format_number(self.width), format_number(self.height))
    }
}

/// Convert a token to a number the way a browser's `Number(token)` does.
pub fn number(token: &str) -> f64 {
    let token = token.trim();
    if token.is_empty() {
        return 0.0;
    }

    match token {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = radix_literal(token) {
        return value;
    }

    // Rust accepts `inf`/`nan` spellings that browsers reject
    if token
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    token.parse().unwrap_or(f64::NAN)
}

/// `0x1F`, `0o17`, `0b101` (unsigned only).
fn radix_literal(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &token[2..];
    if digits.starts_with(['+', '-']) {
        return Some(f64::NAN);
    }
    Some(
        u64::from_str_radix(digits, radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN),
    )
}

/// Format a number the way it would appear in a rendered attribute:
/// integers without a fraction, `NaN`, `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        // Covers -0 as well
        "0".to_string()
    } else {
        value.to_string()
    }
}
