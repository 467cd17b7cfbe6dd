//! Coercion of raw numeric readings
//!
//! Readings arrive from live gestures and may be malformed. They are never
//! rejected; each converter maps the bad cases to its own safe default.

/// A raw reading handed to a converter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialInput<'a> {
    Number(f64),
    Text(&'a str),
    /// No reading at all
    Missing,
}

/// Classification of a reading after parsing
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Coerced {
    Finite(f64),
    PosInfinity,
    NegInfinity,
    Invalid,
}

impl DialInput<'_> {
    pub(crate) fn coerce(self) -> Coerced {
        let value = match self {
            DialInput::Number(value) => value,
            DialInput::Text(text) => match parse_text(text) {
                Some(value) => value,
                None => return Coerced::Invalid,
            },
            DialInput::Missing => return Coerced::Invalid,
        };

        if value.is_finite() {
            Coerced::Finite(value)
        } else if value == f64::INFINITY {
            Coerced::PosInfinity
        } else if value == f64::NEG_INFINITY {
            Coerced::NegInfinity
        } else {
            Coerced::Invalid
        }
    }
}

/// Parse decimal text; `Infinity` is the only accepted non-finite spelling
///
/// Rust's float parser also takes `inf`, `nan` and friends in any case, which
/// are rejected here.
fn parse_text(text: &str) -> Option<f64> {
    let text = text.trim();
    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    let numeric = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeric {
        return None;
    }
    text.parse().ok()
}

impl From<f64> for DialInput<'_> {
    fn from(value: f64) -> Self {
        DialInput::Number(value)
    }
}

impl From<f32> for DialInput<'_> {
    fn from(value: f32) -> Self {
        DialInput::Number(f64::from(value))
    }
}

impl From<i32> for DialInput<'_> {
    fn from(value: i32) -> Self {
        DialInput::Number(f64::from(value))
    }
}

impl From<u32> for DialInput<'_> {
    fn from(value: u32) -> Self {
        DialInput::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for DialInput<'a> {
    fn from(text: &'a str) -> Self {
        DialInput::Text(text)
    }
}

impl<'a> From<&'a String> for DialInput<'a> {
    fn from(text: &'a String) -> Self {
        DialInput::Text(text.as_str())
    }
}

impl<'a, T> From<Option<T>> for DialInput<'a>
where
    T: Into<DialInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(DialInput::Missing, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(DialInput::from(15.5).coerce(), Coerced::Finite(15.5));
        assert_eq!(DialInput::from(-3).coerce(), Coerced::Finite(-3.0));
        assert_eq!(DialInput::from(f64::NAN).coerce(), Coerced::Invalid);
        assert_eq!(DialInput::from(f64::INFINITY).coerce(), Coerced::PosInfinity);
        assert_eq!(DialInput::from(f64::NEG_INFINITY).coerce(), Coerced::NegInfinity);
    }

    #[test]
    fn test_text() {
        assert_eq!(DialInput::from(" 91 ").coerce(), Coerced::Finite(91.0));
        assert_eq!(DialInput::from("-7.5").coerce(), Coerced::Finite(-7.5));
        assert_eq!(DialInput::from("invalid").coerce(), Coerced::Invalid);
        assert_eq!(DialInput::from("").coerce(), Coerced::Invalid);
        assert_eq!(DialInput::from("1e2").coerce(), Coerced::Finite(100.0));
    }

    #[test]
    fn test_text_infinity_spellings() {
        assert_eq!(DialInput::from("Infinity").coerce(), Coerced::PosInfinity);
        assert_eq!(DialInput::from("+Infinity").coerce(), Coerced::PosInfinity);
        assert_eq!(DialInput::from(" -Infinity ").coerce(), Coerced::NegInfinity);
        for text in ["inf", "+infinity", "INF", "NaN", "nan", "infinity"] {
            assert_eq!(DialInput::from(text).coerce(), Coerced::Invalid, "{text}");
        }
    }

    #[test]
    fn test_missing() {
        assert_eq!(DialInput::from(None::<f64>).coerce(), Coerced::Invalid);
        assert_eq!(DialInput::from(Some(4u32)).coerce(), Coerced::Finite(4.0));
    }
}
