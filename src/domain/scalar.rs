use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::format_utils::{format_number, quote_text};

/// A single value handed to the plotting engine.
///
/// `Display` renders the value the way gnuplot reads it: `Text` is quoted,
/// `Raw` is a bare engine word, `Range` becomes `[lo:hi]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
    Raw(String),
    Range(f64, f64),
}

impl Scalar {
    /// Bare engine word, e.g. `boxes` or `fill solid`.
    pub fn raw(word: impl Into<String>) -> Self {
        Scalar::Raw(word.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Scalar::Text(text.into())
    }

    pub fn range(low: f64, high: f64) -> Self {
        Scalar::Range(low, high)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) | Scalar::Raw(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<(f64, f64)> {
        match self {
            Scalar::Range(lo, hi) => Some((*lo, *hi)),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", format_number(*x)),
            Scalar::Text(s) => write!(f, "{}", quote_text(s)),
            Scalar::Raw(s) => write!(f, "{}", s),
            Scalar::Range(lo, hi) => write!(f, "[{}:{}]", format_number(*lo), format_number(*hi)),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<(f64, f64)> for Scalar {
    fn from((lo, hi): (f64, f64)) -> Self {
        Scalar::Range(lo, hi)
    }
}

/// One argument of a `set` call after expansion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Token {
    /// Bare flag, e.g. `rotate`
    Flag(String),
    /// Plain value, e.g. `[0.0:50.0]`
    Positional(Scalar),
    /// `name=value` pair, rendered by gnuplot as `name value`
    Named(String, Scalar),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Flag(name) => write!(f, "{}", engine_word(name)),
            Token::Positional(value) => write!(f, "{}", value),
            Token::Named(name, value) => write!(f, "{} {}", engine_word(name), value),
        }
    }
}

/// Keys and flag names are written with underscores (`fc_rgb`, `fill_solid`);
/// gnuplot wants the words separated by spaces.
pub fn engine_word(name: &str) -> String {
    name.replace('_', " ")
}
