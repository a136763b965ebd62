//! Comment annotation heuristics
//!
//! Parameters are described by free-text comments such as
//!
//! ```text
//! # Type: Int
//! # Possible Values: 0=CUBE030, 1=CUBE040, 2=STATION
//! # Default: 0
//! # Meaning: Machine type
//! ```
//!
//! Each annotation is matched independently over the whole comment block;
//! the first line matching an annotation supplies its text.

use crate::types::ParameterType;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Annotation {
    Type,
    PossibleValues,
    Default,
    Meaning,
}

const ANNOTATION_PATTERNS: [(Annotation, &str); 4] = [
    (Annotation::Type, r"(?i)Type:\s*(\w+)"),
    (Annotation::PossibleValues, r"(?i)Possible Values:\s*(.+)"),
    (Annotation::Default, r"(?i)Default:\s*(.+)"),
    (Annotation::Meaning, r"(?i)Meaning:\s*(.+)"),
];

fn annotation_regexes() -> &'static [(Annotation, Regex)] {
    static REGEXES: OnceLock<Vec<(Annotation, Regex)>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        ANNOTATION_PATTERNS
            .iter()
            .map(|(kind, pattern)| {
                (
                    *kind,
                    Regex::new(pattern).expect("annotation pattern is valid"),
                )
            })
            .collect()
    })
}

fn range_regex() -> &'static Regex {
    static RANGE: OnceLock<Regex> = OnceLock::new();
    RANGE.get_or_init(|| Regex::new(r"^[0-9]+\s*-\s*[0-9]+$").expect("range pattern is valid"))
}

fn range_bounds_regex() -> &'static Regex {
    static BOUNDS: OnceLock<Regex> = OnceLock::new();
    BOUNDS.get_or_init(|| {
        Regex::new(r"(?i)Possible Values:\s*([0-9]+)\s*-\s*([0-9]+)").expect("bounds pattern is valid")
    })
}

/// Annotation texts found in one parameter's comment block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    pub type_name: Option<String>,
    pub possible_values: Option<String>,
    pub default: Option<String>,
    pub meaning: Option<String>,
}

impl Annotations {
    pub fn scan(comments: &[String]) -> Self {
        let mut found = Self::default();

        for (kind, regex) in annotation_regexes() {
            let text = comments
                .iter()
                .find_map(|comment| regex.captures(comment))
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string());

            match kind {
                Annotation::Type => found.type_name = text,
                Annotation::PossibleValues => found.possible_values = text,
                Annotation::Default => found.default = text,
                Annotation::Meaning => found.meaning = text,
            }
        }

        found
    }

    /// Type named by the `Type:` annotation, `string` when absent or unknown
    pub fn declared_type(&self) -> ParameterType {
        self.type_name
            .as_deref()
            .map(type_from_name)
            .unwrap_or(ParameterType::String)
    }

    /// Type signal carried by the `Possible Values:` annotation
    pub fn values_signal(&self) -> Option<ValuesSignal> {
        self.possible_values.as_deref().and_then(parse_possible_values)
    }
}

/// Map a `Type:` word to a parameter type
pub fn type_from_name(name: &str) -> ParameterType {
    match name.to_lowercase().as_str() {
        "bool" | "boolean" => ParameterType::Boolean,
        "int" | "integer" | "float" | "double" | "key" => ParameterType::Number,
        _ => ParameterType::String,
    }
}

/// What a `Possible Values:` annotation says about a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValuesSignal {
    /// `X-Y`, bounds are read separately
    Range,
    /// Listed values with parallel display labels
    Enum {
        values: Vec<String>,
        labels: Vec<String>,
    },
}

impl ValuesSignal {
    /// Exactly the two values TRUE and FALSE, in any case and order
    pub fn is_true_false_pair(&self) -> bool {
        let Self::Enum { values, .. } = self else {
            return false;
        };
        let [a, b] = values.as_slice() else {
            return false;
        };
        let (a, b) = (a.to_uppercase(), b.to_uppercase());
        (a == "TRUE" && b == "FALSE") || (a == "FALSE" && b == "TRUE")
    }
}

/// Interpret the text after `Possible Values:`
///
/// Lists are split on commas, or on slashes when no comma is present.
/// `value=Label` entries carry a display label. Text that is neither a
/// range nor a list gives no signal.
pub fn parse_possible_values(text: &str) -> Option<ValuesSignal> {
    let text = text.trim();

    if range_regex().is_match(text) {
        return Some(ValuesSignal::Range);
    }

    let separator = if text.contains(',') {
        ','
    } else if text.contains('/') {
        '/'
    } else {
        return None;
    };

    let (values, labels): (Vec<String>, Vec<String>) = text
        .split(separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            if token.contains('=') {
                let mut parts = token.split('=').map(str::trim);
                let value = parts.next().unwrap_or_default().to_string();
                let label = parts.next().unwrap_or_default().to_string();
                (value, label)
            } else {
                (token.to_string(), token.to_string())
            }
        })
        .unzip();

    if values.is_empty() {
        None
    } else {
        Some(ValuesSignal::Enum { values, labels })
    }
}

/// Numeric bounds from a `Possible Values: X-Y` comment; the last match wins
///
/// `None` when no comment carries bounds that fit in an `i64`.
pub fn range_bounds(comments: &[String]) -> Option<(i64, i64)> {
    comments
        .iter()
        .filter_map(|comment| range_bounds_regex().captures(comment))
        .filter_map(|caps| {
            let min = caps.get(1)?.as_str().parse().ok()?;
            let max = caps.get(2)?.as_str().parse().ok()?;
            Some((min, max))
        })
        .last()
}
