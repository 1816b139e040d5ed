//! Per-column statistics

use crate::shared::models::{Column, Value};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Statistics of a single column under its resolved type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub type_name: String,
    pub count: usize,
    pub n_missing: usize,
    pub n_unique: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub n_zeros: usize,
    pub n_negative: usize,
}

/// Character-level statistics of a text column.
///
/// `category_counts` uses coarse classes: letter, digit, whitespace,
/// punctuation, symbol, other.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TextSummary {
    pub length_counts: BTreeMap<usize, usize>,
    pub character_counts: BTreeMap<char, usize>,
    pub category_counts: BTreeMap<String, usize>,
}

impl SeriesSummary {
    /// Counts shared by every type
    pub fn generic(type_name: &str, column: &Column) -> Self {
        let n_missing = column.null_count();
        let n_unique = column
            .non_null()
            .map(ToString::to_string)
            .collect::<HashSet<_>>()
            .len();

        Self {
            type_name: type_name.to_string(),
            count: column.len() - n_missing,
            n_missing,
            n_unique,
            numeric: None,
            text: None,
        }
    }

    /// Generic counts plus [`NumericSummary`] over int and float cells
    pub fn numeric(type_name: &str, column: &Column) -> Self {
        Self {
            numeric: NumericSummary::from_column(column),
            ..Self::generic(type_name, column)
        }
    }

    /// Generic counts plus [`TextSummary`] over string cells
    pub fn text(type_name: &str, column: &Column) -> Self {
        Self {
            text: Some(TextSummary::from_column(column)),
            ..Self::generic(type_name, column)
        }
    }
}

impl NumericSummary {
    /// `None` when the column holds no numeric value.
    pub fn from_column(column: &Column) -> Option<Self> {
        let numbers: Vec<f64> = column
            .non_null()
            .filter(|v| matches!(v, Value::Int(_) | Value::Float(_)))
            .filter_map(Value::as_float)
            .collect();

        if numbers.is_empty() {
            return None;
        }

        let (min, max) = numbers
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        Some(Self {
            min,
            max,
            mean: numbers.iter().sum::<f64>() / numbers.len() as f64,
            n_zeros: numbers.iter().filter(|&&x| x == 0.0).count(),
            n_negative: numbers.iter().filter(|&&x| x < 0.0).count(),
        })
    }
}

impl TextSummary {
    pub fn from_column(column: &Column) -> Self {
        let mut summary = Self::default();

        for s in column.non_null().filter_map(Value::as_str) {
            *summary.length_counts.entry(s.chars().count()).or_default() += 1;
            for c in s.chars() {
                *summary.character_counts.entry(c).or_default() += 1;
            }
        }

        for (&c, &n) in &summary.character_counts {
            *summary
                .category_counts
                .entry(char_category(c).to_string())
                .or_default() += n;
        }

        summary
    }
}

fn char_category(c: char) -> &'static str {
    if c.is_alphabetic() {
        "letter"
    } else if c.is_numeric() {
        "digit"
    } else if c.is_whitespace() {
        "whitespace"
    } else if c.is_control() {
        "other"
    } else if "$+<=>^`|~".contains(c) {
        "symbol"
    } else if c.is_ascii_punctuation() {
        "punctuation"
    } else {
        "other"
    }
}
