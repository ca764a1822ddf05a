//! Types for fact extraction
//!
//! A `Fact` is one quantitative assertion found in a document, keyed by a
//! masked fingerprint of the text around it.

use serde::{Deserialize, Serialize};

/// Kind of quantitative assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactKind {
    /// `$5 million`, `$1,200.50`, `$3k`
    MonetaryAmount,
    /// `12 vehicles`, `40 acres`
    UnitCount,
}

/// One extracted assertion. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fact {
    kind: FactKind,
    context_key: String,
    value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    raw_text: String,
    source_document: String,
}

impl Fact {
    /// Create a monetary fact. Returns `None` unless `value` is finite and non-negative.
    pub fn monetary(
        context_key: String,
        value: f64,
        raw_text: impl Into<String>,
        source_document: impl Into<String>,
    ) -> Option<Self> {
        Self::new(FactKind::MonetaryAmount, context_key, value, None, raw_text, source_document)
    }

    /// Create a unit-count fact. Returns `None` unless `value` is finite and non-negative.
    pub fn unit_count(
        context_key: String,
        value: f64,
        unit: impl Into<String>,
        raw_text: impl Into<String>,
        source_document: impl Into<String>,
    ) -> Option<Self> {
        Self::new(
            FactKind::UnitCount,
            context_key,
            value,
            Some(unit.into()),
            raw_text,
            source_document,
        )
    }

    fn new(
        kind: FactKind,
        context_key: String,
        value: f64,
        unit: Option<String>,
        raw_text: impl Into<String>,
        source_document: impl Into<String>,
    ) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(Self {
            kind,
            context_key,
            // -0.0 and 0.0 must count as one distinct value.
            value: if value == 0.0 { 0.0 } else { value },
            unit,
            raw_text: raw_text.into(),
            source_document: source_document.into(),
        })
    }

    pub fn kind(&self) -> FactKind {
        self.kind
    }

    pub fn context_key(&self) -> &str {
        &self.context_key
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit noun for `UnitCount` facts; `None` for money.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn source_document(&self) -> &str {
        &self.source_document
    }

    /// Human-readable rendering of the normalized value.
    pub fn display_value(&self) -> String {
        match (self.kind, self.unit.as_deref()) {
            (FactKind::MonetaryAmount, _) => format!("${}", format_number(self.value)),
            (FactKind::UnitCount, Some(unit)) => format!("{} {}", format_number(self.value), unit),
            (FactKind::UnitCount, None) => format_number(self.value),
        }
    }
}

/// Format with thousands separators; fractional values keep two decimals.
pub fn format_number(value: f64) -> String {
    // Whole values skip the cents arithmetic, which overflows near f64::MAX.
    if value.fract() == 0.0 {
        return group_thousands(&format!("{:.0}", value));
    }

    let rounded = (value * 100.0).round() / 100.0;
    let whole = rounded.trunc();
    let fraction = rounded - whole;
    let grouped = group_thousands(&format!("{:.0}", whole));

    if fraction.abs() < f64::EPSILON {
        grouped
    } else {
        let cents = format!("{:.2}", fraction);
        format!("{}{}", grouped, cents.trim_start_matches('0'))
    }
}

/// Insert `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
