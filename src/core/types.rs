//! Common type definitions used across the codebase

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A single value parsed out of a delimited-text cell.
///
/// Schemas vary per input file, so typing happens per field: anything that
/// parses as a number becomes `Number`, blank cells become `Empty`, the rest
/// stays `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Number(f64),
    Empty,
}

impl Field {
    /// The textual content of this field, if it has any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// One record produced by the tabular loader.
///
/// The closed set of shapes we accept: header CSVs give `Named` rows with
/// fields in column order, headerless data gives `Positional` rows, and a
/// bare message line is carried as `Raw`.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Named(Vec<(String, Field)>),
    Positional(Vec<Field>),
    Raw(String),
}

/// A numeric measurement that may be unavailable.
///
/// Serialized as the number itself or the literal `"N/A"`, matching the
/// artifact format consumers already parse. Deserialization additionally
/// tolerates numbers encoded as strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Value(f64),
    NotApplicable,
}

impl Measurement {
    pub fn value(&self) -> Option<f64> {
        match self {
            Measurement::Value(v) => Some(*v),
            Measurement::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Measurement::Value(_))
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Value(v) => write!(f, "{v}"),
            Measurement::NotApplicable => write!(f, "N/A"),
        }
    }
}

impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Measurement::Value(v) => serializer.serialize_f64(*v),
            Measurement::NotApplicable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for Measurement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MeasurementVisitor;

        impl Visitor<'_> for MeasurementVisitor {
            type Value = Measurement;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number, a numeric string, or \"N/A\"")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Measurement, E> {
                Ok(Measurement::Value(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Measurement, E> {
                Ok(Measurement::Value(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Measurement, E> {
                Ok(Measurement::Value(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Measurement, E> {
                if v == "N/A" {
                    return Ok(Measurement::NotApplicable);
                }
                v.parse::<f64>()
                    .map(Measurement::Value)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(MeasurementVisitor)
    }
}

/// How the mean complexity moved between the buggy and fixed snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityChange {
    Increased,
    Decreased,
    Unchanged,
}

impl ComplexityChange {
    pub fn display_name(&self) -> &'static str {
        match self {
            ComplexityChange::Increased => "increased",
            ComplexityChange::Decreased => "decreased",
            ComplexityChange::Unchanged => "unchanged",
        }
    }
}

/// Per-defect comparison of mean cyclomatic complexity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityRecord {
    pub id: String,
    pub buggy_complexity: f64,
    pub fixed_complexity: f64,
    pub modified_files_complexity: Measurement,
    pub complexity_change: ComplexityChange,
    pub percent_change: f64,
}

/// Change counters plus the per-defect records for one project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub complexity_increased: usize,
    pub complexity_decreased: usize,
    pub complexity_unchanged: usize,
    pub total_defects: usize,
    pub defects: Vec<ComplexityRecord>,
}

/// Change counters aggregated across every project, with derived percentages.
///
/// Percentages are absent until at least one defect has been counted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallSummary {
    pub complexity_increased: usize,
    pub complexity_decreased: usize,
    pub complexity_unchanged: usize,
    pub total_defects: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_increased: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_decreased: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_unchanged: Option<f64>,
}

/// Top-level artifact of the comparison run.
///
/// `by_project` is a `BTreeMap` so serialization order is stable; the
/// configured project names are alphabetical, so this matches the declared
/// processing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResults {
    pub overall: OverallSummary,
    pub by_project: BTreeMap<String, ProjectSummary>,
}

/// Per-project statistics consumed from a prior analysis summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub loc: u64,
    pub defect_count: u64,
    #[serde(deserialize_with = "lenient_f64")]
    pub defect_density: f64,
    pub avg_complexity: Measurement,
}

/// One paired observation fed to the correlation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub complexity: f64,
    pub defect_density: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

impl Strength {
    pub fn classify(r: f64) -> Self {
        if r.abs() > 0.7 {
            Strength::Strong
        } else if r.abs() > 0.4 {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Moderate => "Moderate",
            Strength::Weak => "Weak",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// Reference rule: strictly positive coefficients are `Positive`,
    /// everything else (including exactly zero) is `Negative`.
    pub fn classify(r: f64) -> Self {
        if r > 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Direction::Positive => "Positive",
            Direction::Negative => "Negative",
        }
    }
}

/// Output of the correlation run over the paired series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationResult {
    pub pearson_correlation: f64,
    pub strength: Strength,
    pub direction: Direction,
    pub data: Vec<DataPoint>,
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    struct LenientF64;

    impl Visitor<'_> for LenientF64 {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.parse::<f64>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(LenientF64)
}

/// Round to two decimals, the precision every artifact reports.
///
/// Non-finite values survive rounding unchanged.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_serializes_value_as_number() {
        let json = serde_json::to_string(&Measurement::Value(3.5)).unwrap();
        assert_eq!(json, "3.5");
    }

    #[test]
    fn measurement_serializes_missing_as_sentinel() {
        let json = serde_json::to_string(&Measurement::NotApplicable).unwrap();
        assert_eq!(json, "\"N/A\"");
    }

    #[test]
    fn measurement_deserializes_from_number_and_string() {
        let v: Measurement = serde_json::from_str("12.5").unwrap();
        assert_eq!(v, Measurement::Value(12.5));

        let v: Measurement = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(v, Measurement::Value(12.5));

        let v: Measurement = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(v, Measurement::NotApplicable);
    }

    #[test]
    fn measurement_rejects_garbage_strings() {
        assert!(serde_json::from_str::<Measurement>("\"high\"").is_err());
    }

    #[test]
    fn project_stats_accepts_stringly_numbers() {
        let stats: ProjectStats = serde_json::from_str(
            r#"{"loc": 85000, "defectCount": 174, "defectDensity": "2.05", "avgComplexity": "N/A"}"#,
        )
        .unwrap();
        assert_eq!(stats.defect_density, 2.05);
        assert_eq!(stats.avg_complexity, Measurement::NotApplicable);
    }

    #[test]
    fn complexity_change_serializes_lowercase() {
        let json = serde_json::to_string(&ComplexityChange::Increased).unwrap();
        assert_eq!(json, "\"increased\"");
    }

    #[test]
    fn strength_classification_boundaries() {
        assert_eq!(Strength::classify(0.9), Strength::Strong);
        assert_eq!(Strength::classify(-0.9), Strength::Strong);
        assert_eq!(Strength::classify(0.7), Strength::Moderate);
        assert_eq!(Strength::classify(0.5), Strength::Moderate);
        assert_eq!(Strength::classify(0.4), Strength::Weak);
        assert_eq!(Strength::classify(0.1), Strength::Weak);
    }

    #[test]
    fn round2_keeps_non_finite_values() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert_eq!(round2(4.567), 4.57);
    }
}
