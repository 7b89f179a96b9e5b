//! Dataset schema definitions.

use serde::{Deserialize, Serialize};

/// A numeric field as it appears on the wire: number or string.
///
/// Source data mixes both; coercion rules live on [`FlowRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Num(f64),
    Text(String),
}

/// One origin→destination commute record, as loaded.
///
/// Wire field names (`home`, `work`, `value`, ...) are preserved for
/// round-tripping the original document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRecord {
    #[serde(rename = "home")]
    pub origin: String,

    #[serde(rename = "work")]
    pub destination: String,

    #[serde(default)]
    pub group: Option<String>,

    /// Backfilled to [`cf_core::DEFAULT_YEAR`] by the normalizer when absent.
    #[serde(default)]
    pub year: Option<i32>,

    #[serde(rename = "value", default)]
    pub count: Option<RawValue>,

    #[serde(default)]
    pub pct_no_vehicle: Option<RawValue>,

    #[serde(default)]
    pub pct_transit: Option<RawValue>,

    #[serde(default)]
    pub pct_carpool: Option<RawValue>,
}

impl FlowRecord {
    /// Commuter count coerced to a number.
    ///
    /// Unparseable or missing input becomes NaN; downstream stages must
    /// filter non-finite counts before use.
    pub fn count_value(&self) -> f64 {
        coerce_count(self.count.as_ref())
    }

    pub fn pct_no_vehicle_value(&self) -> f64 {
        coerce_pct(self.pct_no_vehicle.as_ref())
    }

    pub fn pct_transit_value(&self) -> f64 {
        coerce_pct(self.pct_transit.as_ref())
    }

    pub fn pct_carpool_value(&self) -> f64 {
        coerce_pct(self.pct_carpool.as_ref())
    }

    /// Group label, or empty when absent.
    pub fn group_label(&self) -> &str {
        self.group.as_deref().unwrap_or("")
    }
}

/// Count coercion: numbers pass through, parseable text parses,
/// empty text is zero, anything else is NaN.
fn coerce_count(value: Option<&RawValue>) -> f64 {
    match value {
        Some(RawValue::Num(n)) => *n,
        Some(RawValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        None => f64::NAN,
    }
}

/// Percentage coercion: anything that is not a finite number becomes zero.
fn coerce_pct(value: Option<&RawValue>) -> f64 {
    match value {
        Some(RawValue::Num(n)) if n.is_finite() => *n,
        Some(RawValue::Text(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

/// The loaded document: an identity list plus the flow records.
///
/// `nodes` is carried for format fidelity but unused; node identities are
/// derived from the links themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Dataset {
    #[serde(default)]
    pub nodes: Vec<serde_json::Value>,

    #[serde(default)]
    pub links: Vec<FlowRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(count: Option<RawValue>) -> FlowRecord {
        FlowRecord {
            origin: "A".into(),
            destination: "B".into(),
            group: None,
            year: None,
            count,
            pct_no_vehicle: None,
            pct_transit: None,
            pct_carpool: None,
        }
    }

    #[test]
    fn count_accepts_numbers_and_numeric_text() {
        assert_eq!(record(Some(RawValue::Num(150.0))).count_value(), 150.0);
        assert_eq!(
            record(Some(RawValue::Text("42".into()))).count_value(),
            42.0
        );
        assert_eq!(record(Some(RawValue::Text("".into()))).count_value(), 0.0);
    }

    #[test]
    fn count_unparseable_is_nan() {
        assert!(record(Some(RawValue::Text("abc".into()))).count_value().is_nan());
        assert!(record(None).count_value().is_nan());
    }

    #[test]
    fn pct_defaults_to_zero() {
        let mut rec = record(None);
        rec.pct_transit = Some(RawValue::Text("junk".into()));
        assert_eq!(rec.pct_transit_value(), 0.0);
        assert_eq!(rec.pct_no_vehicle_value(), 0.0);
        rec.pct_carpool = Some(RawValue::Num(10.5));
        assert_eq!(rec.pct_carpool_value(), 10.5);
    }

    #[test]
    fn parses_mixed_wire_types() {
        let json = r#"{
            "links": [
                {"home": "A", "work": "B", "group": "age_<=29",
                 "year": 2021, "value": "120", "pct_transit": 3.5}
            ]
        }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        let rec = &dataset.links[0];
        assert_eq!(rec.count_value(), 120.0);
        assert_eq!(rec.pct_transit_value(), 3.5);
        assert_eq!(rec.pct_carpool_value(), 0.0);
        assert_eq!(rec.year, Some(2021));
    }
}
