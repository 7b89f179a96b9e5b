//! Demographic group taxonomy.
//!
//! Group labels classify by prefix: `age*` labels partition the population
//! by age, `inc*` labels partition the same population by income. The two
//! families must never be mixed in one view (that would double-count).

use crate::schema::FlowRecord;

/// The fixed age-group identities.
pub const AGE_GROUPS: [&str; 3] = ["age_<=29", "age_30_54", "age_55+"];

pub fn is_age_group(label: &str) -> bool {
    label.starts_with("age")
}

pub fn is_income_group(label: &str) -> bool {
    label.starts_with("inc")
}

/// The group identities offered by the filter widgets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupCatalog {
    pub ages: Vec<String>,
    pub incomes: Vec<String>,
}

impl GroupCatalog {
    /// Collect the catalog from the loaded records.
    ///
    /// Ages are the fixed list; incomes are discovered from the data and
    /// ordered below-threshold, ranges, above-threshold.
    pub fn from_records(records: &[FlowRecord]) -> Self {
        let mut labels: Vec<&str> = records.iter().map(|r| r.group_label()).collect();
        labels.sort_unstable();
        labels.dedup();

        let mut incomes: Vec<String> = labels
            .iter()
            .filter(|l| is_income_group(l))
            .map(|l| l.to_string())
            .collect();
        incomes.sort_by_key(|label| income_order(label));

        Self {
            ages: AGE_GROUPS.iter().map(|s| s.to_string()).collect(),
            incomes,
        }
    }
}

/// Below-threshold labels first, ranges next, above-threshold last.
fn income_order(label: &str) -> u8 {
    if label.contains('<') {
        0
    } else if label.contains('_') {
        1
    } else if label.contains('>') {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FlowRecord, RawValue};

    fn record(group: &str) -> FlowRecord {
        FlowRecord {
            origin: "A".into(),
            destination: "B".into(),
            group: Some(group.into()),
            year: Some(2022),
            count: Some(RawValue::Num(1.0)),
            pct_no_vehicle: None,
            pct_transit: None,
            pct_carpool: None,
        }
    }

    #[test]
    fn prefix_classification() {
        assert!(is_age_group("age_<=29"));
        assert!(!is_age_group("inc_>3333"));
        assert!(is_income_group("inc_1250_3333"));
        assert!(!is_income_group("age_55+"));
    }

    #[test]
    fn catalog_orders_incomes() {
        let records = vec![
            record("inc_>3333"),
            record("inc_1250_3333"),
            record("age_30_54"),
            record("inc_<1250"),
            record("inc_1250_3333"),
        ];
        let catalog = GroupCatalog::from_records(&records);
        assert_eq!(
            catalog.incomes,
            vec!["inc_<1250", "inc_1250_3333", "inc_>3333"]
        );
        assert_eq!(catalog.ages.len(), 3);
    }
}
