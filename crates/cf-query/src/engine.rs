//! The filter/aggregate/rank query behind every redraw.

use std::cmp::Ordering;
use std::collections::HashMap;

use cf_data::schema::FlowRecord;
use cf_data::{is_age_group, is_income_group};
use cf_filter::{FilterState, GroupChoice};
use cf_core::DEFAULT_YEAR;

/// Presentation cap on the ranked result: more than this many ribbons
/// makes the diagram illegible. Not a correctness constraint.
pub const MAX_FLOWS: usize = 20;

/// Flow records merged by (origin, destination, year).
///
/// `group` and the percentages come from the first contributing record;
/// later records sharing the key only add to `count`. A known
/// approximation: the percentages are not re-aggregated across records.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedFlow {
    pub origin: String,
    pub destination: String,
    pub year: i32,
    pub count: f64,
    pub group: String,
    pub pct_no_vehicle: f64,
    pub pct_transit: f64,
    pub pct_carpool: f64,
}

/// Produce the ranked, deduplicated, size-capped flow set for the
/// current filter state.
///
/// Counts are coerced here and may be NaN for unparseable input; the
/// graph builder filters non-finite counts before anything is drawn.
pub fn top_flows(records: &[FlowRecord], filter: &FilterState) -> Vec<AggregatedFlow> {
    let mut merged: Vec<AggregatedFlow> = Vec::new();
    let mut index: HashMap<(String, String, i32), usize> = HashMap::new();

    for record in records {
        let pct_no_vehicle = record.pct_no_vehicle_value();
        let pct_transit = record.pct_transit_value();
        let pct_carpool = record.pct_carpool_value();

        let year = record.year.unwrap_or(DEFAULT_YEAR);
        if year != filter.year {
            continue;
        }
        if !filter.named.accepts(pct_no_vehicle, pct_transit, pct_carpool) {
            continue;
        }
        if !filter.origins.matches(&record.origin) {
            continue;
        }
        if !filter.destinations.matches(&record.destination) {
            continue;
        }
        if !group_matches(record.group_label(), &filter.age_group, &filter.income_group) {
            continue;
        }

        let count = record.count_value();
        let key = (record.origin.clone(), record.destination.clone(), year);
        match index.get(&key) {
            Some(&i) => merged[i].count += count,
            None => {
                index.insert(key, merged.len());
                merged.push(AggregatedFlow {
                    origin: record.origin.clone(),
                    destination: record.destination.clone(),
                    year,
                    count,
                    group: record.group_label().to_string(),
                    pct_no_vehicle,
                    pct_transit,
                    pct_carpool,
                });
            }
        }
    }

    merged.sort_by(|a, b| descending_count(a.count, b.count));
    merged.truncate(MAX_FLOWS);

    tracing::debug!(flows = merged.len(), year = filter.year, "aggregated top flows");
    merged
}

/// The group-matching rule.
///
/// Age and income labels partition the same population, so mixing them
/// would double-count commuters: with both selectors at All the default
/// view shows age-type records only. With both non-All (prevented by the
/// mutual-exclusivity invariant) nothing matches.
fn group_matches(label: &str, age: &GroupChoice, income: &GroupChoice) -> bool {
    match (age, income) {
        (GroupChoice::All, GroupChoice::All) => is_age_group(label),
        (GroupChoice::Group(a), GroupChoice::All) => is_age_group(label) && label == a,
        (GroupChoice::All, GroupChoice::Group(i)) => is_income_group(label) && label == i,
        (GroupChoice::Group(_), GroupChoice::Group(_)) => false,
    }
}

/// Descending by count; NaN counts order after everything else.
/// Infinite counts compare normally, so `+inf` ranks first.
fn descending_count(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_matching_defaults_to_age_view() {
        assert!(group_matches("age_<=29", &GroupChoice::All, &GroupChoice::All));
        assert!(!group_matches("inc_<1250", &GroupChoice::All, &GroupChoice::All));
    }

    #[test]
    fn group_matching_exact_label() {
        let age = GroupChoice::Group("age_55+".into());
        assert!(group_matches("age_55+", &age, &GroupChoice::All));
        assert!(!group_matches("age_<=29", &age, &GroupChoice::All));
        // An income label never matches an age selection, prefix test first.
        assert!(!group_matches("inc_>3333", &age, &GroupChoice::All));
    }

    #[test]
    fn group_matching_both_selected_matches_nothing() {
        let age = GroupChoice::Group("age_55+".into());
        let income = GroupChoice::Group("inc_<1250".into());
        assert!(!group_matches("age_55+", &age, &income));
        assert!(!group_matches("inc_<1250", &age, &income));
    }

    #[test]
    fn nan_counts_sort_last() {
        assert_eq!(descending_count(f64::NAN, 1.0), Ordering::Greater);
        assert_eq!(descending_count(1.0, f64::NAN), Ordering::Less);
        assert_eq!(descending_count(2.0, 1.0), Ordering::Less);
    }

    #[test]
    fn infinite_counts_sort_first() {
        assert_eq!(descending_count(f64::INFINITY, 1.0), Ordering::Less);
        assert_eq!(descending_count(f64::INFINITY, f64::NAN), Ordering::Less);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use cf_data::schema::{FlowRecord, RawValue};
    use proptest::prelude::*;

    fn record(origin: u8, destination: u8, count: u32) -> FlowRecord {
        FlowRecord {
            origin: format!("O{origin}"),
            destination: format!("D{destination}"),
            group: Some("age_<=29".into()),
            year: Some(DEFAULT_YEAR),
            count: Some(RawValue::Num(count as f64)),
            pct_no_vehicle: None,
            pct_transit: None,
            pct_carpool: None,
        }
    }

    proptest! {
        /// Merging conserves the total count regardless of input order.
        #[test]
        fn merge_conserves_totals(
            entries in prop::collection::vec((0_u8..3, 0_u8..3, 0_u32..1000), 0..24)
        ) {
            let records: Vec<FlowRecord> = entries
                .iter()
                .map(|&(o, d, c)| record(o, d, c))
                .collect();
            let mut reversed = records.clone();
            reversed.reverse();

            let filter = FilterState::default();
            let forward = top_flows(&records, &filter);
            let backward = top_flows(&reversed, &filter);

            // At most 9 distinct (origin, destination) keys: the cap never bites,
            // so the merged total must equal the raw total either way.
            let raw_total: f64 = entries.iter().map(|&(_, _, c)| c as f64).sum();
            let forward_total: f64 = forward.iter().map(|f| f.count).sum();
            let backward_total: f64 = backward.iter().map(|f| f.count).sum();
            prop_assert_eq!(forward_total, raw_total);
            prop_assert_eq!(backward_total, raw_total);
        }

        /// The cap and the ordering invariant hold for any input.
        #[test]
        fn capped_and_sorted(
            entries in prop::collection::vec((0_u8..8, 0_u8..8, 0_u32..1000), 0..120)
        ) {
            let records: Vec<FlowRecord> = entries
                .iter()
                .map(|&(o, d, c)| record(o, d, c))
                .collect();
            let flows = top_flows(&records, &FilterState::default());

            prop_assert!(flows.len() <= MAX_FLOWS);
            for pair in flows.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
        }
    }
}
