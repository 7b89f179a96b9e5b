//! CSV export snapshot.
//!
//! The export deliberately applies only the year/origin/destination
//! filters: it is a data extract, not a picture of the diagram, so the
//! demographic selection and the named preset are ignored.

use cf_core::DEFAULT_YEAR;
use cf_data::schema::FlowRecord;
use cf_filter::FilterState;

pub const CSV_HEADER: [&str; 8] = [
    "Origin",
    "Destination",
    "Group (Age/Income)",
    "Year",
    "Commuters",
    "No Vehicle Access (%)",
    "Transit Use (%)",
    "Carpool (%)",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub origin: String,
    pub destination: String,
    pub group: String,
    pub year: i32,
    pub count: f64,
    pub pct_no_vehicle: f64,
    pub pct_transit: f64,
    pub pct_carpool: f64,
}

/// All records matching the year/origin/destination filters, in input order.
pub fn export_rows(records: &[FlowRecord], filter: &FilterState) -> Vec<ExportRow> {
    records
        .iter()
        .filter(|r| r.year.unwrap_or(DEFAULT_YEAR) == filter.year)
        .filter(|r| filter.origins.matches(&r.origin))
        .filter(|r| filter.destinations.matches(&r.destination))
        .map(|r| ExportRow {
            origin: r.origin.clone(),
            destination: r.destination.clone(),
            group: match r.group_label() {
                "" => "N/A".to_string(),
                label => label.to_string(),
            },
            year: r.year.unwrap_or(DEFAULT_YEAR),
            count: r.count_value(),
            pct_no_vehicle: r.pct_no_vehicle_value(),
            pct_transit: r.pct_transit_value(),
            pct_carpool: r.pct_carpool_value(),
        })
        .collect()
}

/// Render the rows as CSV text, header first.
///
/// Area identities in this dataset contain no commas or quotes, so no
/// quoting is applied.
pub fn to_csv(rows: &[ExportRow]) -> String {
    let mut out = CSV_HEADER.join(",");
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{},{},{},{},{},{:.1}%,{:.1}%,{:.1}%\n",
            row.origin,
            row.destination,
            row.group,
            row.year,
            row.count,
            row.pct_no_vehicle,
            row.pct_transit,
            row.pct_carpool,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_data::schema::RawValue;
    use cf_filter::{FilterEvent, Selection};

    fn record(origin: &str, destination: &str, year: i32, group: Option<&str>) -> FlowRecord {
        FlowRecord {
            origin: origin.into(),
            destination: destination.into(),
            group: group.map(Into::into),
            year: Some(year),
            count: Some(RawValue::Num(25.0)),
            pct_no_vehicle: Some(RawValue::Num(6.25)),
            pct_transit: None,
            pct_carpool: None,
        }
    }

    #[test]
    fn export_ignores_demographic_filters() {
        let records = vec![
            record("A", "B", 2022, Some("age_<=29")),
            record("A", "B", 2022, Some("inc_<1250")),
            record("A", "B", 2021, Some("age_<=29")),
        ];
        // A non-default income selection must not narrow the export.
        let filter = FilterState::default().apply(FilterEvent::IncomeGroup(
            cf_filter::GroupChoice::Group("inc_>3333".into()),
        ));

        let rows = export_rows(&records, &filter);
        assert_eq!(rows.len(), 2); // only the 2021 record drops out
    }

    #[test]
    fn export_applies_origin_and_destination() {
        let records = vec![
            record("A", "B", 2022, None),
            record("C", "B", 2022, None),
        ];
        let filter = FilterState::default()
            .apply(FilterEvent::Origins(Selection::from_values(["A"])));

        let rows = export_rows(&records, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].origin, "A");
        assert_eq!(rows[0].group, "N/A");
    }

    #[test]
    fn csv_shape() {
        let records = vec![record("A", "B", 2022, Some("age_55+"))];
        let csv = to_csv(&export_rows(&records, &FilterState::default()));
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Origin,Destination,Group (Age/Income),Year,Commuters,No Vehicle Access (%),Transit Use (%),Carpool (%)"
        );
        assert_eq!(lines.next().unwrap(), "A,B,age_55+,2022,25,6.2%,0.0%,0.0%");
    }
}
