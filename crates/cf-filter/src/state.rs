//! Filter state value and its update rules.

use std::collections::BTreeSet;

use cf_core::DEFAULT_YEAR;

use crate::event::FilterEvent;

/// One of four mutually exclusive preset predicates over a record's
/// commuting-characteristic percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamedFilter {
    #[default]
    All,
    NoVehicleOver5,
    TransitOver1,
    CarpoolOver10,
}

impl NamedFilter {
    /// All presets, in display order.
    pub const OPTIONS: [NamedFilter; 4] = [
        NamedFilter::All,
        NamedFilter::NoVehicleOver5,
        NamedFilter::TransitOver1,
        NamedFilter::CarpoolOver10,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NamedFilter::All => "All",
            NamedFilter::NoVehicleOver5 => "No Vehicle > 5%",
            NamedFilter::TransitOver1 => "Transit > 1%",
            NamedFilter::CarpoolOver10 => "Carpool > 10%",
        }
    }

    /// Evaluate the preset against a record's coerced percentages.
    pub fn accepts(self, pct_no_vehicle: f64, pct_transit: f64, pct_carpool: f64) -> bool {
        match self {
            NamedFilter::All => true,
            NamedFilter::NoVehicleOver5 => pct_no_vehicle > 5.0,
            NamedFilter::TransitOver1 => pct_transit > 1.0,
            NamedFilter::CarpoolOver10 => pct_carpool > 10.0,
        }
    }
}

/// A multi-select over area identities, with an "All" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl Selection {
    /// Build a selection from committed widget values.
    ///
    /// Choosing the "All" sentinel, or clearing every value, resets to All.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() || set.contains("All") {
            Selection::All
        } else {
            Selection::Only(set)
        }
    }

    pub fn matches(&self, id: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(set) => set.contains(id),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

/// A single-select over demographic group identities, with an "All" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupChoice {
    #[default]
    All,
    Group(String),
}

impl GroupChoice {
    pub fn is_all(&self) -> bool {
        matches!(self, GroupChoice::All)
    }

    pub fn matches(&self, label: &str) -> bool {
        match self {
            GroupChoice::All => true,
            GroupChoice::Group(g) => g == label,
        }
    }
}

/// The committed values of every filter dimension.
///
/// Invariant: `age_group` and `income_group` are never simultaneously
/// non-All; [`FilterState::apply`] clears one when the other is set.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub year: i32,
    pub named: NamedFilter,
    pub origins: Selection,
    pub destinations: Selection,
    pub age_group: GroupChoice,
    pub income_group: GroupChoice,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            named: NamedFilter::All,
            origins: Selection::All,
            destinations: Selection::All,
            age_group: GroupChoice::All,
            income_group: GroupChoice::All,
        }
    }
}

impl FilterState {
    /// Apply one committed filter change, returning the next state.
    pub fn apply(&self, event: FilterEvent) -> FilterState {
        let mut next = self.clone();
        match event {
            FilterEvent::Year(year) => next.year = year,
            FilterEvent::Named(named) => next.named = named,
            FilterEvent::Origins(selection) => next.origins = selection,
            FilterEvent::Destinations(selection) => next.destinations = selection,
            FilterEvent::AgeGroup(choice) => {
                if !choice.is_all() {
                    next.income_group = GroupChoice::All;
                }
                next.age_group = choice;
            }
            FilterEvent::IncomeGroup(choice) => {
                if !choice.is_all() {
                    next.age_group = GroupChoice::All;
                }
                next.income_group = choice;
            }
        }
        next
    }

    /// Whether the age selector should accept input (income is at All).
    pub fn age_enabled(&self) -> bool {
        self.income_group.is_all()
    }

    /// Whether the income selector should accept input (age is at All).
    pub fn income_enabled(&self) -> bool {
        self.age_group.is_all()
    }
}
