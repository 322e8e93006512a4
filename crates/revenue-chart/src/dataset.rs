// File: crates/revenue-chart/src/dataset.rs
// Summary: Fixed monthly revenue table for three customer segments, with calendar-ordered months.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Calendar month. `Ord` follows declaration order, i.e. [`Month::ALL`],
/// so sorting never falls back to alphabetical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// The category order used wherever months are sorted, grouped or drawn.
    pub const ALL: [Month; 12] = [
        Month::Jan, Month::Feb, Month::Mar, Month::Apr, Month::May, Month::Jun,
        Month::Jul, Month::Aug, Month::Sep, Month::Oct, Month::Nov, Month::Dec,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Zero-based position in the calendar, also the X category position.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown month label: {0:?}")]
pub struct UnknownMonth(pub String);

impl FromStr for Month {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMonth(s.to_string()))
    }
}

/// Customer segment. Declaration order is the order segments first appear in
/// the table, which is also the legend and color order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    Premium,
    Standard,
    Budget,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Premium, Segment::Standard, Segment::Budget];

    pub fn label(self) -> &'static str {
        match self {
            Segment::Premium => "Premium",
            Segment::Standard => "Standard",
            Segment::Budget => "Budget",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenueRecord {
    pub month: Month,
    pub revenue: f64,
    pub segment: Segment,
}

// Monthly revenue Jan..Dec per segment.
// Premium: higher baseline, holiday peak.
const PREMIUM: [f64; 12] = [
    45000.0, 47000.0, 50000.0, 52000.0, 54000.0, 56000.0,
    58000.0, 60000.0, 62000.0, 65000.0, 70000.0, 75000.0,
];
// Standard: moderate baseline, steady growth.
const STANDARD: [f64; 12] = [
    30000.0, 31000.0, 32500.0, 34000.0, 35000.0, 36000.0,
    37500.0, 39000.0, 40000.0, 42000.0, 45000.0, 48000.0,
];
// Budget: lower baseline, slight seasonal variation.
const BUDGET: [f64; 12] = [
    18000.0, 19000.0, 20000.0, 21000.0, 22000.0, 22500.0,
    23000.0, 24000.0, 25000.0, 26000.0, 28000.0, 30000.0,
];

fn monthly_values(segment: Segment) -> &'static [f64; 12] {
    match segment {
        Segment::Premium => &PREMIUM,
        Segment::Standard => &STANDARD,
        Segment::Budget => &BUDGET,
    }
}

/// The full 12 x 3 table, immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct RevenueDataset {
    records: Vec<RevenueRecord>,
}

impl RevenueDataset {
    /// Build the table: all Premium rows Jan..Dec, then Standard, then Budget.
    pub fn generate() -> Self {
        let records = Segment::ALL
            .into_iter()
            .flat_map(|segment| {
                Month::ALL
                    .into_iter()
                    .zip(monthly_values(segment).iter().copied())
                    .map(move |(month, revenue)| RevenueRecord { month, revenue, segment })
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[RevenueRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct segments in order of first appearance.
    pub fn segments(&self) -> Vec<Segment> {
        let mut out: Vec<Segment> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.segment) {
                out.push(r.segment);
            }
        }
        out
    }

    /// Distinct months in calendar order.
    pub fn months(&self) -> Vec<Month> {
        let mut out: Vec<Month> = self.records.iter().map(|r| r.month).collect();
        out.sort();
        out.dedup();
        out
    }

    /// `(month, revenue)` pairs of one segment, sorted by calendar order.
    pub fn series_for(&self, segment: Segment) -> Vec<(Month, f64)> {
        let mut out: Vec<(Month, f64)> = self
            .records
            .iter()
            .filter(|r| r.segment == segment)
            .map(|r| (r.month, r.revenue))
            .collect();
        out.sort_by_key(|(m, _)| *m);
        out
    }

    /// Smallest and largest revenue in the table.
    pub fn revenue_range(&self) -> Option<(f64, f64)> {
        let mut values = self.records.iter().map(|r| r.revenue);
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
