//! Heuristic toll estimation from free-text origin and destination.
//!
//! This is not a routing engine. Origin and destination are matched against
//! an ordered [`TollTable`] of metro-area patterns, each carrying a flat
//! charge. Long routes through a matched area get a per-mile surcharge;
//! routes that match nothing are priced at a low per-mile default.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::calculator::round_currency;

// ---------------------------------------------------------------------------
// Tuning constants
// ---------------------------------------------------------------------------

/// Route length above which a matched corridor also gets the per-mile surcharge.
pub const LONG_ROUTE_THRESHOLD_MILES: f64 = 100.0;
/// Per-mile surcharge added to long routes through a matched corridor.
pub const LONG_ROUTE_RATE_PER_MILE: f64 = 0.08;
/// Per-mile rate used when nothing in the table matches.
pub const DEFAULT_RATE_PER_MILE: f64 = 0.06;
/// Upper bound on any estimate.
pub const MAX_ESTIMATED_TOLLS: f64 = 180.0;

/// Breakdown line used when no corridor matched.
pub const GENERIC_TOLL_LINE: &str = "Estimated Highway Tolls";

const NOTE_WITH_MILES: &str = "Based on typical commercial truck toll rates";
const NOTE_WITHOUT_MILES: &str = "Enter route miles for more accurate estimate";

/// Built-in corridor table: `(pattern, flat charge, display name)`.
const DEFAULT_CORRIDORS: &[(&str, f64, &str)] = &[
    (r"new york|nyc|manhattan|brooklyn", 45.0, "NYC Area Tolls"),
    (r"new jersey|nj|jersey city", 35.0, "NJ/NY Crossing"),
    (r"san francisco|sf|oakland", 35.0, "Bay Area Bridges"),
    (r"seattle|bellevue", 18.0, "WA-520 Bridge"),
    (r"miami|ft lauderdale|orlando", 28.0, "Florida Turnpike"),
    (r"chicago|il\b|illinois", 25.0, "Chicago Skyway/I-Pass"),
    (r"houston|dallas|austin|san antonio", 22.0, "Texas Toll Roads"),
    (r"philadelphia|philly|pittsburgh|pa\b", 32.0, "PA Turnpike"),
    (r"columbus|cleveland|indianapolis|ohio", 20.0, "OH/IN Toll Roads"),
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A named toll area with a flat charge.
#[derive(Debug, Clone)]
pub struct TollCorridor {
    pub pattern: Regex,
    pub flat_charge: f64,
    pub name: String,
}

impl TollCorridor {
    /// Compile a corridor. The pattern is matched case-insensitively.
    pub fn new(pattern: &str, flat_charge: f64, name: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            pattern,
            flat_charge,
            name: name.to_string(),
        })
    }

    fn line(&self) -> TollLine {
        TollLine {
            name: self.name.clone(),
            cost: self.flat_charge,
        }
    }
}

/// One matched corridor in an estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TollLine {
    pub name: String,
    pub cost: f64,
}

/// Result of [`TollTable::estimate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TollEstimate {
    pub origin: String,
    pub destination: String,
    pub route_miles: f64,
    pub estimated_tolls: f64,
    pub route_description: String,
    pub toll_breakdown: Vec<TollLine>,
    pub note: &'static str,
}

/// Immutable, ordered corridor table used by the estimator.
#[derive(Debug, Clone)]
pub struct TollTable {
    corridors: Vec<TollCorridor>,
}

impl TollTable {
    pub fn new(corridors: Vec<TollCorridor>) -> Self {
        Self { corridors }
    }

    pub fn corridors(&self) -> &[TollCorridor] {
        &self.corridors
    }

    /// Estimate tolls for a route.
    ///
    /// Never fails: an unmatched route or zero mileage simply yields the
    /// per-mile default or `0.0`. Negative or non-finite mileage counts as
    /// zero. The result is always within `0.0..=MAX_ESTIMATED_TOLLS`.
    pub fn estimate(&self, origin: &str, destination: &str, route_miles: f64) -> TollEstimate {
        let miles = if route_miles.is_finite() && route_miles > 0.0 {
            route_miles
        } else {
            0.0
        };

        let orig = origin.trim().to_lowercase();
        let dest = destination.trim().to_lowercase();

        let mut breakdown = Vec::new();
        let mut origin_max: Option<f64> = None;
        let mut dest_max: Option<f64> = None;

        for corridor in &self.corridors {
            if corridor.pattern.is_match(&orig) {
                origin_max = Some(origin_max.unwrap_or(0.0).max(corridor.flat_charge));
                breakdown.push(corridor.line());
            }
            if corridor.pattern.is_match(&dest) {
                dest_max = Some(dest_max.unwrap_or(0.0).max(corridor.flat_charge));
                breakdown.push(corridor.line());
            }
        }

        let mut estimated = match (origin_max, dest_max) {
            (None, None) => miles * DEFAULT_RATE_PER_MILE,
            (o, d) => {
                let flat = o.unwrap_or(0.0).max(d.unwrap_or(0.0));
                if miles > LONG_ROUTE_THRESHOLD_MILES {
                    flat + miles * LONG_ROUTE_RATE_PER_MILE
                } else {
                    flat
                }
            }
        };

        estimated = round_currency(estimated.clamp(0.0, MAX_ESTIMATED_TOLLS));

        if breakdown.is_empty() && miles > 0.0 {
            breakdown.push(TollLine {
                name: GENERIC_TOLL_LINE.to_string(),
                cost: estimated,
            });
        }

        TollEstimate {
            origin: origin.to_string(),
            destination: destination.to_string(),
            route_miles: miles,
            estimated_tolls: estimated,
            route_description: format!("{origin} → {destination}"),
            toll_breakdown: breakdown,
            note: if miles > 0.0 {
                NOTE_WITH_MILES
            } else {
                NOTE_WITHOUT_MILES
            },
        }
    }
}

impl TollTable {
    /// Build a table from `(pattern, flat_charge, name)` rows.
    ///
    /// Fails on the first pattern that does not compile.
    pub fn from_rows(rows: &[(&str, f64, &str)]) -> Result<Self, regex::Error> {
        rows.iter()
            .map(|(pattern, flat, name)| TollCorridor::new(pattern, *flat, name))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl Default for TollTable {
    /// The built-in US metro corridor table.
    fn default() -> Self {
        Self::from_rows(DEFAULT_CORRIDORS)
            .unwrap_or_else(|e| panic!("built-in toll corridor pattern does not compile: {e}"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn default_table_compiles_every_corridor() {
        assert_eq!(TollTable::default().corridors().len(), DEFAULT_CORRIDORS.len());
    }

    #[test]
    fn bad_corridor_pattern_fails_the_whole_table() {
        let rows = [
            (r"boston", 20.0, "Mass Pike"),
            (r"dallas(", 15.0, "Broken"),
        ];
        assert!(TollTable::from_rows(&rows).is_err());
        assert_eq!(TollTable::from_rows(&rows[..1]).unwrap().corridors().len(), 1);
    }

    #[test]
    fn chicago_to_denver_adds_long_route_surcharge() {
        let est = TollTable::default().estimate("Chicago, IL", "Denver, CO", 900.0);

        assert!(approx(est.estimated_tolls, 97.0));
        assert_eq!(
            est.toll_breakdown,
            vec![TollLine {
                name: "Chicago Skyway/I-Pass".into(),
                cost: 25.0
            }]
        );
        assert_eq!(est.route_description, "Chicago, IL → Denver, CO");
        assert_eq!(est.note, NOTE_WITH_MILES);
    }

    #[test]
    fn unmatched_route_uses_default_rate() {
        let est = TollTable::default().estimate("Topeka, KS", "Wichita, KS", 150.0);

        assert!(approx(est.estimated_tolls, 9.0));
        assert_eq!(
            est.toll_breakdown,
            vec![TollLine {
                name: GENERIC_TOLL_LINE.into(),
                cost: 9.0
            }]
        );
    }

    #[test]
    fn unmatched_route_without_miles_is_free_with_empty_breakdown() {
        let est = TollTable::default().estimate("Topeka, KS", "Wichita, KS", 0.0);

        assert!(approx(est.estimated_tolls, 0.0));
        assert!(est.toll_breakdown.is_empty());
        assert_eq!(est.note, NOTE_WITHOUT_MILES);
    }

    #[test]
    fn short_matched_route_is_flat_only() {
        let est = TollTable::default().estimate("Dallas, TX", "Fort Worth, TX", 40.0);
        assert!(approx(est.estimated_tolls, 22.0));
    }

    #[test]
    fn exactly_one_hundred_miles_gets_no_surcharge() {
        let est = TollTable::default().estimate("Seattle, WA", "Tacoma, WA", 100.0);
        assert!(approx(est.estimated_tolls, 18.0));
    }

    #[test]
    fn larger_of_origin_and_destination_wins() {
        let est = TollTable::default().estimate("Houston, TX", "Manhattan", 50.0);

        assert!(approx(est.estimated_tolls, 45.0));
        let names: Vec<_> = est.toll_breakdown.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["NYC Area Tolls", "Texas Toll Roads"]);
    }

    #[test]
    fn same_corridor_on_both_ends_is_recorded_twice() {
        let est = TollTable::default().estimate("Dallas", "Austin", 20.0);

        assert_eq!(est.toll_breakdown.len(), 2);
        assert!(est.toll_breakdown.iter().all(|l| l.name == "Texas Toll Roads"));
        assert!(approx(est.estimated_tolls, 22.0));
    }

    #[test]
    fn matching_is_case_insensitive_and_trimmed() {
        let est = TollTable::default().estimate("   NEW YORK  ", "boston", 10.0);
        assert!(approx(est.estimated_tolls, 45.0));
        assert_eq!(est.origin, "   NEW YORK  ");
    }

    #[test]
    fn estimate_is_capped() {
        let est = TollTable::default().estimate("Brooklyn, NY", "Los Angeles", 2800.0);
        assert!(approx(est.estimated_tolls, MAX_ESTIMATED_TOLLS));
    }

    #[test]
    fn unmatched_estimate_is_capped() {
        let est = TollTable::default().estimate("Topeka", "Boise", 5000.0);
        assert!(approx(est.estimated_tolls, MAX_ESTIMATED_TOLLS));
        assert!(approx(est.toll_breakdown[0].cost, MAX_ESTIMATED_TOLLS));
    }

    #[test]
    fn negative_or_non_finite_miles_count_as_zero() {
        let table = TollTable::default();
        for miles in [-50.0, f64::NAN, f64::INFINITY] {
            let est = table.estimate("Topeka", "Wichita", miles);
            assert!(approx(est.estimated_tolls, 0.0));
            assert!(approx(est.route_miles, 0.0));
        }
    }

    #[test]
    fn estimates_stay_within_bounds() {
        let table = TollTable::default();
        let places = ["Chicago", "Topeka", "Miami", "nyc", "Reno", "Pittsburgh, PA"];
        for origin in places {
            for destination in places {
                for miles in [0.0, 15.0, 101.0, 750.0, 3000.0] {
                    let est = table.estimate(origin, destination, miles);
                    assert!(est.estimated_tolls >= 0.0);
                    assert!(est.estimated_tolls <= MAX_ESTIMATED_TOLLS);
                }
            }
        }
    }

    #[test]
    fn custom_table_is_used_instead_of_defaults() {
        let table = TollTable::new(vec![
            TollCorridor::new(r"boston|worcester", 14.0, "Mass Pike").unwrap(),
        ]);

        let est = table.estimate("Worcester, MA", "Albany", 150.0);
        assert!(approx(est.estimated_tolls, 26.0));

        let est = table.estimate("Chicago", "Albany", 50.0);
        assert!(approx(est.estimated_tolls, 3.0));
    }

    #[test]
    fn estimates_are_deterministic() {
        let table = TollTable::default();
        let a = table.estimate("Orlando, FL", "Philadelphia, PA", 1000.0);
        let b = table.estimate("Orlando, FL", "Philadelphia, PA", 1000.0);
        assert_eq!(a, b);
    }
}
