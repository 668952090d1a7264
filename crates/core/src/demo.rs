//! Seed data for the demo account.

use crate::calculator::TripInputs;
use crate::settings::DEMO_MPG;
use crate::trips::{STATUS_CALCULATED, STATUS_COMPLETED, STATUS_SKIPPED};

pub const DEMO_EMAIL: &str = "demo@loadbuck.app";
pub const DEMO_PASSWORD: &str = "demo123";
pub const DEMO_NAME: &str = "Demo Driver";

/// A pre-filled trip for the demo history. Derived figures are computed
/// from `inputs` at seed time, never stored here.
#[derive(Debug, Clone)]
pub struct SampleTrip {
    pub origin: &'static str,
    pub destination: &'static str,
    pub inputs: TripInputs,
    pub status: &'static str,
    pub actual_profit: Option<f64>,
}

fn inputs(
    rate_offered: f64,
    loaded_miles: f64,
    deadhead_miles: f64,
    fuel_price: f64,
    tolls: f64,
) -> TripInputs {
    let mut inputs = TripInputs::new(rate_offered, loaded_miles, fuel_price, DEMO_MPG);
    inputs.deadhead_miles = deadhead_miles;
    inputs.tolls = tolls;
    inputs
}

pub fn sample_trips() -> Vec<SampleTrip> {
    vec![
        SampleTrip {
            origin: "Chicago, IL",
            destination: "New York, NY",
            inputs: inputs(2850.0, 850.0, 45.0, 3.85, 57.0),
            status: STATUS_COMPLETED,
            actual_profit: Some(2050.0),
        },
        SampleTrip {
            origin: "Dallas, TX",
            destination: "Houston, TX",
            inputs: inputs(1200.0, 600.0, 80.0, 3.45, 22.0),
            status: STATUS_SKIPPED,
            actual_profit: None,
        },
        SampleTrip {
            origin: "Los Angeles, CA",
            destination: "Phoenix, AZ",
            inputs: inputs(3200.0, 1100.0, 0.0, 4.25, 15.0),
            status: STATUS_CALCULATED,
            actual_profit: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{calculate, Recommendation};
    use crate::trips::validate_status;

    #[test]
    fn sample_trips_calculate_cleanly() {
        let recs: Vec<_> = sample_trips()
            .iter()
            .map(|t| calculate(&t.inputs).unwrap().recommendation)
            .collect();
        assert_eq!(
            recs,
            vec![Recommendation::Yes, Recommendation::No, Recommendation::Borderline]
        );
    }

    #[test]
    fn sample_statuses_are_valid() {
        for trip in sample_trips() {
            assert!(validate_status(trip.status).is_ok());
        }
    }
}
