use serde::Serialize;

/// Warning issued when the device scores below the lowest usable bracket.
pub const SLOW_DEVICE_MESSAGE: &str =
    "This device is too slow to accurately emulate the target Lighthouse device.";

/// Result of mapping a BenchmarkIndex score to a CPU slowdown multiplier.
///
/// Either a usable prediction with its confidence range, or a warning when
/// the device is too slow for the model to say anything useful.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimate {
    Prediction {
        multiplier: f64,
        /// (lower, upper) bounds; lower <= multiplier <= upper
        range: (f64, f64),
    },
    Warning {
        message: String,
    },
}

impl Estimate {
    pub fn is_warning(&self) -> bool {
        matches!(self, Estimate::Warning { .. })
    }
}

/// Estimates the `cpuSlowdownMultiplier` for a device's BenchmarkIndex.
///
/// Returns `None` for non-finite input (nothing to estimate yet). Every
/// finite score yields exactly one `Estimate`: a prediction for scores at or
/// above 150, a warning below that. Brackets are checked highest-first, each
/// inclusive on its lower bound.
///
/// Calibration: <https://docs.google.com/spreadsheets/d/1E0gZwKsxegudkjJl8Fki_sOwHKpqgXwt8aBAfuUaB8A/edit#gid=0>
pub fn estimate(benchmark_index: f64) -> Option<Estimate> {
    if !benchmark_index.is_finite() {
        return None;
    }

    let estimate = if benchmark_index >= 1300.0 {
        // 2000 = 6x slowdown
        // 1766 = 5x slowdown
        // 1533 = 4x slowdown
        // 1300 = 3x slowdown
        let excess = (benchmark_index - 1300.0) / 233.0;
        let multiplier = 3.0 + excess;
        // Confidence widens with the multiplier: the max of the bracket
        // excess, a 1.5x floor, and 30% of the multiplier itself.
        let confidence_range = excess.max(1.5).max(multiplier * 0.3);
        prediction(multiplier, confidence_range)
    } else if benchmark_index >= 800.0 {
        // 1300 = 3x slowdown
        // 800 = 2x slowdown
        let excess = (benchmark_index - 800.0) / 500.0;
        prediction(2.0 + excess, 1.5)
    } else if benchmark_index >= 150.0 {
        // 800 = 2x slowdown
        // 150 = 1x
        let excess = (benchmark_index - 150.0) / 650.0;
        prediction(1.0 + excess, 0.5)
    } else {
        Estimate::Warning {
            message: SLOW_DEVICE_MESSAGE.to_string(),
        }
    };

    Some(estimate)
}

fn prediction(multiplier: f64, confidence_range: f64) -> Estimate {
    Estimate::Prediction {
        multiplier,
        range: (
            multiplier - confidence_range / 2.0,
            multiplier + confidence_range / 2.0,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_prediction(score: f64) -> (f64, (f64, f64)) {
        match estimate(score) {
            Some(Estimate::Prediction { multiplier, range }) => (multiplier, range),
            other => panic!("expected prediction for score {score}, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_scores_produce_no_estimate() {
        assert_eq!(estimate(f64::NAN), None);
        assert_eq!(estimate(f64::INFINITY), None);
        assert_eq!(estimate(f64::NEG_INFINITY), None);
    }

    #[test]
    fn slow_devices_get_the_warning() {
        for score in [0.0, 100.0, 149.9, -50.0] {
            let result = estimate(score).unwrap();
            assert!(result.is_warning(), "score {score} should warn");
            match result {
                Estimate::Warning { message } => assert_eq!(message, SLOW_DEVICE_MESSAGE),
                other => panic!("expected warning for score {score}, got {other:?}"),
            }
        }
    }

    #[test]
    fn calibration_anchors_hold() {
        let (m, _) = expect_prediction(150.0);
        assert!((m - 1.0).abs() < 1e-9);
        let (m, _) = expect_prediction(800.0);
        assert!((m - 2.0).abs() < 1e-9);
        let (m, _) = expect_prediction(1300.0);
        assert!((m - 3.0).abs() < 1e-9);
        let (m, _) = expect_prediction(1533.0);
        assert!((m - 4.0).abs() < 0.01);
        let (m, _) = expect_prediction(1766.0);
        assert!((m - 5.0).abs() < 0.01);
        let (m, _) = expect_prediction(2000.0);
        assert!((m - 6.0).abs() < 0.01);
    }

    #[test]
    fn middle_bracket_has_fixed_confidence() {
        let (multiplier, (lower, upper)) = expect_prediction(1000.0);
        assert!((multiplier - 2.4).abs() < 1e-9);
        assert!((lower - 1.65).abs() < 1e-9);
        assert!((upper - 3.15).abs() < 1e-9);
    }

    #[test]
    fn low_bracket_has_narrow_confidence() {
        let (multiplier, (lower, upper)) = expect_prediction(500.0);
        assert!((multiplier - 1.538).abs() < 0.001);
        assert!((upper - lower - 0.5).abs() < 1e-9);
    }

    #[test]
    fn top_bracket_takes_the_widest_of_three_ranges() {
        // At 2000 the excess (3.0028) dominates both the 1.5 floor and
        // 30% of the multiplier (1.8008).
        let (multiplier, (lower, upper)) = expect_prediction(2000.0);
        let width = upper - lower;
        let excess = (2000.0 - 1300.0) / 233.0;
        assert!((width - excess).abs() < 1e-9);
        assert!((lower - (multiplier - excess / 2.0)).abs() < 1e-9);

        // Just above 1300 the 1.5 floor dominates.
        let (_, (lower, upper)) = expect_prediction(1310.0);
        assert!((upper - lower - 1.5).abs() < 1e-9);
    }

    #[test]
    fn bracket_boundaries_go_to_the_higher_bracket() {
        // 1300 exactly belongs to the top bracket: excess 0, floor 1.5 wins.
        let (_, (lower, upper)) = expect_prediction(1300.0);
        assert!((upper - lower - 1.5).abs() < 1e-9);
    }

    #[test]
    fn repeated_calls_are_bitwise_identical() {
        for score in [100.0, 500.0, 1000.0, 2000.0] {
            assert_eq!(estimate(score), estimate(score));
        }
    }
}
