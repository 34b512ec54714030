//! Range evaluation for a single value

use crate::vitals::types::{Alert, AlertKind, Limit, Reading};

/// Decide whether `value` lies outside `[low, high]`.
///
/// With `inclusive` set, the bounds themselves are in range; otherwise a
/// value equal to either bound is out of range. NaN is always out of range.
pub fn is_out_of_range(value: f64, low: f64, high: f64, inclusive: bool) -> bool {
    value.is_nan() || is_below(value, low, inclusive) || is_above(value, high, inclusive)
}

fn is_below(value: f64, low: f64, inclusive: bool) -> bool {
    if inclusive {
        value < low
    } else {
        value <= low
    }
}

fn is_above(value: f64, high: f64, inclusive: bool) -> bool {
    if inclusive {
        value > high
    } else {
        value >= high
    }
}

impl Limit {
    /// Same rule as [`is_out_of_range`], with each side checked only when
    /// its bound is present.
    pub fn is_breached(&self, value: f64) -> bool {
        value.is_nan()
            || self
                .low
                .is_some_and(|low| is_below(value, low, self.inclusive))
            || self
                .high
                .is_some_and(|high| is_above(value, high, self.inclusive))
    }

    /// Check a reading against this limit, returning the alert it raises.
    pub fn check(&self, reading: &Reading) -> Option<Alert> {
        if reading.value.is_nan() {
            return Some(Alert::new(
                &self.name,
                AlertKind::InvalidReading,
                format!("Invalid reading for {}: not a number", self.label),
                None,
            ));
        }

        if self.is_breached(reading.value) {
            return Some(Alert::new(
                &self.name,
                AlertKind::OutOfRange,
                self.alert_message(),
                Some(reading.value),
            ));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Case {
        value: f64,
        limit: Limit,
        expected: bool,
    }

    fn run(cases: &[Case]) {
        for case in cases {
            assert_eq!(
                case.limit.is_breached(case.value),
                case.expected,
                "{} against {:?}",
                case.value,
                case.limit
            );
        }
    }

    #[test]
    fn boundary_is_in_range_when_inclusive() {
        assert!(!is_out_of_range(95.0, 95.0, 102.0, true));
        assert!(!is_out_of_range(102.0, 95.0, 102.0, true));
    }

    #[test]
    fn boundary_is_out_of_range_when_exclusive() {
        assert!(is_out_of_range(95.0, 95.0, 102.0, false));
        assert!(is_out_of_range(102.0, 95.0, 102.0, false));
    }

    #[test]
    fn interior_value_is_in_range_for_both_settings() {
        assert!(!is_out_of_range(98.6, 95.0, 102.0, true));
        assert!(!is_out_of_range(98.6, 95.0, 102.0, false));
    }

    #[test]
    fn nan_is_out_of_range() {
        assert!(is_out_of_range(f64::NAN, 95.0, 102.0, true));
        assert!(is_out_of_range(f64::NAN, 95.0, 102.0, false));
    }

    #[test]
    fn temperature_boundaries() {
        let limit = || Limit::new("temperature", "Temperature", 95.0, 102.0, true);
        run(&[
            Case {
                value: 94.9,
                limit: limit(),
                expected: true,
            },
            Case {
                value: 95.0,
                limit: limit(),
                expected: false,
            },
            Case {
                value: 102.0,
                limit: limit(),
                expected: false,
            },
            Case {
                value: 102.1,
                limit: limit(),
                expected: true,
            },
        ]);
    }

    #[test]
    fn pulse_rate_boundaries() {
        let limit = || Limit::new("pulse_rate", "Pulse Rate", 60.0, 100.0, true);
        run(&[
            Case {
                value: 59.9,
                limit: limit(),
                expected: true,
            },
            Case {
                value: 60.0,
                limit: limit(),
                expected: false,
            },
            Case {
                value: 100.0,
                limit: limit(),
                expected: false,
            },
            Case {
                value: 100.1,
                limit: limit(),
                expected: true,
            },
        ]);
    }

    #[test]
    fn spo2_boundaries_with_open_upper_bound() {
        let limit = || Limit::at_least("spo2", "Oxygen Saturation", 90.0, true);
        run(&[
            Case {
                value: 89.9,
                limit: limit(),
                expected: true,
            },
            Case {
                value: 90.0,
                limit: limit(),
                expected: false,
            },
            Case {
                value: 199.9,
                limit: limit(),
                expected: false,
            },
            Case {
                value: 200.0,
                limit: limit(),
                expected: false,
            },
            Case {
                value: 200.1,
                limit: limit(),
                expected: false,
            },
        ]);
    }

    #[test]
    fn legacy_spo2_sentinel_still_behaves() {
        let limit = || Limit::new("spo2", "Oxygen Saturation", 90.0, 200.0, true);
        run(&[
            Case {
                value: 200.0,
                limit: limit(),
                expected: false,
            },
            Case {
                value: 200.1,
                limit: limit(),
                expected: true,
            },
        ]);
    }

    #[test]
    fn one_sided_limits_respect_inclusive_flag() {
        let floor = Limit::at_least("x", "X", 10.0, false);
        assert!(floor.is_breached(10.0));
        assert!(!floor.is_breached(f64::INFINITY));

        let ceiling = Limit::at_most("x", "X", 10.0, true);
        assert!(!ceiling.is_breached(10.0));
        assert!(!ceiling.is_breached(f64::NEG_INFINITY));
        assert!(ceiling.is_breached(10.5));
    }

    #[test]
    fn check_uses_custom_message() {
        let limit = Limit::new("temperature", "Temperature", 95.0, 102.0, true)
            .with_message("Temperature is critical!");
        let alert = limit.check(&Reading::new("temperature", 104.0)).unwrap();

        assert_eq!(alert.kind, AlertKind::OutOfRange);
        assert_eq!(alert.message, "Temperature is critical!");
        assert_eq!(alert.value, Some(104.0));
    }

    #[test]
    fn check_falls_back_to_generic_message() {
        let limit = Limit::new("pulse_rate", "Pulse Rate", 60.0, 100.0, true);
        let alert = limit.check(&Reading::new("pulse_rate", 110.0)).unwrap();
        assert_eq!(alert.message, "Pulse Rate is out of range!");
    }

    #[test]
    fn check_flags_nan_as_invalid_reading() {
        let limit = Limit::new("pulse_rate", "Pulse Rate", 60.0, 100.0, true);
        let alert = limit.check(&Reading::new("pulse_rate", f64::NAN)).unwrap();

        assert_eq!(alert.kind, AlertKind::InvalidReading);
        assert_eq!(alert.value, None);
        assert!(!alert.kind.is_clinical());
    }

    #[test]
    fn check_returns_none_in_range() {
        let limit = Limit::new("pulse_rate", "Pulse Rate", 60.0, 100.0, true);
        assert!(limit.check(&Reading::new("pulse_rate", 72.0)).is_none());
    }
}
