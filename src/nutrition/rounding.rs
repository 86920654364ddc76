//! Regulatory rounding rules
//!
//! Every rule rounds half away from zero (`f64::round`), except the
//! cholesterol 2-5 mg band which takes the ceiling.

use super::schema::RoundingCategory;

/// Round a raw, non-negative amount the way the label must print it
pub fn round_amount(category: RoundingCategory, amount: f64) -> f64 {
    match category {
        RoundingCategory::Calories => {
            if amount < 5.0 {
                0.0
            } else if amount <= 50.0 {
                nearest_multiple(amount, 5.0)
            } else {
                nearest_multiple(amount, 10.0)
            }
        }
        RoundingCategory::FatGroup => {
            if amount < 0.5 {
                0.0
            } else if amount < 5.0 {
                nearest_multiple(amount, 0.5)
            } else {
                amount.round()
            }
        }
        RoundingCategory::Cholesterol => {
            if amount < 2.0 {
                0.0
            } else if amount <= 5.0 {
                amount.ceil()
            } else {
                // Anything above the ceiling band prints as at least 10
                nearest_multiple(amount, 5.0).max(10.0)
            }
        }
        RoundingCategory::Sodium => {
            if amount < 5.0 {
                0.0
            } else if amount <= 140.0 {
                nearest_multiple(amount, 5.0)
            } else {
                nearest_multiple(amount, 10.0)
            }
        }
        RoundingCategory::CarbProteinGroup => {
            if amount < 0.5 {
                0.0
            } else {
                amount.round()
            }
        }
        RoundingCategory::VitaminMineral => amount.round(),
    }
}

/// Nearest multiple of `step`, ties away from zero
fn nearest_multiple(amount: f64, step: f64) -> f64 {
    (amount / step).round() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CATEGORIES: [RoundingCategory; 6] = [
        RoundingCategory::Calories,
        RoundingCategory::FatGroup,
        RoundingCategory::Cholesterol,
        RoundingCategory::Sodium,
        RoundingCategory::CarbProteinGroup,
        RoundingCategory::VitaminMineral,
    ];

    fn check(category: RoundingCategory, cases: &[(f64, f64)]) {
        for &(raw, expected) in cases {
            let got = round_amount(category, raw);
            assert!(
                (got - expected).abs() < 1e-9,
                "{:?}: {} rounded to {}, expected {}",
                category,
                raw,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_calories_boundaries() {
        check(
            RoundingCategory::Calories,
            &[
                (4.0, 0.0),
                (5.0, 5.0),
                (50.0, 50.0),
                (51.0, 50.0),
                (55.0, 60.0),
                (150.0, 150.0),
                (154.0, 150.0),
                (155.0, 160.0),
                (170.0, 170.0),
                (510.0, 510.0),
            ],
        );
    }

    #[test]
    fn test_fat_group_boundaries() {
        check(
            RoundingCategory::FatGroup,
            &[
                (0.49, 0.0),
                (0.5, 0.5),
                (3.5, 3.5),
                (3.7, 3.5),
                (4.9, 5.0),
                (5.4, 5.0),
                (5.6, 6.0),
                (10.5, 11.0),
            ],
        );
    }

    #[test]
    fn test_cholesterol_boundaries() {
        check(
            RoundingCategory::Cholesterol,
            &[
                (1.0, 0.0),
                (2.0, 2.0),
                (2.1, 3.0),
                (4.2, 5.0),
                (5.0, 5.0),
                (5.1, 10.0),
                (12.0, 10.0),
                (15.0, 15.0),
                (18.0, 20.0),
                (45.0, 45.0),
            ],
        );
    }

    #[test]
    fn test_sodium_boundaries() {
        check(
            RoundingCategory::Sodium,
            &[
                (4.0, 0.0),
                (5.0, 5.0),
                (110.0, 110.0),
                (140.0, 140.0),
                (141.0, 140.0),
                (145.0, 150.0),
                (330.0, 330.0),
            ],
        );
    }

    #[test]
    fn test_carb_protein_boundaries() {
        check(
            RoundingCategory::CarbProteinGroup,
            &[(0.49, 0.0), (0.5, 1.0), (1.4, 1.0), (2.5, 3.0), (24.0, 24.0)],
        );
    }

    #[test]
    fn test_vitamin_mineral_has_no_floor() {
        check(
            RoundingCategory::VitaminMineral,
            &[(0.4, 0.0), (0.5, 1.0), (1.5, 2.0), (259.6, 260.0)],
        );
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for category in ALL_CATEGORIES {
            // 0.00 .. 600.00 in hundredths
            for i in 0..60_000 {
                let raw = i as f64 / 100.0;
                let once = round_amount(category, raw);
                let twice = round_amount(category, once);
                assert_eq!(once, twice, "{:?} not idempotent at {}", category, raw);
            }
        }
    }

    #[test]
    fn test_rounding_never_negative() {
        for category in ALL_CATEGORIES {
            assert_eq!(round_amount(category, 0.0), 0.0);
            assert!(round_amount(category, 0.01) >= 0.0);
        }
    }
}
