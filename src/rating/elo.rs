//! Fixed-K Elo rating model
//!
//! Pure functions computing the expected score and the rating exchange for a
//! single pairing. The points one side gains are exactly the points the other
//! side loses.

use crate::config::constants::{K_FACTOR, RATING_BASE, RATING_SCALE};

/// Logistic strength of a rating, `10 ^ (rating / 400)`
pub fn factor(rating: f64) -> f64 {
    RATING_BASE.powf(rating / RATING_SCALE)
}

/// Probability that a player rated `rating_a` scores against one rated `rating_b`
pub fn expectation(rating_a: f64, rating_b: f64) -> f64 {
    let factor_a = factor(rating_a);
    factor_a / (factor_a + factor(rating_b))
}

/// Points moved from B to A given A's score (1.0 win, 0.5 draw, 0.0 loss)
pub fn delta(rating_a: f64, rating_b: f64, score_a: f64) -> f64 {
    K_FACTOR * (score_a - expectation(rating_a, rating_b))
}

/// New ratings for both sides after A scores `score_a` against B
pub fn update(rating_a: f64, rating_b: f64, score_a: f64) -> (f64, f64) {
    let delta = delta(rating_a, rating_b, score_a);
    (rating_a + delta, rating_b - delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_factor() {
        assert!((factor(0.0) - 1.0).abs() < EPSILON);
        assert!((factor(400.0) - 10.0).abs() < EPSILON);
        assert!((factor(-400.0) - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_expectation_equal_ratings() {
        assert!((expectation(1500.0, 1500.0) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_expectation_400_point_gap() {
        // 10:1 odds
        assert!((expectation(1900.0, 1500.0) - 10.0 / 11.0).abs() < EPSILON);
        assert!((expectation(1500.0, 1900.0) - 1.0 / 11.0).abs() < EPSILON);
    }

    #[test]
    fn test_expectations_sum_to_one() {
        for (a, b) in [(1500.0, 1500.0), (1200.0, 2100.0), (-300.0, 40.0)] {
            assert!((expectation(a, b) + expectation(b, a) - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_update_win_between_equals() {
        let (a, b) = update(1500.0, 1500.0, 1.0);
        assert!((a - 1516.0).abs() < EPSILON);
        assert!((b - 1484.0).abs() < EPSILON);
    }

    #[test]
    fn test_update_draw_between_equals_is_neutral() {
        let (a, b) = update(1000.0, 1000.0, 0.5);
        assert_eq!(a, 1000.0);
        assert_eq!(b, 1000.0);
    }

    #[test]
    fn test_update_upset_moves_more_points() {
        let (favourite_win, _) = update(1700.0, 1500.0, 1.0);
        let (underdog_win, _) = update(1500.0, 1700.0, 1.0);
        assert!(underdog_win - 1500.0 > favourite_win - 1700.0);
    }

    #[test]
    fn test_update_is_zero_sum() {
        let (a, b) = update(1432.5, 1611.25, 0.0);
        assert!(((a + b) - (1432.5 + 1611.25)).abs() < EPSILON);
    }

    #[test]
    fn test_update_swapped_sides() {
        let (a1, b1) = update(1550.0, 1480.0, 1.0);
        let (b2, a2) = update(1480.0, 1550.0, 0.0);
        assert!((a1 - a2).abs() < EPSILON);
        assert!((b1 - b2).abs() < EPSILON);
    }

    #[test]
    fn test_ratings_are_not_clamped() {
        let (a, b) = update(-50.0, 10.0, 0.0);
        assert!(a < -50.0);
        assert!(b > 10.0);
    }
}
