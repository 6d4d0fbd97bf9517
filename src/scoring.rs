//! Percentage and tier derivation.

/// Percentage of `score` against `max`, unrounded. Zero when `max <= 0`.
pub fn percent_of(score: f64, max: f64) -> f64 {
    if max <= 0.0 || max.is_nan() {
        0.0
    } else {
        100.0 * score / max
    }
}

/// Card and chart precision: one decimal place.
pub fn format_percent_precise(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Large aggregate display: rounded to a whole number.
pub fn format_percent_rounded(pct: f64) -> String {
    format!("{}%", pct.round() as i64)
}

/// Scores are whole numbers in practice; keep decimals only when present.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.is_finite() {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}

/// Width for a progress bar, kept inside the track.
pub fn bar_fill(pct: f64) -> f64 {
    if pct.is_nan() {
        0.0
    } else {
        pct.clamp(0.0, 100.0)
    }
}

/// Qualitative bucket for a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Tier {
    pub const EXCELLENT_FROM: f64 = 80.0;
    pub const GOOD_FROM: f64 = 60.0;

    pub fn of(pct: f64) -> Tier {
        if pct >= Self::EXCELLENT_FROM {
            Tier::Excellent
        } else if pct >= Self::GOOD_FROM {
            Tier::Good
        } else {
            Tier::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Suffix for `tier-*` CSS classes.
    pub fn slug(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::NeedsImprovement => "needs-improvement",
        }
    }

    /// Per-metric colour: green, amber, red.
    pub fn metric_color(self) -> &'static str {
        match self {
            Tier::Excellent => "#4caf50",
            Tier::Good => "#ff9800",
            Tier::NeedsImprovement => "#f44336",
        }
    }

    /// Colour for dashboard chips and the quality banner.
    pub fn banner_color(self) -> &'static str {
        match self {
            Tier::Excellent => "#34c759",
            Tier::Good => "#ff9500",
            Tier::NeedsImprovement => "#ff3b30",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_regular() {
        assert_eq!(percent_of(4.0, 5.0), 80.0);
        assert_eq!(percent_of(35.0, 50.0), 70.0);
        assert!((percent_of(1.0, 3.0) - 33.333_333).abs() < 1e-4);
    }

    #[test]
    fn test_percent_of_zero_max() {
        assert_eq!(percent_of(7.0, 0.0), 0.0);
        assert_eq!(percent_of(0.0, 0.0), 0.0);
        assert_eq!(percent_of(3.0, -5.0), 0.0);
    }

    #[test]
    fn test_percent_of_matches_formula() {
        for max in [1.0, 5.0, 10.0, 45.0, 50.0] {
            for step in 0..=10 {
                let score = max * step as f64 / 10.0;
                assert_eq!(percent_of(score, max), 100.0 * score / max);
            }
        }
    }

    #[test]
    fn test_tier_boundaries_inclusive_lower() {
        assert_eq!(Tier::of(0.0), Tier::NeedsImprovement);
        assert_eq!(Tier::of(59.99), Tier::NeedsImprovement);
        assert_eq!(Tier::of(60.0), Tier::Good);
        assert_eq!(Tier::of(79.99), Tier::Good);
        assert_eq!(Tier::of(80.0), Tier::Excellent);
        assert_eq!(Tier::of(100.0), Tier::Excellent);
    }

    #[test]
    fn test_tier_ranges_contiguous() {
        // Walk [0, 100] and check the tier only ever steps up, exactly twice.
        let mut changes = 0;
        let mut previous = Tier::of(0.0);
        for tenth in 0..=1000 {
            let tier = Tier::of(tenth as f64 / 10.0);
            if tier != previous {
                changes += 1;
                previous = tier;
            }
        }
        assert_eq!(changes, 2);
        assert_eq!(previous, Tier::Excellent);
    }

    #[test]
    fn test_tier_nan_is_lowest() {
        assert_eq!(Tier::of(f64::NAN), Tier::NeedsImprovement);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_percent_precise(80.0), "80.0%");
        assert_eq!(format_percent_precise(100.0 / 3.0), "33.3%");
        assert_eq!(format_percent_rounded(77.8), "78%");
        assert_eq!(format_percent_rounded(70.0), "70%");
        assert_eq!(format_score(35.0), "35");
        assert_eq!(format_score(7.5), "7.5");
    }

    #[test]
    fn test_bar_fill_clamped() {
        assert_eq!(bar_fill(-4.0), 0.0);
        assert_eq!(bar_fill(140.0), 100.0);
        assert_eq!(bar_fill(f64::NAN), 0.0);
        assert_eq!(bar_fill(42.5), 42.5);
    }
}
