//! Computed grade summaries and their result tiers.

/// Tier of a computed average, used by the client to pick a screen tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Average below 60.
    Failing,
    /// Average between 60 and 79 inclusive.
    Passing,
    /// Average of 80 or above.
    Honors,
}

impl Tier {
    pub fn from_average(average: u32) -> Tier {
        if average < 60 {
            Tier::Failing
        } else if average <= 79 {
            Tier::Passing
        } else {
            Tier::Honors
        }
    }
}

/// Outcome of a successful calculation over the whole form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeSummary {
    pub courses: usize,
    pub average: u32,
    pub tier: Tier,
}

impl GradeSummary {
    /// Builds a summary from the course count and the grade total. The
    /// average uses integer division; partial points are dropped, and a
    /// zero course count averages to zero rather than dividing by it.
    pub fn new(courses: usize, total: u32) -> GradeSummary {
        let average = total.checked_div(courses as u32).unwrap_or_default();
        GradeSummary {
            courses,
            average,
            tier: Tier::from_average(average),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_cutoffs() {
        assert_eq!(Tier::from_average(0), Tier::Failing);
        assert_eq!(Tier::from_average(59), Tier::Failing);
        assert_eq!(Tier::from_average(60), Tier::Passing);
        assert_eq!(Tier::from_average(79), Tier::Passing);
        assert_eq!(Tier::from_average(80), Tier::Honors);
        assert_eq!(Tier::from_average(100), Tier::Honors);
    }

    #[test]
    fn test_integer_division() {
        let summary = GradeSummary::new(2, 145);
        assert_eq!(summary.average, 72);
        assert_eq!(summary.tier, Tier::Passing);
    }

    #[test]
    fn test_zero_courses_average_to_zero() {
        let summary = GradeSummary::new(0, 0);
        assert_eq!(summary.average, 0);
        assert_eq!(summary.tier, Tier::Failing);
    }

    #[test]
    fn test_summary_from_three_courses() {
        let summary = GradeSummary::new(3, 240);
        assert_eq!(summary.courses, 3);
        assert_eq!(summary.average, 80);
        assert_eq!(summary.tier, Tier::Honors);
    }
}
