//! Differential registry entries and tagged scores.

/// Stable registry identifier for a differential (`"lateral_sprain"`).
pub type DifferentialKey = &'static str;

/// One registry entry: a candidate clinical differential for a region.
#[derive(Debug, Clone, Copy)]
pub struct DifferentialInfo {
    pub key: DifferentialKey,
    /// Clinician-facing display name.
    pub name: &'static str,
    /// Prior weight applied before any rule fires. Always 0 for
    /// urgent-only entries.
    pub base: f64,
    /// Only ever surfaced by a forced red-flag rule, never by weight.
    pub urgent_only: bool,
    /// Recommended objective tests when this differential ranks.
    pub tests: &'static [&'static str],
}

/// Score state of one differential during a scoring pass.
///
/// `Forced` and `Excluded` are absorbing: once set, weighted deltas no
/// longer apply. The 999 display value for forced pathways exists only at
/// the summary boundary; internally a forced score is just this tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    Points(f64),
    /// Pinned to rank first by a red-flag rule.
    Forced,
    /// Removed from ranking entirely.
    Excluded,
}

impl Score {
    /// Numeric projection for ranking comparisons.
    pub fn points(&self) -> f64 {
        match self {
            Score::Points(p) => *p,
            Score::Forced => f64::INFINITY,
            Score::Excluded => f64::NEG_INFINITY,
        }
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, Score::Excluded)
    }

    pub fn is_forced(&self) -> bool {
        matches!(self, Score::Forced)
    }
}

/// One differential's accumulated score and rationale for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDifferential {
    pub key: String,
    pub score: Score,
    /// Rationale strings in rule application order.
    pub why: Vec<String>,
}

impl ScoredDifferential {
    pub fn new(key: &str, base: f64) -> Self {
        Self {
            key: key.to_string(),
            score: Score::Points(base),
            why: Vec::new(),
        }
    }

    /// Apply a weighted contribution. No-op on `Forced`/`Excluded`.
    pub fn add(&mut self, delta: f64, why: &str) {
        if let Score::Points(p) = self.score {
            self.score = Score::Points(p + delta);
            self.why.push(why.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_accumulate_with_rationale() {
        let mut s = ScoredDifferential::new("lateral_sprain", 1.0);
        s.add(2.0, "Inversion roll mechanism");
        s.add(-1.5, "Ottawa-positive pattern favours fracture work-up");
        assert_eq!(s.score, Score::Points(1.5));
        assert_eq!(s.why.len(), 2);
    }

    #[test]
    fn forced_and_excluded_absorb_deltas() {
        let mut s = ScoredDifferential::new("fracture", 0.4);
        s.score = Score::Forced;
        s.add(2.0, "ignored");
        assert_eq!(s.score, Score::Forced);
        assert!(s.why.is_empty());

        s.score = Score::Excluded;
        s.add(2.0, "ignored");
        assert_eq!(s.score, Score::Excluded);
    }

    #[test]
    fn points_projection_orders_the_tags() {
        assert!(Score::Forced.points() > Score::Points(999.0).points());
        assert!(Score::Excluded.points() < Score::Points(-1.0).points());
    }
}
