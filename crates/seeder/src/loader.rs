//! Upsert bookkeeping shared by every loader op.
//!
//! Each op looks a row up by its natural key and reports what it did as an
//! [`Outcome`]; steps fold outcomes into a [`Tally`].

use std::collections::HashSet;
use std::fmt;

use unicode_normalization::UnicodeNormalization;

use crate::{ResultSeed, SeedError, Step};

/// What a single upsert did to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No row matched the natural key; one was inserted.
    Created,
    /// A row matched and its payload was overwritten.
    Updated,
    /// A row matched and already carried the payload; nothing was written.
    Unchanged,
}

impl Outcome {
    /// Outcome for a row that was found; `same` tells whether the payload already matched.
    pub(crate) fn found(same: bool) -> Self {
        if same { Outcome::Unchanged } else { Outcome::Updated }
    }
}

/// Per-step counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Created => self.created += 1,
            Outcome::Updated => self.updated += 1,
            Outcome::Unchanged => self.unchanged += 1,
        }
    }

    pub fn merge(&mut self, other: Tally) {
        self.created += other.created;
        self.updated += other.updated;
        self.unchanged += other.unchanged;
    }

    /// Number of records processed.
    pub fn total(&self) -> usize {
        self.created + self.updated + self.unchanged
    }

    /// Whether the step wrote anything.
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.updated == 0
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records ({} created, {} updated, {} unchanged)",
            self.total(),
            self.created,
            self.updated,
            self.unchanged
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub tally: Tally,
}

/// Outcome of a whole run, in execution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
}

impl RunReport {
    pub fn totals(&self) -> Tally {
        let mut totals = Tally::default();
        for report in &self.steps {
            totals.merge(report.tally);
        }
        totals
    }

    pub fn last_step(&self) -> Option<Step> {
        self.steps.last().map(|report| report.step)
    }
}

/// Canonical form of one natural-key part: trimmed and NFC-composed.
pub(crate) fn key_part(label: &str, raw: &str) -> ResultSeed<String> {
    let normalized: String = raw.trim().nfc().collect();
    if normalized.is_empty() {
        return Err(SeedError::Constraint(format!("{label} must not be empty")));
    }
    Ok(normalized)
}

/// Reject source lists that name the same natural key twice.
pub(crate) fn ensure_unique<'a>(
    label: &str,
    keys: impl IntoIterator<Item = &'a str>,
) -> ResultSeed<()> {
    let mut seen = HashSet::new();
    for key in keys {
        let key = key_part(label, key)?;
        if !seen.insert(key.clone()) {
            return Err(SeedError::Constraint(format!("duplicate {label} \"{key}\"")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_part_trims_and_composes() {
        // "Lưu" written with a combining horn.
        let decomposed = " Lu\u{031B}u ";
        assert_eq!(key_part("key", decomposed).unwrap(), "Lưu");
    }

    #[test]
    fn blank_key_part_is_rejected() {
        assert_eq!(
            key_part("group", "   ").unwrap_err(),
            SeedError::Constraint("group must not be empty".to_string())
        );
    }

    #[test]
    fn ensure_unique_names_the_duplicate() {
        let err = ensure_unique("role", ["admin", "staff", "admin"]).unwrap_err();
        assert_eq!(err, SeedError::Constraint("duplicate role \"admin\"".to_string()));
    }

    #[test]
    fn tally_counts_and_formats() {
        let mut tally = Tally::default();
        tally.record(Outcome::Created);
        tally.record(Outcome::Unchanged);
        tally.record(Outcome::found(false));
        assert_eq!(tally.total(), 3);
        assert!(!tally.is_noop());
        assert_eq!(
            tally.to_string(),
            "3 records (1 created, 1 updated, 1 unchanged)"
        );
    }
}
