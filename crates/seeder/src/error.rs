//! The module contains the errors seeding can throw.
//!
//! The errors are:
//!
//! - [`Referential`] thrown when a record points at a row that does not exist yet.
//! - [`Constraint`] thrown when source data carries a malformed or duplicate natural key.
//! - [`Plan`] thrown for an unknown step name or a dependency cycle.
//! - [`Source`] thrown when an external data file is unreadable or malformed.
//! - [`Store`] thrown when the database itself fails.
//!
//! [`StepFailure`] wraps one of them at the orchestrator boundary, naming the step.
//!
//!  [`Referential`]: SeedError::Referential
//!  [`Constraint`]: SeedError::Constraint
//!  [`Plan`]: SeedError::Plan
//!  [`Source`]: SeedError::Source
//!  [`Store`]: SeedError::Store
use sea_orm::DbErr;
use thiserror::Error;

use crate::{RunReport, Step};

/// Seeding errors.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("{entity} \"{key}\" not found")]
    Referential { entity: &'static str, key: String },
    #[error("Invalid key: {0}")]
    Constraint(String),
    #[error("Invalid plan: {0}")]
    Plan(String),
    #[error("Invalid source: {0}")]
    Source(String),
    #[error(transparent)]
    Store(#[from] DbErr),
}

impl SeedError {
    pub(crate) fn missing(entity: &'static str, key: impl Into<String>) -> Self {
        Self::Referential {
            entity,
            key: key.into(),
        }
    }
}

impl PartialEq for SeedError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Referential {
                    entity: a,
                    key: key_a,
                },
                Self::Referential {
                    entity: b,
                    key: key_b,
                },
            ) => a == b && key_a == key_b,
            (Self::Constraint(a), Self::Constraint(b)) => a == b,
            (Self::Plan(a), Self::Plan(b)) => a == b,
            (Self::Source(a), Self::Source(b)) => a == b,
            (Self::Store(a), Self::Store(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

/// A step that aborted a run.
///
/// Steps before `step` stay committed; `completed` lists them.
#[derive(Error, Debug)]
#[error("step '{step}' failed: {source}")]
pub struct StepFailure {
    pub step: Step,
    pub last_completed: Option<Step>,
    pub completed: RunReport,
    pub source: SeedError,
}
