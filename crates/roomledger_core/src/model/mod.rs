//! Unified domain model for the property hierarchy and billing records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep parent references as plain identifiers, never object pointers.
//!
//! # Invariants
//! - Every domain object is identified by a stable `EntityId`.
//! - `created_at` / `updated_at` are Unix epoch milliseconds.
//! - Deletion is hard delete; there are no tombstones.

use std::error::Error;
use std::fmt::{Display, Formatter};

use uuid::Uuid;

pub mod building;
pub mod invoice;
pub mod notification;
pub mod room;
pub mod tenant;

/// Stable identifier for every domain entity.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;

/// Field-level validation failure raised before any collection mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
    /// A numeric field that must be strictly positive is zero or negative.
    NonPositive {
        entity: &'static str,
        field: &'static str,
    },
    /// A monetary amount is negative.
    NegativeAmount { field: &'static str },
    /// A billing period does not match `YYYY-MM`.
    InvalidPeriod(String),
    /// A tenant's move-out date precedes the move-in date.
    MoveOutBeforeMoveIn { move_in: i64, move_out: i64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { entity, field } => {
                write!(f, "{entity}.{field} must not be empty")
            }
            Self::NonPositive { entity, field } => {
                write!(f, "{entity}.{field} must be strictly positive")
            }
            Self::NegativeAmount { field } => {
                write!(f, "{field} must not be negative")
            }
            Self::InvalidPeriod(period) => {
                write!(f, "billing period `{period}` must match YYYY-MM")
            }
            Self::MoveOutBeforeMoveIn { move_in, move_out } => write!(
                f,
                "move-out date {move_out} precedes move-in date {move_in}"
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_non_empty(
    value: &str,
    entity: &'static str,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(())
}
