//! Tenant domain model.
//!
//! # Invariants
//! - `room_id` must reference an existing room.
//! - `move_out_date`, when set, must not precede `move_in_date`.
//! - `deposit` and `monthly_rent` are non-negative.

use serde::{Deserialize, Serialize};

use crate::model::{require_non_empty, EntityId, ValidationError};

/// Lease lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    /// Currently renting.
    Active,
    /// Lease ended.
    Expired,
    /// Deposit paid, move-in pending.
    Pending,
}

impl TenantStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Pending => "pending",
        }
    }
}

/// Renter occupying a room under a lease.
///
/// Date fields are Unix epoch milliseconds; formatting is a boundary
/// concern, the core stores raw values only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: EntityId,
    pub room_id: EntityId,
    pub full_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// National identity card number.
    pub id_card: String,
    pub date_of_birth: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    pub move_in_date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_out_date: Option<i64>,
    pub deposit: i64,
    pub monthly_rent: i64,
    pub status: TenantStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Fields required to create a tenant under an existing room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTenant {
    pub room_id: EntityId,
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub id_card: String,
    pub date_of_birth: i64,
    pub hometown: Option<String>,
    pub move_in_date: i64,
    pub move_out_date: Option<i64>,
    pub deposit: i64,
    pub monthly_rent: i64,
    pub status: TenantStatus,
    pub notes: Option<String>,
}

impl NewTenant {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.full_name, "tenant", "full_name")?;
        require_non_empty(&self.phone, "tenant", "phone")?;
        require_non_empty(&self.id_card, "tenant", "id_card")?;
        if self.deposit < 0 {
            return Err(ValidationError::NegativeAmount {
                field: "tenant.deposit",
            });
        }
        if self.monthly_rent < 0 {
            return Err(ValidationError::NegativeAmount {
                field: "tenant.monthly_rent",
            });
        }
        check_move_dates(self.move_in_date, self.move_out_date)
    }
}

/// Partial update for a tenant. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantPatch {
    pub room_id: Option<EntityId>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub id_card: Option<String>,
    pub date_of_birth: Option<i64>,
    pub hometown: Option<String>,
    pub move_in_date: Option<i64>,
    pub move_out_date: Option<i64>,
    pub deposit: Option<i64>,
    pub monthly_rent: Option<i64>,
    pub status: Option<TenantStatus>,
    pub notes: Option<String>,
}

impl TenantPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(full_name) = &self.full_name {
            require_non_empty(full_name, "tenant", "full_name")?;
        }
        if let Some(phone) = &self.phone {
            require_non_empty(phone, "tenant", "phone")?;
        }
        if let Some(id_card) = &self.id_card {
            require_non_empty(id_card, "tenant", "id_card")?;
        }
        if matches!(self.deposit, Some(deposit) if deposit < 0) {
            return Err(ValidationError::NegativeAmount {
                field: "tenant.deposit",
            });
        }
        if matches!(self.monthly_rent, Some(rent) if rent < 0) {
            return Err(ValidationError::NegativeAmount {
                field: "tenant.monthly_rent",
            });
        }
        if let (Some(move_in), Some(move_out)) = (self.move_in_date, self.move_out_date) {
            check_move_dates(move_in, Some(move_out))?;
        }
        Ok(())
    }
}

fn check_move_dates(move_in: i64, move_out: Option<i64>) -> Result<(), ValidationError> {
    match move_out {
        Some(move_out) if move_out < move_in => Err(ValidationError::MoveOutBeforeMoveIn {
            move_in,
            move_out,
        }),
        _ => Ok(()),
    }
}
