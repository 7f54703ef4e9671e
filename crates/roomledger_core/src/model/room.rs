//! Room domain model.
//!
//! # Invariants
//! - `block_id` must reference an existing block.
//! - `area` and `capacity` are strictly positive; `price` is non-negative.

use serde::{Deserialize, Serialize};

use crate::model::{require_non_empty, EntityId, ValidationError};

/// Occupancy state of a rentable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// Vacant and rentable.
    Available,
    /// Currently leased.
    Occupied,
    /// Taken out of service.
    Maintenance,
    /// Deposit received, tenant not yet moved in.
    Reserved,
}

impl RoomStatus {
    /// Stable lowercase name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::Reserved => "reserved",
        }
    }
}

/// Rentable unit within a block, assignable to at most one active tenant.
///
/// The data model does not enforce the single-active-tenant expectation;
/// historical tenants may share a `room_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: EntityId,
    pub block_id: EntityId,
    pub room_number: String,
    pub name: String,
    /// Floor area in square metres.
    pub area: f64,
    /// Maximum occupant count.
    pub capacity: u32,
    /// Monthly rent price.
    pub price: i64,
    pub status: RoomStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Fields required to create a room under an existing block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub block_id: EntityId,
    pub room_number: String,
    pub name: String,
    pub area: f64,
    pub capacity: u32,
    pub price: i64,
    pub status: RoomStatus,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
}

impl NewRoom {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.room_number, "room", "room_number")?;
        require_non_empty(&self.name, "room", "name")?;
        if self.area <= 0.0 {
            return Err(ValidationError::NonPositive {
                entity: "room",
                field: "area",
            });
        }
        if self.capacity == 0 {
            return Err(ValidationError::NonPositive {
                entity: "room",
                field: "capacity",
            });
        }
        if self.price < 0 {
            return Err(ValidationError::NegativeAmount { field: "room.price" });
        }
        Ok(())
    }
}

/// Partial update for a room. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPatch {
    pub block_id: Option<EntityId>,
    pub room_number: Option<String>,
    pub name: Option<String>,
    pub area: Option<f64>,
    pub capacity: Option<u32>,
    pub price: Option<i64>,
    pub status: Option<RoomStatus>,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
}

impl RoomPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(room_number) = &self.room_number {
            require_non_empty(room_number, "room", "room_number")?;
        }
        if let Some(name) = &self.name {
            require_non_empty(name, "room", "name")?;
        }
        if matches!(self.area, Some(area) if area <= 0.0) {
            return Err(ValidationError::NonPositive {
                entity: "room",
                field: "area",
            });
        }
        if self.capacity == Some(0) {
            return Err(ValidationError::NonPositive {
                entity: "room",
                field: "capacity",
            });
        }
        if matches!(self.price, Some(price) if price < 0) {
            return Err(ValidationError::NegativeAmount { field: "room.price" });
        }
        Ok(())
    }
}
