//! Building and block domain models.
//!
//! # Responsibility
//! - Define the top two levels of the property hierarchy.
//! - Provide create-request and partial-update shapes for store mutations.
//!
//! # Invariants
//! - `Block::building_id` must reference an existing building; the store
//!   rejects unknown parents at mutation time.
//! - `total_blocks` / `total_rooms` are operator-declared capacity figures,
//!   not derived counts.

use serde::{Deserialize, Serialize};

use crate::model::{require_non_empty, EntityId, ValidationError};

/// Top-level property containing zero or more blocks.
///
/// Field names serialize as camelCase to match the external API schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub total_blocks: u32,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
}

/// Fields required to create a building; id and timestamps are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBuilding {
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub total_blocks: u32,
}

impl NewBuilding {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.name, "building", "name")?;
        require_non_empty(&self.address, "building", "address")
    }
}

/// Partial update for a building. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub total_blocks: Option<u32>,
}

impl BuildingPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_non_empty(name, "building", "name")?;
        }
        if let Some(address) = &self.address {
            require_non_empty(address, "building", "address")?;
        }
        Ok(())
    }
}

/// Structural subdivision of a building (a wing or tower) containing rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: EntityId,
    pub building_id: EntityId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub total_rooms: u32,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Fields required to create a block under an existing building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlock {
    pub building_id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub total_rooms: u32,
}

impl NewBlock {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.name, "block", "name")
    }
}

/// Partial update for a block. A `building_id` re-parents the block and is
/// validated against the building collection by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPatch {
    pub building_id: Option<EntityId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub total_rooms: Option<u32>,
}

impl BlockPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_non_empty(name, "block", "name")?;
        }
        Ok(())
    }
}
