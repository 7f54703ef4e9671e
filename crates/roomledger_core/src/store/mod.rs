//! In-memory domain store: single source of truth for all entity
//! collections.
//!
//! # Responsibility
//! - Own one collection per entity type for the lifetime of a session.
//! - Expose accessor and mutator operations to the presentation layer.
//! - Enforce referential integrity and transitive cascade deletes.
//!
//! # Invariants
//! - Every child entity references an existing parent; mutations that would
//!   break this are rejected with `StoreError::UnknownParent`.
//! - Mutations on unknown identifiers surface `StoreError::NotFound`
//!   instead of silently no-opping.
//! - State is memory-only; dropping the store discards everything.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::clock::{Clock, SystemClock};
use crate::model::building::{Block, Building};
use crate::model::invoice::Invoice;
use crate::model::notification::Notification;
use crate::model::room::Room;
use crate::model::tenant::Tenant;
use crate::model::{EntityId, ValidationError};

mod billing;
mod cascade;
mod hierarchy;
mod notifications;

pub type StoreResult<T> = Result<T, StoreError>;

/// Entity type discriminator used in error reporting and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Building,
    Block,
    Room,
    Tenant,
    Invoice,
    Notification,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Block => "block",
            Self::Room => "room",
            Self::Tenant => "tenant",
            Self::Invoice => "invoice",
            Self::Notification => "notification",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from domain store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Target entity does not exist.
    NotFound { kind: EntityKind, id: EntityId },
    /// A parent reference names an entity that does not exist.
    UnknownParent { kind: EntityKind, id: EntityId },
    /// Input failed model-level validation.
    Validation(ValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::UnknownParent { kind, id } => {
                write!(f, "parent {kind} not found: {id}")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::UnknownParent { .. } => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// In-memory store owning all entity collections for one session.
///
/// Constructed once per process/session and injected into the consumer;
/// there is no ambient global instance. Single-threaded, single-writer.
pub struct DomainStore {
    clock: Box<dyn Clock>,
    buildings: Vec<Building>,
    blocks: Vec<Block>,
    rooms: Vec<Room>,
    tenants: Vec<Tenant>,
    invoices: Vec<Invoice>,
    notifications: Vec<Notification>,
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainStore {
    /// Creates an empty store backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty store with a caller-provided time source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            buildings: Vec::new(),
            blocks: Vec::new(),
            rooms: Vec::new(),
            tenants: Vec::new(),
            invoices: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub(crate) fn now(&self) -> i64 {
        self.clock.now_epoch_ms()
    }

    // Whole-collection reads. Slices, so callers cannot mutate past the
    // store's invariants.

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn tenants(&self) -> &[Tenant] {
        &self.tenants
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    // Point reads by identifier. Absence is not an error for reads.

    pub fn building(&self, id: EntityId) -> Option<&Building> {
        self.buildings.iter().find(|building| building.id == id)
    }

    pub fn block(&self, id: EntityId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn room(&self, id: EntityId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn tenant(&self, id: EntityId) -> Option<&Tenant> {
        self.tenants.iter().find(|tenant| tenant.id == id)
    }

    pub fn invoice(&self, id: EntityId) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id == id)
    }

    // Parent-scoped reads: linear filters, empty result is never an error.

    pub fn blocks_of_building(&self, building_id: EntityId) -> Vec<&Block> {
        self.blocks
            .iter()
            .filter(|block| block.building_id == building_id)
            .collect()
    }

    pub fn rooms_of_block(&self, block_id: EntityId) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.block_id == block_id)
            .collect()
    }

    pub fn tenants_of_room(&self, room_id: EntityId) -> Vec<&Tenant> {
        self.tenants
            .iter()
            .filter(|tenant| tenant.room_id == room_id)
            .collect()
    }

    pub fn invoices_of_tenant(&self, tenant_id: EntityId) -> Vec<&Invoice> {
        self.invoices
            .iter()
            .filter(|invoice| invoice.tenant_id == tenant_id)
            .collect()
    }
}
