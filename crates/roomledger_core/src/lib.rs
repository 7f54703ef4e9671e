//! Core domain logic for the roomledger property-management console.
//! This crate is the single source of truth for business invariants.

pub mod api;
pub mod clock;
pub mod logging;
pub mod model;
pub mod stats;
pub mod store;

pub use api::{ApiResponse, PaginatedResponse, PaginationParams, SortOrder};
pub use clock::{Clock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::building::{
    Block, BlockPatch, Building, BuildingPatch, NewBlock, NewBuilding,
};
pub use model::invoice::{
    Invoice, InvoiceLineItem, InvoicePatch, InvoiceStatus, NewInvoice,
};
pub use model::notification::{NewNotification, Notification, NotificationScope};
pub use model::room::{NewRoom, Room, RoomPatch, RoomStatus};
pub use model::tenant::{NewTenant, Tenant, TenantPatch, TenantStatus};
pub use model::{EntityId, ValidationError};
pub use stats::{InvoiceTotals, PortfolioSummary};
pub use store::{DomainStore, EntityKind, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
