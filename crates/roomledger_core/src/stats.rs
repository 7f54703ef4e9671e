//! Portfolio and billing read models derived from store snapshots.
//!
//! # Responsibility
//! - Aggregate occupancy and revenue figures for dashboard-style consumers.
//! - Stay pure: derivations read the store and never mutate it.

use serde::Serialize;

use crate::model::invoice::InvoiceStatus;
use crate::model::room::RoomStatus;
use crate::model::tenant::TenantStatus;
use crate::store::DomainStore;

/// Occupancy and revenue overview across the whole portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_buildings: usize,
    pub total_blocks: usize,
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    pub active_tenants: usize,
    /// Sum of active tenants' monthly rent.
    pub monthly_revenue: i64,
}

/// Invoice value broken down by collection state.
///
/// Cancelled invoices contribute to `total_amount` only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    /// Grand total across all invoices.
    pub total_amount: i64,
    /// Total of paid invoices.
    pub paid: i64,
    /// Outstanding balance of overdue invoices.
    pub overdue: i64,
    /// Outstanding balance of draft and sent invoices.
    pub awaiting_payment: i64,
}

impl DomainStore {
    /// Derives the occupancy/revenue overview from the current snapshot.
    pub fn portfolio_summary(&self) -> PortfolioSummary {
        PortfolioSummary {
            total_buildings: self.buildings().len(),
            total_blocks: self.blocks().len(),
            total_rooms: self.rooms().len(),
            available_rooms: self
                .rooms()
                .iter()
                .filter(|room| room.status == RoomStatus::Available)
                .count(),
            occupied_rooms: self
                .rooms()
                .iter()
                .filter(|room| room.status == RoomStatus::Occupied)
                .count(),
            active_tenants: self
                .tenants()
                .iter()
                .filter(|tenant| tenant.status == TenantStatus::Active)
                .count(),
            monthly_revenue: self
                .tenants()
                .iter()
                .filter(|tenant| tenant.status == TenantStatus::Active)
                .map(|tenant| tenant.monthly_rent)
                .sum(),
        }
    }

    /// Derives invoice value totals from the current snapshot.
    pub fn invoice_totals(&self) -> InvoiceTotals {
        let mut totals = InvoiceTotals::default();
        for invoice in self.invoices() {
            totals.total_amount += invoice.total_amount;
            match invoice.status {
                InvoiceStatus::Paid => totals.paid += invoice.total_amount,
                InvoiceStatus::Overdue => totals.overdue += invoice.balance_due,
                InvoiceStatus::Draft | InvoiceStatus::Sent => {
                    totals.awaiting_payment += invoice.balance_due;
                }
                InvoiceStatus::Cancelled => {}
            }
        }
        totals
    }
}
