//! Invoice mutations and financial derivation.
//!
//! # Responsibility
//! - Create and update invoices with derived totals, balances and
//!   status-transition timestamps.
//! - Keep denormalized hierarchy ids consistent with the linked tenant.
//!
//! # Invariants
//! - `total_amount` is always the sum of line-item amounts; callers never
//!   supply totals.
//! - `balance_due == 0` exactly when `status == Paid`, otherwise
//!   `balance_due == total_amount`.
//! - Moving to `Draft` clears both `sent_at` and `paid_at`; moving to
//!   `Paid` sets both (keeping an earlier `sent_at`); every other target
//!   sets `sent_at` if unset and clears `paid_at`.

use log::debug;
use uuid::Uuid;

use crate::model::invoice::{Invoice, InvoiceLineItem, InvoicePatch, InvoiceStatus, NewInvoice};
use crate::model::EntityId;
use crate::store::{DomainStore, EntityKind, StoreError, StoreResult};

/// Sum of line-item amounts.
pub(crate) fn line_items_total(items: &[InvoiceLineItem]) -> i64 {
    items.iter().map(|item| item.amount).sum()
}

/// Outstanding balance for a status/total pair.
pub(crate) fn balance_for(status: InvoiceStatus, total_amount: i64) -> i64 {
    if status == InvoiceStatus::Paid {
        0
    } else {
        total_amount
    }
}

/// `sent_at` / `paid_at` for a freshly created invoice.
///
/// Only `Sent` and `Paid` imply the invoice went out at creation time; an
/// invoice recorded directly as overdue or cancelled was never sent, so
/// both stamps stay unset. The set-if-unset rule belongs to status
/// transitions on update, not to creation.
fn initial_stamps(status: InvoiceStatus, now: i64) -> (Option<i64>, Option<i64>) {
    match status {
        InvoiceStatus::Draft | InvoiceStatus::Overdue | InvoiceStatus::Cancelled => (None, None),
        InvoiceStatus::Sent => (Some(now), None),
        InvoiceStatus::Paid => (Some(now), Some(now)),
    }
}

/// `sent_at` / `paid_at` after a status transition on an existing invoice.
pub(crate) fn transition_stamps(
    target: InvoiceStatus,
    sent_at: Option<i64>,
    now: i64,
) -> (Option<i64>, Option<i64>) {
    match target {
        InvoiceStatus::Draft => (None, None),
        InvoiceStatus::Sent => (sent_at.or(Some(now)), None),
        InvoiceStatus::Paid => (sent_at.or(Some(now)), Some(now)),
        InvoiceStatus::Overdue | InvoiceStatus::Cancelled => (sent_at.or(Some(now)), None),
    }
}

/// Tenant's position in the hierarchy, denormalized onto invoices.
struct TenantLinkage {
    room_id: EntityId,
    block_id: EntityId,
    building_id: EntityId,
}

impl DomainStore {
    /// Creates an invoice for an existing tenant.
    ///
    /// Derives totals, balance and initial timestamps, and denormalizes the
    /// tenant's room/block/building ids for query convenience.
    pub fn add_invoice(&mut self, new: NewInvoice) -> StoreResult<Invoice> {
        new.validate()?;
        let linkage = self.resolve_tenant_linkage(new.tenant_id)?;
        let now = self.now();

        let total_amount = line_items_total(&new.line_items);
        let (sent_at, paid_at) = initial_stamps(new.status, now);
        let invoice = Invoice {
            id: Uuid::new_v4(),
            building_id: linkage.building_id,
            block_id: linkage.block_id,
            room_id: linkage.room_id,
            tenant_id: new.tenant_id,
            period: new.period,
            issue_date: new.issue_date,
            due_date: new.due_date,
            status: new.status,
            balance_due: balance_for(new.status, total_amount),
            total_amount,
            line_items: new.line_items,
            notes: new.notes,
            attachments: Vec::new(),
            sent_at,
            paid_at,
            created_at: now,
            updated_at: now,
        };
        debug!(
            "event=invoice_created module=store id={} tenant_id={} status={} total={}",
            invoice.id,
            invoice.tenant_id,
            invoice.status.as_str(),
            invoice.total_amount
        );
        self.invoices.push(invoice.clone());
        Ok(invoice)
    }

    /// Merges `Some` patch fields into the invoice, then re-derives totals
    /// and balance. A provided `status` applies the transition timestamp
    /// rules; a provided `tenant_id` re-links the invoice and refreshes the
    /// denormalized hierarchy ids.
    pub fn update_invoice(&mut self, id: EntityId, patch: InvoicePatch) -> StoreResult<Invoice> {
        patch.validate()?;
        let relink = match patch.tenant_id {
            Some(tenant_id) => Some((tenant_id, self.resolve_tenant_linkage(tenant_id)?)),
            None => None,
        };
        let now = self.now();
        let invoice = self
            .invoices
            .iter_mut()
            .find(|invoice| invoice.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Invoice,
                id,
            })?;

        if let Some((tenant_id, linkage)) = relink {
            invoice.tenant_id = tenant_id;
            invoice.room_id = linkage.room_id;
            invoice.block_id = linkage.block_id;
            invoice.building_id = linkage.building_id;
        }
        if let Some(period) = patch.period {
            invoice.period = period;
        }
        if let Some(issue_date) = patch.issue_date {
            invoice.issue_date = issue_date;
        }
        if let Some(due_date) = patch.due_date {
            invoice.due_date = due_date;
        }
        if let Some(line_items) = patch.line_items {
            invoice.line_items = line_items;
        }
        if let Some(notes) = patch.notes {
            invoice.notes = Some(notes);
        }
        if let Some(status) = patch.status {
            let (sent_at, paid_at) = transition_stamps(status, invoice.sent_at, now);
            invoice.status = status;
            invoice.sent_at = sent_at;
            invoice.paid_at = paid_at;
        }

        invoice.total_amount = line_items_total(&invoice.line_items);
        invoice.balance_due = balance_for(invoice.status, invoice.total_amount);
        invoice.updated_at = now;
        debug!(
            "event=invoice_updated module=store id={id} status={} balance={}",
            invoice.status.as_str(),
            invoice.balance_due
        );
        Ok(invoice.clone())
    }

    /// Appends one attachment reference, independent of other fields.
    pub fn add_invoice_attachment(
        &mut self,
        id: EntityId,
        attachment: impl Into<String>,
    ) -> StoreResult<Invoice> {
        let now = self.now();
        let invoice = self
            .invoices
            .iter_mut()
            .find(|invoice| invoice.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Invoice,
                id,
            })?;
        invoice.attachments.push(attachment.into());
        invoice.updated_at = now;
        debug!(
            "event=invoice_attachment_added module=store id={id} attachments={}",
            invoice.attachments.len()
        );
        Ok(invoice.clone())
    }

    /// Deletes an invoice. No children exist below invoices, so there is no
    /// cascade.
    pub fn delete_invoice(&mut self, id: EntityId) -> StoreResult<()> {
        let index = self
            .invoices
            .iter()
            .position(|invoice| invoice.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Invoice,
                id,
            })?;
        self.invoices.remove(index);
        debug!("event=invoice_deleted module=store id={id}");
        Ok(())
    }

    /// Walks tenant -> room -> block to collect the denormalized ids.
    fn resolve_tenant_linkage(&self, tenant_id: EntityId) -> StoreResult<TenantLinkage> {
        let tenant = self.tenant(tenant_id).ok_or(StoreError::UnknownParent {
            kind: EntityKind::Tenant,
            id: tenant_id,
        })?;
        let room = self.room(tenant.room_id).ok_or(StoreError::UnknownParent {
            kind: EntityKind::Room,
            id: tenant.room_id,
        })?;
        let block = self.block(room.block_id).ok_or(StoreError::UnknownParent {
            kind: EntityKind::Block,
            id: room.block_id,
        })?;
        Ok(TenantLinkage {
            room_id: room.id,
            block_id: block.id,
            building_id: block.building_id,
        })
    }
}
