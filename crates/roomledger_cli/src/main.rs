//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roomledger_core` linkage and
//!   store construction.
//! - Keep output deterministic for quick local sanity checks.

use roomledger_core::DomainStore;

fn main() {
    let store = DomainStore::new();
    let summary = store.portfolio_summary();

    println!("roomledger_core version={}", roomledger_core::core_version());
    println!(
        "portfolio buildings={} blocks={} rooms={} active_tenants={} monthly_revenue={}",
        summary.total_buildings,
        summary.total_blocks,
        summary.total_rooms,
        summary.active_tenants,
        summary.monthly_revenue
    );
}
