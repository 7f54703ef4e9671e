use roomledger_core::{
    DomainStore, EntityId, InvoiceLineItem, InvoicePatch, InvoiceStatus, NewBlock, NewBuilding,
    NewInvoice, NewRoom, NewTenant, RoomStatus, TenantStatus,
};
use uuid::Uuid;

fn seed_room(store: &mut DomainStore, status: RoomStatus) -> EntityId {
    let building = match store.buildings().first().map(|building| building.id) {
        Some(id) => id,
        None => {
            store
                .add_building(NewBuilding {
                    name: "Sunrise".to_string(),
                    address: "12 Tran Phu".to_string(),
                    description: None,
                    total_blocks: 1,
                })
                .unwrap()
                .id
        }
    };
    let block = match store.blocks().first().map(|block| block.id) {
        Some(id) => id,
        None => {
            store
                .add_block(NewBlock {
                    building_id: building,
                    name: "A1".to_string(),
                    description: None,
                    total_rooms: 4,
                })
                .unwrap()
                .id
        }
    };
    store
        .add_room(NewRoom {
            block_id: block,
            room_number: format!("A1-{:02}", store.rooms().len() + 1),
            name: "Room".to_string(),
            area: 18.0,
            capacity: 2,
            price: 2_500_000,
            status,
            amenities: None,
            description: None,
        })
        .unwrap()
        .id
}

fn seed_tenant(
    store: &mut DomainStore,
    room_id: EntityId,
    status: TenantStatus,
    monthly_rent: i64,
) -> EntityId {
    store
        .add_tenant(NewTenant {
            room_id,
            full_name: "Tenant".to_string(),
            phone: "0900000000".to_string(),
            email: None,
            id_card: "079000000000".to_string(),
            date_of_birth: 820_454_400_000,
            hometown: None,
            move_in_date: 1_735_689_600_000,
            move_out_date: None,
            deposit: 1_000_000,
            monthly_rent,
            status,
            notes: None,
        })
        .unwrap()
        .id
}

fn seed_invoice(store: &mut DomainStore, tenant_id: EntityId, amount: i64) -> EntityId {
    store
        .add_invoice(NewInvoice {
            tenant_id,
            period: "2025-08".to_string(),
            issue_date: 1_754_006_400_000,
            due_date: 1_755_216_000_000,
            status: InvoiceStatus::Draft,
            line_items: vec![InvoiceLineItem {
                id: Uuid::new_v4(),
                label: "Rent".to_string(),
                amount,
                description: None,
                quantity: None,
                unit: None,
            }],
            notes: None,
        })
        .unwrap()
        .id
}

fn set_status(store: &mut DomainStore, invoice_id: EntityId, status: InvoiceStatus) {
    store
        .update_invoice(
            invoice_id,
            InvoicePatch {
                status: Some(status),
                ..InvoicePatch::default()
            },
        )
        .unwrap();
}

#[test]
fn empty_store_yields_zeroed_summaries() {
    let store = DomainStore::new();
    assert_eq!(store.portfolio_summary(), Default::default());
    assert_eq!(store.invoice_totals(), Default::default());
}

#[test]
fn portfolio_summary_counts_rooms_and_active_rent() {
    let mut store = DomainStore::new();
    let occupied = seed_room(&mut store, RoomStatus::Occupied);
    let available = seed_room(&mut store, RoomStatus::Available);
    seed_room(&mut store, RoomStatus::Maintenance);

    seed_tenant(&mut store, occupied, TenantStatus::Active, 2_500_000);
    seed_tenant(&mut store, occupied, TenantStatus::Expired, 2_000_000);
    seed_tenant(&mut store, available, TenantStatus::Pending, 1_500_000);

    let summary = store.portfolio_summary();
    assert_eq!(summary.total_buildings, 1);
    assert_eq!(summary.total_blocks, 1);
    assert_eq!(summary.total_rooms, 3);
    assert_eq!(summary.available_rooms, 1);
    assert_eq!(summary.occupied_rooms, 1);
    assert_eq!(summary.active_tenants, 1);
    assert_eq!(summary.monthly_revenue, 2_500_000);
}

#[test]
fn invoice_totals_split_by_collection_state() {
    let mut store = DomainStore::new();
    let room = seed_room(&mut store, RoomStatus::Occupied);
    let tenant = seed_tenant(&mut store, room, TenantStatus::Active, 2_500_000);

    // One invoice per state: draft, sent, paid, overdue, cancelled.
    let _draft = seed_invoice(&mut store, tenant, 1_000_000);
    let sent = seed_invoice(&mut store, tenant, 2_000_000);
    set_status(&mut store, sent, InvoiceStatus::Sent);
    let paid = seed_invoice(&mut store, tenant, 3_000_000);
    set_status(&mut store, paid, InvoiceStatus::Paid);
    let overdue = seed_invoice(&mut store, tenant, 4_000_000);
    set_status(&mut store, overdue, InvoiceStatus::Overdue);
    let cancelled = seed_invoice(&mut store, tenant, 5_000_000);
    set_status(&mut store, cancelled, InvoiceStatus::Cancelled);

    let totals = store.invoice_totals();
    assert_eq!(totals.total_amount, 15_000_000);
    assert_eq!(totals.paid, 3_000_000);
    assert_eq!(totals.overdue, 4_000_000);
    // Draft + sent balances await payment; cancelled contributes nothing.
    assert_eq!(totals.awaiting_payment, 3_000_000);
}
