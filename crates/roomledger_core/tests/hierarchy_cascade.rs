use roomledger_core::{
    DomainStore, EntityId, InvoiceLineItem, InvoiceStatus, NewBlock, NewBuilding, NewInvoice,
    NewRoom, NewTenant, RoomStatus, StoreError, TenantStatus,
};
use uuid::Uuid;

fn building(name: &str) -> NewBuilding {
    NewBuilding {
        name: name.to_string(),
        address: "12 Tran Phu".to_string(),
        description: None,
        total_blocks: 2,
    }
}

fn block(building_id: EntityId, name: &str) -> NewBlock {
    NewBlock {
        building_id,
        name: name.to_string(),
        description: None,
        total_rooms: 10,
    }
}

fn room(block_id: EntityId, number: &str) -> NewRoom {
    NewRoom {
        block_id,
        room_number: number.to_string(),
        name: format!("Room {number}"),
        area: 22.5,
        capacity: 2,
        price: 3_000_000,
        status: RoomStatus::Available,
        amenities: None,
        description: None,
    }
}

fn tenant(room_id: EntityId, full_name: &str) -> NewTenant {
    NewTenant {
        room_id,
        full_name: full_name.to_string(),
        phone: "0901234567".to_string(),
        email: None,
        id_card: "079012345678".to_string(),
        date_of_birth: 820_454_400_000,
        hometown: None,
        move_in_date: 1_735_689_600_000,
        move_out_date: None,
        deposit: 3_000_000,
        monthly_rent: 3_000_000,
        status: TenantStatus::Active,
        notes: None,
    }
}

fn invoice(tenant_id: EntityId) -> NewInvoice {
    NewInvoice {
        tenant_id,
        period: "2025-08".to_string(),
        issue_date: 1_754_006_400_000,
        due_date: 1_755_216_000_000,
        status: InvoiceStatus::Draft,
        line_items: vec![InvoiceLineItem {
            id: Uuid::new_v4(),
            label: "Monthly rent".to_string(),
            amount: 3_000_000,
            description: None,
            quantity: None,
            unit: None,
        }],
        notes: None,
    }
}

#[test]
fn deleting_a_building_cascades_to_blocks_rooms_tenants_and_invoices() {
    let mut store = DomainStore::new();
    let sunrise = store.add_building(building("Sunrise")).unwrap();
    let a1 = store.add_block(block(sunrise.id, "A1")).unwrap();
    let a1_01 = store.add_room(room(a1.id, "A1-01")).unwrap();
    let nguyen = store.add_tenant(tenant(a1_01.id, "Nguyen Van A")).unwrap();
    store.add_invoice(invoice(nguyen.id)).unwrap();

    store.delete_building(sunrise.id).unwrap();

    assert!(store.buildings().is_empty());
    assert!(store.blocks().is_empty());
    assert!(store.rooms().is_empty());
    assert!(store.tenants().is_empty());
    assert!(store.invoices().is_empty());
}

#[test]
fn cascade_leaves_sibling_subtrees_untouched() {
    let mut store = DomainStore::new();
    let doomed = store.add_building(building("Doomed")).unwrap();
    let doomed_block = store.add_block(block(doomed.id, "D1")).unwrap();
    let doomed_room = store.add_room(room(doomed_block.id, "D1-01")).unwrap();
    store
        .add_tenant(tenant(doomed_room.id, "Le Thi B"))
        .unwrap();

    let kept = store.add_building(building("Kept")).unwrap();
    let kept_block = store.add_block(block(kept.id, "K1")).unwrap();
    let kept_room = store.add_room(room(kept_block.id, "K1-01")).unwrap();
    let kept_tenant = store.add_tenant(tenant(kept_room.id, "Tran Van C")).unwrap();

    store.delete_building(doomed.id).unwrap();

    assert_eq!(store.buildings().len(), 1);
    assert_eq!(store.blocks().len(), 1);
    assert_eq!(store.rooms().len(), 1);
    assert_eq!(store.tenants().len(), 1);
    assert_eq!(store.tenants()[0].id, kept_tenant.id);
}

#[test]
fn deleting_a_block_removes_its_rooms_and_their_tenants() {
    let mut store = DomainStore::new();
    let b = store.add_building(building("Riverside")).unwrap();
    let doomed = store.add_block(block(b.id, "B1")).unwrap();
    let kept = store.add_block(block(b.id, "B2")).unwrap();
    let doomed_room = store.add_room(room(doomed.id, "B1-01")).unwrap();
    store.add_room(room(kept.id, "B2-01")).unwrap();
    store
        .add_tenant(tenant(doomed_room.id, "Pham Van D"))
        .unwrap();

    store.delete_block(doomed.id).unwrap();

    assert_eq!(store.blocks().len(), 1);
    assert_eq!(store.rooms().len(), 1);
    assert_eq!(store.rooms()[0].block_id, kept.id);
    assert!(store.tenants().is_empty());
    assert_eq!(store.buildings().len(), 1);
}

#[test]
fn deleting_a_room_removes_its_tenants_and_their_invoices() {
    let mut store = DomainStore::new();
    let b = store.add_building(building("Hillside")).unwrap();
    let bl = store.add_block(block(b.id, "C1")).unwrap();
    let doomed = store.add_room(room(bl.id, "C1-01")).unwrap();
    let t = store.add_tenant(tenant(doomed.id, "Vo Thi E")).unwrap();
    store.add_invoice(invoice(t.id)).unwrap();

    // Unconditional cascade: an active tenant does not block the delete.
    store.delete_room(doomed.id).unwrap();

    assert!(store.rooms().is_empty());
    assert!(store.tenants().is_empty());
    assert!(store.invoices().is_empty());
}

#[test]
fn deleting_a_tenant_removes_their_invoices() {
    let mut store = DomainStore::new();
    let b = store.add_building(building("Lakeside")).unwrap();
    let bl = store.add_block(block(b.id, "L1")).unwrap();
    let r = store.add_room(room(bl.id, "L1-01")).unwrap();
    let t = store.add_tenant(tenant(r.id, "Hoang Van F")).unwrap();
    store.add_invoice(invoice(t.id)).unwrap();
    store.add_invoice(invoice(t.id)).unwrap();

    store.delete_tenant(t.id).unwrap();

    assert!(store.tenants().is_empty());
    assert!(store.invoices().is_empty());
    assert_eq!(store.rooms().len(), 1);
}

#[test]
fn creating_children_under_unknown_parents_is_rejected() {
    let mut store = DomainStore::new();
    let missing = Uuid::new_v4();

    let block_err = store.add_block(block(missing, "A1")).unwrap_err();
    assert!(matches!(block_err, StoreError::UnknownParent { id, .. } if id == missing));

    let room_err = store.add_room(room(missing, "A1-01")).unwrap_err();
    assert!(matches!(room_err, StoreError::UnknownParent { id, .. } if id == missing));

    let tenant_err = store.add_tenant(tenant(missing, "Nobody")).unwrap_err();
    assert!(matches!(tenant_err, StoreError::UnknownParent { id, .. } if id == missing));

    let invoice_err = store.add_invoice(invoice(missing)).unwrap_err();
    assert!(matches!(invoice_err, StoreError::UnknownParent { id, .. } if id == missing));
}

#[test]
fn deleting_unknown_ids_surfaces_not_found() {
    let mut store = DomainStore::new();
    let missing = Uuid::new_v4();

    assert!(matches!(
        store.delete_building(missing).unwrap_err(),
        StoreError::NotFound { id, .. } if id == missing
    ));
    assert!(matches!(
        store.delete_block(missing).unwrap_err(),
        StoreError::NotFound { id, .. } if id == missing
    ));
    assert!(matches!(
        store.delete_room(missing).unwrap_err(),
        StoreError::NotFound { id, .. } if id == missing
    ));
    assert!(matches!(
        store.delete_tenant(missing).unwrap_err(),
        StoreError::NotFound { id, .. } if id == missing
    ));
    assert!(matches!(
        store.delete_invoice(missing).unwrap_err(),
        StoreError::NotFound { id, .. } if id == missing
    ));
}
