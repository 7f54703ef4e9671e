//! Building/block/room/tenant mutations and cascade wiring.
//!
//! # Responsibility
//! - Provide create/update/delete operations for the property hierarchy.
//! - Run transitive cascades on delete: building -> blocks -> rooms ->
//!   tenants -> invoices.
//!
//! # Invariants
//! - Creates and re-parenting updates verify the referenced parent exists.
//! - Every mutation refreshes `updated_at`; creates set both timestamps to
//!   the same instant.
//! - Unknown target ids surface `StoreError::NotFound`.

use log::{debug, info};
use std::mem::take;
use uuid::Uuid;

use crate::model::building::{Block, BlockPatch, Building, BuildingPatch, NewBlock, NewBuilding};
use crate::model::room::{NewRoom, Room, RoomPatch};
use crate::model::tenant::{NewTenant, Tenant, TenantPatch};
use crate::model::EntityId;
use crate::store::cascade::drop_children_of;
use crate::store::{DomainStore, EntityKind, StoreError, StoreResult};

impl DomainStore {
    // ---- buildings ----

    /// Creates a building. Duplicate names are permitted.
    pub fn add_building(&mut self, new: NewBuilding) -> StoreResult<Building> {
        new.validate()?;
        let now = self.now();
        let building = Building {
            id: Uuid::new_v4(),
            name: new.name,
            address: new.address,
            description: new.description,
            total_blocks: new.total_blocks,
            created_at: now,
            updated_at: now,
        };
        debug!("event=building_created module=store id={}", building.id);
        self.buildings.push(building.clone());
        Ok(building)
    }

    /// Merges `Some` patch fields into the building and refreshes
    /// `updated_at`. An all-`None` patch only refreshes the timestamp.
    pub fn update_building(&mut self, id: EntityId, patch: BuildingPatch) -> StoreResult<Building> {
        patch.validate()?;
        let now = self.now();
        let building = self
            .buildings
            .iter_mut()
            .find(|building| building.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Building,
                id,
            })?;

        if let Some(name) = patch.name {
            building.name = name;
        }
        if let Some(address) = patch.address {
            building.address = address;
        }
        if let Some(description) = patch.description {
            building.description = Some(description);
        }
        if let Some(total_blocks) = patch.total_blocks {
            building.total_blocks = total_blocks;
        }
        building.updated_at = now;
        debug!("event=building_updated module=store id={id}");
        Ok(building.clone())
    }

    /// Deletes a building and transitively all blocks, rooms, tenants and
    /// invoices underneath it.
    pub fn delete_building(&mut self, id: EntityId) -> StoreResult<()> {
        let index = self
            .buildings
            .iter()
            .position(|building| building.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Building,
                id,
            })?;
        self.buildings.remove(index);
        self.cascade_from_buildings(&[id]);
        Ok(())
    }

    // ---- blocks ----

    /// Creates a block under an existing building.
    pub fn add_block(&mut self, new: NewBlock) -> StoreResult<Block> {
        new.validate()?;
        self.require_building(new.building_id)?;
        let now = self.now();
        let block = Block {
            id: Uuid::new_v4(),
            building_id: new.building_id,
            name: new.name,
            description: new.description,
            total_rooms: new.total_rooms,
            created_at: now,
            updated_at: now,
        };
        debug!(
            "event=block_created module=store id={} building_id={}",
            block.id, block.building_id
        );
        self.blocks.push(block.clone());
        Ok(block)
    }

    /// Merges `Some` patch fields into the block. Re-parenting via
    /// `building_id` is validated against the building collection.
    pub fn update_block(&mut self, id: EntityId, patch: BlockPatch) -> StoreResult<Block> {
        patch.validate()?;
        if let Some(building_id) = patch.building_id {
            self.require_building(building_id)?;
        }
        let now = self.now();
        let block = self
            .blocks
            .iter_mut()
            .find(|block| block.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Block,
                id,
            })?;

        if let Some(building_id) = patch.building_id {
            block.building_id = building_id;
        }
        if let Some(name) = patch.name {
            block.name = name;
        }
        if let Some(description) = patch.description {
            block.description = Some(description);
        }
        if let Some(total_rooms) = patch.total_rooms {
            block.total_rooms = total_rooms;
        }
        block.updated_at = now;
        debug!("event=block_updated module=store id={id}");
        Ok(block.clone())
    }

    /// Deletes a block and transitively all rooms, tenants and invoices
    /// underneath it.
    pub fn delete_block(&mut self, id: EntityId) -> StoreResult<()> {
        let index = self
            .blocks
            .iter()
            .position(|block| block.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Block,
                id,
            })?;
        self.blocks.remove(index);
        self.cascade_from_blocks(&[id]);
        Ok(())
    }

    // ---- rooms ----

    /// Creates a room under an existing block.
    pub fn add_room(&mut self, new: NewRoom) -> StoreResult<Room> {
        new.validate()?;
        self.require_block(new.block_id)?;
        let now = self.now();
        let room = Room {
            id: Uuid::new_v4(),
            block_id: new.block_id,
            room_number: new.room_number,
            name: new.name,
            area: new.area,
            capacity: new.capacity,
            price: new.price,
            status: new.status,
            amenities: new.amenities,
            description: new.description,
            created_at: now,
            updated_at: now,
        };
        debug!(
            "event=room_created module=store id={} block_id={} status={}",
            room.id,
            room.block_id,
            room.status.as_str()
        );
        self.rooms.push(room.clone());
        Ok(room)
    }

    /// Merges `Some` patch fields into the room.
    pub fn update_room(&mut self, id: EntityId, patch: RoomPatch) -> StoreResult<Room> {
        patch.validate()?;
        if let Some(block_id) = patch.block_id {
            self.require_block(block_id)?;
        }
        let now = self.now();
        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Room,
                id,
            })?;

        if let Some(block_id) = patch.block_id {
            room.block_id = block_id;
        }
        if let Some(room_number) = patch.room_number {
            room.room_number = room_number;
        }
        if let Some(name) = patch.name {
            room.name = name;
        }
        if let Some(area) = patch.area {
            room.area = area;
        }
        if let Some(capacity) = patch.capacity {
            room.capacity = capacity;
        }
        if let Some(price) = patch.price {
            room.price = price;
        }
        if let Some(status) = patch.status {
            room.status = status;
        }
        if let Some(amenities) = patch.amenities {
            room.amenities = Some(amenities);
        }
        if let Some(description) = patch.description {
            room.description = Some(description);
        }
        room.updated_at = now;
        debug!("event=room_updated module=store id={id}");
        Ok(room.clone())
    }

    /// Deletes a room and transitively all tenants and invoices underneath
    /// it. The cascade runs regardless of tenant activity state.
    pub fn delete_room(&mut self, id: EntityId) -> StoreResult<()> {
        let index = self
            .rooms
            .iter()
            .position(|room| room.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Room,
                id,
            })?;
        self.rooms.remove(index);
        self.cascade_from_rooms(&[id]);
        Ok(())
    }

    // ---- tenants ----

    /// Creates a tenant under an existing room.
    pub fn add_tenant(&mut self, new: NewTenant) -> StoreResult<Tenant> {
        new.validate()?;
        self.require_room(new.room_id)?;
        let now = self.now();
        let tenant = Tenant {
            id: Uuid::new_v4(),
            room_id: new.room_id,
            full_name: new.full_name,
            phone: new.phone,
            email: new.email,
            id_card: new.id_card,
            date_of_birth: new.date_of_birth,
            hometown: new.hometown,
            move_in_date: new.move_in_date,
            move_out_date: new.move_out_date,
            deposit: new.deposit,
            monthly_rent: new.monthly_rent,
            status: new.status,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };
        // Ids only; tenant personal data stays out of the log stream.
        debug!(
            "event=tenant_created module=store id={} room_id={} status={}",
            tenant.id,
            tenant.room_id,
            tenant.status.as_str()
        );
        self.tenants.push(tenant.clone());
        Ok(tenant)
    }

    /// Merges `Some` patch fields into the tenant.
    pub fn update_tenant(&mut self, id: EntityId, patch: TenantPatch) -> StoreResult<Tenant> {
        patch.validate()?;
        if let Some(room_id) = patch.room_id {
            self.require_room(room_id)?;
        }
        let now = self.now();
        let tenant = self
            .tenants
            .iter_mut()
            .find(|tenant| tenant.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Tenant,
                id,
            })?;

        if let Some(room_id) = patch.room_id {
            tenant.room_id = room_id;
        }
        if let Some(full_name) = patch.full_name {
            tenant.full_name = full_name;
        }
        if let Some(phone) = patch.phone {
            tenant.phone = phone;
        }
        if let Some(email) = patch.email {
            tenant.email = Some(email);
        }
        if let Some(id_card) = patch.id_card {
            tenant.id_card = id_card;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            tenant.date_of_birth = date_of_birth;
        }
        if let Some(hometown) = patch.hometown {
            tenant.hometown = Some(hometown);
        }
        if let Some(move_in_date) = patch.move_in_date {
            tenant.move_in_date = move_in_date;
        }
        if let Some(move_out_date) = patch.move_out_date {
            tenant.move_out_date = Some(move_out_date);
        }
        if let Some(deposit) = patch.deposit {
            tenant.deposit = deposit;
        }
        if let Some(monthly_rent) = patch.monthly_rent {
            tenant.monthly_rent = monthly_rent;
        }
        if let Some(status) = patch.status {
            tenant.status = status;
        }
        if let Some(notes) = patch.notes {
            tenant.notes = Some(notes);
        }
        tenant.updated_at = now;
        debug!("event=tenant_updated module=store id={id}");
        Ok(tenant.clone())
    }

    /// Deletes a tenant and all invoices issued against them.
    pub fn delete_tenant(&mut self, id: EntityId) -> StoreResult<()> {
        let index = self
            .tenants
            .iter()
            .position(|tenant| tenant.id == id)
            .ok_or(StoreError::NotFound {
                kind: EntityKind::Tenant,
                id,
            })?;
        self.tenants.remove(index);
        self.cascade_from_tenants(&[id]);
        Ok(())
    }

    // ---- cascade wiring ----

    fn cascade_from_buildings(&mut self, building_ids: &[EntityId]) {
        let (blocks, removed_blocks) = drop_children_of(
            take(&mut self.blocks),
            building_ids,
            |block| block.building_id,
            |block| block.id,
        );
        self.blocks = blocks;
        info!(
            "event=cascade_delete module=store level=building removed_blocks={}",
            removed_blocks.len()
        );
        self.cascade_from_blocks(&removed_blocks);
    }

    fn cascade_from_blocks(&mut self, block_ids: &[EntityId]) {
        let (rooms, removed_rooms) = drop_children_of(
            take(&mut self.rooms),
            block_ids,
            |room| room.block_id,
            |room| room.id,
        );
        self.rooms = rooms;
        self.cascade_from_rooms(&removed_rooms);
    }

    fn cascade_from_rooms(&mut self, room_ids: &[EntityId]) {
        let (tenants, removed_tenants) = drop_children_of(
            take(&mut self.tenants),
            room_ids,
            |tenant| tenant.room_id,
            |tenant| tenant.id,
        );
        self.tenants = tenants;
        self.cascade_from_tenants(&removed_tenants);
    }

    fn cascade_from_tenants(&mut self, tenant_ids: &[EntityId]) {
        let (invoices, _removed) = drop_children_of(
            take(&mut self.invoices),
            tenant_ids,
            |invoice| invoice.tenant_id,
            |invoice| invoice.id,
        );
        self.invoices = invoices;
    }

    // ---- parent existence checks ----

    pub(crate) fn require_building(&self, id: EntityId) -> StoreResult<()> {
        if self.building(id).is_none() {
            return Err(StoreError::UnknownParent {
                kind: EntityKind::Building,
                id,
            });
        }
        Ok(())
    }

    pub(crate) fn require_block(&self, id: EntityId) -> StoreResult<()> {
        if self.block(id).is_none() {
            return Err(StoreError::UnknownParent {
                kind: EntityKind::Block,
                id,
            });
        }
        Ok(())
    }

    pub(crate) fn require_room(&self, id: EntityId) -> StoreResult<()> {
        if self.room(id).is_none() {
            return Err(StoreError::UnknownParent {
                kind: EntityKind::Room,
                id,
            });
        }
        Ok(())
    }
}
