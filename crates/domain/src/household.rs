//! Household — the aggregate owning rooms, users and scenes.
//!
//! Collections are always returned as (possibly empty) slices; emptiness is
//! a valid state, never signalled by absence.

use crate::device::DeviceHandle;
use crate::error::{HomeSphereError, NotFoundError, ValidationError};
use crate::id::{HouseholdId, ManufacturerId, RoomId, SceneId, UserId};
use crate::room::Room;
use crate::scene::Scene;
use crate::user::User;

#[derive(Debug, Clone)]
pub struct Household {
    pub id: HouseholdId,
    pub address: String,
    admin: Option<UserId>,
    users: Vec<User>,
    rooms: Vec<Room>,
    scenes: Vec<Scene>,
}

impl Household {
    #[must_use]
    pub fn new(id: HouseholdId, address: impl Into<String>) -> Self {
        Self {
            id,
            address: address.into(),
            admin: None,
            users: Vec::new(),
            rooms: Vec::new(),
            scenes: Vec::new(),
        }
    }

    // ── Rooms ──────────────────────────────────────────────────────

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateId`] when a room with the same id
    /// already exists.
    pub fn add_room(&mut self, room: Room) -> Result<(), HomeSphereError> {
        if self.room(room.id).is_some() {
            return Err(duplicate("Room", room.id));
        }
        self.rooms.push(room);
        Ok(())
    }

    /// Returns whether a room was removed.
    pub fn remove_room(&mut self, room_id: RoomId) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|r| r.id != room_id);
        self.rooms.len() < before
    }

    #[must_use]
    pub fn room(&self, room_id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    pub fn room_mut(&mut self, room_id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == room_id)
    }

    // ── Users ──────────────────────────────────────────────────────

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] when the user is invalid or
    /// its id is already taken.
    pub fn add_user(&mut self, user: User) -> Result<(), HomeSphereError> {
        user.validate()?;
        if self.user(user.id).is_some() {
            return Err(duplicate("User", user.id));
        }
        self.users.push(user);
        Ok(())
    }

    /// Returns whether a user was removed. Removing the admin clears the
    /// admin slot.
    pub fn remove_user(&mut self, user_id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != user_id);
        if self.admin == Some(user_id) {
            self.admin = None;
        }
        self.users.len() < before
    }

    #[must_use]
    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Id for the next registered user: the highest user id plus one, or `1`
    /// for an empty household.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdsExhausted`] when the highest id is
    /// already `u32::MAX`.
    pub fn next_user_id(&self) -> Result<UserId, HomeSphereError> {
        match self.users.iter().map(|u| u.id).max() {
            None => Ok(UserId::new(1)),
            Some(highest) => highest
                .checked_next()
                .ok_or_else(|| ValidationError::IdsExhausted { entity: "User" }.into()),
        }
    }

    #[must_use]
    pub fn admin(&self) -> Option<&User> {
        self.admin.and_then(|id| self.user(id))
    }

    /// Make `user_id` the household admin and flag the user accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSphereError::NotFound`] when no such user exists.
    pub fn set_admin(&mut self, user_id: UserId) -> Result<(), HomeSphereError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| NotFoundError {
                entity: "User",
                id: user_id.to_string(),
            })?;
        user.is_admin = true;
        self.admin = Some(user_id);
        Ok(())
    }

    // ── Scenes ─────────────────────────────────────────────────────

    #[must_use]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// # Errors
    ///
    /// Returns [`HomeSphereError::Validation`] when the scene is invalid or
    /// its id is already taken.
    pub fn add_scene(&mut self, scene: Scene) -> Result<(), HomeSphereError> {
        scene.validate()?;
        if self.scene(scene.id()).is_some() {
            return Err(duplicate("Scene", scene.id()));
        }
        self.scenes.push(scene);
        Ok(())
    }

    /// Returns whether a scene was removed.
    pub fn remove_scene(&mut self, scene_id: SceneId) -> bool {
        let before = self.scenes.len();
        self.scenes.retain(|s| s.id() != scene_id);
        self.scenes.len() < before
    }

    #[must_use]
    pub fn scene(&self, scene_id: SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id() == scene_id)
    }

    pub fn scene_mut(&mut self, scene_id: SceneId) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|s| s.id() == scene_id)
    }

    // ── Devices ────────────────────────────────────────────────────

    /// Every device across all rooms: rooms in order, devices in order.
    #[must_use]
    pub fn list_all_devices(&self) -> Vec<DeviceHandle> {
        self.rooms
            .iter()
            .flat_map(|room| room.devices().iter().cloned())
            .collect()
    }

    /// Devices made by `manufacturer_id`, in [`list_all_devices`](Self::list_all_devices) order.
    #[must_use]
    pub fn devices_by_manufacturer(&self, manufacturer_id: ManufacturerId) -> Vec<DeviceHandle> {
        self.list_all_devices()
            .into_iter()
            .filter(|d| d.read(|device| device.manufacturer().id == manufacturer_id))
            .collect()
    }
}

fn duplicate(entity: &'static str, id: impl std::fmt::Display) -> HomeSphereError {
    ValidationError::DuplicateId {
        entity,
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::device::{AirConditioner, Device, DeviceKind, LightBulb, SmartLock};
    use crate::id::DeviceId;
    use crate::manufacturer::Manufacturer;

    fn maker(id: u32) -> Arc<Manufacturer> {
        Arc::new(Manufacturer::new(ManufacturerId::new(id), "Maker", "WiFi").unwrap())
    }

    fn handle(id: u32, maker_id: u32, kind: DeviceKind) -> DeviceHandle {
        Device::new(DeviceId::new(id), "Device", maker(maker_id), kind)
            .unwrap()
            .into()
    }

    fn user(id: u32, login: &str) -> User {
        User::builder()
            .id(UserId::new(id))
            .login_name(login)
            .build()
            .unwrap()
    }

    fn household() -> Household {
        let mut living = Room::new(RoomId::new(1), "Living Room", 25.5).unwrap();
        living.add_device(handle(
            1,
            1,
            DeviceKind::AirConditioner(AirConditioner::default()),
        ));
        living.add_device(handle(2, 2, DeviceKind::LightBulb(LightBulb::default())));
        let mut bedroom = Room::new(RoomId::new(2), "Bedroom", 18.0).unwrap();
        bedroom.add_device(handle(3, 1, DeviceKind::SmartLock(SmartLock::default())));

        let mut household = Household::new(HouseholdId::new(1), "127 Friendship Road");
        household.add_room(living).unwrap();
        household.add_room(bedroom).unwrap();
        household
    }

    #[test]
    fn should_start_with_empty_collections() {
        let household = Household::new(HouseholdId::new(1), "Somewhere");
        assert!(household.rooms().is_empty());
        assert!(household.users().is_empty());
        assert!(household.scenes().is_empty());
        assert!(household.list_all_devices().is_empty());
        assert!(household.admin().is_none());
    }

    #[test]
    fn should_remove_room_by_id() {
        let mut household = household();
        assert!(household.remove_room(RoomId::new(2)));
        assert!(!household.remove_room(RoomId::new(2)));
        assert_eq!(household.rooms().len(), 1);
        assert_eq!(household.rooms()[0].name, "Living Room");
    }

    #[test]
    fn should_reject_duplicate_room_id() {
        let mut household = household();
        let result = household.add_room(Room::new(RoomId::new(1), "Copy", 1.0).unwrap());
        assert!(matches!(
            result,
            Err(HomeSphereError::Validation(ValidationError::DuplicateId {
                entity: "Room",
                ..
            }))
        ));
    }

    #[test]
    fn should_list_devices_across_rooms_in_order() {
        let ids: Vec<_> = household()
            .list_all_devices()
            .iter()
            .map(DeviceHandle::id)
            .collect();
        assert_eq!(ids, vec![DeviceId::new(1), DeviceId::new(2), DeviceId::new(3)]);
    }

    #[test]
    fn should_filter_devices_by_manufacturer() {
        let ids: Vec<_> = household()
            .devices_by_manufacturer(ManufacturerId::new(1))
            .iter()
            .map(DeviceHandle::id)
            .collect();
        assert_eq!(ids, vec![DeviceId::new(1), DeviceId::new(3)]);
        assert!(
            household()
                .devices_by_manufacturer(ManufacturerId::new(9))
                .is_empty()
        );
    }

    #[test]
    fn should_assign_next_user_id_after_highest_user() {
        let mut household = household();
        assert_eq!(household.next_user_id().unwrap(), UserId::new(1));
        household.add_user(user(5, "first")).unwrap();
        assert_eq!(household.next_user_id().unwrap(), UserId::new(6));
    }

    #[test]
    fn should_assign_next_user_id_when_users_added_out_of_order() {
        let mut household = household();
        household.add_user(user(2, "b")).unwrap();
        household.add_user(user(1, "a")).unwrap();
        assert_eq!(household.next_user_id().unwrap(), UserId::new(3));
    }

    #[test]
    fn should_return_validation_error_when_user_ids_exhausted() {
        let mut household = household();
        household.add_user(user(u32::MAX, "last")).unwrap();
        assert!(matches!(
            household.next_user_id(),
            Err(HomeSphereError::Validation(ValidationError::IdsExhausted {
                entity: "User"
            }))
        ));
    }

    #[test]
    fn should_mark_admin_user() {
        let mut household = household();
        household.add_user(user(1, "admin")).unwrap();
        household.set_admin(UserId::new(1)).unwrap();
        let admin = household.admin().unwrap();
        assert!(admin.is_admin);
        assert_eq!(admin.login_name, "admin");
    }

    #[test]
    fn should_return_not_found_when_admin_user_missing() {
        let mut household = household();
        assert!(matches!(
            household.set_admin(UserId::new(42)),
            Err(HomeSphereError::NotFound(_))
        ));
    }

    #[test]
    fn should_clear_admin_when_admin_removed() {
        let mut household = household();
        household.add_user(user(1, "admin")).unwrap();
        household.add_user(user(2, "guest")).unwrap();
        household.set_admin(UserId::new(1)).unwrap();
        assert!(household.remove_user(UserId::new(1)));
        assert!(household.admin().is_none());
        assert_eq!(household.users().len(), 1);
    }

    #[test]
    fn should_add_find_and_remove_scenes() {
        let mut household = household();
        let scene = Scene::builder()
            .id(SceneId::new(1))
            .name("Good night")
            .build()
            .unwrap();
        household.add_scene(scene).unwrap();
        assert_eq!(household.scenes().len(), 1);
        assert_eq!(
            household.scene(SceneId::new(1)).map(Scene::name),
            Some("Good night")
        );

        assert!(household.remove_scene(SceneId::new(1)));
        assert!(household.scenes().is_empty());
        assert!(household.scene(SceneId::new(1)).is_none());
    }

    #[test]
    fn should_reject_duplicate_scene_id() {
        let mut household = household();
        let make = || {
            Scene::builder()
                .id(SceneId::new(1))
                .name("Scene")
                .build()
                .unwrap()
        };
        household.add_scene(make()).unwrap();
        assert!(household.add_scene(make()).is_err());
    }

    #[test]
    fn should_share_device_state_between_room_and_listing() {
        let household = household();
        let listed = &household.list_all_devices()[0];
        listed.write(Device::power_on);
        let in_room = &household.rooms()[0].devices()[0];
        assert!(in_room.read(Device::is_powered));
    }
}
