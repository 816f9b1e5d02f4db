//! Demo household seeded at startup when `[demo] enabled = true`.

use std::sync::Arc;

use homesphere_domain::action::Action;
use homesphere_domain::device::{
    AirConditioner, BathroomScale, Device, DeviceHandle, DeviceKind, LightBulb, SmartLock,
};
use homesphere_domain::error::HomeSphereError;
use homesphere_domain::household::Household;
use homesphere_domain::id::{DeviceId, HouseholdId, ManufacturerId, RoomId, SceneId, UserId};
use homesphere_domain::manufacturer::Manufacturer;
use homesphere_domain::room::Room;
use homesphere_domain::scene::Scene;
use homesphere_domain::user::User;

/// Two rooms with one device of each variant, an admin user and an evening
/// scene under `scene_id`.
///
/// # Errors
///
/// Returns [`HomeSphereError::Validation`] if any seeded entity is invalid.
pub fn seed(
    household_id: HouseholdId,
    address: &str,
    scene_id: SceneId,
) -> Result<Household, HomeSphereError> {
    let ac_corp = Arc::new(Manufacturer::new(
        ManufacturerId::new(1),
        "AC Corp",
        "WiFi, ZigBee",
    )?);
    let light_inc = Arc::new(Manufacturer::new(ManufacturerId::new(2), "Light Inc", "WiFi")?);

    let ac = device(
        1,
        "Living Room AC",
        &ac_corp,
        DeviceKind::AirConditioner(AirConditioner {
            current_temp: 25.0,
            target_temp: 22.0,
        }),
    )?;
    let light = device(
        2,
        "Kitchen Light",
        &light_inc,
        DeviceKind::LightBulb(LightBulb {
            brightness: 80,
            color_temp: 4000,
        }),
    )?;
    let lock = device(
        3,
        "Front Door Lock",
        &ac_corp,
        DeviceKind::SmartLock(SmartLock {
            locked: true,
            battery_level: 100,
        }),
    )?;
    let scale = device(
        4,
        "Bathroom Scale",
        &light_inc,
        DeviceKind::BathroomScale(BathroomScale {
            body_mass: 70.5,
            battery_level: 85,
        }),
    )?;

    let mut living = Room::new(RoomId::new(1), "Living Room", 25.5)?;
    living.add_device(ac.clone());
    living.add_device(light.clone());
    let mut bedroom = Room::new(RoomId::new(2), "Bedroom", 18.0)?;
    bedroom.add_device(lock);
    bedroom.add_device(scale);

    let mut household = Household::new(household_id, address);
    household.add_room(living)?;
    household.add_room(bedroom)?;

    household.add_user(
        User::builder()
            .id(UserId::new(1))
            .login_name("admin")
            .login_password("111111")
            .user_name("Administrator")
            .email("admin@example.org")
            .build()?,
    )?;
    household.set_admin(UserId::new(1))?;

    household.add_scene(
        Scene::builder()
            .id(scene_id)
            .name("Good night")
            .description("Turn off the lights and settle the temperature")
            .action(Action::new("powerOff", "", light))
            .action(Action::new("setTemperature", "26.0", ac))
            .build()?,
    )?;

    Ok(household)
}

fn device(
    id: u32,
    name: &str,
    manufacturer: &Arc<Manufacturer>,
    kind: DeviceKind,
) -> Result<DeviceHandle, HomeSphereError> {
    Device::new(DeviceId::new(id), name, Arc::clone(manufacturer), kind).map(DeviceHandle::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_seed_rooms_users_and_scene() {
        let household = seed(HouseholdId::new(1), "127 Friendship Road", SceneId::new(1)).unwrap();

        assert_eq!(household.rooms().len(), 2);
        assert_eq!(household.list_all_devices().len(), 4);
        assert_eq!(household.admin().map(|u| u.login_name.as_str()), Some("admin"));
        let scene = household.scene(SceneId::new(1)).unwrap();
        assert_eq!(scene.actions().len(), 2);
        assert_eq!(scene.actions()[0].device_id(), DeviceId::new(2));
    }

    #[test]
    fn should_share_devices_between_rooms_and_scene() {
        let household = seed(HouseholdId::new(1), "Somewhere", SceneId::new(5)).unwrap();
        let scene = household.scene(SceneId::new(5)).unwrap();
        let in_room = &household.rooms()[0].devices()[1];
        assert!(scene.actions()[0].device.ptr_eq(in_room));
    }
}
