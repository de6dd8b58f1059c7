//! The registry has authority over vehicle ownership.
//! It keeps the mapping from user to held vehicles, and it keeps each
//! vehicle's own owner field consistent with that mapping.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::{config::Config, error::Error, user::User, vehicle::Vehicle};

/// Tracks which user holds which vehicles.
///
/// Holdings are kept per user name, in assignment order. Ownership is
/// established with [`Registry::assign`] and dissolved with
/// [`Registry::remove`]; both update the vehicle's owner field together
/// with the mapping, so callers never observe the two disagreeing.
#[derive(Debug, Default)]
pub struct Registry {
    /// User name to held vehicles, in assignment order.
    holdings: HashMap<String, Vec<Vehicle>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded from a config, along with the vehicles the config
    /// describes (in declaration order).
    ///
    /// The config's assignments are applied as if via [`Registry::assign`].
    /// Vehicles without an assignment start out unowned.
    pub fn from_config(config: &Config) -> Result<(Self, Vec<Vehicle>), Error> {
        config.validate()?;

        let vehicles = config
            .vehicles
            .iter()
            .map(|config_vehicle| config_vehicle.build())
            .collect::<Vec<_>>();

        let mut registry = Self::new();

        for assignment in &config.assignments {
            let user = User::new(&assignment.owner);

            for &index in &assignment.vehicles {
                let vehicle = vehicles
                    .get(index)
                    .expect("Config validation checks vehicle indices");

                registry.assign(&user, vehicle)?;
            }
        }

        info!(
            vehicles = vehicles.len(),
            holders = registry.holdings.len(),
            "Registry seeded from config"
        );

        Ok((registry, vehicles))
    }

    /// Assign a vehicle to a user.
    ///
    /// The vehicle's owner is set to the user's name, and the vehicle is
    /// appended to the user's holdings (created on first assignment).
    /// Fails with [`Error::InvalidOwner`] if the user's name is empty;
    /// the mapping is then left untouched.
    ///
    /// A vehicle already held by someone else is not detached from them:
    /// it ends up in both holdings while its owner field names only the
    /// most recent holder. Remove it from the previous holder first.
    pub fn assign(&mut self, user: &User, vehicle: &Vehicle) -> Result<(), Error> {
        vehicle.set_owner(Some(user.name()))?;

        self.holdings
            .entry(user.name().to_owned())
            .or_default()
            .push(vehicle.clone());

        debug!(%user, %vehicle, "Assigned");

        Ok(())
    }

    /// The vehicles a user holds, in assignment order.
    /// Empty for an unknown user.
    pub fn vehicles_of(&self, user: &User) -> &[Vehicle] {
        self.holdings
            .get(user.name())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The name of the user holding this vehicle, or `None` if nobody does.
    ///
    /// The vehicle is looked up by handle identity, so a structurally equal
    /// but separately created vehicle does not match. If a vehicle was
    /// assigned to several users without removal in between, which of its
    /// holders is reported is unspecified.
    pub fn owner_of(&self, vehicle: &Vehicle) -> Option<&str> {
        self.holdings.iter().find_map(|(name, held)| {
            held.iter()
                .any(|candidate| candidate.ptr_eq(vehicle))
                .then_some(name.as_str())
        })
    }

    /// Remove a vehicle from a user's holdings and clear its owner.
    ///
    /// A no-op if the user is unknown or does not hold the vehicle (by
    /// handle identity). Removing a user's last vehicle forgets the user
    /// entirely.
    pub fn remove(&mut self, user: &User, vehicle: &Vehicle) {
        let now_empty = match self.holdings.get_mut(user.name()) {
            Some(held) => {
                if let Some(index) = held.iter().position(|candidate| candidate.ptr_eq(vehicle))
                {
                    held.remove(index);
                    vehicle.clear_owner();

                    debug!(%user, %vehicle, "Removed");
                }

                held.is_empty()
            }
            None => false,
        };

        if now_empty {
            debug!(%user, "Holds nothing, removing entry");
            self.holdings.remove(user.name());
        }
    }

    /// The names of users currently holding at least one vehicle.
    /// In no particular order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.holdings.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_updates_both_the_mapping_and_the_vehicle() {
        let mut registry = Registry::new();
        let user = User::new("John");
        let vehicle = Vehicle::new("Tesla", "Model S", "2024");

        registry.assign(&user, &vehicle).unwrap();

        assert_eq!(vehicle.owner(), Some("John".to_string()));
        assert_eq!(registry.owner_of(&vehicle), Some("John"));
        assert!(registry.vehicles_of(&user)[0].ptr_eq(&vehicle));
    }

    #[test]
    fn unknown_user_holds_nothing() {
        let registry = Registry::new();

        assert!(registry.vehicles_of(&User::new("nobody")).is_empty());
    }

    #[test]
    fn unassigned_vehicle_has_no_owner() {
        let registry = Registry::new();
        let vehicle = Vehicle::new("Tesla", "Model S", "2024");

        assert_eq!(registry.owner_of(&vehicle), None);
    }

    #[test]
    fn assigning_to_a_nameless_user_fails_and_changes_nothing() {
        let mut registry = Registry::new();
        let user = User::new("");
        let vehicle = Vehicle::new("Tesla", "Model S", "2024");

        let err = registry.assign(&user, &vehicle).unwrap_err();

        assert!(matches!(err, Error::InvalidOwner(_)));
        assert_eq!(vehicle.owner(), None);
        assert!(registry.vehicles_of(&user).is_empty());
        assert_eq!(registry.users().count(), 0);
    }
}
