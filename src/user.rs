use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

use crate::vehicle::Vehicle;

/// A user, known by name.
///
/// The name is the user's identity: comparison and hashing use it alone.
/// A user may carry a direct reference to a vehicle as a convenience.
/// That reference is theirs to manage; the registry keeps its own
/// bookkeeping and does not touch it.
#[derive(Debug, Clone)]
pub struct User {
    name: Arc<String>,
    vehicle: Option<Vehicle>,
}

impl User {
    /// A new user with no vehicle reference.
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::new(name.into()),
            vehicle: None,
        }
    }

    /// A new user carrying a direct reference to a vehicle.
    pub fn with_vehicle(name: &str, vehicle: Vehicle) -> Self {
        Self {
            name: Arc::new(name.into()),
            vehicle: Some(vehicle),
        }
    }

    /// The user's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directly referenced vehicle, if any.
    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
