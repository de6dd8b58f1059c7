#![allow(dead_code)]

use motorpool::{user::User, vehicle::Vehicle};

pub fn tesla() -> Vehicle {
    Vehicle::new("Tesla", "Model S", "2024")
}

pub fn ford() -> Vehicle {
    Vehicle::new("Ford", "Mustang", "2020")
}

pub fn john() -> User {
    User::new("John")
}

pub fn mary() -> User {
    User::new("Mary")
}
