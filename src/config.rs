use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{error::Error, vehicle::Vehicle};

/// A vehicle as described by a configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigVehicle {
    /// The brand.
    pub brand: String,

    /// The model.
    pub model: String,

    /// The manufacturing year.
    pub year: String,

    /// The color, if known.
    #[serde(default)]
    pub color: Option<String>,

    /// The number of doors, if known.
    #[serde(default)]
    pub doors: Option<String>,

    /// Whether the vehicle is used.
    #[serde(default)]
    pub used: bool,
}

impl ConfigVehicle {
    /// Build the vehicle this entry describes.
    pub(crate) fn build(&self) -> Vehicle {
        let mut builder = Vehicle::builder(&self.brand, &self.model, &self.year);

        if let Some(color) = &self.color {
            builder = builder.color(color);
        }

        if let Some(doors) = &self.doors {
            builder = builder.doors(doors);
        }

        builder.used(self.used).build()
    }
}

/// Vehicles a user should hold from the start,
/// as indices into [`Config::vehicles`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// The holder's name.
    pub owner: String,

    /// Indices into [`Config::vehicles`].
    pub vehicles: Vec<usize>,
}

/// The configuration describing a fleet and who holds what.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// The vehicles making up the fleet.
    #[serde(default)]
    pub vehicles: Vec<ConfigVehicle>,

    /// The assignments to apply when seeding a registry.
    /// Vehicles not mentioned here start out unowned.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Config {
    fn ron() -> ron::Options {
        ron::Options::default()
            .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
            .with_default_extension(ron::extensions::Extensions::UNWRAP_NEWTYPES)
    }

    /// Deserialize a .ron file's contents.
    /// Panics if the input is not valid .ron.
    pub fn deserialize(input: &str) -> Self {
        Self::ron().from_str::<Config>(input).unwrap()
    }

    /// An example configuration with some fields filled in.
    pub fn example() -> Self {
        Self {
            vehicles: vec![
                ConfigVehicle {
                    brand: "Tesla".into(),
                    model: "Model S".into(),
                    year: "2024".into(),
                    color: Some("Red".into()),
                    doors: Some("4".into()),
                    used: false,
                },
                ConfigVehicle {
                    brand: "Ford".into(),
                    model: "Mustang".into(),
                    year: "2020".into(),
                    color: None,
                    doors: None,
                    used: true,
                },
                ConfigVehicle {
                    brand: "Toyota".into(),
                    model: "Corolla".into(),
                    year: "2018".into(),
                    color: Some("Blue".into()),
                    doors: None,
                    used: true,
                },
            ],
            assignments: vec![
                Assignment {
                    owner: "John".into(),
                    vehicles: vec![0, 1],
                },
                Assignment {
                    owner: "Mary".into(),
                    vehicles: vec![2],
                },
            ],
        }
    }

    /// Serialize the configuration in a "pretty" (i.e. non-compact) fashion.
    pub fn serialize_pretty(&self) -> String {
        Self::ron()
            .to_string_pretty(self, ron::ser::PrettyConfig::default())
            .unwrap()
    }

    /// Setup a new configuration from a RON file.
    pub fn new_from_path<P: AsRef<Path>>(p: P) -> Self {
        let s = std::fs::read_to_string(p).unwrap();

        Self::deserialize(&s)
    }

    fn check_owner_names(&self) -> Result<(), Error> {
        for (index, assignment) in self.assignments.iter().enumerate() {
            if assignment.owner.is_empty() {
                return Err(Error::BadConfig(format!("The assignment with index {index} (zero indexed) has an empty owner name. Owners must be non-empty identifiers.")));
            }
        }

        Ok(())
    }

    fn check_vehicle_indices(&self) -> Result<(), Error> {
        let count = self.vehicles.len();

        for assignment in &self.assignments {
            if let Some(out_of_range) = assignment.vehicles.iter().find(|&&index| index >= count) {
                return Err(Error::BadConfig(format!(
                    "The assignment for `{}` refers to vehicle index {out_of_range}, but only {count} vehicle(s) are defined.",
                    assignment.owner
                )));
            }
        }

        Ok(())
    }

    fn check_duplicates_across_assignments(&self) -> Result<(), Error> {
        let duplicates = self
            .assignments
            .iter()
            .flat_map(|assignment| &assignment.vehicles)
            .duplicates()
            .collect::<Vec<_>>();

        if duplicates.is_empty() {
            Ok(())
        } else {
            Err(Error::BadConfig(format!("A vehicle can only start out held by a single user. Duplicate indices: {duplicates:?}")))
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        self.check_owner_names()?;
        self.check_vehicle_indices()?;
        self.check_duplicates_across_assignments()?;

        Ok(())
    }
}
