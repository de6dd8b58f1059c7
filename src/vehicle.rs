use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use crate::error::Error;

/// The descriptive attributes of a vehicle.
/// The owner is kept separately; it does not describe the vehicle itself.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Details {
    brand: String,
    model: String,
    year: String,
    color: String,
    doors: String,
    used: bool,
}

#[derive(Debug)]
struct Inner {
    details: Details,
    owner: Option<String>,
}

/// A vehicle a user may hold.
///
/// This is a shared handle: clones refer to the same vehicle, and an owner
/// change is observed through every clone.
///
/// Equality compares the descriptive attributes only, so two separately
/// created vehicles may compare equal while still being different vehicles.
/// Use [`Vehicle::ptr_eq`] to tell them apart.
#[derive(Debug, Clone)]
pub struct Vehicle {
    inner: Rc<RefCell<Inner>>,
}

/// Builds a [`Vehicle`], allowing its optional attributes to be set.
#[derive(Debug)]
pub struct VehicleBuilder {
    details: Details,
}

impl VehicleBuilder {
    /// Set the color.
    pub fn color(mut self, color: &str) -> Self {
        self.details.color = color.into();
        self
    }

    /// Set the number of doors.
    pub fn doors(mut self, doors: &str) -> Self {
        self.details.doors = doors.into();
        self
    }

    /// Set whether the vehicle is used.
    pub fn used(mut self, used: bool) -> Self {
        self.details.used = used;
        self
    }

    /// Build the vehicle. The owner starts absent.
    pub fn build(self) -> Vehicle {
        Vehicle {
            inner: Rc::new(RefCell::new(Inner {
                details: self.details,
                owner: None,
            })),
        }
    }
}

impl Vehicle {
    /// A new vehicle with the given brand, model and manufacturing year.
    ///
    /// The remaining attributes take their defaults; see [`Vehicle::builder`]
    /// for setting them. The brand, model and year are stored as given,
    /// without validation.
    pub fn new(brand: &str, model: &str, year: &str) -> Self {
        Self::builder(brand, model, year).build()
    }

    /// A builder for a vehicle, for setting the optional attributes.
    ///
    /// Color and doors default to `"Nan"`, and the vehicle counts as not
    /// used unless said otherwise.
    pub fn builder(brand: &str, model: &str, year: &str) -> VehicleBuilder {
        VehicleBuilder {
            details: Details {
                brand: brand.into(),
                model: model.into(),
                year: year.into(),
                color: "Nan".into(),
                doors: "Nan".into(),
                used: false,
            },
        }
    }

    /// Whether two handles refer to the same vehicle.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The current owner, or `None` for an unowned vehicle.
    pub fn owner(&self) -> Option<String> {
        self.inner.borrow().owner.clone()
    }

    /// Set or clear the owner.
    ///
    /// `None` clears the owner. Anything else must be a non-empty
    /// identifier, else this fails with [`Error::InvalidOwner`] and the
    /// previous owner is kept.
    ///
    /// The registry calls this when ownership changes; going around the
    /// registry leaves its bookkeeping out of sync with this field.
    pub fn set_owner(&self, owner: Option<&str>) -> Result<(), Error> {
        match owner {
            Some(owner) if owner.is_empty() => Err(Error::InvalidOwner(owner.into())),
            owner => {
                self.inner.borrow_mut().owner = owner.map(Into::into);
                Ok(())
            }
        }
    }

    /// Clear the owner. Clearing is always valid, so this cannot fail.
    pub fn clear_owner(&self) {
        self.inner.borrow_mut().owner = None;
    }

    /// The brand.
    pub fn brand(&self) -> String {
        self.inner.borrow().details.brand.clone()
    }

    /// The model.
    pub fn model(&self) -> String {
        self.inner.borrow().details.model.clone()
    }

    /// The manufacturing year.
    pub fn year(&self) -> String {
        self.inner.borrow().details.year.clone()
    }

    /// The color.
    pub fn color(&self) -> String {
        self.inner.borrow().details.color.clone()
    }

    /// The number of doors.
    pub fn doors(&self) -> String {
        self.inner.borrow().details.doors.clone()
    }

    /// Whether the vehicle is used.
    pub fn used(&self) -> bool {
        self.inner.borrow().details.used
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.inner.borrow().details == other.inner.borrow().details
    }
}

impl Eq for Vehicle {}

impl Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        let Details {
            brand,
            model,
            year,
            color,
            doors,
            used,
        } = &inner.details;
        let owner = inner.owner.as_deref().unwrap_or("none");

        write!(
            f,
            "Brand:{brand}, Model:{model}, Year:{year}, Color:{color}, Doors:{doors}, Used:{used}, Owner:{owner}"
        )
    }
}
