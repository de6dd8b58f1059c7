#![deny(missing_docs)]

//! Motorpool keeps track of which user holds which vehicles.
//!
//! A [`vehicle::Vehicle`] is a shared handle: clones refer to the same
//! vehicle, and every clone observes changes to its owner field.
//!
//! The [`registry::Registry`] is the single authority for establishing
//! and dissolving ownership. It keeps a mapping from user name to the
//! vehicles held, and updates a vehicle's own owner field together with
//! that mapping, so the two never disagree from a caller's point of view.
//!
//! Everything here is synchronous and single-threaded.
//! Callers needing concurrent access must serialize it externally,
//! for example by keeping one registry per execution context.

/// A vehicle and its descriptive attributes.
pub mod vehicle;

/// A user which may hold vehicles.
pub mod user;

/// Keeps track of who holds which vehicles.
pub mod registry;

/// Relates to config files.
pub mod config;

/// Possible errors in this library.
pub mod error;

/// Logging/tracing setup.
pub mod logging;

/// The command line interface.
pub mod cli;
