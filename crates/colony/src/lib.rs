//! Bacterial colonization of a bounded square dish.
//!
//! A [`Dish`] runs days of death, neighbor spread and baseline growth until
//! every cell is occupied, and reports how many days that took and how many
//! organisms died. Configurations that cannot make progress end early with
//! [`Response::NEVER_FULL`].

pub mod address;
pub mod bacteria;
pub mod bindings;
pub mod config;
pub mod dish;
pub mod error;
pub mod grid;
pub mod incubator;
pub mod phases;
pub mod random;
pub mod response;

pub use address::Address;
pub use bacteria::Bacteria;
pub use config::BehaviorConfig;
pub use dish::Dish;
pub use error::{ColonyError, Result};
pub use random::RandomSource;
pub use response::Response;

/// Largest accepted side length; bounds a dish to `MAX_SIZE²` cells.
pub const MAX_SIZE: i32 = 100;
