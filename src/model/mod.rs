//! Core data model for fixgrade.
//!
//! Defines the externally supplied [`Device`] records (with their
//! [`Teardown`] guides and tags) and the optional [`Rubric`] methodology
//! document. Both are read-only inputs: fixgrade never mutates a record
//! after deserialization.

mod device;
mod rubric;

pub use device::{Device, DeviceKey, Teardown, TeardownTag};
pub use rubric::{Criterion, Rubric, VersionItems};
