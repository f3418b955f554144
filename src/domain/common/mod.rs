//! Value objects embedded by value in their owners.

pub mod address;
pub mod identified_object;
pub mod interval;
pub mod measurement;

pub use address::{
    ElectronicAddress, Organisation, PositionPoint, Status, StreetAddress, StreetDetail,
    TelephoneNumber, TownDetail,
};
pub use identified_object::{Identified, IdentifiedObject, LinkType};
pub use interval::DateTimeInterval;
pub use measurement::SummaryMeasurement;
