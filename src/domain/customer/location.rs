//! Locations and service locations.

use serde::{Deserialize, Serialize};

use crate::domain::common::{
    ElectronicAddress, Identified, IdentifiedObject, PositionPoint, Status, StreetAddress,
    TelephoneNumber,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub location_type: Option<String>,
    pub main_address: StreetAddress,
    pub phone1: TelephoneNumber,
    pub electronic_address: ElectronicAddress,
    pub geo_info_reference: Option<String>,
    pub direction: Option<String>,
    pub status: Status,
    pub position_points: Vec<PositionPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLocation {
    pub object: IdentifiedObject,
    pub location: Location,
    pub access_method: Option<String>,
    pub site_access_problem: Option<String>,
    pub needs_inspection: bool,
    pub outage_block: Option<String>,
    /// Usage points served here, by href. The usage points live in the
    /// other schema and are never loaded through this record.
    pub usage_point_hrefs: Vec<String>,
}

impl ServiceLocation {
    pub fn new(self_href: &str) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            location: Location::default(),
            access_method: None,
            site_access_problem: None,
            needs_inspection: false,
            outage_block: None,
            usage_point_hrefs: Vec::new(),
        }
    }

    pub fn at_address(mut self, address: StreetAddress) -> Self {
        self.location.main_address = address;
        self
    }

    pub fn with_position(mut self, point: PositionPoint) -> Self {
        self.location.position_points.push(point);
        self
    }

    /// Adds a usage point reference; duplicates are ignored.
    pub fn serving(mut self, usage_point_href: impl Into<String>) -> Self {
        let href = usage_point_href.into();
        if !self.usage_point_hrefs.contains(&href) {
            self.usage_point_hrefs.push(href);
        }
        self
    }
}

impl Identified for ServiceLocation {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_point_refs_are_deduplicated() {
        let location = ServiceLocation::new("sl/1")
            .serving("up/1")
            .serving("up/1")
            .serving("up/2")
            .with_position(PositionPoint::new("1.0", "2.0"));
        assert_eq!(location.usage_point_hrefs, vec!["up/1", "up/2"]);
        assert_eq!(location.location.position_points.len(), 1);
    }
}
