//! Assets down to end devices (meters and similar).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{ElectronicAddress, Identified, IdentifiedObject, Status};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Asset {
    pub asset_type: Option<String>,
    pub utc_number: Option<String>,
    pub serial_number: Option<String>,
    pub lot_number: Option<String>,
    pub purchase_price: Option<i64>,
    pub critical: bool,
    pub electronic_address: ElectronicAddress,
    pub installation_date: Option<i64>,
    pub manufactured_date: Option<i64>,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetContainer {
    pub asset: Asset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndDevice {
    pub object: IdentifiedObject,
    pub container: AssetContainer,
    pub is_virtual: bool,
    pub is_pan: bool,
    pub install_code: Option<String>,
    pub amr_system: Option<String>,
    /// Where the device is installed. Not cascaded.
    pub service_location_id: Option<Uuid>,
}

impl EndDevice {
    pub fn new(self_href: &str, serial_number: impl Into<String>) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            container: AssetContainer {
                asset: Asset {
                    serial_number: Some(serial_number.into()),
                    ..Asset::default()
                },
            },
            is_virtual: false,
            is_pan: false,
            install_code: None,
            amr_system: None,
            service_location_id: None,
        }
    }

    pub fn installed_at(mut self, service_location_id: Uuid) -> Self {
        self.service_location_id = Some(service_location_id);
        self
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.container.asset.serial_number.as_deref()
    }
}

impl Identified for EndDevice {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_number_lives_on_the_asset() {
        let device = EndDevice::new("ed/1", "SN-42");
        assert_eq!(device.serial_number(), Some("SN-42"));
        assert!(!device.container.asset.critical);
    }
}
