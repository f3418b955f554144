//! Postal, contact and organisation value objects.

use serde::{Deserialize, Serialize};

/// Current status of a document, address or agreement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Status {
    pub value: Option<String>,
    /// Epoch seconds at which the status took effect.
    pub date_time: Option<i64>,
    pub remark: Option<String>,
    pub reason: Option<String>,
}

impl Status {
    pub fn new(value: impl Into<String>, date_time: i64) -> Self {
        Self {
            value: Some(value.into()),
            date_time: Some(date_time),
            remark: None,
            reason: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
            && self.date_time.is_none()
            && self.remark.is_none()
            && self.reason.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreetDetail {
    pub number: Option<String>,
    pub name: Option<String>,
    pub suffix: Option<String>,
    pub suite_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TownDetail {
    pub code: Option<String>,
    pub name: Option<String>,
    pub state_or_province: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreetAddress {
    pub street_detail: StreetDetail,
    pub town_detail: TownDetail,
    pub status: Status,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TelephoneNumber {
    pub country_code: Option<String>,
    pub area_code: Option<String>,
    pub local_number: Option<String>,
    pub ext: Option<String>,
}

impl TelephoneNumber {
    pub fn new(area_code: impl Into<String>, local_number: impl Into<String>) -> Self {
        Self {
            country_code: None,
            area_code: Some(area_code.into()),
            local_number: Some(local_number.into()),
            ext: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElectronicAddress {
    pub email1: Option<String>,
    pub email2: Option<String>,
    pub web: Option<String>,
    pub lan: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Organisation {
    pub organisation_name: Option<String>,
    pub street_address: StreetAddress,
    pub phone1: TelephoneNumber,
    pub electronic_address: ElectronicAddress,
}

impl Organisation {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            organisation_name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A vertex of a location's geometry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PositionPoint {
    pub x_position: String,
    pub y_position: String,
    pub z_position: Option<String>,
}

impl PositionPoint {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x_position: x.into(),
            y_position: y.into(),
            z_position: None,
        }
    }
}
