//! Subscription domain entity

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identified, IdentifiedObject};
use crate::shared::identity::hashed_key;

/// The link between a third-party application, the authorization it holds,
/// and the retail customer whose usage points it may read. All three links
/// are mandatory; the usage points are referenced, never owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub object: IdentifiedObject,
    pub hashed_id: String,
    pub last_update: Option<DateTime<Utc>>,
    pub application_information_id: Uuid,
    pub authorization_id: Uuid,
    pub retail_customer_id: Uuid,
    pub usage_point_ids: BTreeSet<Uuid>,
}

impl Subscription {
    pub fn new(
        self_href: &str,
        application_information_id: Uuid,
        authorization_id: Uuid,
        retail_customer_id: Uuid,
    ) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            hashed_id: hashed_key(self_href),
            last_update: None,
            application_information_id,
            authorization_id,
            retail_customer_id,
            usage_point_ids: BTreeSet::new(),
        }
    }

    pub fn with_usage_point(mut self, usage_point_id: Uuid) -> Self {
        self.usage_point_ids.insert(usage_point_id);
        self
    }

    pub fn covers(&self, usage_point_id: Uuid) -> bool {
        self.usage_point_ids.contains(&usage_point_id)
    }
}

impl Identified for Subscription {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::identity::derive_id;

    #[test]
    fn hashed_id_is_derived_from_self_link() {
        let href = "https://dc.example/espi/1_1/resource/Subscription/5";
        let sub = Subscription::new(href, derive_id("a"), derive_id("b"), derive_id("c"));
        assert_eq!(sub.hashed_id, hashed_key(href));
        assert_ne!(sub.hashed_id, sub.object.id.to_string());
    }

    #[test]
    fn usage_points_are_a_set() {
        let up = derive_id("up");
        let sub = Subscription::new("s", derive_id("a"), derive_id("b"), derive_id("c"))
            .with_usage_point(up)
            .with_usage_point(up);
        assert_eq!(sub.usage_point_ids.len(), 1);
        assert!(sub.covers(up));
    }
}
