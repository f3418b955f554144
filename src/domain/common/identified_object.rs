//! Identity and link metadata shared by every ESPI resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::identity::derive_id;

/// Atom link (`href` + `rel`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkType {
    pub href: String,
    pub rel: String,
}

impl LinkType {
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
        }
    }
}

/// Base shape embedded by every identified resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifiedObject {
    pub id: Uuid,
    pub description: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub self_link: Option<LinkType>,
    pub up_link: Option<LinkType>,
}

impl IdentifiedObject {
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            description: None,
            published: None,
            updated: None,
            self_link: None,
            up_link: None,
        }
    }

    /// Identity keyed by a domain code (agreement id, PUC number, ...).
    pub fn from_natural_key(key: &str) -> Self {
        Self::with_id(derive_id(key))
    }

    /// Identity keyed by the resource's self link. The up link is the
    /// collection the resource lives in.
    pub fn from_self_href(href: &str) -> Self {
        let mut object = Self::with_id(derive_id(href));
        object.self_link = Some(LinkType::new(href, "self"));
        object.up_link = href
            .trim_end_matches('/')
            .rsplit_once('/')
            .map(|(parent, _)| LinkType::new(parent, "up"));
        object
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Stamp `published` (first time only) and `updated`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if self.published.is_none() {
            self.published = Some(now);
        }
        self.updated = Some(now);
    }
}

/// Anything that embeds an [`IdentifiedObject`].
pub trait Identified {
    fn identified_object(&self) -> &IdentifiedObject;

    fn id(&self) -> Uuid {
        self.identified_object().id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_href_drives_id_and_links() {
        let href = "https://dc.example/espi/1_1/resource/RetailCustomer/9/UsagePoint/1";
        let object = IdentifiedObject::from_self_href(href);
        assert_eq!(object.id, derive_id(href));
        assert_eq!(object.self_link, Some(LinkType::new(href, "self")));
        assert_eq!(
            object.up_link.map(|l| l.href),
            Some("https://dc.example/espi/1_1/resource/RetailCustomer/9/UsagePoint".to_string())
        );
    }

    #[test]
    fn touch_keeps_first_published() {
        let mut object = IdentifiedObject::from_natural_key("foo");
        let first = Utc::now();
        object.touch(first);
        let later = first + chrono::Duration::seconds(10);
        object.touch(later);
        assert_eq!(object.published, Some(first));
        assert_eq!(object.updated, Some(later));
    }
}
