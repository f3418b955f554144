//! Organisation roles: customers and service suppliers.

use serde::{Deserialize, Serialize};

use crate::domain::common::{Identified, IdentifiedObject, Organisation, Status};
use crate::domain::kinds::{CustomerKind, SupplierKind};

/// A role an organisation plays towards the utility.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrganisationRole {
    pub organisation: Organisation,
}

/// Ranking of a customer for restoration and contact purposes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Priority {
    pub value: Option<i32>,
    pub rank: Option<i32>,
    pub priority_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub object: IdentifiedObject,
    pub role: OrganisationRole,
    pub kind: Option<CustomerKind>,
    pub special_need: Option<String>,
    pub vip: bool,
    /// Public utility commission number, the customer's natural key.
    pub puc_number: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub locale: Option<String>,
    pub customer_name: Option<String>,
}

impl Customer {
    pub fn new(self_href: &str) -> Self {
        Self::with_object(IdentifiedObject::from_self_href(self_href))
    }

    /// A customer identified by its PUC number.
    pub fn with_puc_number(puc_number: impl Into<String>) -> Self {
        let puc_number = puc_number.into();
        Self {
            puc_number: Some(puc_number.clone()),
            ..Self::with_object(IdentifiedObject::from_natural_key(&puc_number))
        }
    }

    fn with_object(object: IdentifiedObject) -> Self {
        Self {
            object,
            role: OrganisationRole::default(),
            kind: None,
            special_need: None,
            vip: false,
            puc_number: None,
            status: Status::default(),
            priority: Priority::default(),
            locale: None,
            customer_name: None,
        }
    }

    pub fn of_kind(mut self, kind: CustomerKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.role.organisation.organisation_name = Some(name.clone());
        self.customer_name = Some(name);
        self
    }
}

impl Identified for Customer {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSupplier {
    pub object: IdentifiedObject,
    pub role: OrganisationRole,
    pub kind: Option<SupplierKind>,
    pub issuer_identification_number: Option<String>,
    pub effective_date: Option<i64>,
}

impl ServiceSupplier {
    pub fn new(self_href: &str, name: impl Into<String>) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            role: OrganisationRole {
                organisation: Organisation::named(name),
            },
            kind: None,
            issuer_identification_number: None,
            effective_date: None,
        }
    }
}

impl Identified for ServiceSupplier {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::identity::derive_id;

    #[test]
    fn puc_number_is_the_identity() {
        let customer = Customer::with_puc_number("PUC-001").named("Acme Dairy");
        assert_eq!(customer.object.id, derive_id("PUC-001"));
        assert_eq!(customer.puc_number.as_deref(), Some("PUC-001"));
        assert_eq!(
            customer.role.organisation.organisation_name.as_deref(),
            Some("Acme Dairy")
        );
        assert!(customer.object.self_link.is_none());
    }

    #[test]
    fn supplier_carries_organisation_name() {
        let supplier = ServiceSupplier::new("ss/1", "Grid Co");
        assert_eq!(
            supplier.role.organisation.organisation_name.as_deref(),
            Some("Grid Co")
        );
    }
}
