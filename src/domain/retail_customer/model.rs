//! RetailCustomer domain entity

use serde::{Deserialize, Serialize};

use crate::domain::common::{Identified, IdentifiedObject};

pub const ROLE_CUSTOMER: &str = "ROLE_USER";
pub const ROLE_CUSTODIAN: &str = "ROLE_CUSTODIAN";

/// A retail customer as known to the data custodian. Owns its
/// subscriptions: deleting the customer deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailCustomer {
    pub object: IdentifiedObject,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub enabled: bool,
    pub role: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub account_created: Option<i64>,
    pub last_login: Option<i64>,
    pub account_locked: bool,
    pub failed_login_attempts: i32,
}

impl RetailCustomer {
    pub fn new(self_href: &str, username: impl Into<String>) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            username: username.into(),
            first_name: None,
            last_name: None,
            password: None,
            enabled: true,
            role: ROLE_CUSTOMER.to_string(),
            email: None,
            phone: None,
            account_created: None,
            last_login: None,
            account_locked: false,
            failed_login_attempts: 0,
        }
    }

    pub fn named(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => self.username.clone(),
        }
    }

    pub fn is_custodian(&self) -> bool {
        self.role == ROLE_CUSTODIAN
    }
}

impl Identified for RetailCustomer {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_falls_back_to_username() {
        let rc = RetailCustomer::new("rc", "alan");
        assert_eq!(rc.full_name(), "alan");
        assert_eq!(rc.named("Alan", "Turing").full_name(), "Alan Turing");
    }

    #[test]
    fn defaults_to_enabled_customer_role() {
        let rc = RetailCustomer::new("rc", "grace");
        assert!(rc.enabled);
        assert!(!rc.is_custodian());
    }
}
