//! ApplicationInformation domain entity

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::common::{Identified, IdentifiedObject};
use crate::domain::kinds::{
    DataCustodianApplicationStatus, GrantType, ResponseType, ThirdPartyApplicationStatus,
    ThirdPartyApplicationType, ThirdPartyApplicationUse, TokenEndpointMethod,
};

/// Registration record of a third-party application with a data custodian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInformation {
    pub object: IdentifiedObject,
    pub client_id: String,
    #[serde(skip_serializing)]
    pub client_secret: Option<String>,
    pub client_name: Option<String>,
    pub client_id_issued_at: Option<i64>,
    pub client_secret_expires_at: Option<i64>,
    pub data_custodian_id: Option<String>,
    pub data_custodian_application_status: Option<DataCustodianApplicationStatus>,
    pub third_party_application_description: Option<String>,
    pub third_party_application_status: Option<ThirdPartyApplicationStatus>,
    pub third_party_application_type: Option<ThirdPartyApplicationType>,
    pub third_party_application_use: Option<ThirdPartyApplicationUse>,
    pub third_party_phone: Option<String>,
    pub authorization_server_uri: Option<String>,
    pub third_party_notify_uri: Option<String>,
    pub authorization_server_authorization_endpoint: Option<String>,
    pub authorization_server_token_endpoint: Option<String>,
    pub data_custodian_bulk_request_uri: Option<String>,
    pub data_custodian_resource_endpoint: Option<String>,
    pub redirect_uri: Option<String>,
    pub software_id: Option<String>,
    pub software_version: Option<String>,
    pub token_endpoint_auth_method: Option<TokenEndpointMethod>,
    pub response_type: Option<ResponseType>,
    pub registration_access_token: Option<String>,
    pub registration_client_uri: Option<String>,
    pub scopes: Vec<String>,
    pub grant_types: BTreeSet<GrantType>,
}

impl ApplicationInformation {
    pub fn new(self_href: &str, client_id: impl Into<String>) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            client_id: client_id.into(),
            client_secret: None,
            client_name: None,
            client_id_issued_at: None,
            client_secret_expires_at: None,
            data_custodian_id: None,
            data_custodian_application_status: None,
            third_party_application_description: None,
            third_party_application_status: None,
            third_party_application_type: None,
            third_party_application_use: None,
            third_party_phone: None,
            authorization_server_uri: None,
            third_party_notify_uri: None,
            authorization_server_authorization_endpoint: None,
            authorization_server_token_endpoint: None,
            data_custodian_bulk_request_uri: None,
            data_custodian_resource_endpoint: None,
            redirect_uri: None,
            software_id: None,
            software_version: None,
            token_endpoint_auth_method: None,
            response_type: None,
            registration_access_token: None,
            registration_client_uri: None,
            scopes: Vec::new(),
            grant_types: BTreeSet::new(),
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        if !self.scopes.contains(&scope) {
            self.scopes.push(scope);
        }
        self
    }

    pub fn with_grant_type(mut self, grant_type: GrantType) -> Self {
        self.grant_types.insert(grant_type);
        self
    }

    pub fn allows_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }

    pub fn supports_grant(&self, grant_type: GrantType) -> bool {
        self.grant_types.contains(&grant_type)
    }
}

impl Identified for ApplicationInformation {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scopes_are_not_duplicated() {
        let app = ApplicationInformation::new("app", "third_party")
            .with_scope("FB=4_5_15;IntervalDuration=3600")
            .with_scope("FB=4_5_15;IntervalDuration=3600");
        assert_eq!(app.scopes.len(), 1);
        assert!(app.allows_scope("FB=4_5_15;IntervalDuration=3600"));
    }

    #[test]
    fn grant_types_form_a_set() {
        let app = ApplicationInformation::new("app", "third_party")
            .with_grant_type(GrantType::AuthorizationCode)
            .with_grant_type(GrantType::RefreshToken)
            .with_grant_type(GrantType::AuthorizationCode);
        assert_eq!(app.grant_types.len(), 2);
        assert!(app.supports_grant(GrantType::RefreshToken));
        assert!(!app.supports_grant(GrantType::ClientCredentials));
    }
}
