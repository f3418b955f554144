//! Authorization domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{DateTimeInterval, Identified, IdentifiedObject};
use crate::domain::kinds::{AuthorizationStatus, GrantType, OAuthError, ResponseType, TokenType};

/// OAuth grant bookkeeping for one third party and one retail customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authorization {
    pub object: IdentifiedObject,
    pub authorized_period: DateTimeInterval,
    pub published_period: DateTimeInterval,
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    pub authorization_uri: Option<String>,
    pub resource_uri: Option<String>,
    pub customer_resource_uri: Option<String>,
    pub scope: Option<String>,
    pub state: Option<String>,
    pub status: Option<AuthorizationStatus>,
    /// Token lifetime in seconds.
    pub expires_in: Option<i64>,
    pub grant_type: Option<GrantType>,
    pub response_type: Option<ResponseType>,
    pub token_type: Option<TokenType>,
    pub error: Option<OAuthError>,
    pub error_description: Option<String>,
    pub error_uri: Option<String>,
    pub third_party: Option<String>,
    pub code: Option<String>,
    pub application_information_id: Option<Uuid>,
    pub retail_customer_id: Option<Uuid>,
}

impl Authorization {
    pub fn new(self_href: &str) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            authorized_period: DateTimeInterval::default(),
            published_period: DateTimeInterval::default(),
            access_token: None,
            refresh_token: None,
            authorization_uri: None,
            resource_uri: None,
            customer_resource_uri: None,
            scope: None,
            state: None,
            status: None,
            expires_in: None,
            grant_type: None,
            response_type: None,
            token_type: None,
            error: None,
            error_description: None,
            error_uri: None,
            third_party: None,
            code: None,
            application_information_id: None,
            retail_customer_id: None,
        }
    }

    /// An active bearer grant issued at `issued_at` for `expires_in` seconds.
    pub fn granted(
        self_href: &str,
        access_token: impl Into<String>,
        scope: impl Into<String>,
        issued_at: i64,
        expires_in: i64,
    ) -> Self {
        Self {
            access_token: Some(access_token.into()),
            scope: Some(scope.into()),
            status: Some(AuthorizationStatus::Active),
            expires_in: Some(expires_in),
            grant_type: Some(GrantType::AuthorizationCode),
            token_type: Some(TokenType::Bearer),
            authorized_period: DateTimeInterval::new(issued_at, expires_in),
            ..Self::new(self_href)
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == Some(AuthorizationStatus::Active)
    }

    /// Epoch second at which the access token lapses.
    pub fn expires_at(&self) -> Option<i64> {
        self.authorized_period.end()
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at().is_some_and(|end| now >= end)
    }

    pub fn revoke(&mut self) {
        self.status = Some(AuthorizationStatus::Revoked);
        self.access_token = None;
        self.refresh_token = None;
    }

    pub fn deny(&mut self, error: OAuthError, description: impl Into<String>) {
        self.status = Some(AuthorizationStatus::Denied);
        self.error = Some(error);
        self.error_description = Some(description.into());
    }
}

impl Identified for Authorization {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_authorization_is_active_until_expiry() {
        let auth = Authorization::granted("auth", "token", "FB=1", 1_000, 3_600);
        assert!(auth.is_active());
        assert_eq!(auth.expires_at(), Some(4_600));
        assert!(!auth.is_expired_at(4_599));
        assert!(auth.is_expired_at(4_600));
    }

    #[test]
    fn unrepresentable_expiry_never_lapses() {
        let auth = Authorization::granted("auth", "token", "FB=1", i64::MAX - 10, 3_600);
        assert_eq!(auth.expires_at(), None);
        assert!(!auth.is_expired_at(i64::MAX));
    }

    #[test]
    fn revoke_clears_tokens() {
        let mut auth = Authorization::granted("auth", "token", "FB=1", 0, 60);
        auth.refresh_token = Some("refresh".into());
        auth.revoke();
        assert_eq!(auth.status, Some(AuthorizationStatus::Revoked));
        assert!(auth.access_token.is_none());
        assert!(auth.refresh_token.is_none());
    }

    #[test]
    fn deny_records_error() {
        let mut auth = Authorization::new("auth");
        auth.deny(OAuthError::AccessDenied, "customer declined");
        assert_eq!(auth.status, Some(AuthorizationStatus::Denied));
        assert_eq!(auth.error, Some(OAuthError::AccessDenied));
    }
}
