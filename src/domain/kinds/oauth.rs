//! Codes used by the OAuth bookkeeping records (application information,
//! authorizations).

coded_kind! {
    pub enum AuthorizationStatus: i32 {
        Revoked = 0,
        Active = 1,
        Denied = 2,
    }
}

coded_kind! {
    pub enum GrantType: str {
        AuthorizationCode = "authorization_code",
        ClientCredentials = "client_credentials",
        RefreshToken = "refresh_token",
    }
}

coded_kind! {
    pub enum ResponseType: str {
        Code = "code",
        Token = "token",
    }
}

coded_kind! {
    pub enum TokenType: str {
        Bearer = "Bearer",
    }
}

coded_kind! {
    pub enum OAuthError: str {
        InvalidRequest = "invalid_request",
        InvalidClient = "invalid_client",
        InvalidGrant = "invalid_grant",
        UnauthorizedClient = "unauthorized_client",
        UnsupportedGrantType = "unsupported_grant_type",
        InvalidScope = "invalid_scope",
        AccessDenied = "access_denied",
        ServerError = "server_error",
        TemporarilyUnavailable = "temporarily_unavailable",
    }
}

coded_kind! {
    pub enum TokenEndpointMethod: str {
        ClientSecretBasic = "client_secret_basic",
        ClientSecretPost = "client_secret_post",
    }
}

coded_kind! {
    pub enum DataCustodianApplicationStatus: i32 {
        Review = 1,
        Production = 2,
        OnHold = 3,
        Revoked = 4,
    }
}

coded_kind! {
    pub enum ThirdPartyApplicationStatus: i32 {
        Development = 1,
        ReviewAndTest = 2,
        Production = 3,
        Retired = 4,
    }
}

coded_kind! {
    pub enum ThirdPartyApplicationType: i32 {
        Web = 1,
        Desktop = 2,
        Mobile = 3,
        Device = 4,
    }
}

coded_kind! {
    pub enum ThirdPartyApplicationUse: i32 {
        EnergyManagement = 1,
        Comparisons = 2,
        Government = 3,
        Academic = 4,
        LawEnforcement = 5,
    }
}
