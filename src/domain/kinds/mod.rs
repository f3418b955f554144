//! Coded lookup enumerations.
//!
//! ESPI stores most classifiers as small integer codes (CIM enumerations)
//! and a handful as string codes. Each kind here maps its variants to the
//! stored code and back; the reverse lookup is a linear scan over the
//! declared variants and never falls back to a default.

use std::fmt;

use crate::shared::errors::CodeError;

/// Common surface of every coded enumeration.
pub trait CodedKind: Copy + Eq + fmt::Debug + 'static {
    /// Fully-qualified name of the kind, reported in lookup errors.
    const KIND: &'static str;

    fn all() -> &'static [Self];

    fn name(self) -> &'static str;

    /// Reverse-lookup this variant's own code.
    fn reparse(self) -> Result<Self, CodeError>;
}

pub(crate) fn resolve<K: CodedKind>(
    candidates: &[K],
    matches: impl Fn(K) -> bool,
    code: impl fmt::Display,
) -> Result<K, CodeError> {
    let mut found = candidates.iter().copied().filter(|kind| matches(*kind));
    match (found.next(), found.next()) {
        (Some(kind), None) => Ok(kind),
        (None, _) => Err(CodeError::Unknown {
            kind: K::KIND,
            code: code.to_string(),
        }),
        (Some(first), Some(second)) => {
            let mut candidates = vec![first.name(), second.name()];
            candidates.extend(found.map(|kind| kind.name()));
            Err(CodeError::Ambiguous {
                kind: K::KIND,
                code: code.to_string(),
                candidates,
            })
        }
    }
}

macro_rules! coded_kind {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : i32 {
            $( $(#[$vmeta:meta])* $variant:ident = $code:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub const fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            pub fn from_code(code: i32) -> Result<Self, $crate::shared::errors::CodeError> {
                $crate::domain::kinds::resolve(Self::ALL, |kind| kind.code() == code, code)
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl $crate::domain::kinds::CodedKind for $name {
            const KIND: &'static str = concat!(module_path!(), "::", stringify!($name));

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn name(self) -> &'static str {
                $name::name(self)
            }

            fn reparse(self) -> Result<Self, $crate::shared::errors::CodeError> {
                Self::from_code(self.code())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : str {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub const fn code(self) -> &'static str {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            pub fn from_code(code: &str) -> Result<Self, $crate::shared::errors::CodeError> {
                $crate::domain::kinds::resolve(Self::ALL, |kind| kind.code() == code, code)
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl $crate::domain::kinds::CodedKind for $name {
            const KIND: &'static str = concat!(module_path!(), "::", stringify!($name));

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn name(self) -> &'static str {
                $name::name(self)
            }

            fn reparse(self) -> Result<Self, $crate::shared::errors::CodeError> {
                Self::from_code(self.code())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

pub mod customer;
pub mod oauth;
pub mod reading;
pub mod usage;

pub use customer::*;
pub use oauth::*;
pub use reading::*;
pub use usage::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trips<K: CodedKind>() {
        for kind in K::all() {
            assert_eq!(kind.reparse(), Ok(*kind), "{} did not round-trip", K::KIND);
        }
    }

    #[test]
    fn every_kind_round_trips() {
        assert_round_trips::<AccumulationKind>();
        assert_round_trips::<CommodityKind>();
        assert_round_trips::<DataQualifierKind>();
        assert_round_trips::<FlowDirectionKind>();
        assert_round_trips::<PhaseCodeKind>();
        assert_round_trips::<UnitMultiplierKind>();
        assert_round_trips::<UnitSymbolKind>();
        assert_round_trips::<TimeAttributeKind>();
        assert_round_trips::<QualityOfReading>();
        assert_round_trips::<CurrencyCode>();
        assert_round_trips::<ServiceKind>();
        assert_round_trips::<AmiBillingReadyKind>();
        assert_round_trips::<UsagePointConnectedKind>();
        assert_round_trips::<ItemKind>();
        assert_round_trips::<EnrollmentStatus>();
        assert_round_trips::<ApnodeType>();
        assert_round_trips::<AnodeType>();
        assert_round_trips::<AuthorizationStatus>();
        assert_round_trips::<GrantType>();
        assert_round_trips::<ResponseType>();
        assert_round_trips::<TokenType>();
        assert_round_trips::<OAuthError>();
        assert_round_trips::<TokenEndpointMethod>();
        assert_round_trips::<DataCustodianApplicationStatus>();
        assert_round_trips::<ThirdPartyApplicationStatus>();
        assert_round_trips::<ThirdPartyApplicationType>();
        assert_round_trips::<ThirdPartyApplicationUse>();
        assert_round_trips::<CustomerKind>();
        assert_round_trips::<RevenueKind>();
        assert_round_trips::<SupplierKind>();
        assert_round_trips::<NotificationMethodKind>();
        assert_round_trips::<MeterMultiplierKind>();
    }

    #[test]
    fn measurement_kind_round_trips_except_shared_code() {
        for kind in MeasurementKind::ALL {
            if kind.code() == 112 {
                continue;
            }
            assert_eq!(MeasurementKind::from_code(kind.code()), Ok(*kind));
        }
    }

    #[test]
    fn measurement_kind_code_112_is_ambiguous() {
        let err = MeasurementKind::from_code(112).unwrap_err();
        match err {
            CodeError::Ambiguous {
                kind, candidates, ..
            } => {
                assert!(kind.ends_with("MeasurementKind"));
                assert_eq!(
                    candidates,
                    vec!["MfgAssignedPhysicalSerialNumber", "DemandReset"]
                );
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn unknown_numeric_code_is_rejected() {
        let err = ServiceKind::from_code(99).unwrap_err();
        assert_eq!(
            err,
            CodeError::Unknown {
                kind: "espi_store::domain::kinds::usage::ServiceKind",
                code: "99".into(),
            }
        );
    }

    #[test]
    fn unknown_string_code_is_rejected() {
        assert!(matches!(
            GrantType::from_code("password"),
            Err(CodeError::Unknown { .. })
        ));
    }

    #[test]
    fn negative_codes_resolve() {
        assert_eq!(UnitMultiplierKind::from_code(-3), Ok(UnitMultiplierKind::Milli));
        assert_eq!(UnitMultiplierKind::Kilo.code(), 3);
    }

    #[test]
    fn display_uses_name_for_numeric_and_code_for_string_kinds() {
        assert_eq!(ServiceKind::Electricity.to_string(), "Electricity");
        assert_eq!(GrantType::AuthorizationCode.to_string(), "authorization_code");
    }
}
