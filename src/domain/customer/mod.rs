//! Customer schema: who the utility serves and under which agreements.

pub mod asset;
pub mod document;
pub mod location;
pub mod organisation;
pub mod repository;

pub use asset::{Asset, AssetContainer, EndDevice};
pub use document::{
    AccountNotification, Agreement, CustomerAccount, CustomerAgreement, DemandResponseProgram,
    Document,
};
pub use location::{Location, ServiceLocation};
pub use organisation::{Customer, OrganisationRole, Priority, ServiceSupplier};
pub use repository::{
    CustomerAccountRepository, CustomerAgreementRepository, CustomerRepository,
    EndDeviceRepository, ServiceLocationRepository, ServiceSupplierRepository,
};
