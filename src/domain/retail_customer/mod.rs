pub mod model;
pub mod repository;

pub use model::{RetailCustomer, ROLE_CUSTODIAN, ROLE_CUSTOMER};
pub use repository::RetailCustomerRepository;
