pub mod model;
pub mod repository;

pub use model::ApplicationInformation;
pub use repository::ApplicationInformationRepository;
