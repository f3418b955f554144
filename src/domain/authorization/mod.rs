pub mod model;
pub mod repository;

pub use model::Authorization;
pub use repository::AuthorizationRepository;
