//! ReadingType repository interface

use super::model::ReadingType;
use crate::domain::repositories::CrudRepository;

pub trait ReadingTypeRepository: CrudRepository<ReadingType> {}
