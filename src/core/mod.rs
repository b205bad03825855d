pub mod boxed;
pub mod dictionary;
pub mod person_collection;
pub mod queue;
pub mod runner;
pub mod sorted_set;
pub mod untyped_list;

pub use crate::domain::model::{OperatingSystem, Person, PlatformId};
pub use crate::domain::ports::{Comparer, SortPeopleByAge};
pub use crate::utils::error::Result;
