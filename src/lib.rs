pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::Demo;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{
    boxed::BoxedValue,
    dictionary::Dictionary,
    person_collection::PersonCollection,
    queue::Queue,
    runner::{DemoRunner, RunPlan},
    sorted_set::SortedSet,
    untyped_list::UntypedList,
};
pub use crate::domain::{model::Person, ports::SortPeopleByAge};
pub use crate::utils::error::{CollectionsError, Result};
