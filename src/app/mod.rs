pub mod demos;

pub use demos::Demo;
