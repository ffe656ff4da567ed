pub mod algorithms;
mod availability;
mod error;
mod registry;
mod selector;
mod strategy;
mod types;
mod view;

#[cfg(test)]
mod tests;

pub use availability::*;
pub use error::*;
pub use registry::*;
pub use selector::*;
pub use strategy::*;
pub use types::*;
pub use view::*;
