//! Endpoint selection for client-side load distribution.
//!
//! A [`Selector`] is built once from a [`BalancerConfig`] and hands out the
//! next endpoint on every [`Selector::select_next`] call, using either plain
//! round robin or smooth weighted round robin.

pub mod cli;
pub mod conf;
pub mod logging;
pub mod selection;

pub use conf::{Algorithm, BalancerConfig, EndpointConfig};
pub use selection::{Endpoint, SelectionError, Selector, SharedEndpoint};
