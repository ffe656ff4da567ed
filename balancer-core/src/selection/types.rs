use crate::selection::availability::{AlwaysAvailable, Availability};
use std::fmt;
use std::sync::Arc;

/// A backend the dispatch layer can route work to.
///
/// Identity (`name`, `address`) is fixed for the lifetime of the selector.
/// Liveness is delegated to the [`Availability`] collaborator supplied at
/// construction.
pub struct Endpoint {
    pub name: String,
    pub address: String,
    availability: Arc<dyn Availability>,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::with_availability(name, address, Arc::new(AlwaysAvailable))
    }

    pub fn with_availability(
        name: impl Into<String>,
        address: impl Into<String>,
        availability: Arc<dyn Availability>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            availability,
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("available", &self.is_available())
            .finish()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.address)
    }
}

/// A thread-safe reference to an Endpoint.
pub type SharedEndpoint = Arc<Endpoint>;
