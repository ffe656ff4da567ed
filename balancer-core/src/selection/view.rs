use crate::selection::registry::ScheduledEndpoint;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledEndpointView {
    pub name: String,
    pub address: String,
    pub weight: i64,
    pub current: i64,
    pub available: bool,
    pub eligible: bool,
}

impl From<&ScheduledEndpoint> for ScheduledEndpointView {
    fn from(entry: &ScheduledEndpoint) -> Self {
        let endpoint = entry.endpoint();
        let available = endpoint.is_available();

        Self {
            name: endpoint.name.clone(),
            address: endpoint.address.clone(),
            weight: entry.weight(),
            current: entry.current(),
            available,
            eligible: available && entry.weight() > 0,
        }
    }
}
