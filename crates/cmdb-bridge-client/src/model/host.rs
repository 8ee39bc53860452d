// search_host response model

use cmdb_bridge_topology::HostRecord;
use serde::{Deserialize, Serialize};

/// `data` of a `search_host` response
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HostSearchResult {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub info: Vec<HostRecord>,
}
