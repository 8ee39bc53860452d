//! Host id lookup by inner IP

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TopologyError;

/// Host fields selected from `search_host`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    pub bk_host_id: i64,
    #[serde(default)]
    pub bk_host_innerip: String,
}

/// One entry of the `search_host` result list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    pub host: HostInfo,
}

impl HostRecord {
    pub fn new(bk_host_id: i64, inner_ip: &str) -> Self {
        Self {
            host: HostInfo {
                bk_host_id,
                bk_host_innerip: inner_ip.to_string(),
            },
        }
    }
}

/// Map requested inner IPs to host ids (as strings), in request order.
///
/// Unlike path matching this does not stop at the first miss: every IP absent
/// from `hosts` is collected into one [`TopologyError::HostsNotInBusiness`].
pub fn host_ids_by_inner_ip<S: AsRef<str>>(
    ips: &[S],
    hosts: &[HostRecord],
) -> Result<Vec<String>, TopologyError> {
    let ip_to_id: HashMap<&str, String> = hosts
        .iter()
        .map(|record| {
            (
                record.host.bk_host_innerip.as_str(),
                record.host.bk_host_id.to_string(),
            )
        })
        .collect();

    let mut host_ids = Vec::with_capacity(ips.len());
    let mut invalid_ips = Vec::new();
    for ip in ips {
        match ip_to_id.get(ip.as_ref()) {
            Some(id) => host_ids.push(id.clone()),
            None => invalid_ips.push(ip.as_ref().to_string()),
        }
    }

    if !invalid_ips.is_empty() {
        warn!("IPs not found in business: {}", invalid_ips.join(","));
        return Err(TopologyError::HostsNotInBusiness { ips: invalid_ips });
    }
    Ok(host_ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ips_known() {
        let hosts = vec![
            HostRecord::new(11, "10.0.0.1"),
            HostRecord::new(12, "10.0.0.2"),
        ];
        let ids = host_ids_by_inner_ip(&["10.0.0.2", "10.0.0.1"], &hosts).unwrap();
        assert_eq!(ids, vec!["12", "11"]);
    }

    #[test]
    fn test_missing_ip_reported() {
        let hosts = vec![HostRecord::new(11, "10.0.0.1")];
        let err = host_ids_by_inner_ip(&["10.0.0.1", "10.0.0.2"], &hosts).unwrap_err();
        assert!(err.to_string().contains("10.0.0.2"));
        assert!(!err.to_string().contains("10.0.0.1"));
    }

    #[test]
    fn test_all_missing_ips_collected() {
        let hosts = vec![HostRecord::new(11, "10.0.0.1")];
        let err =
            host_ids_by_inner_ip(&["10.0.0.9", "10.0.0.1", "10.0.0.8"], &hosts).unwrap_err();
        match err {
            TopologyError::HostsNotInBusiness { ips } => {
                assert_eq!(ips, vec!["10.0.0.9", "10.0.0.8"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_request() {
        let ids = host_ids_by_inner_ip::<&str>(&[], &[]).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_duplicate_request_ip() {
        let hosts = vec![HostRecord::new(11, "10.0.0.1")];
        let ids = host_ids_by_inner_ip(&["10.0.0.1", "10.0.0.1"], &hosts).unwrap();
        assert_eq!(ids, vec!["11", "11"]);
    }

    #[test]
    fn test_deserialize_search_host_entry() {
        let record: HostRecord = serde_json::from_str(
            r#"{"host":{"bk_host_id":42,"bk_host_innerip":"192.168.1.5"},"set":[],"module":[]}"#,
        )
        .unwrap();
        assert_eq!(record, HostRecord::new(42, "192.168.1.5"));
    }
}
