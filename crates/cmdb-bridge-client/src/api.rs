//! CMDB operations used by pipeline steps
//!
//! [`CmdbApi`] has three required methods, one per gateway API. The step
//! operations are provided methods built on them: each fetches what it needs
//! and hands the payload to `cmdb-bridge-topology`. A test double only has to
//! implement the three fetches.

use std::collections::BTreeMap;

use cmdb_bridge_topology::{
    self as topology, HostRecord, ObjectAttribute, TopologyNode, find_ancestor_set_id,
    format_property_options, match_paths, parse_path_text,
};
use serde_json::Value;
use tracing::info;

use crate::error::Result;

#[async_trait::async_trait]
pub trait CmdbApi: Send + Sync {
    /// Hosts of a business whose inner IP is one of `ips`
    async fn search_host(&self, bk_biz_id: i64, ips: &[String]) -> Result<Vec<HostRecord>>;

    /// Full instance topology of a business
    async fn search_biz_inst_topo(&self, bk_biz_id: i64) -> Result<Vec<TopologyNode>>;

    /// Attribute definitions of an object, with option names in `locale`
    async fn search_object_attribute(
        &self,
        bk_obj_id: &str,
        locale: Option<&str>,
    ) -> Result<Vec<ObjectAttribute>>;

    /// Host ids (as strings) for `ips`, in the same order.
    ///
    /// Fails with every IP that is not a host of the business.
    async fn host_ids_by_inner_ip(&self, bk_biz_id: i64, ips: &[String]) -> Result<Vec<String>> {
        let hosts = self.search_host(bk_biz_id, ips).await?;
        let host_ids = topology::host_ids_by_inner_ip(ips, &hosts)?;
        info!(
            "Resolved {} host ids in business {}",
            host_ids.len(),
            bk_biz_id
        );
        Ok(host_ids)
    }

    /// Instance ids addressed by operator path text, one per path.
    ///
    /// Fails on the first path missing from the business topology.
    async fn resolve_path_text(&self, bk_biz_id: i64, path_text: &str) -> Result<Vec<i64>> {
        let tree = self.search_biz_inst_topo(bk_biz_id).await?;
        let paths = parse_path_text(path_text);
        let ids = match_paths(&tree, &paths)?;
        info!(
            "Resolved {} topology paths in business {}",
            ids.len(),
            bk_biz_id
        );
        Ok(ids)
    }

    /// Id of the set containing module `module_id`, if any
    async fn module_set_id(&self, bk_biz_id: i64, module_id: i64) -> Result<Option<i64>> {
        let tree = self.search_biz_inst_topo(bk_biz_id).await?;
        Ok(find_ancestor_set_id(&tree, module_id))
    }

    /// `option name -> option id` of an enum property
    async fn property_options(
        &self,
        bk_obj_id: &str,
        property_id: &str,
        locale: Option<&str>,
    ) -> Result<BTreeMap<String, Value>> {
        let attributes = self.search_object_attribute(bk_obj_id, locale).await?;
        Ok(format_property_options(&attributes, property_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CmdbError;
    use cmdb_bridge_common::{ApiFailure, StepResult};
    use cmdb_bridge_topology::TopologyError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory CMDB serving fixed payloads
    #[derive(Default)]
    struct FakeCmdb {
        hosts: Vec<HostRecord>,
        topology: Vec<TopologyNode>,
        attributes: Vec<ObjectAttribute>,
        fail_topology: bool,
        topology_calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl CmdbApi for FakeCmdb {
        async fn search_host(&self, _bk_biz_id: i64, ips: &[String]) -> Result<Vec<HostRecord>> {
            Ok(self
                .hosts
                .iter()
                .filter(|h| ips.contains(&h.host.bk_host_innerip))
                .cloned()
                .collect())
        }

        async fn search_biz_inst_topo(&self, bk_biz_id: i64) -> Result<Vec<TopologyNode>> {
            self.topology_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_topology {
                return Err(ApiFailure::new(
                    "cc.search_biz_inst_topo",
                    &json!({"bk_biz_id": bk_biz_id}),
                    1199048,
                    "business not found",
                )
                .into());
            }
            Ok(self.topology.clone())
        }

        async fn search_object_attribute(
            &self,
            _bk_obj_id: &str,
            _locale: Option<&str>,
        ) -> Result<Vec<ObjectAttribute>> {
            Ok(self.attributes.clone())
        }
    }

    fn fake() -> FakeCmdb {
        FakeCmdb {
            hosts: vec![HostRecord::new(101, "10.0.0.1")],
            topology: vec![TopologyNode::new(1, "biz", "biz").with_children(vec![
                TopologyNode::new(2, "s", "set")
                    .with_children(vec![TopologyNode::new(3, "m", "module")]),
            ])],
            attributes: serde_json::from_value(json!([{
                "bk_property_id": "bk_os_type",
                "option": [{"id": "1", "name": "Linux"}]
            }]))
            .unwrap(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_host_ids_by_inner_ip() {
        let cmdb = fake();
        let ids = cmdb
            .host_ids_by_inner_ip(2, &["10.0.0.1".to_string()])
            .await
            .unwrap();
        assert_eq!(ids, vec!["101"]);

        let err = cmdb
            .host_ids_by_inner_ip(2, &["10.0.0.1".to_string(), "10.0.0.2".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CmdbError::Topology(TopologyError::HostsNotInBusiness { .. })
        ));
        assert!(err.to_string().contains("10.0.0.2"));
    }

    #[tokio::test]
    async fn test_resolve_path_text() {
        let cmdb = fake();
        assert_eq!(
            cmdb.resolve_path_text(2, "biz > s > m\n biz>s ").await.unwrap(),
            vec![3, 2]
        );

        let err = cmdb.resolve_path_text(2, "biz>s>x").await.unwrap_err();
        assert_eq!(err.to_string(), "topology path does not exist: biz>s>x");
    }

    #[tokio::test]
    async fn test_resolve_path_text_upstream_failure() {
        let cmdb = FakeCmdb {
            fail_topology: true,
            ..fake()
        };
        let err = cmdb.resolve_path_text(2, "biz").await.unwrap_err();
        assert!(matches!(err, CmdbError::ApiFailed(_)));
        assert_eq!(cmdb.topology_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_module_set_id() {
        let cmdb = fake();
        assert_eq!(cmdb.module_set_id(2, 3).await.unwrap(), Some(2));
        assert_eq!(cmdb.module_set_id(2, 99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_property_options() {
        let cmdb = fake();
        let options = cmdb
            .property_options("host", "bk_os_type", Some("en"))
            .await
            .unwrap();
        assert_eq!(options.get("Linux"), Some(&json!("1")));
    }

    #[tokio::test]
    async fn test_step_result_envelope() {
        let cmdb = fake();

        let ok: StepResult<Vec<i64>> = cmdb.resolve_path_text(2, "biz>s>m").await.into();
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"result": true, "data": [3]})
        );

        let failed: StepResult<Vec<i64>> = cmdb.resolve_path_text(2, "biz>nope").await.into();
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"result": false, "message": "topology path does not exist: biz>nope"})
        );
    }
}
