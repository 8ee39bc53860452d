//! Business instance topology tree

use cmdb_bridge_common::constants::object_type;
use serde::{Deserialize, Deserializer, Serialize};

/// One node of a business instance topology (business, set, module, or a
/// custom level), as returned by `search_biz_inst_topo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyNode {
    #[serde(rename = "bk_inst_id")]
    pub instance_id: i64,
    #[serde(rename = "bk_inst_name")]
    pub instance_name: String,
    #[serde(rename = "bk_obj_id")]
    pub object_type: String,
    #[serde(rename = "bk_obj_name", default)]
    pub object_name: String,
    #[serde(rename = "child", default, deserialize_with = "null_as_empty")]
    pub children: Vec<TopologyNode>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TopologyNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TopologyNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TopologyNode {
    pub fn new(instance_id: i64, instance_name: &str, object_type: &str) -> Self {
        Self {
            instance_id,
            instance_name: instance_name.to_string(),
            object_type: object_type.to_string(),
            object_name: object_type.to_string(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TopologyNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_set(&self) -> bool {
        self.object_type == object_type::SET
    }

    pub fn is_module(&self) -> bool {
        self.object_type == object_type::MODULE
    }

    /// Number of nodes in this subtree, including `self`
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_size).sum::<usize>()
    }
}

/// Find the set that directly contains the module `module_id`.
///
/// Walks depth-first in child order. A set node is checked against its
/// immediate children before its subtree is searched, and the first hit wins.
pub fn find_ancestor_set_id(roots: &[TopologyNode], module_id: i64) -> Option<i64> {
    for node in roots {
        if node.is_set()
            && node
                .children
                .iter()
                .any(|child| child.is_module() && child.instance_id == module_id)
        {
            return Some(node.instance_id);
        }

        if let Some(set_id) = find_ancestor_set_id(&node.children, module_id) {
            return Some(set_id);
        }
    }
    None
}
