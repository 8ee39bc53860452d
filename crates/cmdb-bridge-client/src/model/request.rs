// Request bodies

use cmdb_bridge_common::constants::object_type;
use serde::Serialize;

/// Exact inner-IP filter of `search_host`
#[derive(Clone, Debug, Serialize)]
pub struct IpFilter<'a> {
    pub data: &'a [String],
    pub exact: u8,
    pub flag: &'a str,
}

/// Field selection for one object kind
#[derive(Clone, Debug, Serialize)]
pub struct ObjectFieldCondition<'a> {
    pub bk_obj_id: &'a str,
    pub fields: Vec<&'a str>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchHostRequest<'a> {
    pub bk_biz_id: i64,
    pub bk_supplier_account: &'a str,
    pub ip: IpFilter<'a>,
    pub condition: Vec<ObjectFieldCondition<'a>>,
}

impl<'a> SearchHostRequest<'a> {
    /// Hosts of `bk_biz_id` whose inner IP is exactly one of `ips`,
    /// selecting only the host id and inner IP
    pub fn by_inner_ips(bk_biz_id: i64, bk_supplier_account: &'a str, ips: &'a [String]) -> Self {
        Self {
            bk_biz_id,
            bk_supplier_account,
            ip: IpFilter {
                data: ips,
                exact: 1,
                flag: "bk_host_innerip",
            },
            condition: vec![ObjectFieldCondition {
                bk_obj_id: object_type::HOST,
                fields: vec!["bk_host_id", "bk_host_innerip"],
            }],
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchBizInstTopoRequest<'a> {
    pub bk_biz_id: i64,
    pub bk_supplier_account: &'a str,
    /// Depth of custom levels to return; -1 returns all of them
    pub level: i32,
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchObjectAttributeRequest<'a> {
    pub bk_obj_id: &'a str,
    pub bk_supplier_account: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_host_request_body() {
        let ips = vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()];
        let body = serde_json::to_value(SearchHostRequest::by_inner_ips(2, "0", &ips)).unwrap();
        assert_eq!(
            body,
            json!({
                "bk_biz_id": 2,
                "bk_supplier_account": "0",
                "ip": {"data": ["10.0.0.1", "10.0.0.2"], "exact": 1, "flag": "bk_host_innerip"},
                "condition": [{"bk_obj_id": "host", "fields": ["bk_host_id", "bk_host_innerip"]}]
            })
        );
    }

    #[test]
    fn test_search_biz_inst_topo_request_body() {
        let body = serde_json::to_value(SearchBizInstTopoRequest {
            bk_biz_id: 3,
            bk_supplier_account: "0",
            level: -1,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"bk_biz_id": 3, "bk_supplier_account": "0", "level": -1})
        );
    }
}
