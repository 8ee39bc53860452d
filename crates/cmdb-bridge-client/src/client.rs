// CmdbClient - gateway-backed implementation of CmdbApi

use cmdb_bridge_common::{
    ApiResponse,
    constants::{api_name, api_path},
};
use cmdb_bridge_topology::{HostRecord, ObjectAttribute, TopologyNode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::{
    api::CmdbApi,
    config::CmdbClientConfig,
    error::Result,
    http::CmdbHttpClient,
    model::{
        HostSearchResult, SearchBizInstTopoRequest, SearchHostRequest,
        SearchObjectAttributeRequest,
    },
};

/// Topology level argument asking for every custom level
const ALL_LEVELS: i32 = -1;

/// CMDB client talking to the gateway over HTTP
pub struct CmdbClient {
    http_client: CmdbHttpClient,
}

impl CmdbClient {
    /// Create a new CmdbClient with the given configuration
    pub fn new(config: CmdbClientConfig) -> Result<Self> {
        let http_client = CmdbHttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Create a new CmdbClient from a single server address
    pub fn from_server_addr(
        addr: &str,
        app_code: &str,
        app_secret: &str,
        username: &str,
    ) -> Result<Self> {
        let config = CmdbClientConfig::new(addr)
            .with_app(app_code, app_secret)
            .with_username(username);
        Self::new(config)
    }

    /// Create a client from a config file and `CMDB_*` environment variables
    pub fn from_config_file(path: Option<&str>) -> Result<Self> {
        Self::new(CmdbClientConfig::load(path)?)
    }

    fn supplier_account(&self) -> &str {
        &self.http_client.config().supplier_account
    }

    /// Call one gateway API and unwrap its response envelope.
    ///
    /// A `result: false` envelope is logged and returned as `ApiFailed`.
    async fn call<T, B>(&self, api: &str, path: &str, body: &B, locale: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let params = serde_json::to_value(body)?;
        debug!("Calling {} with {}", api, params);

        let response: ApiResponse<T> = self.http_client.post_json(path, &params, locale).await?;
        response.into_data(api, &params).map_err(|failure| {
            error!("{}", failure);
            failure.into()
        })
    }
}

#[async_trait::async_trait]
impl CmdbApi for CmdbClient {
    async fn search_host(&self, bk_biz_id: i64, ips: &[String]) -> Result<Vec<HostRecord>> {
        let request = SearchHostRequest::by_inner_ips(bk_biz_id, self.supplier_account(), ips);
        let result: HostSearchResult = self
            .call(api_name::SEARCH_HOST, api_path::SEARCH_HOST, &request, None)
            .await?;
        Ok(result.info)
    }

    async fn search_biz_inst_topo(&self, bk_biz_id: i64) -> Result<Vec<TopologyNode>> {
        let request = SearchBizInstTopoRequest {
            bk_biz_id,
            bk_supplier_account: self.supplier_account(),
            level: ALL_LEVELS,
        };
        self.call(
            api_name::SEARCH_BIZ_INST_TOPO,
            api_path::SEARCH_BIZ_INST_TOPO,
            &request,
            None,
        )
        .await
    }

    async fn search_object_attribute(
        &self,
        bk_obj_id: &str,
        locale: Option<&str>,
    ) -> Result<Vec<ObjectAttribute>> {
        let request = SearchObjectAttributeRequest {
            bk_obj_id,
            bk_supplier_account: self.supplier_account(),
        };
        self.call(
            api_name::SEARCH_OBJECT_ATTRIBUTE,
            api_path::SEARCH_OBJECT_ATTRIBUTE,
            &request,
            locale,
        )
        .await
    }
}
