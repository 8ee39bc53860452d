// Request and response bodies of the CMDB gateway APIs

pub mod host;
pub mod request;

pub use host::HostSearchResult;
pub use request::{
    IpFilter, ObjectFieldCondition, SearchBizInstTopoRequest, SearchHostRequest,
    SearchObjectAttributeRequest,
};
