// CMDB object types, API names, and defaults

/// Separator between segments of a topology path line
pub const PATH_DELIMITER: char = '>';

/// Separator inside composite front-end ids such as `module_12`
pub const FRONTEND_ID_SEPARATOR: char = '_';

/// Default supplier account used by single-tenant CMDB deployments
pub const DEFAULT_SUPPLIER_ACCOUNT: &str = "0";

/// Header carrying the gateway credentials
pub const AUTHORIZATION_HEADER: &str = "X-Bkapi-Authorization";

/// Header selecting the response language for a single request
pub const LANGUAGE_HEADER: &str = "Blueking-Language";

pub mod object_type {
    pub const BIZ: &str = "biz";
    pub const SET: &str = "set";
    pub const MODULE: &str = "module";
    pub const HOST: &str = "host";
}

pub mod api_name {
    pub const SEARCH_HOST: &str = "cc.search_host";
    pub const SEARCH_BIZ_INST_TOPO: &str = "cc.search_biz_inst_topo";
    pub const SEARCH_OBJECT_ATTRIBUTE: &str = "cc.search_object_attribute";
}

pub mod api_path {
    pub const DEFAULT_PREFIX: &str = "/api/c/compapi/v2/cc";

    pub const SEARCH_HOST: &str = "/search_host/";
    pub const SEARCH_BIZ_INST_TOPO: &str = "/search_biz_inst_topo/";
    pub const SEARCH_OBJECT_ATTRIBUTE: &str = "/search_object_attribute/";
}
