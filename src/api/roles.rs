use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::client::request::RequestTemplate;
use crate::client::OmadaClient;
use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub role_type: i32,
    pub default_role: bool,
    pub source: i32,
    pub privilege: Privilege,
}

/// Access level per controller feature.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Privilege {
    pub license: i32,
    pub global_dashboard: i32,
    pub dashboard: i32,
    pub devices: i32,
    pub adopt: i32,
    pub global_log: i32,
    pub log: i32,
    pub license_bind: i32,
    pub users: i32,
    pub roles: i32,
    pub saml_users: i32,
    pub saml_roles: i32,
    pub saml_ssos: i32,
    pub global_setting: i32,
    pub export_data: i32,
    pub global_export_data: i32,
    pub export_global_log: i32,
    pub hotspot: i32,
    pub statics: i32,
    pub map: i32,
    pub clients: i32,
    pub insight: i32,
    pub report: i32,
    pub network: i32,
    pub device_account: i32,
    pub anomaly: i32,
    pub analyze: i32,
    pub site_analyze: i32,
}

pub type RoleListResponse = ApiResponse<Vec<Role>>;
pub type RoleInfoResponse = ApiResponse<Role>;

impl OmadaClient {
    pub async fn get_role_list(&self) -> Result<RoleListResponse> {
        let request = RequestTemplate::get(self.api_url(&["roles"]));
        self.execute(&request).await
    }

    pub async fn get_role_info(&self, role_id: &str) -> Result<RoleInfoResponse> {
        let request = RequestTemplate::get(self.api_url(&["roles", role_id]));
        self.execute(&request).await
    }
}
