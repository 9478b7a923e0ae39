use serde::{Deserialize, Serialize};

use crate::api::envelope::{ApiResponse, Page};
use crate::client::request::RequestTemplate;
use crate::client::OmadaClient;
use crate::error::Result;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Site {
    pub site_id: String,
    pub name: String,
    pub region: String,
    pub time_zone: String,
    pub scenario: String,
    pub longitude: f64,
    pub latitude: f64,
    pub address: String,
    #[serde(rename = "type")]
    pub site_type: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeviceAccountSetting {
    pub username: String,
    pub password: String,
}

pub type SiteListResponse = ApiResponse<Page<Site>>;
pub type SiteInfoResponse = ApiResponse<Site>;
pub type ScenarioListResponse = ApiResponse<Vec<String>>;
pub type DeviceAccountSettingResponse = ApiResponse<DeviceAccountSetting>;

impl OmadaClient {
    /// One page of sites, `page` starts at 1.
    pub async fn get_site_list(&self, page: u32) -> Result<SiteListResponse> {
        let request = RequestTemplate::get(self.api_url(&["sites"]))
            .query("pageSize", self.page_size())
            .query("page", page);
        self.execute(&request).await
    }

    pub async fn get_site_info(&self, site_id: &str) -> Result<SiteInfoResponse> {
        let request = RequestTemplate::get(self.api_url(&["sites", site_id]));
        self.execute(&request).await
    }

    /// Scenario names a site can be created with.
    pub async fn get_scenario_list(&self) -> Result<ScenarioListResponse> {
        let request = RequestTemplate::get(self.api_url(&["scenarios"]));
        self.execute(&request).await
    }

    /// Credentials the controller provisions on adopted devices of a site.
    pub async fn get_site_device_account_setting(&self, site_id: &str) -> Result<DeviceAccountSettingResponse> {
        let request = RequestTemplate::get(self.api_url(&["sites", site_id, "device-account"]));
        self.execute(&request).await
    }
}
