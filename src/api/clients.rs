use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiResponse;
use crate::client::request::RequestTemplate;
use crate::client::OmadaClient;
use crate::error::Result;

/// A device connected to a site.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectedClient {
    pub id: String,
    pub mac: String,
    pub name: String,
    pub host_name: String,
    pub vendor: String,
    pub device_type: String,
    pub device_category: String,
    pub os_name: String,
    pub ip: String,
    pub ipv6_list: Vec<String>,
    pub connect_type: i32,
    pub connect_dev_type: String,
    pub connected_to_wireless_router: bool,
    pub wireless: bool,
    pub ssid: String,
    pub signal_level: i32,
    pub health_score: i32,
    pub signal_rank: i32,
    pub wifi_mode: i32,
    pub ap_name: String,
    pub ap_mac: String,
    pub radio_id: i32,
    pub channel: i32,
    pub rx_rate: i64,
    pub tx_rate: i64,
    pub power_save: bool,
    pub rssi: i32,
    pub snr: i32,
    pub switch_mac: String,
    pub switch_name: String,
    pub gateway_mac: String,
    pub gateway_name: String,
    pub vid: i32,
    pub network_name: String,
    pub dot1x_identity: String,
    pub dot1x_vlan: i32,
    pub port: i32,
    pub lag_id: i32,
    pub activity: i64,
    pub traffic_down: i64,
    pub traffic_up: i64,
    /// seconds
    pub uptime: i64,
    /// unix millis
    pub last_seen: i64,
    pub auth_status: i32,
    pub blocked: bool,
    pub guest: bool,
    pub active: bool,
    pub manager: bool,
    pub ip_setting: IpSetting,
    pub down_packet: i64,
    pub up_packet: i64,
    pub rate_limit: RateLimit,
    pub client_lock_to_ap_setting: ClientLockToApSetting,
    pub support5g2: bool,
    pub multi_link: Vec<MultiLink>,
    pub unit: i32,
    pub standard_port: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IpSetting {
    pub use_fixed_addr: bool,
    pub net_id: String,
    pub ip: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RateLimit {
    pub mode: i32,
    pub rate_limit_profile_id: String,
    pub custom_rate_limit: CustomRateLimit,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomRateLimit {
    pub down_limit: i64,
    pub down_limit_enable: bool,
    pub up_limit: i64,
    pub up_limit_enable: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientLockToApSetting {
    pub enable: bool,
    pub aps: Vec<LockedAp>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LockedAp {
    pub name: String,
    pub mac: String,
}

/// Per radio link of a multi-link client.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MultiLink {
    pub radio_id: i32,
    pub wifi_mode: i32,
    pub channel: i32,
    pub rx_rate: i64,
    pub tx_rate: i64,
    pub power_save: bool,
    pub rssi: i32,
    pub snr: i32,
    pub signal_level: i32,
    pub signal_rank: i32,
    pub up_packet: i64,
    pub down_packet: i64,
    pub traffic_down: i64,
    pub traffic_up: i64,
    pub activity: i64,
    pub signal_level_and_rank: i32,
}

/// Client counters reported next to a client page.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientStat {
    pub total: i32,
    pub wireless: i32,
    pub wired: i32,
    pub num2g: i32,
    pub num5g: i32,
    pub num6g: i32,
    pub num_user: i32,
    pub num_guest: i32,
    pub num_wireless_user: i32,
    pub num_wireless_guest: i32,
    pub num2g_user: i32,
    pub num5g_user: i32,
    pub num6g_user: i32,
    pub num2g_guest: i32,
    pub num5g_guest: i32,
    pub num6g_guest: i32,
    pub poor: i32,
    pub fair: i32,
    pub no_data: i32,
    pub good: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientPage {
    pub total_rows: i64,
    pub current_page: i32,
    pub current_size: i32,
    pub data: Vec<ConnectedClient>,
    pub client_stat: ClientStat,
}

pub type ClientListResponse = ApiResponse<ClientPage>;
pub type ClientInfoResponse = ApiResponse<ConnectedClient>;

impl OmadaClient {
    /// One page of the clients of a site, `page` starts at 1.
    pub async fn get_client_list(&self, site_id: &str, page: u32) -> Result<ClientListResponse> {
        let request = RequestTemplate::get(self.api_url(&["sites", site_id, "clients"]))
            .query("page", page)
            .query("pageSize", self.page_size());
        self.execute(&request).await
    }

    pub async fn get_client_info(&self, site_id: &str, client_mac: &str) -> Result<ClientInfoResponse> {
        let request = RequestTemplate::get(self.api_url(&["sites", site_id, "clients", client_mac]));
        self.execute(&request).await
    }
}
