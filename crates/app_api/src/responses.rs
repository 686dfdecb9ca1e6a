use fuel_core::{FuelingRecord, OwnerSummary};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelingsResponse {
    pub owner_id: String,
    pub latest_odometer: f64,
    pub records: Vec<FuelingRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnersResponse {
    pub default_owner: Option<String>,
    pub owners: Vec<OwnerSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub default_owner: Option<String>,
    pub db_path: String,
    pub app_data_dir: String,
}

#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub updated: i64,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: i64,
}

#[derive(Debug, Serialize)]
pub struct ClearedResponse {
    pub cleared: i64,
}
