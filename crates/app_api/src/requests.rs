use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    pub owner_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFuelingRequest {
    pub owner_id: Option<String>,
    pub date: String,
    pub odometer: f64,
    pub price_per_unit_volume: f64,
    pub total_cost: f64,
    pub station: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFuelingRequest {
    pub owner_id: Option<String>,
    pub id: String,
    pub date: String,
    pub odometer: f64,
    pub price_per_unit_volume: f64,
    pub total_cost: f64,
    pub station: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFuelingRequest {
    pub owner_id: Option<String>,
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPutRequest {
    pub default_owner: Option<String>,
}
