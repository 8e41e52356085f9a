//! REST client for the Protek dashboard backend

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config::ApiConfig;
use crate::io::{HttpClient, HttpResponse, ReqwestHttpClient};
use crate::mapping;
use crate::raw::{DashboardStatsResponse, RawAlertsResponse, RawMachine, RawSensor};
use crate::types::{
    Alert, ChatResponse, DashboardSummary, MachineDetail, PredictPayload, PredictResponse,
    SensorDataPoint, SensorHistoryPoint, SimulationResponse, SimulationStatus, TrendDataPoint,
};

/// Typed access to every backend endpoint the dashboard uses
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created ApiClient for {}", base_url);
        Self { base_url, http }
    }

    /// Client backed by reqwest
    pub fn connect(config: &ApiConfig) -> crate::Result<Self> {
        Ok(Self::new(config, Arc::new(ReqwestHttpClient::new()?)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn decode<T: DeserializeOwned>(url: &str, response: HttpResponse) -> crate::Result<T> {
        if !response.is_success() {
            return Err(crate::ProtekError::Status {
                status: response.status,
                url: url.to_string(),
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> crate::Result<T> {
        let url = self.url(path);
        let response = self.http.get(&url).await?;
        Self::decode(&url, response)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> crate::Result<T> {
        let url = self.url(path);
        let response = self.http.post_json(&url, body).await?;
        Self::decode(&url, response)
    }

    pub async fn start_simulation(&self) -> crate::Result<SimulationResponse> {
        self.post("/simulation/start", None).await
    }

    /// The backend exposes stop as a GET
    pub async fn stop_simulation(&self) -> crate::Result<SimulationResponse> {
        self.get("/simulation/stop").await
    }

    pub async fn simulation_status(&self) -> crate::Result<SimulationStatus> {
        self.get("/simulation/status").await
    }

    /// Stats and the five most recent alerts, fetched in parallel
    ///
    /// A failed alerts request yields an empty alert list. A failed stats
    /// request fails the whole call.
    pub async fn summary(&self) -> crate::Result<DashboardSummary> {
        let (stats, alerts) = tokio::join!(
            self.get::<Option<DashboardStatsResponse>>("/dashboard/stats"),
            self.get::<RawAlertsResponse>("/alerts"),
        );

        let alerts = alerts.unwrap_or_else(|e| {
            tracing::warn!("Alerts unavailable for dashboard summary: {}", e);
            RawAlertsResponse::default()
        });

        Ok(DashboardSummary {
            summary: mapping::summary_from_stats(stats?),
            recent_alerts: mapping::recent_alerts(alerts),
        })
    }

    pub async fn trend(&self) -> crate::Result<Vec<TrendDataPoint>> {
        self.get("/dashboard/trend").await
    }

    pub async fn machines(&self) -> crate::Result<Vec<MachineDetail>> {
        let raw: Vec<RawMachine> = self.get("/machines").await?;
        Ok(raw.into_iter().map(mapping::map_machine).collect())
    }

    pub async fn machine_detail(&self, aset_id: &str) -> crate::Result<MachineDetail> {
        let raw: RawMachine = self.get(&format!("/machines/{}", aset_id)).await?;
        Ok(mapping::map_machine(raw))
    }

    /// Sensor history flattened into per-metric chart points
    pub async fn sensors(&self, aset_id: &str) -> crate::Result<Vec<SensorHistoryPoint>> {
        self.history(aset_id).await
    }

    /// Sensor history as one typed row per reading
    pub async fn sensor_data(&self, aset_id: &str) -> crate::Result<Vec<SensorDataPoint>> {
        let raw = self.raw_history(aset_id).await?;
        Ok(mapping::map_sensor_data(raw))
    }

    pub async fn history(&self, aset_id: &str) -> crate::Result<Vec<SensorHistoryPoint>> {
        let raw = self.raw_history(aset_id).await?;
        Ok(mapping::map_sensor_history(raw))
    }

    async fn raw_history(&self, aset_id: &str) -> crate::Result<Vec<RawSensor>> {
        let raw: Option<Vec<RawSensor>> = self.get(&format!("/machines/{}/history", aset_id)).await?;
        Ok(raw.unwrap_or_default())
    }

    pub async fn alerts(&self) -> crate::Result<Vec<Alert>> {
        let raw: RawAlertsResponse = self.get("/alerts").await?;
        Ok(mapping::map_alerts(raw))
    }

    pub async fn alert_detail(&self, alert_id: i64) -> crate::Result<Alert> {
        self.get(&format!("/alerts/{}", alert_id)).await
    }

    pub async fn predict(&self, payload: &PredictPayload) -> crate::Result<PredictResponse> {
        let body = serde_json::to_value(payload)?;
        self.post("/predict", Some(body)).await
    }

    pub async fn send_message(&self, message: &str) -> crate::Result<ChatResponse> {
        self.post("/chat", Some(json!({ "message": message })))
            .await
    }
}
