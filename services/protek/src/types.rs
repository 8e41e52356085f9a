//! Normalized types handed to dashboard consumers
//!
//! Field names on the wire match what the dashboard frontend expects, which
//! is not always what the backend sends. See [`crate::raw`] for the backend
//! shapes and [`crate::mapping`] for the translation.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Health status of a machine
///
/// Unrecognized values from the backend are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MachineStatus {
    Healthy,
    Warning,
    Critical,
    Offline,
    Other(String),
}

impl MachineStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MachineStatus::Healthy => "HEALTHY",
            MachineStatus::Warning => "WARNING",
            MachineStatus::Critical => "CRITICAL",
            MachineStatus::Offline => "OFFLINE",
            MachineStatus::Other(s) => s,
        }
    }
}

impl From<String> for MachineStatus {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "" | "HEALTHY" => MachineStatus::Healthy,
            "WARNING" => MachineStatus::Warning,
            "CRITICAL" => MachineStatus::Critical,
            "OFFLINE" => MachineStatus::Offline,
            _ => MachineStatus::Other(s),
        }
    }
}

impl From<MachineStatus> for String {
    fn from(status: MachineStatus) -> Self {
        match status {
            MachineStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert urgency
///
/// Always upper-case. An empty value reads as `Info`; anything unrecognized
/// is kept upper-cased in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Info,
    Warning,
    Critical,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Other(s) => s,
        }
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "" | "INFO" => Severity::Info,
            "WARNING" => Severity::Warning,
            "CRITICAL" => Severity::Critical,
            _ => Severity::Other(upper),
        }
    }
}

impl From<&str> for Severity {
    fn from(s: &str) -> Self {
        Severity::from(s.to_string())
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A machine as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineDetail {
    pub id: i64,
    pub aset_id: String,
    pub name: String,
    pub status: MachineStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Machine reference attached to an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMachine {
    pub name: String,
    pub aset_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub message: String,
    pub severity: Severity,
    pub timestamp: String,
    pub machine: AlertMachine,
}

/// One raw sensor reading, typed for tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorDataPoint {
    pub id: usize,
    pub machine_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "air_temperature_K")]
    pub air_temperature_k: f64,
    #[serde(rename = "process_temperature_K")]
    pub process_temperature_k: f64,
    pub rotational_speed_rpm: f64,
    #[serde(rename = "torque_Nm")]
    pub torque_nm: f64,
    pub tool_wear_min: f64,
    pub insertion_time: String,
}

/// The five measurements carried by every sensor reading, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorMetric {
    #[serde(rename = "Air_Temp")]
    AirTemp,
    #[serde(rename = "Process_Temp")]
    ProcessTemp,
    #[serde(rename = "RPM")]
    Rpm,
    Torque,
    #[serde(rename = "Tool_Wear")]
    ToolWear,
}

impl SensorMetric {
    pub const ALL: [SensorMetric; 5] = [
        SensorMetric::AirTemp,
        SensorMetric::ProcessTemp,
        SensorMetric::Rpm,
        SensorMetric::Torque,
        SensorMetric::ToolWear,
    ];

    /// Position of this metric within a reading, starting at 1
    pub fn offset(self) -> usize {
        match self {
            SensorMetric::AirTemp => 1,
            SensorMetric::ProcessTemp => 2,
            SensorMetric::Rpm => 3,
            SensorMetric::Torque => 4,
            SensorMetric::ToolWear => 5,
        }
    }
}

/// One measurement of one reading, flattened for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorHistoryPoint {
    pub id: usize,
    #[serde(rename = "type")]
    pub metric: SensorMetric,
    pub value: f64,
    pub machine_id: i64,
    pub timestamp: String,
}

/// Fleet-wide counters shown in the dashboard header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryStats {
    pub total_machines: u64,
    pub critical_machines: u64,
    pub todays_alerts: u64,
    pub system_health: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub summary: SummaryStats,
    pub recent_alerts: Vec<Alert>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDataPoint {
    pub time: String,
    pub health_score: f64,
    pub machine_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationOutcome {
    Success,
    Error,
}

/// Reply to a simulation start/stop request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub status: SimulationOutcome,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_running: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStatus {
    pub is_running: bool,
}

/// Sensor features submitted for a failure prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<i64>,
    /// Product quality variant (`L`, `M` or `H`)
    #[serde(rename = "type")]
    pub product_type: String,
    pub air_temperature_k: f64,
    pub process_temperature_k: f64,
    pub rotational_speed_rpm: f64,
    pub torque_nm: f64,
    pub tool_wear_min: f64,
}

/// Prediction result, passed through as sent by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictResponse(pub Map<String, Value>);

impl PredictResponse {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Reply from the maintenance assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_match: Option<Vec<DebugMatchItem>>,
}

/// A machine the assistant matched while answering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugMatchItem {
    #[serde(rename = "mesin")]
    pub machine: String,
    #[serde(rename = "kode")]
    pub code: String,
    #[serde(rename = "status_saat_ini")]
    pub current_status: String,
    #[serde(rename = "prediksi_ml")]
    pub prediction: MlPrediction,
}

/// ML output for a matched machine; plain text when no model result exists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MlPrediction {
    Detail(MlPredictionDetail),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlPredictionDetail {
    #[serde(rename = "sisa_umur_rul")]
    pub remaining_useful_life: String,
    #[serde(rename = "risiko_kerusakan")]
    pub failure_risk: String,
    #[serde(rename = "status_prediksi")]
    pub predicted_status: String,
}
