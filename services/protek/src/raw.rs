//! Response shapes as the backend actually sends them
//!
//! Almost everything is optional here; the backend omits fields freely and
//! sends `null` for empty columns.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::SummaryStats;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMachine {
    pub id: i64,
    pub aset_id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAlert {
    pub id: Option<i64>,
    pub machine_id: Option<i64>,
    pub machine_name: Option<String>,
    pub aset_id: Option<String>,
    pub message: Option<String>,
    pub severity: Option<String>,
    pub timestamp: Option<String>,
}

/// `/alerts` answers either with a bare list or with `{"alerts": [...]}`
///
/// Bodies that are neither (`null`, strings, `{"alerts": "..."}`) are
/// accepted and treated as no alerts. A malformed element inside a list is
/// a decode error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum RawAlertsResponse {
    List(Vec<RawAlert>),
    Wrapped { alerts: Option<Vec<RawAlert>> },
    Unrecognized(Value),
}

impl TryFrom<Value> for RawAlertsResponse {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(RawAlertsResponse::List(serde_json::from_value(
                Value::Array(items),
            )?)),
            Value::Object(mut body) => match body.remove("alerts") {
                Some(Value::Array(items)) => Ok(RawAlertsResponse::Wrapped {
                    alerts: Some(serde_json::from_value(Value::Array(items))?),
                }),
                None | Some(Value::Null) => Ok(RawAlertsResponse::Wrapped { alerts: None }),
                Some(other) => Ok(RawAlertsResponse::Unrecognized(other)),
            },
            other => Ok(RawAlertsResponse::Unrecognized(other)),
        }
    }
}

impl Default for RawAlertsResponse {
    fn default() -> Self {
        RawAlertsResponse::List(Vec::new())
    }
}

impl RawAlertsResponse {
    pub fn into_alerts(self) -> Vec<RawAlert> {
        match self {
            RawAlertsResponse::List(alerts) => alerts,
            RawAlertsResponse::Wrapped { alerts } => alerts.unwrap_or_default(),
            RawAlertsResponse::Unrecognized(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSensor {
    #[serde(rename = "machineId")]
    pub machine_id: Option<i64>,
    pub timestamp: Option<String>,
    pub air_temperature_k: Option<f64>,
    pub process_temperature_k: Option<f64>,
    pub rotational_speed_rpm: Option<f64>,
    pub torque_nm: Option<f64>,
    pub tool_wear_min: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Body of `/dashboard/stats`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStatsResponse {
    pub status: Option<String>,
    pub summary: Option<SummaryStats>,
}
