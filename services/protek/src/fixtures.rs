//! Offline dataset for development without a backend
//!
//! Shaped exactly like normalized client output. Timestamps are relative to
//! the `now` passed in so that "recent" alerts stay recent.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    Alert, AlertMachine, DashboardSummary, MachineDetail, MachineStatus, Severity, SummaryStats,
    TrendDataPoint,
};

/// Fleet health reported by the fixture summary
pub const FIXTURE_SYSTEM_HEALTH: f64 = 82.0;

/// Machine id carried by trend points that describe the whole fleet
pub const FLEET_MACHINE_ID: &str = "ALL";

const MACHINES: [(i64, &str, &str, MachineStatus); 5] = [
    (1, "M-14850", "CNC Grinder 01", MachineStatus::Critical),
    (2, "M-15200", "Lathe Machine 02", MachineStatus::Warning),
    (3, "M-14900", "Drill Press 03", MachineStatus::Healthy),
    (4, "M-15500", "Milling Machine 04", MachineStatus::Healthy),
    (5, "M-16100", "Assembly Robot 05", MachineStatus::Offline),
];

// (id, message, severity, asset code, minutes ago)
const ALERTS: [(i64, &str, Severity, &str, i64); 3] = [
    (1, "Tool Wear Failure", Severity::Critical, "M-14850", 30),
    (2, "Overheat detected", Severity::Warning, "M-15200", 60),
    (3, "Power fluctuation", Severity::Info, "M-14900", 120),
];

const HEALTH_TREND: [(&str, f64); 6] = [
    ("00:00", 80.0),
    ("04:00", 78.0),
    ("08:00", 75.0),
    ("12:00", 70.0),
    ("16:00", 65.0),
    ("20:00", 60.0),
];

/// Point on the simple fleet health chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthTrendPoint {
    pub time: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: String,
    pub machine_id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn machine_name(aset_id: &str) -> &'static str {
    MACHINES
        .iter()
        .find(|(_, code, _, _)| *code == aset_id)
        .map(|(_, _, name, _)| *name)
        .unwrap_or("Unknown Machine")
}

pub fn machines(now: DateTime<Utc>) -> Vec<MachineDetail> {
    let stamp = iso(now);
    MACHINES
        .iter()
        .map(|(id, aset_id, name, status)| MachineDetail {
            id: *id,
            aset_id: aset_id.to_string(),
            name: name.to_string(),
            status: status.clone(),
            created_at: stamp.clone(),
            updated_at: stamp.clone(),
        })
        .collect()
}

pub fn machine(now: DateTime<Utc>, aset_id: &str) -> Option<MachineDetail> {
    machines(now).into_iter().find(|m| m.aset_id == aset_id)
}

pub fn alerts(now: DateTime<Utc>) -> Vec<Alert> {
    ALERTS
        .iter()
        .map(|(id, message, severity, aset_id, minutes_ago)| Alert {
            id: *id,
            message: message.to_string(),
            severity: severity.clone(),
            timestamp: iso(now - Duration::minutes(*minutes_ago)),
            machine: AlertMachine {
                name: machine_name(aset_id).to_string(),
                aset_id: aset_id.to_string(),
            },
        })
        .collect()
}

pub fn dashboard_summary(now: DateTime<Utc>) -> DashboardSummary {
    let machines = machines(now);
    let alerts = alerts(now);

    DashboardSummary {
        summary: SummaryStats {
            total_machines: machines.len() as u64,
            critical_machines: machines
                .iter()
                .filter(|m| m.status == MachineStatus::Critical)
                .count() as u64,
            todays_alerts: alerts.len() as u64,
            system_health: FIXTURE_SYSTEM_HEALTH,
        },
        recent_alerts: alerts,
    }
}

pub fn health_trend() -> Vec<HealthTrendPoint> {
    HEALTH_TREND
        .iter()
        .map(|(time, value)| HealthTrendPoint {
            time: time.to_string(),
            value: *value,
        })
        .collect()
}

/// The health trend shaped like `/dashboard/trend` output
pub fn trend() -> Vec<TrendDataPoint> {
    health_trend()
        .into_iter()
        .map(|point| TrendDataPoint {
            time: point.time,
            health_score: point.value,
            machine_id: FLEET_MACHINE_ID.to_string(),
        })
        .collect()
}

/// Always empty; kept so consumers can render the table
pub fn maintenance_history() -> Vec<MaintenanceRecord> {
    Vec::new()
}
