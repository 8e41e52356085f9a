//! Backend-to-frontend normalization
//!
//! Every function here is pure and total: missing or empty backend fields
//! are replaced with defaults, never rejected.

use crate::raw::{DashboardStatsResponse, RawAlert, RawAlertsResponse, RawMachine, RawSensor};
use crate::types::{
    Alert, AlertMachine, MachineDetail, MachineStatus, SensorDataPoint, SensorHistoryPoint,
    SensorMetric, Severity, SummaryStats,
};

/// Alerts shown in the dashboard summary
pub const RECENT_ALERT_LIMIT: usize = 5;

/// Kind reported for readings that carry no product type
pub const DEFAULT_SENSOR_KIND: &str = "SENSOR";

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn map_machine(raw: RawMachine) -> MachineDetail {
    MachineDetail {
        aset_id: non_empty(raw.aset_id).unwrap_or_else(|| raw.id.to_string()),
        id: raw.id,
        name: raw.name.unwrap_or_default(),
        status: non_empty(raw.status)
            .map(MachineStatus::from)
            .unwrap_or(MachineStatus::Healthy),
        created_at: raw.created_at.unwrap_or_default(),
        updated_at: raw.updated_at.unwrap_or_default(),
    }
}

pub fn map_alert(raw: RawAlert) -> Alert {
    let name = non_empty(raw.machine_name).unwrap_or_else(|| {
        let id = raw.machine_id.map(|id| id.to_string()).unwrap_or_default();
        format!("Machine {}", id).trim().to_string()
    });
    let aset_id = non_empty(raw.aset_id).unwrap_or_else(|| {
        raw.machine_id
            .or(raw.id)
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string())
    });

    Alert {
        id: raw.id.unwrap_or_default(),
        message: raw.message.unwrap_or_default(),
        severity: raw.severity.map(Severity::from).unwrap_or(Severity::Info),
        timestamp: raw.timestamp.unwrap_or_default(),
        machine: AlertMachine { name, aset_id },
    }
}

/// Normalize either `/alerts` response shape into a flat list
pub fn map_alerts(data: RawAlertsResponse) -> Vec<Alert> {
    data.into_alerts().into_iter().map(map_alert).collect()
}

/// One typed point per reading, numbered from zero
pub fn map_sensor_data(data: Vec<RawSensor>) -> Vec<SensorDataPoint> {
    data.into_iter()
        .enumerate()
        .map(|(idx, item)| SensorDataPoint {
            id: idx,
            machine_id: item.machine_id.unwrap_or(0),
            kind: non_empty(item.kind).unwrap_or_else(|| DEFAULT_SENSOR_KIND.to_string()),
            air_temperature_k: item.air_temperature_k.unwrap_or(0.0),
            process_temperature_k: item.process_temperature_k.unwrap_or(0.0),
            rotational_speed_rpm: item.rotational_speed_rpm.unwrap_or(0.0),
            torque_nm: item.torque_nm.unwrap_or(0.0),
            tool_wear_min: item.tool_wear_min.unwrap_or(0.0),
            insertion_time: item.timestamp.unwrap_or_default(),
        })
        .collect()
}

/// Five points per reading, one per metric, with id `idx * 5 + offset`
pub fn map_sensor_history(data: Vec<RawSensor>) -> Vec<SensorHistoryPoint> {
    let mut history = Vec::with_capacity(data.len() * SensorMetric::ALL.len());
    for (idx, item) in data.into_iter().enumerate() {
        let machine_id = item.machine_id.unwrap_or(0);
        let timestamp = item.timestamp.unwrap_or_default();
        for metric in SensorMetric::ALL {
            let value = match metric {
                SensorMetric::AirTemp => item.air_temperature_k,
                SensorMetric::ProcessTemp => item.process_temperature_k,
                SensorMetric::Rpm => item.rotational_speed_rpm,
                SensorMetric::Torque => item.torque_nm,
                SensorMetric::ToolWear => item.tool_wear_min,
            }
            .unwrap_or(0.0);
            history.push(SensorHistoryPoint {
                id: idx * SensorMetric::ALL.len() + metric.offset(),
                metric,
                value,
                machine_id,
                timestamp: timestamp.clone(),
            });
        }
    }
    history
}

/// Summary counters from `/dashboard/stats`, all zero when absent
pub fn summary_from_stats(stats: Option<DashboardStatsResponse>) -> SummaryStats {
    stats.and_then(|s| s.summary).unwrap_or_default()
}

/// The first [`RECENT_ALERT_LIMIT`] alerts, in backend order
pub fn recent_alerts(data: RawAlertsResponse) -> Vec<Alert> {
    let mut alerts = map_alerts(data);
    alerts.truncate(RECENT_ALERT_LIMIT);
    alerts
}
