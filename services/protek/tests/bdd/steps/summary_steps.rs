//! BDD step definitions for the dashboard summary feature

use cucumber::{given, then, when};
use serde_json::json;

use crate::world::{ProtekWorld, StubReply};

fn alert_list(count: usize) -> String {
    let alerts: Vec<_> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "machine_id": 1,
                "message": format!("Alert {}", id),
                "severity": "warning",
                "timestamp": "2025-01-01T00:00:00Z"
            })
        })
        .collect();
    serde_json::Value::from(alerts).to_string()
}

#[given(
    expr = "the backend reports stats with {int} machines, {int} critical, {int} alerts today and health {int}"
)]
fn stats_reported(world: &mut ProtekWorld, total: u64, critical: u64, today: u64, health: u64) {
    let body = json!({
        "status": "success",
        "summary": {
            "totalMachines": total,
            "criticalMachines": critical,
            "todaysAlerts": today,
            "systemHealth": health
        }
    });
    world.route("/dashboard/stats", StubReply::json(body.to_string()));
}

#[given("the backend reports stats without a summary")]
fn stats_without_summary(world: &mut ProtekWorld) {
    world.route("/dashboard/stats", StubReply::json(r#"{"status": "success"}"#));
}

#[given("the stats endpoint is unreachable")]
fn stats_unreachable(world: &mut ProtekWorld) {
    world.route("/dashboard/stats", StubReply::Unreachable);
}

#[given(expr = "the backend lists {int} alerts")]
fn backend_lists_alerts(world: &mut ProtekWorld, count: usize) {
    world.route("/alerts", StubReply::json(alert_list(count)));
}

#[given(expr = "the alerts endpoint fails with status {int}")]
fn alerts_fail_with_status(world: &mut ProtekWorld, status: u16) {
    world.route(
        "/alerts",
        StubReply::Respond {
            status,
            body: "Internal Server Error".to_string(),
        },
    );
}

#[given("the alerts endpoint is unreachable")]
fn alerts_unreachable(world: &mut ProtekWorld) {
    world.route("/alerts", StubReply::Unreachable);
}

#[when("the dashboard summary is requested")]
async fn request_summary(world: &mut ProtekWorld) {
    let client = world.client();
    world.summary = Some(client.summary().await);
}

#[then(
    expr = "the summary should report {int} machines, {int} critical, {int} alerts today and health {int}"
)]
fn summary_reports(world: &mut ProtekWorld, total: u64, critical: u64, today: u64, health: u64) {
    let summary = match world.summary.as_ref().expect("summary not requested") {
        Ok(summary) => &summary.summary,
        Err(e) => panic!("summary request failed: {}", e),
    };
    assert_eq!(summary.total_machines, total);
    assert_eq!(summary.critical_machines, critical);
    assert_eq!(summary.todays_alerts, today);
    assert_eq!(summary.system_health, health as f64);
}

#[then(expr = "the summary should contain {int} recent alert(s)")]
fn summary_recent_alerts(world: &mut ProtekWorld, count: usize) {
    let summary = match world.summary.as_ref().expect("summary not requested") {
        Ok(summary) => summary,
        Err(e) => panic!("summary request failed: {}", e),
    };
    assert_eq!(summary.recent_alerts.len(), count);
}

#[then("the summary request should fail")]
fn summary_fails(world: &mut ProtekWorld) {
    let result = world.summary.as_ref().expect("summary not requested");
    assert!(result.is_err(), "expected failure, got {:?}", result);
}
