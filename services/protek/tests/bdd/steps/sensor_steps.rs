//! BDD step definitions for the sensor history feature

use cucumber::{given, then, when};
use serde_json::json;

use crate::world::{ProtekWorld, StubReply};

#[given(expr = "machine {string} has {int} sensor reading(s)")]
fn machine_has_readings(world: &mut ProtekWorld, aset_id: String, count: usize) {
    let readings: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "machineId": 1,
                "timestamp": format!("2025-01-01T00:0{}:00Z", i % 10),
                "air_temperature_k": 298.0 + i as f64,
                "process_temperature_k": 308.0 + i as f64,
                "rotational_speed_rpm": 1500 + i,
                "torque_nm": 40.0,
                "tool_wear_min": i * 2
            })
        })
        .collect();
    world.route(
        &format!("/machines/{}/history", aset_id),
        StubReply::json(serde_json::Value::from(readings).to_string()),
    );
}

#[when(expr = "the sensor history for {string} is requested")]
async fn request_history(world: &mut ProtekWorld, aset_id: String) {
    let client = world.client();
    world.history = Some(client.history(&aset_id).await);
}

#[when(expr = "the sensor data for {string} is requested")]
async fn request_sensor_data(world: &mut ProtekWorld, aset_id: String) {
    let client = world.client();
    world.sensor_data = Some(client.sensor_data(&aset_id).await);
}

#[then(expr = "there should be {int} history point(s)")]
fn history_count(world: &mut ProtekWorld, count: usize) {
    let history = world
        .history
        .as_ref()
        .expect("history not requested")
        .as_ref()
        .expect("history request failed");
    assert_eq!(history.len(), count);
}

#[then(expr = "history point ids should run from {int} to {int}")]
fn history_ids(world: &mut ProtekWorld, first: usize, last: usize) {
    let history = world
        .history
        .as_ref()
        .expect("history not requested")
        .as_ref()
        .expect("history request failed");
    let ids: Vec<usize> = history.iter().map(|p| p.id).collect();
    assert_eq!(ids, (first..=last).collect::<Vec<_>>());
}

#[then(expr = "there should be {int} sensor row(s) numbered from {int}")]
fn sensor_rows(world: &mut ProtekWorld, count: usize, first: usize) {
    let rows = world
        .sensor_data
        .as_ref()
        .expect("sensor data not requested")
        .as_ref()
        .expect("sensor data request failed");
    assert_eq!(rows.len(), count);
    for (offset, row) in rows.iter().enumerate() {
        assert_eq!(row.id, first + offset);
    }
}

#[then(expr = "every sensor row should have type {string}")]
fn sensor_row_type(world: &mut ProtekWorld, kind: String) {
    let rows = world
        .sensor_data
        .as_ref()
        .expect("sensor data not requested")
        .as_ref()
        .expect("sensor data request failed");
    assert!(rows.iter().all(|row| row.kind == kind));
}

#[then("the sensor history request should fail")]
fn history_fails(world: &mut ProtekWorld) {
    let result = world.history.as_ref().expect("history not requested");
    assert!(result.is_err(), "expected failure, got {:?}", result);
}
