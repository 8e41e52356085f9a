//! BDD step definitions for the machines feature

use cucumber::{given, then, when};
use serde_json::json;

use protek::types::MachineDetail;

use crate::world::{ProtekWorld, StubReply};

fn machines(world: &ProtekWorld) -> &Vec<MachineDetail> {
    match world.machines.as_ref().expect("machines not requested") {
        Ok(machines) => machines,
        Err(e) => panic!("machines request failed: {}", e),
    }
}

#[given(expr = "the machines endpoint returns a machine with id {int} and no asset code")]
fn machine_without_asset_code(world: &mut ProtekWorld, id: i64) {
    let body = json!([{ "id": id, "name": "Press" }]);
    world.route("/machines", StubReply::json(body.to_string()));
}

#[given(expr = "the machines endpoint returns machine {string} with status {string}")]
fn machine_with_status(world: &mut ProtekWorld, aset_id: String, status: String) {
    let body = json!([{
        "id": 1,
        "aset_id": aset_id,
        "name": "CNC Grinder 01",
        "status": status,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-02T00:00:00Z"
    }]);
    world.route("/machines", StubReply::json(body.to_string()));
}

#[given(expr = "the machines endpoint fails with status {int}")]
fn machines_fail(world: &mut ProtekWorld, status: u16) {
    world.route(
        "/machines",
        StubReply::Respond {
            status,
            body: "Bad Gateway".to_string(),
        },
    );
}

#[when("the machines are requested")]
async fn request_machines(world: &mut ProtekWorld) {
    let client = world.client();
    world.machines = Some(client.machines().await);
}

#[then(expr = "machine {int} should have asset code {string}")]
fn machine_asset_code(world: &mut ProtekWorld, position: usize, aset_id: String) {
    assert_eq!(machines(world)[position - 1].aset_id, aset_id);
}

#[then(expr = "machine {int} should have status {string}")]
fn machine_status(world: &mut ProtekWorld, position: usize, status: String) {
    assert_eq!(machines(world)[position - 1].status.as_str(), status);
}

#[then(expr = "machine {int} should have empty timestamps")]
fn machine_empty_timestamps(world: &mut ProtekWorld, position: usize) {
    let machine = &machines(world)[position - 1];
    assert!(machine.created_at.is_empty());
    assert!(machine.updated_at.is_empty());
}

#[then(expr = "the machines request should fail with status {int}")]
fn machines_request_fails(world: &mut ProtekWorld, expected: u16) {
    match world.machines.as_ref().expect("machines not requested") {
        Err(protek::ProtekError::Status { status, .. }) => assert_eq!(*status, expected),
        other => panic!("expected status error, got {:?}", other),
    }
}
