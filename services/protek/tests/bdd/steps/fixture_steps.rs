//! BDD step definitions for the offline fixture feature

use cucumber::{then, when};

use protek::fixtures;

use crate::world::ProtekWorld;

#[when("the offline dashboard summary is loaded")]
fn load_fixture_summary(world: &mut ProtekWorld) {
    world.fixture_summary = Some(fixtures::dashboard_summary(chrono::Utc::now()));
}

#[then(expr = "the offline summary should count {int} machines and {int} critical")]
fn fixture_counts(world: &mut ProtekWorld, total: u64, critical: u64) {
    let summary = world.fixture_summary.as_ref().expect("fixtures not loaded");
    assert_eq!(summary.summary.total_machines, total);
    assert_eq!(summary.summary.critical_machines, critical);
}

#[then(expr = "the offline summary should list {int} recent alerts, most severe first")]
fn fixture_alerts(world: &mut ProtekWorld, count: usize) {
    let summary = world.fixture_summary.as_ref().expect("fixtures not loaded");
    assert_eq!(summary.recent_alerts.len(), count);
    assert_eq!(summary.recent_alerts[0].severity.as_str(), "CRITICAL");
}
