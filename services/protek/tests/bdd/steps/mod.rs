//! BDD step definitions for the dashboard client

pub mod fixture_steps;
pub mod machine_steps;
pub mod sensor_steps;
pub mod summary_steps;
