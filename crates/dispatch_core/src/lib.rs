pub mod ack;
pub mod directory;
pub mod fleet;
pub mod geo;
pub mod history;
pub mod movement;
pub mod ranking;
pub mod scenario;
pub mod status;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
