//! Rostrum Infrastructure - Transport adapters
//!
//! Implementations of the application-layer ports: the real reqwest-backed
//! sender, and the recording test double that scenarios plug in instead.

pub mod adapters;
pub mod testing;

pub use adapters::ReqwestSender;
pub use testing::FakeSender;
