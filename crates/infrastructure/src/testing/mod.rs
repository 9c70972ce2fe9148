//! Test doubles for the transport port

mod fake_sender;

pub use fake_sender::FakeSender;
