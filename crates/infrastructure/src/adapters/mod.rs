//! Port adapters

mod reqwest_sender;

pub use reqwest_sender::ReqwestSender;
