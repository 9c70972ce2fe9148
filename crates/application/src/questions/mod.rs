//! Questions over the API-calling capability

mod last_response;

pub use last_response::{LastResponse, LastResponseContent, LastResponseRaw};
