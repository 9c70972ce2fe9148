//! HTTP method type

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP methods the interactions and transport adapters work with.
///
/// Requests are built programmatically, so the wire name is only needed
/// for display and for handing the method to the transport; no
/// text-to-method parsing exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method
    #[default]
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP PATCH method
    Patch,
    /// HTTP DELETE method
    Delete,
    /// HTTP HEAD method
    Head,
    /// HTTP OPTIONS method
    Options,
}

impl HttpMethod {
    // Indexed by discriminant; keep in declaration order.
    const WIRE_NAMES: [&'static str; 7] =
        ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

    /// Returns the name the method carries on the wire.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        Self::WIRE_NAMES[self as usize]
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
