//! HTTP request interactions
//!
//! Base-URL resolution happens here, not in the capability: `CallApi::send`
//! dispatches exactly what it is given, while these builders join the
//! capability's base URL with a resource path before sending.

use async_trait::async_trait;

use rostrum_domain::{ApiRequest, HttpMethod};

use crate::call_api::CallApi;
use crate::error::InteractionError;
use crate::screenplay::{Actor, Interaction};

/// Joins a base URL and a resource path with exactly one slash between them.
fn resolve(base_url: &str, resource: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        resource.trim_start_matches('/')
    )
}

async fn send_resource(
    actor: &mut Actor,
    method: HttpMethod,
    resource: &str,
    json_body: Option<&str>,
) -> Result<(), InteractionError> {
    let api = actor.ability_mut::<CallApi>()?;
    let mut request = ApiRequest::new(method, resolve(api.base_url(), resource));
    if let Some(body) = json_body {
        request = request.with_json_body(body);
    }
    api.send(request).await?;
    Ok(())
}

/// Interaction that GETs a resource relative to the capability's base URL.
#[derive(Debug, Clone)]
pub struct Get {
    resource: String,
}

impl Get {
    /// GET the given resource path.
    #[must_use]
    pub fn resource(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }
}

#[async_trait]
impl Interaction for Get {
    async fn perform_as(&self, actor: &mut Actor) -> Result<(), InteractionError> {
        send_resource(actor, HttpMethod::Get, &self.resource, None).await
    }
}

/// Interaction that POSTs to a resource relative to the capability's base URL.
#[derive(Debug, Clone)]
pub struct Post {
    resource: String,
    body: Option<String>,
}

impl Post {
    /// POST to the given resource path, with no body.
    #[must_use]
    pub fn to(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            body: None,
        }
    }

    /// Attaches a JSON body; `Content-Type: application/json` is set on the
    /// outgoing request.
    #[must_use]
    pub fn with_json(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

#[async_trait]
impl Interaction for Post {
    async fn perform_as(&self, actor: &mut Actor) -> Result<(), InteractionError> {
        send_resource(actor, HttpMethod::Post, &self.resource, self.body.as_deref()).await
    }
}

/// Interaction that PUTs to a resource relative to the capability's base URL.
#[derive(Debug, Clone)]
pub struct Put {
    resource: String,
    body: Option<String>,
}

impl Put {
    /// PUT to the given resource path, with no body.
    #[must_use]
    pub fn to(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            body: None,
        }
    }

    /// Attaches a JSON body; `Content-Type: application/json` is set on the
    /// outgoing request.
    #[must_use]
    pub fn with_json(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

#[async_trait]
impl Interaction for Put {
    async fn perform_as(&self, actor: &mut Actor) -> Result<(), InteractionError> {
        send_resource(actor, HttpMethod::Put, &self.resource, self.body.as_deref()).await
    }
}

/// Interaction that DELETEs a resource relative to the capability's base URL.
#[derive(Debug, Clone)]
pub struct Delete {
    resource: String,
}

impl Delete {
    /// DELETE the given resource path.
    #[must_use]
    pub fn from(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }
}

#[async_trait]
impl Interaction for Delete {
    async fn perform_as(&self, actor: &mut Actor) -> Result<(), InteractionError> {
        send_resource(actor, HttpMethod::Delete, &self.resource, None).await
    }
}
