//! Last-response questions
//!
//! Read-only accessors over the body recorded by the actor's `CallApi`
//! ability. The raw question returns the text verbatim; the typed question
//! re-decodes it on every evaluation, so assertions always see the stored
//! text, never a cached value.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::call_api::CallApi;
use crate::error::QuestionError;
use crate::screenplay::{Actor, Question};

/// Factory for last-response questions.
#[derive(Debug, Clone, Copy)]
pub struct LastResponse;

impl LastResponse {
    /// The last response body as raw text.
    #[must_use]
    pub const fn raw() -> LastResponseRaw {
        LastResponseRaw
    }

    /// The last response body decoded into `T`.
    #[must_use]
    pub const fn content<T: DeserializeOwned>() -> LastResponseContent<T> {
        LastResponseContent {
            _shape: PhantomData,
        }
    }
}

/// Question returning the last recorded response body as-is.
#[derive(Debug, Clone, Copy)]
pub struct LastResponseRaw;

impl Question for LastResponseRaw {
    type Answer = String;

    fn answered_by(&self, actor: &Actor) -> Result<String, QuestionError> {
        let api = actor.ability::<CallApi>()?;
        api.last_response()
            .map(ToOwned::to_owned)
            .ok_or(QuestionError::NoResponseYet)
    }
}

/// Question returning the last recorded response body decoded into `T`.
#[derive(Debug, Clone, Copy)]
pub struct LastResponseContent<T> {
    _shape: PhantomData<T>,
}

impl<T: DeserializeOwned> Question for LastResponseContent<T> {
    type Answer = T;

    fn answered_by(&self, actor: &Actor) -> Result<T, QuestionError> {
        let api = actor.ability::<CallApi>()?;
        let content = api.last_response().ok_or(QuestionError::NoResponseYet)?;
        serde_json::from_str(content).map_err(|e| QuestionError::decode(&e))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rostrum_domain::{ApiRequest, ApiResponse};
    use serde::Deserialize;

    use super::*;
    use crate::ports::{HttpSender, TransportError};

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct User {
        id: u64,
        name: String,
    }

    /// Sender double that always answers with a fixed body.
    struct CannedSender {
        body: String,
    }

    #[async_trait]
    impl HttpSender for CannedSender {
        async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, TransportError> {
            Ok(ApiResponse::new(200, self.body.clone()))
        }
    }

    async fn actor_with_recorded_body(body: &str) -> Actor {
        let sender = Arc::new(CannedSender {
            body: body.to_string(),
        });
        let mut api = CallApi::at("https://example.test")
            .expect("valid URL")
            .with_sender(sender);
        api.send(ApiRequest::get("https://example.test/users"))
            .await
            .expect("send succeeds");
        Actor::named("Tara").who_can(api)
    }

    #[tokio::test]
    async fn test_raw_returns_recorded_body_verbatim() {
        let actor = actor_with_recorded_body(r#"{"id":7,"name":"ada"}"#).await;

        let answer = actor.asks(&LastResponse::raw()).expect("body recorded");

        assert_eq!(answer, r#"{"id":7,"name":"ada"}"#);
    }

    #[tokio::test]
    async fn test_content_decodes_recorded_body() {
        let actor = actor_with_recorded_body(r#"{"id":7,"name":"ada"}"#).await;

        let user: User = actor
            .asks(&LastResponse::content::<User>())
            .expect("body decodes");

        assert_eq!(
            user,
            User {
                id: 7,
                name: "ada".to_string()
            }
        );
    }

    #[test]
    fn test_raw_before_any_send_is_no_response_yet() {
        let api = CallApi::at("https://example.test").expect("valid URL");
        let actor = Actor::named("Tara").who_can(api);

        let err = actor.asks(&LastResponse::raw()).unwrap_err();

        assert!(matches!(err, QuestionError::NoResponseYet));
    }

    #[test]
    fn test_content_before_any_send_is_no_response_yet() {
        let api = CallApi::at("https://example.test").expect("valid URL");
        let actor = Actor::named("Tara").who_can(api);

        let err = actor.asks(&LastResponse::content::<User>()).unwrap_err();

        assert!(matches!(err, QuestionError::NoResponseYet));
    }

    #[tokio::test]
    async fn test_content_on_malformed_body_is_a_decode_failure() {
        let actor = actor_with_recorded_body("not json at all").await;

        let err = actor.asks(&LastResponse::content::<User>()).unwrap_err();

        assert!(matches!(err, QuestionError::Decode(_)));
    }

    #[test]
    fn test_question_without_ability_is_missing_ability() {
        let actor = Actor::named("Tara");

        let err = actor.asks(&LastResponse::raw()).unwrap_err();

        assert!(matches!(err, QuestionError::MissingAbility(_)));
    }
}
