//! Recording sender double

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use rostrum_application::ports::{HttpSender, TransportError};
use rostrum_domain::{ApiRequest, ApiResponse};

/// Sender double that records every dispatched request and replays canned
/// outcomes.
///
/// Scripted outcomes are consumed in order; once the script is exhausted
/// (or when none was given) every send answers with the fallback response.
/// Interior state is behind a `Mutex` only to satisfy the port's
/// `Send + Sync` bound; scenarios drive one send at a time.
pub struct FakeSender {
    script: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    fallback: ApiResponse,
    sent: Mutex<Vec<ApiRequest>>,
}

impl FakeSender {
    /// Creates a fake that answers every request with `200` and an empty
    /// body.
    #[must_use]
    pub fn new() -> Self {
        Self::returning(ApiResponse::new(200, ""))
    }

    /// Creates a fake that answers every request with the given response.
    #[must_use]
    pub fn returning(response: ApiResponse) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: response,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Creates a fake that replays the given outcomes in order, then falls
    /// back to `200` with an empty body.
    #[must_use]
    pub fn with_outcomes(outcomes: Vec<Result<ApiResponse, TransportError>>) -> Self {
        Self {
            script: Mutex::new(outcomes.into()),
            fallback: ApiResponse::new(200, ""),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Returns the most recently dispatched request, if any.
    #[must_use]
    pub fn last_sent(&self) -> Option<ApiRequest> {
        self.sent.lock().expect("lock poisoned").last().cloned()
    }

    /// Returns every dispatched request, in dispatch order.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.lock().expect("lock poisoned").clone()
    }

    /// Returns how many requests were dispatched.
    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().expect("lock poisoned").len()
    }
}

impl Default for FakeSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpSender for FakeSender {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.sent.lock().expect("lock poisoned").push(request);
        self.script
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_records_requests_in_order() {
        let fake = FakeSender::new();

        fake.send(ApiRequest::get("https://example.test/a"))
            .await
            .expect("fake answers");
        fake.send(ApiRequest::get("https://example.test/b"))
            .await
            .expect("fake answers");

        let urls: Vec<_> = fake.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["https://example.test/a", "https://example.test/b"]);
    }

    #[tokio::test]
    async fn test_returning_answers_every_request() {
        let fake = FakeSender::returning(ApiResponse::new(201, "created"));

        let first = fake
            .send(ApiRequest::get("https://example.test"))
            .await
            .expect("fake answers");
        let second = fake
            .send(ApiRequest::get("https://example.test"))
            .await
            .expect("fake answers");

        assert_eq!(first.status, 201);
        assert_eq!(second.body, "created");
    }

    #[tokio::test]
    async fn test_scripted_outcomes_replay_then_fall_back() {
        let fake = FakeSender::with_outcomes(vec![
            Ok(ApiResponse::new(200, "scripted")),
            Err(TransportError::Connection("refused".to_string())),
        ]);

        let first = fake
            .send(ApiRequest::get("https://example.test"))
            .await
            .expect("scripted success");
        assert_eq!(first.body, "scripted");

        let second = fake.send(ApiRequest::get("https://example.test")).await;
        assert!(matches!(second, Err(TransportError::Connection(_))));

        let third = fake
            .send(ApiRequest::get("https://example.test"))
            .await
            .expect("fallback");
        assert_eq!(third.status, 200);
    }
}
