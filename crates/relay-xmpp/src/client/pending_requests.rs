// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::time::Duration;

use minidom::Element;
use tokio::sync::oneshot;
use tokio::time::Instant;
use tracing::error;

use crate::RequestError;

pub(super) const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub(super) type RequestResult = Result<Option<Element>, RequestError>;

/// IQ requests awaiting their response, keyed by the request id.
#[derive(Default)]
pub(super) struct PendingRequests {
    requests: HashMap<String, PendingRequest>,
}

struct PendingRequest {
    sent_at: Instant,
    response: oneshot::Sender<RequestResult>,
}

impl PendingRequests {
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        sent_at: Instant,
    ) -> oneshot::Receiver<RequestResult> {
        let (tx, rx) = oneshot::channel();
        self.requests.insert(
            id.into(),
            PendingRequest {
                sent_at,
                response: tx,
            },
        );
        rx
    }

    pub fn remove(&mut self, id: &str) {
        self.requests.remove(id);
    }

    /// Returns false if no request with `id` is pending.
    pub fn resolve(&mut self, id: &str, result: RequestResult) -> bool {
        let Some(request) = self.requests.remove(id) else {
            return false;
        };
        // The receiver is gone if the caller stopped waiting.
        _ = request.response.send(result);
        true
    }

    pub fn fail_expired(&mut self, now: Instant) {
        let expired = self
            .requests
            .iter()
            .filter(|(_, request)| {
                now.saturating_duration_since(request.sent_at) >= REQUEST_TIMEOUT
            })
            .map(|(id, _)| id.clone())
            .collect::<Vec<_>>();

        for id in expired {
            error!("Request with id '{}' timed out.", id);
            self.resolve(&id, Err(RequestError::TimedOut));
        }
    }

    pub fn fail_all(&mut self) {
        for (_, request) in self.requests.drain() {
            _ = request.response.send(Err(RequestError::Disconnected));
        }
    }
}
