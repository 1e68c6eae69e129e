//! Outbound requests to the game server and in-flight tracking.
//!
//! The engine never performs I/O. A host turns an [`ApiRequest`] into a fetch
//! call, feeds snapshot responses to
//! [`EngineCore::load_snapshot_json`](crate::engine::EngineCore::load_snapshot_json)
//! and uses a [`RequestTracker`] to keep its controls disabled while busy.
//! Every completion is applied; the last one to arrive wins.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a successful response body contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// A full game snapshot to rebuild the scene from.
    Snapshot,
    /// A position evaluation to display as text.
    Evaluation,
}

/// A request the host can issue against the game server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Current game state.
    State,
    /// Start a new game from `seed`.
    NewGame { seed: String },
    /// Let the server play a random legal move.
    RandomMove,
    /// Let the server's search play a move.
    AiMove,
    /// Evaluate the current position.
    Evaluation,
}

#[derive(Serialize)]
struct NewGameBody<'a> {
    seed: &'a str,
}

impl ApiRequest {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::State | Self::Evaluation => Method::Get,
            Self::NewGame { .. } | Self::RandomMove | Self::AiMove => Method::Post,
        }
    }

    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::State => "/api/state",
            Self::NewGame { .. } => "/api/new",
            Self::RandomMove => "/api/random",
            Self::AiMove => "/api/ai",
            Self::Evaluation => "/api/evaluation",
        }
    }

    /// JSON request body, if the request carries one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::error::Error::Json) if serialization fails.
    pub fn body(&self) -> Result<Option<String>> {
        match self {
            Self::NewGame { seed } => Ok(Some(serde_json::to_string(&NewGameBody { seed })?)),
            _ => Ok(None),
        }
    }

    #[must_use]
    pub fn response_kind(&self) -> ResponseKind {
        match self {
            Self::Evaluation => ResponseKind::Evaluation,
            _ => ResponseKind::Snapshot,
        }
    }

    #[must_use]
    pub fn yields_snapshot(&self) -> bool {
        self.response_kind() == ResponseKind::Snapshot
    }
}

/// Render an evaluation response body as display text.
///
/// A JSON string is shown unquoted; any other JSON value is shown as JSON.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::error::Error::Json) if the body is not JSON.
pub fn evaluation_text(body: &str) -> Result<String> {
    match serde_json::from_str::<serde_json::Value>(body)? {
        serde_json::Value::String(text) => Ok(text),
        other => Ok(other.to_string()),
    }
}

// =============================================================
// RequestTracker
// =============================================================

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Tracks in-flight requests so a host can disable controls while busy.
///
/// Disabling is advisory: completions are applied in arrival order whether
/// or not they are the latest issued.
#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
    in_flight: BTreeSet<Ticket>,
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `request` was sent.
    pub fn begin(&mut self, request: &ApiRequest) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        debug!(ticket = ticket.0, method = %request.method(), path = request.path(), "request issued");
        self.in_flight.insert(ticket);
        ticket
    }

    /// Record that `ticket` completed. Returns whether it was the most
    /// recently issued request.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        self.in_flight.remove(&ticket);
        let latest = ticket.0 == self.issued;
        if !latest {
            debug!(ticket = ticket.0, latest = self.issued, "completion of a superseded request");
        }
        latest
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.in_flight.is_empty()
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}
