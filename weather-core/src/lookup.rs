//! The lookup component: interaction state plus the submit operation.
//!
//! State machine: `Idle → Loading → {Success, Failed}`, re-entering
//! `Loading` on every non-empty submission.

use crate::{error::LookupError, model::WeatherResult, provider::WeatherProvider};

/// Everything a front end needs to render the widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub query: String,
    pub result: Option<WeatherResult>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failed,
}

impl InteractionState {
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error_message.is_some() {
            Phase::Failed
        } else if self.result.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}

/// Handle for one issued request. Only the most recent ticket may complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    query: String,
}

impl RequestTicket {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug)]
pub struct WeatherLookup<P> {
    provider: P,
    state: InteractionState,
    issued: u64,
}

impl<P: WeatherProvider> WeatherLookup<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: InteractionState::default(),
            issued: 0,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Start a request for the current query.
    ///
    /// Returns `None` without touching state when the query is empty.
    pub fn begin_request(&mut self) -> Option<RequestTicket> {
        if self.state.query.is_empty() {
            return None;
        }

        self.issued += 1;
        self.state.is_loading = true;
        self.state.result = None;
        self.state.error_message = None;

        Some(RequestTicket {
            seq: self.issued,
            query: self.state.query.clone(),
        })
    }

    /// Apply the outcome of a request. Returns `false` if the ticket was
    /// superseded by a later `begin_request`, in which case state is untouched.
    pub fn complete_request(
        &mut self,
        ticket: &RequestTicket,
        outcome: Result<WeatherResult, LookupError>,
    ) -> bool {
        if ticket.seq != self.issued {
            tracing::debug!(
                stale = ticket.seq,
                latest = self.issued,
                query = %ticket.query,
                "discarding superseded weather response"
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                self.state.result = Some(result);
                self.state.error_message = None;
            }
            Err(err) => {
                tracing::warn!(query = %ticket.query, error = %err, "weather lookup failed");
                self.state.result = None;
                self.state.error_message = Some(err.to_string());
            }
        }
        self.state.is_loading = false;
        true
    }

    /// Fetch weather for the current query and store the outcome.
    pub async fn submit_query(&mut self) {
        let Some(ticket) = self.begin_request() else {
            return;
        };

        let outcome = self.provider.current_weather(ticket.query()).await;
        self.complete_request(&ticket, outcome);
    }
}
