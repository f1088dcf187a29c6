//! In-memory transport for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use super::Transport;
use crate::error::FetchError;

#[derive(Clone, Debug)]
enum Responder {
    Body(String),
    Status(u16),
    Failure(String),
}

/// Transport that answers from registered responders and records requests.
///
/// Locations without a responder fail like an unreachable host. Responders
/// can be swapped through a shared reference, so a navigator that owns the
/// transport can still be pointed at a changed device.
#[derive(Debug, Default)]
pub struct MockTransport {
    responders: RefCell<HashMap<String, Responder>>,
    requests: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `location` with `body`.
    pub fn with_listing(self, location: &str, body: impl Into<String>) -> Self {
        self.set_listing(location, body);
        self
    }

    /// Answer `location` with an HTTP error status.
    pub fn with_status(self, location: &str, status: u16) -> Self {
        self.set_status(location, status);
        self
    }

    /// Fail `location` with a transport error.
    pub fn with_failure(self, location: &str, message: &str) -> Self {
        self.respond(location, Responder::Failure(message.to_string()));
        self
    }

    /// Replace the body served for `location`.
    pub fn set_listing(&self, location: &str, body: impl Into<String>) {
        self.respond(location, Responder::Body(body.into()));
    }

    /// Replace the responder for `location` with an HTTP error status.
    pub fn set_status(&self, location: &str, status: u16) {
        self.respond(location, Responder::Status(status));
    }

    /// Every requested location, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    fn respond(&self, location: &str, responder: Responder) {
        self.responders
            .borrow_mut()
            .insert(location.to_string(), responder);
    }

    fn url(location: &str) -> String {
        format!("mock://documents/{}", location)
    }
}

impl Transport for MockTransport {
    fn request(&self, location: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(location.to_string());

        match self.responders.borrow().get(location) {
            Some(Responder::Body(body)) => Ok(body.clone()),
            Some(Responder::Status(status)) => Err(FetchError::Status {
                url: Self::url(location),
                status: *status,
            }),
            Some(Responder::Failure(message)) => {
                Err(FetchError::transport(Self::url(location), message.clone()))
            }
            None => Err(FetchError::transport(
                Self::url(location),
                "no responder registered",
            )),
        }
    }
}
