//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! [`MockClient`] hands out a real [`QueueClient`] whose requests are answered from a list
//! of scripted expectations instead of a running [`QueueActor`](crate::framework::QueueActor).
//! Errors that are hard to provoke with a real actor (a closed channel, a dropped responder)
//! become one line of setup.
//!
//! For lower-level assertions, [`create_mock_client`] returns the client together with the
//! raw receiver, and helpers like [`expect_enqueue`] pull out the next request.

use crate::framework::{FrameworkError, QueueClient, QueueEntity, QueueRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to send back.
enum Expectation<T: QueueEntity> {
    Count(Result<usize, FrameworkError>),
    Enqueue(Result<usize, FrameworkError>),
    Position(T::Id, Result<usize, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    Cancel(T::Id, Result<(), FrameworkError>),
    Snapshot(Result<Vec<T>, FrameworkError>),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (wrong kind or wrong id) panics the background task, which drops the
/// responder, so the caller sees [`FrameworkError::ActorDropped`].
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Order>::new();
/// mock.expect_enqueue().return_ok(1);
/// mock.expect_position(OrderId::from("abc")).return_ok(1);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: QueueEntity> {
    client: QueueClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: QueueEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<QueueRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (QueueRequest::Count { respond_to }, Some(Expectation::Count(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        QueueRequest::Enqueue { respond_to, .. },
                        Some(Expectation::Enqueue(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        QueueRequest::Position { id, respond_to },
                        Some(Expectation::Position(expected, response)),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (QueueRequest::Get { id, respond_to }, Some(Expectation::Get(expected, response)))
                        if id == expected =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (
                        QueueRequest::Cancel { id, respond_to },
                        Some(Expectation::Cancel(expected, response)),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        QueueRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: QueueClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> QueueClient<T> {
        self.client.clone()
    }

    pub fn expect_count(&mut self) -> ResponseBuilder<T, usize> {
        self.builder(Box::new(Expectation::Count))
    }

    pub fn expect_enqueue(&mut self) -> ResponseBuilder<T, usize> {
        self.builder(Box::new(Expectation::Enqueue))
    }

    pub fn expect_position(&mut self, id: T::Id) -> ResponseBuilder<T, usize> {
        self.builder(Box::new(move |response| Expectation::Position(id, response)))
    }

    pub fn expect_get(&mut self, id: T::Id) -> ResponseBuilder<T, Option<T>> {
        self.builder(Box::new(move |response| Expectation::Get(id, response)))
    }

    pub fn expect_cancel(&mut self, id: T::Id) -> ResponseBuilder<T, ()> {
        self.builder(Box::new(move |response| Expectation::Cancel(id, response)))
    }

    pub fn expect_snapshot(&mut self) -> ResponseBuilder<T, Vec<T>> {
        self.builder(Box::new(Expectation::Snapshot))
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("mock expectations poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(&self, wrap: Wrap<T, R>) -> ResponseBuilder<T, R> {
        ResponseBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

impl<T: QueueEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

type Wrap<T, R> = Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>;

/// Finishes an expectation by choosing what the mock answers.
pub struct ResponseBuilder<T: QueueEntity, R> {
    wrap: Wrap<T, R>,
    expectations: Expectations<T>,
}

impl<T: QueueEntity, R> ResponseBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// The test plays the actor: it pulls requests off `receiver`, asserts on them, and
/// answers through the responder. Useful when the payload itself is under test.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: QueueEntity>(
    buffer_size: usize,
) -> (QueueClient<T>, mpsc::Receiver<QueueRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (QueueClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Enqueue request
pub async fn expect_enqueue<T: QueueEntity>(
    receiver: &mut mpsc::Receiver<QueueRequest<T>>,
) -> Option<(T::Create, Response<usize>)> {
    match receiver.recv().await {
        Some(QueueRequest::Enqueue { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Position request
pub async fn expect_position<T: QueueEntity>(
    receiver: &mut mpsc::Receiver<QueueRequest<T>>,
) -> Option<(T::Id, Response<usize>)> {
    match receiver.recv().await {
        Some(QueueRequest::Position { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Cancel request
pub async fn expect_cancel<T: QueueEntity>(
    receiver: &mut mpsc::Receiver<QueueRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(QueueRequest::Cancel { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
