// Scripted in-memory transport for unit tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use libris_api::{Error, Transport};
use serde_json::Value;
use tokio::sync::oneshot;

type Reply = Result<Value, Error>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Get(String),
    Post(String, Value),
}

/// Answers requests from per-method FIFO queues and records every call.
///
/// Deferred replies stay pending until the test sends through the returned
/// `oneshot::Sender`, which lets tests choose resolution order.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    gets: Mutex<VecDeque<Scripted>>,
    posts: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn network(message: &str) -> Error {
        Error::Network {
            message: message.into(),
        }
    }

    pub(crate) fn push_get(&self, reply: Reply) {
        self.gets.lock().unwrap().push_back(Scripted::Ready(reply));
    }

    pub(crate) fn push_post(&self, reply: Reply) {
        self.posts.lock().unwrap().push_back(Scripted::Ready(reply));
    }

    pub(crate) fn defer_get(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.gets.lock().unwrap().push_back(Scripted::Deferred(rx));
        tx
    }

    pub(crate) fn defer_post(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.posts.lock().unwrap().push_back(Scripted::Deferred(rx));
        tx
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn get_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Get(_)))
            .count()
    }

    async fn answer(next: Option<Scripted>) -> Reply {
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx.await.unwrap(),
            None => Err(Self::network("no scripted reply")),
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<Value, Error> {
        let next = self.gets.lock().unwrap().pop_front();
        self.calls.lock().unwrap().push(Call::Get(path.into()));
        Self::answer(next).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, Error> {
        let next = self.posts.lock().unwrap().pop_front();
        self.calls
            .lock()
            .unwrap()
            .push(Call::Post(path.into(), body.clone()));
        Self::answer(next).await
    }
}
