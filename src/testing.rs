//! Test doubles shared by the component tests.

use crate::api::{
    ApiError, CandidatesResponse, CommandStatus, HarvesterApi, RunStatus, CANDIDATES_PATH,
    START_PATH, STATUS_PATH, STOP_PATH,
};
use crate::notify::Scheduler;
use async_trait::async_trait;
use std::cell::RefCell;
use std::time::Duration;

/// Scripted reply for one endpoint.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    /// Non-2xx with this status code.
    Fail(u16),
    /// 2xx with a body that is not the expected JSON.
    Malformed,
}

impl<T: Clone> Reply<T> {
    fn produce(&self, endpoint: &'static str) -> Result<T, ApiError> {
        match self {
            Reply::Ok(v) => Ok(v.clone()),
            Reply::Fail(status) => Err(ApiError::Status {
                endpoint,
                status: *status,
            }),
            Reply::Malformed => {
                let source = serde_json::from_str::<serde_json::Value>("<html>")
                    .expect_err("not json");
                Err(ApiError::Decode { endpoint, source })
            }
        }
    }
}

pub struct MockApi {
    pub start: RefCell<Reply<CommandStatus>>,
    pub stop: RefCell<Reply<CommandStatus>>,
    pub status: RefCell<Reply<RunStatus>>,
    pub candidates: RefCell<Reply<CandidatesResponse>>,
    calls: RefCell<Vec<&'static str>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            start: RefCell::new(Reply::Fail(503)),
            stop: RefCell::new(Reply::Fail(503)),
            status: RefCell::new(Reply::Fail(503)),
            candidates: RefCell::new(Reply::Fail(503)),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, endpoint: &'static str) {
        self.calls.borrow_mut().push(endpoint);
    }
}

#[async_trait(?Send)]
impl HarvesterApi for MockApi {
    async fn start(&self) -> Result<CommandStatus, ApiError> {
        self.record(START_PATH);
        self.start.borrow().produce(START_PATH)
    }

    async fn stop(&self) -> Result<CommandStatus, ApiError> {
        self.record(STOP_PATH);
        self.stop.borrow().produce(STOP_PATH)
    }

    async fn status(&self) -> Result<RunStatus, ApiError> {
        self.record(STATUS_PATH);
        self.status.borrow().produce(STATUS_PATH)
    }

    async fn candidates(&self) -> Result<CandidatesResponse, ApiError> {
        self.record(CANDIDATES_PATH);
        self.candidates.borrow().produce(CANDIDATES_PATH)
    }
}

/// Collects scheduled tasks; tests decide when time passes.
#[derive(Default)]
pub struct ManualScheduler {
    tasks: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    pub fn delays(&self) -> Vec<Duration> {
        self.tasks.borrow().iter().map(|(d, _)| *d).collect()
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn run_all(&self) {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.tasks.borrow_mut().push((delay, task));
    }
}

pub fn run_status(running: bool) -> RunStatus {
    RunStatus {
        running,
        candidates_found: 0,
        transactions_sent: 0,
        last_run: None,
        dry_run: None,
    }
}
