//! Background planning runs.
//!
//! A run is not cancellable: it always finishes or hits its iteration cap.
//! A caller that loses interest drops the [`PlanJob`], which discards the
//! result and leaves the worker to finish on its own.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::error::RoutingError;
use crate::models::Solution;
use crate::planner::Planner;

/// A finished run, with the planner handed back for cost reporting.
#[derive(Debug)]
pub struct CompletedPlan {
    pub planner: Planner,
    pub solution: Solution,
}

/// Progress of a background run.
#[derive(Debug)]
pub enum JobStatus {
    Running,
    Finished(Result<CompletedPlan, RoutingError>),
}

/// A planning run executing on a worker thread.
pub struct PlanJob {
    receiver: Receiver<Result<CompletedPlan, RoutingError>>,
    handle: Option<JoinHandle<()>>,
}

impl PlanJob {
    /// Moves `planner` onto a worker thread and starts planning.
    pub fn spawn(mut planner: Planner) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::spawn(move || {
            let result = planner
                .plan()
                .map(|solution| CompletedPlan { planner, solution })
                .map_err(RoutingError::from);
            // receiver gone means the caller stopped polling
            let _ = sender.send(result);
        });
        Self {
            receiver,
            handle: Some(handle),
        }
    }

    /// Checks for completion without blocking.
    ///
    /// Returns [`JobStatus::Finished`] at most once; later calls report a
    /// [`RoutingError::WorkerFailed`].
    pub fn poll(&mut self) -> JobStatus {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.join();
                JobStatus::Finished(result)
            }
            Err(TryRecvError::Empty) => JobStatus::Running,
            Err(TryRecvError::Disconnected) => {
                self.join();
                JobStatus::Finished(Err(RoutingError::WorkerFailed))
            }
        }
    }

    /// Polls every `interval` until the run finishes, calling `on_tick`
    /// while it is still running.
    pub fn wait<F: FnMut()>(
        mut self,
        interval: Duration,
        mut on_tick: F,
    ) -> Result<CompletedPlan, RoutingError> {
        loop {
            match self.poll() {
                JobStatus::Finished(result) => return result,
                JobStatus::Running => {
                    on_tick();
                    thread::sleep(interval);
                }
            }
        }
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                debug!("planning worker panicked");
            }
        }
    }
}
