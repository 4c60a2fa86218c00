//! Background task runtime.
//!
//! Every asynchronous boundary in the crate goes through [`submit`], which
//! runs the closure on its own thread and hands back a [`TaskHandle`]. The
//! handle is the only link to the work: dropping it detaches the task (it
//! keeps running), waiting on it surfaces the task's result, and its numeric
//! id is what the CLI prints for external status queries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use crossbeam_channel::{bounded, Receiver, TryRecvError};

use crate::GrantError;

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to one background unit of work.
pub struct TaskHandle {
    id: u64,
    done: Receiver<Result<(), GrantError>>,
}

impl TaskHandle {
    /// Identifier printed to the operator; unique within the process.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Block until the task finishes and return its result.
    ///
    /// A task whose thread panicked before reporting is surfaced as
    /// [`GrantError::TaskPanicked`].
    pub fn wait(self) -> Result<(), GrantError> {
        match self.done.recv() {
            Ok(result) => result,
            Err(_) => Err(GrantError::TaskPanicked { task_id: self.id }),
        }
    }

    /// Non-blocking poll: `None` while the task is still running.
    pub fn try_wait(&self) -> Option<Result<(), GrantError>> {
        match self.done.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(GrantError::TaskPanicked { task_id: self.id })),
        }
    }
}

/// Run `work` on a freshly spawned thread and return its handle immediately.
pub fn submit<F>(work: F) -> TaskHandle
where
    F: FnOnce() -> Result<(), GrantError> + Send + 'static,
{
    let id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    let (sender, done) = bounded(1);
    thread::Builder::new()
        .name(format!("lakegrant-task-{}", id))
        .spawn(move || {
            // A panic inside `work` drops the sender, which the handle reads
            // back as TaskPanicked.
            let _ = sender.send(work());
        })
        .expect("failed to spawn background task thread");
    TaskHandle { id, done }
}
