//! Deferred reconciliation jobs.

use log::trace;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// One pending reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileJob {
    pub field: String,
    /// Mark the field dirty right before the pass runs.
    pub force_dirty: bool,
    pub show_max_length_warning: bool,
}

impl ReconcileJob {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            force_dirty: false,
            show_max_length_warning: false,
        }
    }

    pub fn force_dirty(mut self, force_dirty: bool) -> Self {
        self.force_dirty = force_dirty;
        self
    }

    pub fn show_max_length_warning(mut self, show: bool) -> Self {
        self.show_max_length_warning = show;
        self
    }
}

/// Cloneable handle that enqueues jobs. Safe to call from value-change
/// listeners: it only records the job, the pass itself runs later.
#[derive(Debug, Clone)]
pub struct Scheduler {
    tx: UnboundedSender<ReconcileJob>,
}

impl Scheduler {
    pub fn schedule(&self, job: ReconcileJob) {
        trace!("Scheduling pass for {}", job.field);
        if self.tx.send(job).is_err() {
            trace!("Queue closed, job dropped");
        }
    }
}

/// FIFO of pending jobs.
#[derive(Debug)]
pub struct ReconcileQueue {
    tx: UnboundedSender<ReconcileJob>,
    rx: UnboundedReceiver<ReconcileJob>,
}

impl ReconcileQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded_channel();
        Self { tx, rx }
    }

    pub fn scheduler(&self) -> Scheduler {
        Scheduler {
            tx: self.tx.clone(),
        }
    }

    pub fn schedule(&self, job: ReconcileJob) {
        self.scheduler().schedule(job);
    }

    /// Take every job queued so far. Jobs scheduled after this call returns
    /// stay queued for the next drain.
    pub fn drain(&mut self) -> Vec<ReconcileJob> {
        let mut jobs = Vec::new();
        while let Ok(job) = self.rx.try_recv() {
            jobs.push(job);
        }
        jobs
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for ReconcileQueue {
    fn default() -> Self {
        Self::new()
    }
}
