use crate::submission::endpoint::SubmissionJob;
use crate::submission::outcome::{AttemptId, Resolution};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

pub struct SubmissionExecutor {
    completion_tx: Sender<Resolution>,
    completion_rx: Receiver<Resolution>,
}

impl SubmissionExecutor {
    pub fn new() -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<Resolution>();
        Self {
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn(&self, attempt: AttemptId, job: SubmissionJob) {
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let outcome = job();
            let _ = completion_tx.send(Resolution { attempt, outcome });
        });
    }

    pub fn drain_ready(&self) -> Vec<Resolution> {
        let mut out = Vec::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(resolution) => out.push(resolution),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

impl Default for SubmissionExecutor {
    fn default() -> Self {
        Self::new()
    }
}
