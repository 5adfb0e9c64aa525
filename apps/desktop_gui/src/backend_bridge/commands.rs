//! Backend commands queued from UI to the backend worker.

use client_core::SubmissionInput;

pub enum BackendCommand {
    Generate { input: SubmissionInput },
}
