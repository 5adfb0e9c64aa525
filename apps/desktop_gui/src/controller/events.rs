//! Events flowing from the backend worker to the UI thread.

use client_core::SubmissionInput;
use shared::domain::ComboRecord;

pub enum UiEvent {
    /// A generate request completed. `combos` may be empty; that is a
    /// distinct success outcome, not a failure.
    CombosGenerated {
        input: SubmissionInput,
        combos: Vec<ComboRecord>,
    },
    /// Transport failure, error status, or malformed payload. The message
    /// is already user-presentable.
    GenerateFailed(String),
}
