use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("unknown notification event kind: {0:?} (expected one of progressing, completed, warning, error)")]
    InvalidEventKind(String),

    #[error("pipeline listing failed: {0}")]
    ListFailed(String),

    #[error("pipeline creation failed: {0}")]
    CreateFailed(String),

    #[error("pipeline update failed: {0}")]
    UpdateFailed(String),

    #[error("pipeline deletion failed: {0}")]
    DeleteFailed(String),

    #[error("pipeline {name:?} was created but did not appear in a subsequent listing")]
    CreatedButNotFound { name: String },
}

/// Walk the full error chain and join all causes into one string.
///
/// AWS SDK errors often have terse `Display` impls (e.g. "service error")
/// but useful detail in the source chain.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
