use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum WrapErr {
    #[error("[Seq] No more elements to take")]
    Exhausted,

    #[error("[Cursor] Iterator is read-only and doesn't allow {op} items")]
    UnsupportedMutation { op: &'static str },

    #[error("[Cursor] No element to {op}: next or previous must be called first")]
    StaleCursor { op: &'static str },

    #[error("[Text] String '{text}' does not match a given predicate")]
    ValidationFailed { text: String },

    #[error("[Text] Invalid pattern `{pattern}`: {err}")]
    BadPattern { pattern: String, err: String },

    #[error("[Text] Realize text error: {0}")]
    RealizeErr(String),
}
