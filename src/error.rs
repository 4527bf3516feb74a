//! Error taxonomy for the search engine.
//!
//! The engine distinguishes fatal conditions (which abort the current
//! decision and discard partial search results) from `NoActions`, which is
//! not an error but a distinguished result surfaced through [`crate::Decision`].

/// Errors that can arise while driving a decision through the engine.
#[derive(thiserror::Error, Debug, Clone)]
pub enum EngineError {
    /// The driver rejected an action during `apply` or during legal-action
    /// validation. Carries the driver's explanation.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// Expansion (or selection) was asked to act on a state that is not
    /// paused for a player's response.
    #[error("expansion requires a paused state")]
    NotPaused,

    /// A waiting-player lookup returned none when the caller required one.
    #[error("no player is waiting for input")]
    NoWaitingPlayer,

    /// No legal action was available where the caller required one. Most
    /// call sites (e.g. the engine's root decision) treat zero legal
    /// actions as an ordinary `Decision::NoAction` result rather than this
    /// error; this variant exists for call sites that can only express
    /// "found nothing" through a `Result`, such as a [`crate::strategy::Handler`].
    #[error("no legal action available")]
    NoActions,

    /// A plug-in (adapter) failed; the message is propagated unchanged.
    #[error("adapter failure: {0}")]
    AdapterFailure(String),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
