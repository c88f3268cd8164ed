//! Single-use completion channel between a background task and its owner.
//!
//! [`completion`] returns a [`Completer`] for the producing side and a [`Pending`] for
//! the waiting side. Both halves are consumed by their only operation, so the outcome
//! can be delivered at most once and read only by blocking until it arrives.

use crossbeam_channel::{Receiver, Sender, bounded};
use oikonomia_common::{MarketError, Result};

/// Producing half: delivers exactly one outcome.
#[must_use = "dropping a Completer without calling complete() fails the waiting side"]
pub struct Completer<T> {
    tx: Sender<Result<T>>,
}

/// Waiting half: blocks until the outcome is delivered.
#[must_use = "a Pending outcome does nothing unless waited on"]
pub struct Pending<T> {
    rx: Receiver<Result<T>>,
}

/// Creates a connected completer/pending pair.
pub fn completion<T>() -> (Completer<T>, Pending<T>) {
    let (tx, rx) = bounded(1);
    (Completer { tx }, Pending { rx })
}

impl<T> Completer<T> {
    /// Delivers the success payload or the failure. Consumes the completer.
    ///
    /// Fails with [`MarketError::ChannelSend`] when the waiting side is already gone.
    pub fn complete(self, outcome: Result<T>) -> Result<()> {
        self.tx
            .send(outcome)
            .map_err(|_| MarketError::ChannelSend("completion receiver dropped before delivery".to_string()))
    }
}

impl<T> Pending<T> {
    /// Blocks until the outcome arrives and returns it.
    ///
    /// If the completer is dropped without completing (e.g. its thread panicked) the
    /// wait ends with [`MarketError::ChannelRecv`].
    pub fn wait(self) -> Result<T> {
        self.rx
            .recv()
            .map_err(|e| MarketError::ChannelRecv(format!("background task ended without a result: {e}")))?
    }
}
