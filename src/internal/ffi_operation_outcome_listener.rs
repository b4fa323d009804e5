use crate::prelude::*;

/// An object representing that Rust is listening on the outcome of an operation
/// carried out by FFI (Swift-side). When FFI side has finished the operation,
/// either successfully or with failure, it passes back the outcome to Rust
/// side by calling `notify_outcome`. This is effectively a callback pattern.
pub struct FFIOperationOutcomeListener<R> {
    sender: Mutex<Option<Sender<R>>>,
}

impl<R> FFIOperationOutcomeListener<R> {
    pub(crate) fn new(sender: Sender<R>) -> Self {
        Self {
            sender: Mutex::new(Some(sender)),
        }
    }

    /// Called from FFI Side (Swift side) once the operation has finished.
    ///
    /// Some contexts FFI side cannot throw, so misuse is logged and ignored:
    /// only the first outcome is delivered.
    pub(crate) fn notify_outcome(&self, outcome: R) {
        let Some(sender) = self.sender.lock().ok().and_then(|mut s| s.take()) else {
            warn!("`notify_outcome` called more than once, ignoring outcome.");
            return;
        };
        if sender.send(outcome).is_err() {
            let error = RustSideError::FailedToPropagateResultFromFFIOperationBackToDispatcher;
            warn!(%error, "Dispatcher no longer awaits this outcome.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn only_first_outcome_is_delivered() {
        let (sender, receiver) = channel::<u8>();
        let listener = FFIOperationOutcomeListener::new(sender);
        listener.notify_outcome(1);
        listener.notify_outcome(2);
        assert_eq!(receiver.await, Ok(1));
    }

    #[test]
    fn notify_after_receiver_dropped_does_not_panic() {
        let (sender, receiver) = channel::<u8>();
        drop(receiver);
        FFIOperationOutcomeListener::new(sender).notify_outcome(7);
    }
}
