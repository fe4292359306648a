//! Background request handles.
//!
//! Every HTTP call runs on a fire-and-forget thread; the result comes back
//! over an mpsc channel that the UI event loop polls with `try_recv`. There
//! is no cancellation, de-duplication, or retry: a request outlives any
//! interest in it and whichever result arrives last is the one applied.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use uuid::Uuid;

use crate::api::ApiError;

/// A handle to one in-flight request.
pub struct FetchHandle<T> {
    /// Correlation id used in the operation log.
    pub request_id: Uuid,
    receiver: Receiver<Result<T, ApiError>>,
}

impl<T> FetchHandle<T> {
    /// Check for completion without blocking.
    /// Returns `Some(result)` exactly once, `None` while still running.
    pub fn try_recv(&self) -> Option<Result<T, ApiError>> {
        self.receiver.try_recv().ok()
    }
}

/// Create a connected sender/handle pair.
pub(crate) fn pair<T>() -> (Sender<Result<T, ApiError>>, FetchHandle<T>) {
    let (tx, rx) = mpsc::channel();
    let handle = FetchHandle {
        request_id: Uuid::new_v4(),
        receiver: rx,
    };
    (tx, handle)
}

/// Run `work` on a background thread, delivering its result to the handle.
pub fn spawn<T, F>(work: F) -> FetchHandle<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    let (tx, handle) = pair();

    thread::spawn(move || {
        // Ignore a dropped receiver: nobody is interested anymore.
        let _ = tx.send(work());
    });

    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_delivers_result() {
        let handle = spawn(|| Ok(7u32));

        // The worker thread needs a moment; poll until it lands.
        let mut result = None;
        for _ in 0..100 {
            if let Some(r) = handle.try_recv() {
                result = Some(r);
                break;
            }
            thread::sleep(std::time::Duration::from_millis(5));
        }

        assert_eq!(result.unwrap().unwrap(), 7);
    }

    #[test]
    fn test_try_recv_yields_once() {
        let (tx, handle) = pair::<u32>();
        tx.send(Ok(1)).unwrap();

        assert!(handle.try_recv().is_some());
        assert!(handle.try_recv().is_none());
    }

    #[test]
    fn test_unresolved_handle_yields_none() {
        let (_tx, handle) = pair::<u32>();
        assert!(handle.try_recv().is_none());
    }
}
