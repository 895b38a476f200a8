//
//  bitbucket-kit
//  api/task.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cancelable handle for callback-style requests.

use std::future::Future;

use tokio::task::JoinHandle;

use super::common::ApiError;

/// Handle to a request started with a completion callback.
///
/// The completion runs at most once. Cancelling before it has run guarantees it
/// never runs; cancelling afterwards has no effect. Dropping the handle does
/// not cancel the request.
#[derive(Debug)]
pub struct Task {
    handle: JoinHandle<()>,
}

impl Task {
    /// Spawns `future` on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    /// Aborts the request.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Returns `true` once the request has completed or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the request to finish.
    ///
    /// Returns `Ok(())` once the completion has run, or [`ApiError::Cancelled`]
    /// if the task was cancelled first. A panic inside the completion is
    /// propagated to the caller.
    pub async fn join(self) -> Result<(), ApiError> {
        match self.handle.await {
            Ok(()) => Ok(()),
            Err(err) if err.is_cancelled() => Err(ApiError::Cancelled),
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_join_after_completion() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let task = Task::spawn(async move {
            let _ = tx.send(7);
        });

        assert!(task.join().await.is_ok());
        assert_eq!(rx.await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_cancel_pending_task() {
        let task = Task::spawn(std::future::pending());
        assert!(!task.is_finished());

        task.cancel();
        assert!(matches!(task.join().await, Err(ApiError::Cancelled)));
    }

    #[tokio::test]
    async fn test_cancel_after_completion_has_no_effect() {
        let task = Task::spawn(async {});
        tokio::task::yield_now().await;
        while !task.is_finished() {
            tokio::task::yield_now().await;
        }

        task.cancel();
        assert!(task.join().await.is_ok());
    }
}
