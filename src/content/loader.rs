// SPDX-License-Identifier: MPL-2.0
//! Fetch-once lifecycle for the page document.
//!
//! The loader starts with the empty document, fetches exactly once when
//! mounted, and replaces the whole document in a single update when the
//! fetch succeeds. The fetch runs as an abortable task; unmounting aborts it,
//! and any result that still arrives afterwards is dropped.

use super::client::ContentSource;
use super::document::ContentDocument;
use crate::error::Result;
use iced::task::{self, Task};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Pending,
    Resolved,
    Failed,
    Cancelled,
}

#[derive(Debug, Clone)]
pub enum Message {
    Fetched {
        generation: u64,
        result: Result<ContentDocument>,
    },
}

/// Outcome of [`State::handle`] for the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The document was replaced.
    DocumentReplaced,
}

#[derive(Default)]
pub struct State {
    document: ContentDocument,
    status: Status,
    generation: u64,
    handle: Option<task::Handle>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("status", &self.status)
            .field("generation", &self.generation)
            .field("in_flight", &self.handle.is_some())
            .finish_non_exhaustive()
    }
}

impl State {
    /// Current document: the fetched one, or the empty shape.
    #[must_use]
    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Starts the fetch. Only the first call does anything.
    pub fn mount(&mut self, source: Arc<dyn ContentSource>) -> Task<Message> {
        if self.status != Status::Idle {
            tracing::debug!(status = ?self.status, "loader already mounted, skipping fetch");
            return Task::none();
        }

        self.generation += 1;
        self.status = Status::Pending;
        let generation = self.generation;

        let (task, handle) = Task::perform(source.fetch(), move |result| Message::Fetched {
            generation,
            result,
        })
        .abortable();
        self.handle = Some(handle.abort_on_drop());

        task
    }

    /// Aborts a pending fetch. Later results are discarded.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        if self.status == Status::Pending {
            tracing::debug!("content fetch cancelled");
            self.status = Status::Cancelled;
        }
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Fetched { generation, result } => {
                if self.status != Status::Pending || generation != self.generation {
                    tracing::debug!(generation, status = ?self.status, "dropping stale content result");
                    return Effect::None;
                }
                self.handle = None;

                match result {
                    Ok(document) => {
                        self.document = document;
                        self.status = Status::Resolved;
                        tracing::info!("content loaded");
                        Effect::DocumentReplaced
                    }
                    Err(err) => {
                        self.status = Status::Failed;
                        tracing::warn!(error = %err, "content fetch failed, showing defaults");
                        Effect::None
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::document::Portfolio;
    use crate::error::{ContentError, Error};
    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
    }

    impl ContentSource for CountingSource {
        fn fetch(&self) -> BoxFuture<'static, Result<ContentDocument>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(ContentDocument::default()) }.boxed()
        }
    }

    fn described(text: &str) -> ContentDocument {
        ContentDocument {
            portfolio: Portfolio {
                description: Some(text.into()),
                ..Portfolio::default()
            },
            ..ContentDocument::default()
        }
    }

    #[test]
    fn starts_with_empty_document() {
        let state = State::default();
        assert!(state.document().is_empty());
        assert_eq!(state.status(), Status::Idle);
    }

    #[test]
    fn mounting_twice_fetches_once() {
        let source = Arc::new(CountingSource::default());
        let mut state = State::default();

        let _first = state.mount(source.clone());
        let _second = state.mount(source.clone());

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(state.status(), Status::Pending);
    }

    #[test]
    fn success_replaces_whole_document() {
        let mut state = State::default();
        let _task = state.mount(Arc::new(CountingSource::default()));

        let effect = state.handle(Message::Fetched {
            generation: 1,
            result: Ok(described("hello")),
        });

        assert_eq!(effect, Effect::DocumentReplaced);
        assert_eq!(state.status(), Status::Resolved);
        assert_eq!(state.document().portfolio.description.as_deref(), Some("hello"));
    }

    #[test]
    fn failure_keeps_empty_defaults() {
        let mut state = State::default();
        let _task = state.mount(Arc::new(CountingSource::default()));

        let effect = state.handle(Message::Fetched {
            generation: 1,
            result: Err(Error::Content(ContentError::Status(500))),
        });

        assert_eq!(effect, Effect::None);
        assert_eq!(state.status(), Status::Failed);
        assert!(state.document().is_empty());
    }

    #[test]
    fn result_after_unmount_is_discarded() {
        let mut state = State::default();
        let _task = state.mount(Arc::new(CountingSource::default()));
        state.unmount();

        let effect = state.handle(Message::Fetched {
            generation: 1,
            result: Ok(described("late")),
        });

        assert_eq!(effect, Effect::None);
        assert_eq!(state.status(), Status::Cancelled);
        assert!(state.document().is_empty());
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut state = State::default();
        let _task = state.mount(Arc::new(CountingSource::default()));

        let effect = state.handle(Message::Fetched {
            generation: 7,
            result: Ok(described("stale")),
        });

        assert_eq!(effect, Effect::None);
        assert_eq!(state.status(), Status::Pending);
    }

    #[test]
    fn second_result_is_ignored_once_resolved() {
        let mut state = State::default();
        let _task = state.mount(Arc::new(CountingSource::default()));
        state.handle(Message::Fetched {
            generation: 1,
            result: Ok(described("first")),
        });

        let effect = state.handle(Message::Fetched {
            generation: 1,
            result: Ok(described("second")),
        });

        assert_eq!(effect, Effect::None);
        assert_eq!(state.document().portfolio.description.as_deref(), Some("first"));
    }

    #[test]
    fn unmount_before_mount_is_harmless() {
        let mut state = State::default();
        state.unmount();
        assert_eq!(state.status(), Status::Idle);
    }
}
