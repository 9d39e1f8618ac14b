// src/app/session.rs
//! Drives the tree store: runs picks, builds and content fetches in the
//! background and applies their results when they are still current.

use std::{future::Future, io, path::PathBuf, sync::Arc};

use ratatui::text::Line;
use tokio::{
    runtime,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
};

use crate::{
    error::{ContentReadError, HandleError, PickError, TraversalError},
    fs::{pick_directory, Handle},
    highlight::Highlighter,
    tree::{find_first, Generation, NodePath, StoreEvent, TreeBuilder, TreeNode, TreeStore},
};

/// Text shown in the preview while no file is selected.
pub const PLACEHOLDER: &str = "Open a local folder to preview its files";

/// What the preview panel shows.
#[derive(Debug, Clone, Default)]
pub enum ContentView {
    #[default]
    Placeholder,
    Loading {
        name: String,
    },
    Ready {
        name: String,
        lines: Vec<Line<'static>>,
    },
    Failed {
        name: String,
        message: String,
    },
}

/// Results sent back from background tasks.
enum TaskResult {
    PickFailed {
        generation: Generation,
        error: PickError,
    },
    Built {
        generation: Generation,
        result: Result<TreeNode, TraversalError>,
    },
    Content {
        epoch: u64,
        name: String,
        result: Result<Vec<Line<'static>>, ContentReadError>,
    },
}

pub struct Session {
    store: TreeStore,
    runtime: runtime::Handle,
    builder: TreeBuilder,
    highlighter: Arc<Highlighter>,
    results_tx: UnboundedSender<TaskResult>,
    results_rx: UnboundedReceiver<TaskResult>,
    /// Spawned tasks whose result has not been applied yet.
    pending: usize,
    building: Option<Generation>,
    content: ContentView,
    notice: Option<String>,
    last_path: Option<PathBuf>,
}

impl Session {
    pub fn new(runtime: runtime::Handle, builder: TreeBuilder, highlighter: Arc<Highlighter>) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            store: TreeStore::new(),
            runtime,
            builder,
            highlighter,
            results_tx,
            results_rx,
            pending: 0,
            building: None,
            content: ContentView::Placeholder,
            notice: None,
            last_path: None,
        }
    }

    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    pub fn content(&self) -> &ContentView {
        &self.content
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// The latest pick has not produced a tree or an error yet.
    pub fn is_building(&self) -> bool {
        self.building.is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending > 0
    }

    pub fn last_path(&self) -> Option<&PathBuf> {
        self.last_path.as_ref()
    }

    /// Pick `path` from disk and build its tree.
    pub fn open_path(&mut self, path: PathBuf) {
        self.last_path = Some(path.clone());
        self.open_with(async move {
            pick_directory(path)
                .await
                .map(|root| Arc::new(root) as Arc<dyn Handle>)
        });
    }

    /// Start a new pick. Any build still running for an older pick is superseded.
    pub fn open_with<F>(&mut self, pick: F)
    where
        F: Future<Output = Result<Arc<dyn Handle>, PickError>> + Send + 'static,
    {
        let generation = self.store.begin_build();
        self.building = Some(generation);
        tracing::debug!(generation = generation.value(), "pick started");

        let builder = self.builder;
        let tx = self.results_tx.clone();
        self.pending += 1;
        self.runtime.spawn(async move {
            let message = match pick.await {
                Err(error) => TaskResult::PickFailed { generation, error },
                Ok(root) => TaskResult::Built {
                    generation,
                    result: builder.build(root, true).await,
                },
            };
            let _ = tx.send(message);
        });
    }

    /// Re-scan the last picked directory.
    pub fn reload(&mut self) {
        match self.last_path.clone() {
            Some(path) => self.open_path(path),
            None => self.notice = Some("nothing to reload yet".to_string()),
        }
    }

    /// The user backed out of the pick prompt.
    pub fn cancel_pick(&mut self) {
        self.notice = Some(PickError::Cancelled.to_string());
    }

    pub fn toggle(&mut self, path: &NodePath) -> bool {
        let toggled = self.store.toggle(path);
        self.react();
        toggled
    }

    pub fn select(&mut self, path: &NodePath) -> bool {
        let selected = self.store.select(path);
        self.react();
        selected
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
        self.react();
    }

    /// Apply every finished task without blocking. Returns whether anything arrived.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.results_rx.try_recv() {
            self.apply(result);
            changed = true;
        }
        if changed {
            self.react();
        }
        changed
    }

    /// Wait for the next task to finish and apply it.
    pub async fn wait_next(&mut self) {
        if let Some(result) = self.results_rx.recv().await {
            self.apply(result);
            self.react();
        }
    }

    fn apply(&mut self, result: TaskResult) {
        self.pending = self.pending.saturating_sub(1);

        match result {
            TaskResult::PickFailed { generation, error } => {
                if !self.store.is_current(generation) {
                    tracing::debug!(generation = generation.value(), "ignoring superseded pick failure");
                    return;
                }
                self.building = None;
                tracing::warn!(error = %error, "directory pick failed");
                self.notice = Some(error.to_string());
            }
            TaskResult::Built {
                generation,
                result: Ok(root),
            } => {
                if self.store.install(generation, root) {
                    self.building = None;
                    self.notice = None;
                }
            }
            TaskResult::Built {
                generation,
                result: Err(err),
            } => {
                if !self.store.is_current(generation) {
                    tracing::debug!(generation = generation.value(), "ignoring superseded build failure");
                    return;
                }
                self.building = None;
                self.notice = Some(format!("scan failed: {err}"));
            }
            TaskResult::Content {
                epoch,
                name,
                result,
            } => {
                if epoch != self.store.selection_epoch() {
                    tracing::debug!(file = %name, "dropping content for a superseded selection");
                    return;
                }
                self.content = match result {
                    Ok(lines) => ContentView::Ready { name, lines },
                    Err(err) => {
                        tracing::warn!(error = %err, "content read failed");
                        ContentView::Failed {
                            name,
                            message: err.source.to_string(),
                        }
                    }
                };
            }
        }
    }

    /// Run the follow-up work for every queued store event.
    fn react(&mut self) {
        loop {
            let events = self.store.drain_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                match event {
                    StoreEvent::RootChanged => self.auto_select(),
                    StoreEvent::SelectionChanged {
                        path: Some(path),
                        epoch,
                    } => {
                        if epoch == self.store.selection_epoch() {
                            self.fetch(&path, epoch);
                        }
                    }
                    StoreEvent::SelectionChanged { path: None, .. } => {
                        self.content = ContentView::Placeholder;
                    }
                    StoreEvent::ExpansionChanged(_) => {}
                }
            }
        }
    }

    fn auto_select(&mut self) {
        match self.store.root().and_then(find_first) {
            Some(path) => {
                self.store.select(&path);
            }
            None => self.store.clear_selection(),
        }
    }

    fn fetch(&mut self, path: &NodePath, epoch: u64) {
        let Some(leaf) = self.store.node(path).and_then(TreeNode::as_leaf) else {
            return;
        };
        let handle = Arc::clone(leaf.handle());
        let name = leaf.name().to_string();
        self.content = ContentView::Loading { name: name.clone() };

        let highlighter = Arc::clone(&self.highlighter);
        let tx = self.results_tx.clone();
        self.pending += 1;
        self.runtime.spawn(async move {
            let result = match handle.read_text().await {
                Ok(text) => highlight_blocking(highlighter, name.clone(), text).await,
                Err(source) => Err(ContentReadError {
                    name: name.clone(),
                    source,
                }),
            };
            let _ = tx.send(TaskResult::Content {
                epoch,
                name,
                result,
            });
        });
    }
}

/// Highlighting is CPU-bound, so it runs on the blocking pool instead of a runtime worker.
async fn highlight_blocking(
    highlighter: Arc<Highlighter>,
    name: String,
    text: String,
) -> Result<Vec<Line<'static>>, ContentReadError> {
    let file_name = name.clone();
    tokio::task::spawn_blocking(move || highlighter.highlight(&file_name, &text))
        .await
        .map_err(|err| ContentReadError {
            name,
            source: HandleError::Io(io::Error::other(err)),
        })
}
