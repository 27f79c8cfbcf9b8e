//! Executes side effects returned by the reducer.
//!
//! Network effects run on spawned tasks and report back through `action_tx`,
//! so the event loop never waits on CouchDB. Rendering and bookmark
//! persistence happen inline.

use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::action::Action;
use crate::domain::{BookmarkCollection, ReplicationRequest, extract_filter_functions};
use crate::effect::Effect;
use crate::ports::{BookmarkRepository, CouchApi, Renderer};
use crate::state::AppState;

pub struct EffectRunner {
    couch: Arc<dyn CouchApi>,
    bookmarks: Arc<dyn BookmarkRepository>,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(
        couch: Arc<dyn CouchApi>,
        bookmarks: Arc<dyn BookmarkRepository>,
        action_tx: mpsc::Sender<Action>,
    ) -> Self {
        Self {
            couch,
            bookmarks,
            action_tx,
        }
    }

    pub async fn run<R: Renderer>(
        &self,
        effects: Vec<Effect>,
        renderer: &mut R,
        state: &AppState,
    ) -> Result<()> {
        for effect in effects {
            self.run_single(effect, renderer, state).await?;
        }
        Ok(())
    }

    async fn run_single<R: Renderer>(
        &self,
        effect: Effect,
        renderer: &mut R,
        state: &AppState,
    ) -> Result<()> {
        match effect {
            Effect::Render => renderer.draw(state)?,
            Effect::PersistBookmarks { bookmarks } => self.persist(&bookmarks).await,
            Effect::FetchLocalDatabases => self.spawn_list_databases(),
            Effect::FetchFilterFunctions { database } => self.spawn_fetch_filters(database),
            Effect::StartReplication {
                request,
                source_label,
                target_label,
            } => self.spawn_start_replication(*request, source_label, target_label),
            Effect::FetchActiveTasks => self.spawn_active_tasks(),
        }
        Ok(())
    }

    async fn persist(&self, bookmarks: &BookmarkCollection) {
        match self.bookmarks.save(bookmarks) {
            Ok(()) => tracing::debug!(count = bookmarks.len(), "bookmarks persisted"),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.bookmarks.storage_path().display(), "failed to persist bookmarks");
                let _ = self
                    .action_tx
                    .send(Action::BookmarksPersistFailed(e.to_string()))
                    .await;
            }
        }
    }

    fn spawn_list_databases(&self) {
        let couch = Arc::clone(&self.couch);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match couch.list_databases().await {
                Ok(names) => {
                    tracing::debug!(count = names.len(), "local databases loaded");
                    Action::LocalDatabasesLoaded(names)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "listing databases failed");
                    Action::LocalDatabasesFailed(e.to_string())
                }
            };
            let _ = tx.send(action).await;
        });
    }

    fn spawn_fetch_filters(&self, database: String) {
        let couch = Arc::clone(&self.couch);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match couch.fetch_design_documents(&database).await {
                Ok(response) => {
                    let filters = extract_filter_functions(&response);
                    tracing::debug!(%database, count = filters.len(), "filter functions loaded");
                    Action::FilterFunctionsLoaded { database, filters }
                }
                Err(e) => {
                    tracing::warn!(%database, error = %e, "fetching design documents failed");
                    Action::FilterFunctionsFailed {
                        database,
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(action).await;
        });
    }

    fn spawn_start_replication(
        &self,
        request: ReplicationRequest,
        source_label: String,
        target_label: String,
    ) {
        let couch = Arc::clone(&self.couch);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match couch.start_replication(&request).await {
                Ok(()) => {
                    tracing::info!(source = %source_label, target = %target_label, "replication document created");
                    Action::ReplicationStarted {
                        source: source_label,
                        target: target_label,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "creating replication document failed");
                    Action::ReplicationFailed(e.to_string())
                }
            };
            let _ = tx.send(action).await;
        });
    }

    fn spawn_active_tasks(&self) {
        let couch = Arc::clone(&self.couch);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match couch.active_tasks().await {
                Ok(tasks) => Action::ActiveTasksLoaded(tasks),
                Err(e) => {
                    tracing::warn!(error = %e, "fetching active tasks failed");
                    Action::ActiveTasksFailed(e.to_string())
                }
            };
            let _ = tx.send(action).await;
        });
    }
}
