use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio::time::sleep_until;

use couchrep::app::action::Action;
use couchrep::app::effect::Effect;
use couchrep::app::effect_runner::EffectRunner;
use couchrep::app::ports::BookmarkRepository;
use couchrep::app::render_schedule::next_animation_deadline;
use couchrep::app::screen::Screen;
use couchrep::app::state::AppState;
use couchrep::app::store::Store;
use couchrep::infra::adapters::{CouchHttpClient, JsonBookmarkStore};
use couchrep::infra::config::{AppConfig, paths::cache_dir};
use couchrep::ui::adapters::TuiRenderer;
use couchrep::ui::event::handler::handle_event;
use couchrep::ui::tui::TuiRunner;
use couchrep::{error, logging};

/// Terminal UI for configuring CouchDB replication
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CouchDB server URL, overrides config.toml and COUCHREP_URL
    #[arg(long)]
    url: Option<String>,

    /// Admin user name, overrides config.toml and COUCHREP_USER
    #[arg(long)]
    user: Option<String>,

    /// Path to config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Screen shown at startup: replication, advanced, bookmarks or activity
    #[arg(long)]
    screen: Option<Screen>,

    /// Preselect a local source database in the replicator
    #[arg(long)]
    source: Option<String>,

    /// Zero-based bookmark page shown at startup
    #[arg(long)]
    page: Option<usize>,
}

impl Args {
    fn load_config(&self) -> Result<AppConfig> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => AppConfig::default_path()?,
        };
        let mut config = AppConfig::load(&path)?;
        config.apply_env();
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(url) = &self.url {
            config.server.url = url.clone();
        }
        if let Some(user) = &self.user {
            config.server.user = Some(user.clone());
        }
    }

    /// Navigation dispatched once the bookmarks are in. `--source` wins over
    /// `--screen` since it implies the replicator.
    fn startup_actions(&self) -> Vec<Action> {
        match (&self.source, self.screen) {
            (Some(db), _) => vec![Action::InitReplicator(Some(db.clone()))],
            (None, screen) => vec![
                Action::LoadLocalDatabases,
                Action::SwitchScreen(screen.unwrap_or_default()),
            ],
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    let log_path = logging::init(&cache_dir()?)?;

    let config = args.load_config()?;
    let origin = config.origin()?;
    let session = config.session();
    let page_size = config.page_size()?;
    tracing::info!(%origin, page_size, log = %log_path.display(), "starting couchrep");

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);

    let couch = Arc::new(CouchHttpClient::new(origin.clone(), session.clone())?);
    let bookmark_store = Arc::new(JsonBookmarkStore::new()?);
    let effect_runner = EffectRunner::new(
        couch,
        Arc::clone(&bookmark_store) as _,
        action_tx.clone(),
    );

    let mut store = Store::new(AppState::with_page_size(origin, session, page_size));
    store.subscribe(|state| {
        tracing::trace!(revision = state.revision, screen = ?state.screen, "state changed");
    });

    let loaded = match bookmark_store.load() {
        Ok(bookmarks) => {
            tracing::debug!(count = bookmarks.len(), "bookmarks loaded");
            Action::InitBookmarks {
                bookmarks,
                page: args.page,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %bookmark_store.storage_path().display(), "failed to load bookmarks");
            Action::BookmarksLoadFailed(e.to_string())
        }
    };

    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let size = tui.terminal().size()?;
    for action in [vec![loaded, Action::Resize(size.width, size.height)], args.startup_actions()]
        .into_iter()
        .flatten()
    {
        let _ = action_tx.send(action).await;
    }

    let result = run(&mut tui, &mut store, &effect_runner, &action_tx, &mut action_rx).await;

    tui.exit()?;
    tracing::info!("couchrep stopped");
    result
}

async fn run(
    tui: &mut TuiRunner,
    store: &mut Store,
    effect_runner: &EffectRunner,
    action_tx: &mpsc::Sender<Action>,
    action_rx: &mut mpsc::Receiver<Action>,
) -> Result<()> {
    loop {
        let deadline = next_animation_deadline(store.state(), Instant::now());

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, store.state());
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let mut effects = store.dispatch(action, Instant::now());

                if store.state().render_dirty && !effects.contains(&Effect::Render) {
                    effects.push(Effect::Render);
                }

                let mut renderer = TuiRenderer::new(tui);
                effect_runner.run(effects, &mut renderer, store.state()).await?;
                store.clear_dirty();
            }
            // Wake-up deadline: spinner frame or message expiry
            () = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let effects = store.dispatch(Action::Render, Instant::now());
                let mut renderer = TuiRenderer::new(tui);
                effect_runner.run(effects, &mut renderer, store.state()).await?;
                store.clear_dirty();
            }
        }

        if store.state().should_quit {
            return Ok(());
        }
    }
}
