//! Terminal ownership: raw mode, alternate screen and the input event stream.

use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::event::Event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub struct TuiRunner {
    terminal: Tui,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    reader: Option<JoinHandle<()>>,
    shutdown: CancellationToken,
    entered: bool,
}

impl TuiRunner {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            reader: None,
            shutdown: CancellationToken::new(),
            entered: false,
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        self.entered = true;
        self.spawn_reader();
        Ok(())
    }

    /// Safe to call more than once; only the first call touches the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.shutdown.cancel();
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        if std::mem::take(&mut self.entered) {
            execute!(stdout(), LeaveAlternateScreen)?;
            disable_raw_mode()?;
        }
        Ok(())
    }

    /// Redraws are driven by state changes and wake-up deadlines, so the
    /// reader forwards input only.
    fn spawn_reader(&mut self) {
        let tx = self.event_tx.clone();
        let shutdown = self.shutdown.clone();

        self.reader = Some(tokio::spawn(async move {
            let mut stream = EventStream::new();
            if tx.send(Event::Init).is_err() {
                return;
            }

            loop {
                let next = tokio::select! {
                    () = shutdown.cancelled() => return,
                    next = stream.next() => next,
                };
                let event = match next {
                    Some(Ok(raw)) => translate(raw),
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        return;
                    }
                    None => return,
                };
                if let Some(event) = event
                    && tx.send(event).is_err()
                {
                    return;
                }
            }
        }));
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

/// Key releases, mouse, focus and paste events are dropped.
fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}
