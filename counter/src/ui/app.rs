//! The interactive counter screen.

use crate::error::AppError;
use crate::ui::input::UiCommand;
use crate::ui::terminal::CounterTerminal;
use crate::ui::view::CounterView;
use crate::CounterStore;
use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use thunk_runtime::EffectHandle;

/// Controller between terminal input and the store
///
/// Reads state from the store on every render and turns key presses into
/// trigger actions. Holds no counter state of its own.
pub struct CounterApp {
    store: CounterStore,
    should_quit: bool,
}

impl CounterApp {
    /// Create an app driving `store`
    #[must_use]
    pub const fn new(store: CounterStore) -> Self {
        Self {
            store,
            should_quit: false,
        }
    }

    /// The store this app drives
    #[must_use]
    pub const fn store(&self) -> &CounterStore {
        &self.store
    }

    /// Whether a quit was requested
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Snapshot the current state into a view
    pub async fn view(&self) -> CounterView {
        self.store.state(CounterView::new).await
    }

    /// Handle one key event
    ///
    /// Triggers are sent without waiting for their operation to settle; the
    /// returned handle tracks it for callers that care.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store is shutting down.
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<Option<EffectHandle>, AppError> {
        let Some(command) = UiCommand::from_key(key) else {
            return Ok(None);
        };

        tracing::debug!(?command, "Key command");

        match command.action() {
            Some(action) => Ok(Some(self.store.send(action).await?)),
            None => {
                self.should_quit = true;
                Ok(None)
            },
        }
    }

    async fn draw(&self, terminal: &mut CounterTerminal) -> Result<(), AppError> {
        let view = self.view().await;
        terminal.draw(|frame| frame.render_widget(&view, frame.area()))?;
        Ok(())
    }
}

/// Run the screen until the user quits
///
/// Redraws on start, after every key event and whenever the store state
/// changes.
///
/// # Errors
///
/// Returns [`AppError::Io`] if reading input or drawing fails, and
/// [`AppError::Store`] if a trigger is refused.
pub async fn run_app(terminal: &mut CounterTerminal, app: &mut CounterApp) -> Result<(), AppError> {
    let mut events = EventStream::new();
    let mut changes = app.store().subscribe_changes();

    app.draw(terminal).await?;

    while !app.should_quit() {
        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    let _ = app.handle_key(key).await?;
                },
                Some(Ok(_)) => {},
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
            },
        }

        app.draw(terminal).await?;
    }

    tracing::info!("Leaving counter screen");
    Ok(())
}
