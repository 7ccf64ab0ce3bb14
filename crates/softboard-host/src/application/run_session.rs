//! RunSessionUseCase: drives one keyboard session against a host.
//!
//! The session is the single entry point between the host's event system and
//! the core: the renderer feeds every key activation into
//! [`KeyboardSession::handle_press`], which runs one dispatch to completion,
//! applies the resulting action to the [`TextSink`], commits the new state,
//! and notifies the [`Renderer`] when visible key caps may have changed.
//!
//! # Architecture
//!
//! The use case depends only on traits (`TextSink`, `Renderer`) and core
//! types. Host implementations are injected at construction time, making the
//! session fully unit-testable with recording doubles.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};
use uuid::Uuid;

use softboard_core::{Action, DispatchPolicy, Dispatcher, KeyboardState, LayoutTable, Screen};

/// Error type for host text-input failures.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The host text-input consumer rejected the command.
    #[error("host text input error: {0}")]
    Host(String),
}

/// Error type for the run-session use case.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("text sink rejected command: {0}")]
    Sink(#[from] SinkError),
}

/// The host text-input consumer.
///
/// Implementations must be idempotent-safe for no-op inputs: inserting an
/// empty string and deleting at the start of the document are the sink's
/// edge cases, not the session's.
pub trait TextSink: Send + Sync {
    /// Inserts `text` at the host cursor.
    fn insert(&self, text: &str) -> Result<(), SinkError>;

    /// Deletes one unit backward at the host cursor.
    fn delete_backward(&self) -> Result<(), SinkError>;
}

/// The host UI layer, as seen from the session.
///
/// Redraw requests carry the new `(screen, caps_on)` snapshot; the renderer
/// alone decides which glyphs actually need repainting. Rendering side
/// effects are fire-and-forget; implementations must not block the
/// dispatch path.
pub trait Renderer: Send + Sync {
    /// Visible key caps may have changed; re-read the snapshot and redraw.
    fn request_redraw(&self, screen: Screen, caps_on: bool);

    /// A host function request (`switchKeyboard`, `settings`) forwarded
    /// verbatim from the dispatcher.
    fn delegate(&self, name: &str);
}

/// One keyboard session: dispatcher, state, and the injected host adapters.
///
/// Created once when the host brings the keyboard view up; [`reset`] puts it
/// back into the start state when the view is torn down and reattached.
///
/// [`reset`]: KeyboardSession::reset
pub struct KeyboardSession {
    session_id: Uuid,
    dispatcher: Dispatcher,
    state: KeyboardState,
    sink: Arc<dyn TextSink>,
    renderer: Arc<dyn Renderer>,
}

impl KeyboardSession {
    /// Creates a session over `table` with the default dispatch policy.
    pub fn new(table: Arc<LayoutTable>, sink: Arc<dyn TextSink>, renderer: Arc<dyn Renderer>) -> Self {
        Self::with_policy(table, DispatchPolicy::default(), sink, renderer)
    }

    /// Creates a session with an explicit [`DispatchPolicy`].
    pub fn with_policy(
        table: Arc<LayoutTable>,
        policy: DispatchPolicy,
        sink: Arc<dyn TextSink>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        let session_id = Uuid::new_v4();
        info!(%session_id, "keyboard session created");
        Self {
            session_id,
            dispatcher: Dispatcher::with_policy(table, policy),
            state: KeyboardState::new(),
            sink,
            renderer,
        }
    }

    /// Returns this session's identifier, as used in its log records.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Read-only state view for the host: `(active screen, caps on)`.
    pub fn snapshot(&self) -> (Screen, bool) {
        self.state.snapshot()
    }

    /// Handles one key activation from the renderer.
    ///
    /// Runs synchronously to completion: dispatch, sink command, state
    /// commit, redraw notification. The state transition is committed even
    /// when the sink fails, so a flaky host document cannot desynchronize
    /// the visible keyboard.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Sink`] when the host text sink rejects the
    /// command. Unknown keys are not errors; they dispatch to no-ops.
    pub fn handle_press(&mut self, key_id: &str, screen: Screen) -> Result<(), SessionError> {
        let outcome = self.dispatcher.dispatch(key_id, screen, self.state);
        self.state = outcome.state;

        if outcome.needs_redraw {
            let (screen, caps_on) = self.state.snapshot();
            self.renderer.request_redraw(screen, caps_on);
        }

        let result = match &outcome.action {
            Action::InsertText(text) => self.sink.insert(text),
            Action::DeleteBackward => self.sink.delete_backward(),
            Action::DelegateToHost(name) => {
                debug!(session_id = %self.session_id, %name, "delegating to host");
                self.renderer.delegate(name);
                Ok(())
            }
            Action::None => Ok(()),
        };

        result.map_err(|err| {
            error!(session_id = %self.session_id, key_id, %err, "text sink rejected command");
            SessionError::Sink(err)
        })
    }

    /// Restores the start state `(Primary, caps off)` and notifies the
    /// renderer. Called by the host when the keyboard view is reattached.
    pub fn reset(&mut self) {
        self.state = KeyboardState::new();
        let (screen, caps_on) = self.state.snapshot();
        self.renderer.request_redraw(screen, caps_on);
        debug!(session_id = %self.session_id, "session reset to start state");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
