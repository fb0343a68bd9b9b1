//! Message types for the application (TEA pattern)

use crate::forms::{FormField, FormKind};
use crate::input_key::InputKey;
use crate::panel::ActivePanel;
use watertrack_core::Snapshot;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraws
    Tick,

    /// A fresh snapshot from the refresh timer; replaces the current one
    SnapshotRefreshed(Box<Snapshot>),

    /// User-initiated quit (q / Esc in normal mode)
    RequestQuit,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Select one of the six known panels
    SelectPanel(ActivePanel),
    /// Select by identifier; unknown identifiers are kept as-is
    SelectPanelById(String),
    NextPanel,
    PrevPanel,

    // ─────────────────────────────────────────────────────────
    // Form Input
    // ─────────────────────────────────────────────────────────
    /// Start editing the products panel forms
    EnterFormInput,
    /// Stop editing; drafts are kept
    ExitFormInput,
    FocusNextField,
    FocusPrevField,
    FormChar(char),
    FormBackspace,
    /// Clear the focused field (Ctrl+U)
    FormClear,
    /// Step the product selector
    CycleProduct { forward: bool },
    /// Replace a field's text wholesale (headless commands)
    SetFormField { field: FormField, text: String },
    /// Submit the form that owns the focused field
    SubmitFocusedForm,
    SubmitForm(FormKind),
}
