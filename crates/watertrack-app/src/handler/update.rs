//! Main update function - handles state transitions (TEA pattern)

use crate::forms::FormKind;
use crate::message::Message;
use crate::panel::{ActivePanel, PanelRoute};
use crate::state::{AppPhase, AppState, UiMode};
use crate::submission::FormSubmission;
use tracing::{debug, info};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::SnapshotRefreshed(snapshot) => {
            state.apply_snapshot(*snapshot);
            debug!("Snapshot refreshed (#{})", state.refresh_count);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectPanel(panel) => {
            state.select_route(PanelRoute::Panel(panel));
            UpdateResult::none()
        }

        Message::SelectPanelById(id) => {
            let route = PanelRoute::from_id(id);
            if let PanelRoute::Unknown(id) = &route {
                debug!("Selected unknown panel '{}'", id);
            }
            state.select_route(route);
            UpdateResult::none()
        }

        Message::NextPanel => {
            let next = match state.route.panel() {
                Some(panel) => panel.next(),
                None => ActivePanel::ALL[0],
            };
            UpdateResult::message(Message::SelectPanel(next))
        }

        Message::PrevPanel => {
            let prev = match state.route.panel() {
                Some(panel) => panel.prev(),
                None => ActivePanel::ALL[ActivePanel::ALL.len() - 1],
            };
            UpdateResult::message(Message::SelectPanel(prev))
        }

        // ─────────────────────────────────────────────────────────
        // Form Input
        // ─────────────────────────────────────────────────────────
        Message::EnterFormInput => {
            if state.route.is(ActivePanel::Products) {
                state.ui_mode = UiMode::FormInput;
            }
            UpdateResult::none()
        }

        Message::ExitFormInput => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::FocusNextField => {
            state.forms.focus = state.forms.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrevField => {
            state.forms.focus = state.forms.focus.prev();
            UpdateResult::none()
        }

        Message::FormChar(c) => {
            state.forms.push_char(c);
            UpdateResult::none()
        }

        Message::FormBackspace => {
            state.forms.backspace();
            UpdateResult::none()
        }

        Message::FormClear => {
            state.forms.clear_focused();
            UpdateResult::none()
        }

        Message::CycleProduct { forward } => {
            state.forms.cycle_product(&state.snapshot.products, forward);
            UpdateResult::none()
        }

        Message::SetFormField { field, text } => {
            state.forms.set_field(field, text);
            UpdateResult::none()
        }

        Message::SubmitFocusedForm => {
            UpdateResult::message(Message::SubmitForm(state.forms.focus.form()))
        }

        Message::SubmitForm(kind) => {
            let submission = match kind {
                FormKind::NewProduct => FormSubmission::NewProduct(state.forms.take_new_product()),
                FormKind::FillStock => FormSubmission::FillStock(state.forms.take_fill_stock()),
            };
            UpdateResult::action(UpdateAction::RecordSubmission(submission))
        }
    }
}
