//! Key event handlers for different UI modes

use crate::forms::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::panel::ActivePanel;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::FormInput => handle_key_form_input(state, key),
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),

        // Force quit - Ctrl+C for emergency exit
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Number keys 1-6 select panels in sidebar order
        InputKey::Char(c @ '1'..='6') => {
            let index = c.to_digit(10)? as usize - 1;
            ActivePanel::ALL.get(index).copied().map(Message::SelectPanel)
        }

        InputKey::Char('j') | InputKey::Down => Some(Message::NextPanel),
        InputKey::Char('k') | InputKey::Up => Some(Message::PrevPanel),

        InputKey::Tab if state.route.is(ActivePanel::Products) => Some(Message::EnterFormInput),

        _ => None,
    }
}

/// Handle key events while editing the products panel forms
fn handle_key_form_input(state: &AppState, key: InputKey) -> Option<Message> {
    let on_selector = state.forms.focus == FormField::FillProduct;

    match key {
        InputKey::Esc => Some(Message::ExitFormInput),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab => Some(Message::FocusNextField),
        InputKey::BackTab => Some(Message::FocusPrevField),
        InputKey::Enter => Some(Message::SubmitFocusedForm),

        InputKey::Right | InputKey::Char('l') if on_selector => {
            Some(Message::CycleProduct { forward: true })
        }
        InputKey::Left | InputKey::Char('h') if on_selector => {
            Some(Message::CycleProduct { forward: false })
        }

        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::CharCtrl('u') => Some(Message::FormClear),
        InputKey::Char(c) if !on_selector => Some(Message::FormChar(c)),

        _ => None,
    }
}
