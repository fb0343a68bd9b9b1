//! Message processing: run the TEA update loop and dispatch actions.

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;
use crate::submission::SubmissionSink;

/// Process a message through the TEA update function, following up on any
/// chained messages and dispatching the resulting actions.
pub fn process_message(state: &mut AppState, message: Message, sink: &mut dyn SubmissionSink) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, sink);
        }

        msg = result.message;
    }
}

fn handle_action(action: UpdateAction, sink: &mut dyn SubmissionSink) {
    match action {
        UpdateAction::RecordSubmission(submission) => sink.record(&submission),
    }
}
