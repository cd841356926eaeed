use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work that has to go through an async collaborator and therefore runs on
/// the event loop rather than inside a key handler.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    SubmitLogin,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
