use std::sync::mpsc::{Receiver, Sender, channel};

/// Where the dispatcher delivers translated messages.
///
/// Delivery is synchronous: one `send` per handled event, nothing buffered on
/// the dispatcher side.
pub trait MessageSink<M> {
    fn send(&mut self, message: M);
}

impl<M, F> MessageSink<M> for F
where
    F: FnMut(M),
{
    fn send(&mut self, message: M) {
        self(message)
    }
}

/// A dropped receiver means the update loop is gone; the message is discarded.
impl<M> MessageSink<M> for Sender<M> {
    fn send(&mut self, message: M) {
        if Sender::send(self, message).is_err() {
            log::warn!(target: "bus", "message receiver dropped, discarding message");
        }
    }
}

/// Sender/receiver pair for an application update loop.
///
/// Hand [`MessageQueue::sender`] to the dispatcher and call
/// [`MessageQueue::drain`] once per loop iteration.
pub struct MessageQueue<M> {
    tx: Sender<M>,
    rx: Receiver<M>,
}

impl<M> MessageQueue<M> {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> Sender<M> {
        self.tx.clone()
    }

    /// Every message received so far, in send order.
    pub fn drain(&self) -> Vec<M> {
        self.rx.try_iter().collect()
    }
}

impl<M> Default for MessageQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}
