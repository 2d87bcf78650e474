//! Producer/consumer delivery of segments over a channel.
//!
//! The scan loop runs on a worker thread and sends each segment, in scan
//! order, over a [`crossbeam_channel`] queue. With a bounded queue the
//! producer blocks while the consumer lags. The producer stops scanning once
//! nobody will drain the queue: when every receiver is dropped, or, for
//! [`stream`], as soon as the consumer closure returns.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, select};
use tracing::{debug, trace};

use crate::{
    split::{Split, SplitFn},
    view::View,
};

/// Queue sizing for a handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capacity {
    /// At most this many segments wait in the queue. Zero is a rendezvous
    /// channel: every send waits for a matching receive.
    Bounded(usize),
    /// The producer never blocks.
    Unbounded,
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity::Bounded(0)
    }
}

impl Capacity {
    fn channel<T>(self) -> (Sender<T>, Receiver<T>) {
        match self {
            Capacity::Bounded(cap) => crossbeam_channel::bounded(cap),
            Capacity::Unbounded => crossbeam_channel::unbounded(),
        }
    }
}

/// Sends every item of `segments` over `tx`, returning how many were
/// delivered. Stops early once the receiving side is gone or `stop`
/// disconnects.
fn produce<I: Iterator>(segments: I, tx: &Sender<I::Item>, stop: &Receiver<()>) -> usize {
    let mut sent = 0usize;
    for segment in segments {
        select! {
            send(tx, segment) -> res => {
                if res.is_err() {
                    trace!(sent, "consumer disconnected, stopping producer");
                    return sent;
                }
            }
            recv(stop) -> _ => {
                trace!(sent, "consumer returned, stopping producer");
                return sent;
            }
        }
        sent += 1;
    }
    debug!(sent, "producer finished");
    sent
}

/// Scans `segments` on a scoped worker thread while `consume` drains the
/// receiver on the calling thread.
///
/// Returns whatever `consume` returns. Once `consume` returns the producer
/// stops at its next send, even if the receiver was cloned, so the call
/// never waits on an undrained queue.
///
/// A panic on the producer side (for example inside a split predicate) is
/// resumed on the calling thread after `consume` returns.
///
/// ```rust
/// use splitview::{Split, handoff::{self, Capacity}};
///
/// let text = String::from("a b c d");
/// let segments = Split::new(text.as_str(), " ");
/// let first_two: Vec<&str> = handoff::stream(segments, Capacity::Bounded(1), |rx| {
///     rx.iter().take(2).collect()
/// });
/// assert_eq!(first_two, ["a", "b"]);
/// ```
pub fn stream<I, R>(
    segments: I,
    capacity: Capacity,
    consume: impl FnOnce(&Receiver<I::Item>) -> R,
) -> R
where
    I: Iterator + Send,
    I::Item: Send,
{
    let (tx, rx) = capacity.channel();
    let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(0);
    thread::scope(|scope| {
        let producer = scope.spawn(move || produce(segments, &tx, &stop_rx));
        let out = consume(&rx);
        drop(stop_tx);
        drop(rx);
        match producer.join() {
            Ok(_) => out,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    })
}

/// Scans `segments` on a detached worker thread and returns the receiving
/// end of the queue.
///
/// The join handle reports how many segments were delivered before the scan
/// finished or the receiver was dropped.
pub fn spawn<I>(segments: I, capacity: Capacity) -> (Receiver<I::Item>, JoinHandle<usize>)
where
    I: Iterator + Send + 'static,
    I::Item: Send + 'static,
{
    let (tx, rx) = capacity.channel();
    let handle = thread::spawn(move || produce(segments, &tx, &crossbeam_channel::never()));
    (rx, handle)
}

impl<'h, V> Split<'h, '_, V>
where
    V: View<'h> + Send,
{
    /// Rewinds, then delivers every segment to `consume` through a worker
    /// thread. See [`stream`].
    pub fn stream<R>(
        mut self,
        capacity: Capacity,
        consume: impl FnOnce(&Receiver<V>) -> R,
    ) -> R {
        self.reset();
        stream(self, capacity, consume)
    }
}

impl<'h, V, F> SplitFn<'h, V, F>
where
    V: View<'h> + Send,
    F: FnMut(char) -> bool + Send,
{
    /// Rewinds, then delivers every segment to `consume` through a worker
    /// thread. See [`stream`].
    pub fn stream<R>(
        mut self,
        capacity: Capacity,
        consume: impl FnOnce(&Receiver<V>) -> R,
    ) -> R {
        self.reset();
        stream(self, capacity, consume)
    }
}
