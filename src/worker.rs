//! Producer and consumer role helpers.
//!
//! The queue itself stays agnostic about who calls it; these helpers are
//! the standard worker loops — feed an iterator in on one thread, drain to
//! end-of-stream on another — packaged so callers don't rewrite them.

use std::thread::{self, JoinHandle};

use crate::queue::WorkQueue;

/// Spawns a thread that feeds `items` into `queue` one at a time.
///
/// The loop ends when the iterator is exhausted or the queue is closed
/// under it, whichever comes first. Returns the number of items actually
/// enqueued; items still in the iterator when the queue closes are
/// dropped with it.
///
/// Producers do not close the queue — with several producers there is no
/// single thread that knows the stream is finished, so that decision is
/// left to the caller.
pub fn spawn_producer<T, I>(queue: WorkQueue<T>, items: I) -> JoinHandle<usize>
where
    T: Send + 'static,
    I: IntoIterator<Item = T> + Send + 'static,
{
    thread::spawn(move || {
        let mut produced = 0;
        for item in items {
            if queue.put(item).is_err() {
                break;
            }
            produced += 1;
        }
        produced
    })
}

/// Spawns a thread that applies `handle_item` to every item taken from
/// `queue` until end-of-stream. Returns the number of items consumed.
pub fn spawn_consumer<T, F>(queue: WorkQueue<T>, mut handle_item: F) -> JoinHandle<usize>
where
    T: Send + 'static,
    F: FnMut(T) + Send + 'static,
{
    thread::spawn(move || {
        let mut consumed = 0;
        for item in queue.iter() {
            handle_item(item);
            consumed += 1;
        }
        consumed
    })
}
