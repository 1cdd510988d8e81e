//! The bounded work queue: a classic monitor — one mutex guarding the
//! buffer and the closed flag, two condition variables for the two wait
//! conditions (`not_full` for producers, `not_empty` for consumers).
//!
//! The lock is only ever held across a check-and-mutate; every blocking
//! wait releases it atomically and reacquires it on wake. Waiters re-check
//! their predicate in a loop: `close()` broadcasts to both sides, and
//! condition variables may wake spuriously.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::error::{
    InvalidCapacity, PutError, PutTimeoutError, TakeError, TakeTimeoutError, TryPutError,
    TryTakeError,
};

struct State<T> {
    buffer: VecDeque<T>,
    closed: bool,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    not_empty: Condvar,
    not_full: Condvar,
    /// `None` means unbounded.
    capacity: Option<usize>,
}

impl<T> Shared<T> {
    fn has_space(&self, state: &State<T>) -> bool {
        match self.capacity {
            Some(capacity) => state.buffer.len() < capacity,
            None => true,
        }
    }
}

/// A multi-producer/multi-consumer work queue with blocking `put`/`take`,
/// backpressure when bounded, and drain-then-signal shutdown via
/// [`close`](WorkQueue::close).
///
/// `WorkQueue` is a cheaply cloneable handle; every clone refers to the
/// same queue. Items move producer → queue → consumer, one owner at a
/// time, and are delivered in FIFO order as serialized by the internal
/// lock.
///
/// ```
/// use std::thread;
/// use work_queue::WorkQueue;
///
/// let queue = WorkQueue::bounded(4).unwrap();
///
/// let worker = {
///     let queue = queue.clone();
///     thread::spawn(move || queue.iter().sum::<i32>())
/// };
///
/// for i in 1..=10 {
///     queue.put(i).unwrap();
/// }
/// queue.close();
///
/// assert_eq!(worker.join().unwrap(), 55);
/// ```
pub struct WorkQueue<T> {
    shared: Arc<Shared<T>>,
}

impl<T> WorkQueue<T> {
    fn with_capacity(capacity: Option<usize>) -> Self {
        WorkQueue {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    buffer: VecDeque::new(),
                    closed: false,
                }),
                not_empty: Condvar::new(),
                not_full: Condvar::new(),
                capacity,
            }),
        }
    }

    /// Creates a queue holding at most `capacity` items. Producers putting
    /// into a full queue block until a consumer frees space.
    pub fn bounded(capacity: usize) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity);
        }
        Ok(Self::with_capacity(Some(capacity)))
    }

    /// Creates a queue with no capacity limit. `put` never blocks; there
    /// is no backpressure.
    pub fn unbounded() -> Self {
        Self::with_capacity(None)
    }

    /// Appends `item` to the back of the queue, blocking while the queue
    /// is full.
    ///
    /// Fails only when the queue is closed — including when `close` is
    /// called while this thread is blocked waiting for space. The rejected
    /// item is handed back inside the error.
    pub fn put(&self, item: T) -> Result<(), PutError<T>> {
        let mut state = self.shared.state.lock().unwrap();
        loop {
            if state.closed {
                return Err(PutError(item));
            }
            if self.shared.has_space(&state) {
                break;
            }
            state = self.shared.not_full.wait(state).unwrap();
        }
        state.buffer.push_back(item);
        debug_assert!(self
            .shared
            .capacity
            .map_or(true, |capacity| state.buffer.len() <= capacity));
        drop(state);
        self.shared.not_empty.notify_one();
        Ok(())
    }

    /// Removes and returns the item at the front of the queue, blocking
    /// while the queue is empty and open.
    ///
    /// Once the queue is closed, remaining items are still handed out in
    /// order; after the buffer drains, every call returns [`TakeError`]
    /// — the end-of-stream signal.
    pub fn take(&self) -> Result<T, TakeError> {
        let mut state = self.shared.state.lock().unwrap();
        loop {
            if let Some(item) = state.buffer.pop_front() {
                drop(state);
                self.shared.not_full.notify_one();
                return Ok(item);
            }
            if state.closed {
                return Err(TakeError);
            }
            state = self.shared.not_empty.wait(state).unwrap();
        }
    }

    /// Appends `item` without blocking, failing if the queue is full or
    /// closed.
    pub fn try_put(&self, item: T) -> Result<(), TryPutError<T>> {
        let mut state = self.shared.state.lock().unwrap();
        if state.closed {
            return Err(TryPutError::Closed(item));
        }
        if !self.shared.has_space(&state) {
            return Err(TryPutError::Full(item));
        }
        state.buffer.push_back(item);
        drop(state);
        self.shared.not_empty.notify_one();
        Ok(())
    }

    /// Removes the front item without blocking, failing if the queue is
    /// empty.
    pub fn try_take(&self) -> Result<T, TryTakeError> {
        let mut state = self.shared.state.lock().unwrap();
        match state.buffer.pop_front() {
            Some(item) => {
                drop(state);
                self.shared.not_full.notify_one();
                Ok(item)
            }
            None if state.closed => Err(TryTakeError::Closed),
            None => Err(TryTakeError::Empty),
        }
    }

    /// Like [`put`](WorkQueue::put), but gives up after `timeout`.
    ///
    /// On timeout the queue is left exactly as it was — nothing is
    /// enqueued — and the item comes back in the
    /// [`Timeout`](PutTimeoutError::Timeout) variant, distinct from the
    /// closed signal.
    pub fn put_timeout(&self, item: T, timeout: Duration) -> Result<(), PutTimeoutError<T>> {
        let deadline = Instant::now() + timeout;
        let mut state = self.shared.state.lock().unwrap();
        loop {
            if state.closed {
                return Err(PutTimeoutError::Closed(item));
            }
            if self.shared.has_space(&state) {
                break;
            }
            let remaining = match deadline.checked_duration_since(Instant::now()) {
                Some(remaining) => remaining,
                None => return Err(PutTimeoutError::Timeout(item)),
            };
            state = self.shared.not_full.wait_timeout(state, remaining).unwrap().0;
        }
        state.buffer.push_back(item);
        drop(state);
        self.shared.not_empty.notify_one();
        Ok(())
    }

    /// Like [`take`](WorkQueue::take), but gives up after `timeout`.
    ///
    /// Timeout expiry leaves the queue unchanged and is distinct from the
    /// end-of-stream signal.
    pub fn take_timeout(&self, timeout: Duration) -> Result<T, TakeTimeoutError> {
        let deadline = Instant::now() + timeout;
        let mut state = self.shared.state.lock().unwrap();
        loop {
            if let Some(item) = state.buffer.pop_front() {
                drop(state);
                self.shared.not_full.notify_one();
                return Ok(item);
            }
            if state.closed {
                return Err(TakeTimeoutError::Closed);
            }
            let remaining = match deadline.checked_duration_since(Instant::now()) {
                Some(remaining) => remaining,
                None => return Err(TakeTimeoutError::Timeout),
            };
            state = self.shared.not_empty.wait_timeout(state, remaining).unwrap().0;
        }
    }

    /// Closes the queue: every later `put` is rejected, while `take`
    /// continues to drain whatever is already buffered.
    ///
    /// Wakes ALL blocked producers and consumers so they observe the
    /// closed state instead of waiting forever. Idempotent — closing twice
    /// is harmless, and the flag is never reset.
    pub fn close(&self) {
        let mut state = self.shared.state.lock().unwrap();
        state.closed = true;
        drop(state);
        self.shared.not_empty.notify_all();
        self.shared.not_full.notify_all();
    }

    /// Number of items currently buffered. Advisory only: stale the moment
    /// it returns when other threads are putting or taking.
    pub fn len(&self) -> usize {
        self.shared.state.lock().unwrap().buffer.len()
    }

    /// Whether the buffer is currently empty. Advisory, like `len`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `close` has been called. Advisory: a `false` answer may be
    /// outdated before the caller acts on it.
    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().unwrap().closed
    }

    /// The configured capacity; `None` for an unbounded queue.
    pub fn capacity(&self) -> Option<usize> {
        self.shared.capacity
    }

    /// A blocking iterator over the queue. Yields items until the queue is
    /// closed and drained — the idiomatic consumer loop:
    ///
    /// ```
    /// # let queue = work_queue::WorkQueue::bounded(2).unwrap();
    /// # queue.put(1).unwrap();
    /// # queue.close();
    /// for item in queue.iter() {
    ///     // process item
    ///     # let _: i32 = item;
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { queue: self }
    }
}

impl<T> Clone for WorkQueue<T> {
    fn clone(&self) -> Self {
        WorkQueue {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> std::fmt::Debug for WorkQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock().unwrap();
        f.debug_struct("WorkQueue")
            .field("len", &state.buffer.len())
            .field("capacity", &self.shared.capacity)
            .field("closed", &state.closed)
            .finish()
    }
}

/// Blocking iterator returned by [`WorkQueue::iter`]. Ends at
/// end-of-stream.
pub struct Iter<'a, T> {
    queue: &'a WorkQueue<T>,
}

impl<T> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.take().ok()
    }
}

impl<'a, T> IntoIterator for &'a WorkQueue<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
