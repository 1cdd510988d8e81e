//! A bounded multi-producer/multi-consumer work queue.
//!
//! The queue is a classic monitor: one mutex, two condition variables,
//! blocking [`put`](WorkQueue::put) and [`take`](WorkQueue::take) with
//! backpressure when full, and a [`close`](WorkQueue::close) operation
//! that rejects new work while letting consumers drain what is already
//! buffered. Non-blocking and deadline-bounded variants are provided for
//! callers that cannot wait forever.
//!
//! ```
//! use work_queue::{spawn_consumer, spawn_producer, WorkQueue};
//!
//! let queue = WorkQueue::bounded(8).unwrap();
//!
//! let producer = spawn_producer(queue.clone(), 0..50);
//! let consumer = spawn_consumer(queue.clone(), |item: i32| {
//!     assert!(item < 50);
//! });
//!
//! assert_eq!(producer.join().unwrap(), 50);
//! queue.close();
//! assert_eq!(consumer.join().unwrap(), 50);
//! ```

mod error;
mod queue;
mod worker;

pub use error::{
    InvalidCapacity, PutError, PutTimeoutError, TakeError, TakeTimeoutError, TryPutError,
    TryTakeError,
};
pub use queue::{Iter, WorkQueue};
pub use worker::{spawn_consumer, spawn_producer};
