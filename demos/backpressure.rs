//! Backpressure on a capacity-2 queue: the third put blocks until a
//! consumer frees space, then shutdown drains the rest.
//!
//! Run with: cargo run --example backpressure

use std::thread;
use std::time::Duration;

use work_queue::WorkQueue;

fn main() {
    println!("=== Backpressure with capacity 2 ===\n");

    let queue = WorkQueue::bounded(2).unwrap();

    queue.put(1).unwrap();
    queue.put(2).unwrap();
    println!("put 1, put 2: accepted immediately (len={})", queue.len());

    thread::scope(|s| {
        let blocked = s.spawn(|| {
            println!("put 3: blocking, queue is full...");
            queue.put(3).unwrap();
            println!("put 3: unblocked and accepted");
        });

        thread::sleep(Duration::from_millis(200));
        let item = queue.take().unwrap();
        println!("take -> {} (frees one slot)", item);

        blocked.join().unwrap();
    });

    queue.close();
    println!("close(): no new puts, draining remains");

    while let Ok(item) = queue.take() {
        println!("take -> {}", item);
    }
    println!("take -> end of stream");

    println!("\n=== Key Points ===");
    println!("1. A full queue suspends producers instead of dropping work");
    println!("2. Every take wakes at most one blocked producer");
    println!("3. Drained-and-closed is the terminal state");
}
