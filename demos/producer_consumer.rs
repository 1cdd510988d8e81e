//! One producer, two consumers, clean shutdown.
//! The consumers drain the queue until it signals end-of-stream.
//!
//! Run with: cargo run --example producer_consumer

use std::thread;
use std::time::Duration;

use work_queue::{spawn_consumer, spawn_producer, WorkQueue};

fn main() {
    println!("=== Producer/Consumer over a Bounded Queue ===\n");

    let queue = WorkQueue::bounded(4).unwrap();

    let producer = {
        let queue = queue.clone();
        thread::spawn(move || {
            let mut produced = 0;
            for i in 0..5 {
                thread::sleep(Duration::from_millis(100));
                match queue.put(i) {
                    Ok(()) => {
                        println!("producer: put item={}", i);
                        produced += 1;
                    }
                    Err(rejected) => {
                        println!("producer: queue closed, keeping item={}", rejected.0);
                        break;
                    }
                }
            }
            produced
        })
    };

    let mut consumers = Vec::new();
    for id in 0..2 {
        consumers.push(spawn_consumer(queue.clone(), move |item: i32| {
            println!("consumer {}: got item={}", id, item);
        }));
    }

    let produced = producer.join().unwrap();
    // All work is in; tell the consumers no more is coming.
    queue.close();

    let consumed: usize = consumers.into_iter().map(|c| c.join().unwrap()).sum();
    println!("\nproduced={} consumed={}", produced, consumed);
    assert_eq!(produced as usize, consumed);

    println!("\n=== Key Points ===");
    println!("1. put blocks when the queue is full (backpressure)");
    println!("2. close() rejects new puts but lets consumers drain");
    println!("3. take returns an end-of-stream error once closed and empty");
    println!("4. Each item is consumed by exactly one consumer");
}
