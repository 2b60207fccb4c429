use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixed_queue::{ArrayQueue, Queue};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("vec cycle 10", |b| b.iter(|| vec_cycle(black_box(10))));
    c.bench_function("vec cycle 1000", |b| b.iter(|| vec_cycle(black_box(1000))));
    c.bench_function("array cycle 10", |b| {
        b.iter(|| array_cycle::<10>(black_box(1000)))
    });
    c.bench_function("array cycle 1000", |b| {
        b.iter(|| array_cycle::<1000>(black_box(1000)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Fill the queue, then keep it full while rotating every element through
/// the ring once.
fn vec_cycle(cap: usize) -> usize {
    let mut queue = Queue::new(cap);
    for n in 0..cap {
        queue.enqueue(n).unwrap();
    }
    let mut sum = 0;
    for n in 0..cap {
        sum += queue.dequeue().unwrap();
        queue.enqueue(n).unwrap();
    }
    sum
}

fn array_cycle<const N: usize>(rounds: usize) -> usize {
    let mut queue: ArrayQueue<usize, N> = ArrayQueue::new();
    let mut sum = 0;
    for n in 0..rounds {
        if queue.is_full() {
            sum += queue.dequeue().unwrap();
        }
        queue.enqueue(n).unwrap();
    }
    sum + queue.iter().sum::<usize>()
}
