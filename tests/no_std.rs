#![no_std]

use fixed_queue::person::{Person, Rgb};
use fixed_queue::{ArrayQueue, QueueError};

// These tests ensure that the array-backed queue works in a no std environment.

#[test]
fn enqueue_dequeue() {
    let mut queue: ArrayQueue<u8, 4> = ArrayQueue::new();
    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(queue.dequeue(), Ok(2));
    assert_eq!(queue.dequeue(), Err(QueueError::QueueEmpty));
}

#[test]
fn wrap_around() {
    let mut queue: ArrayQueue<char, 4> = ArrayQueue::new();
    queue.refill(['A', 'B', 'C', 'D']).unwrap();
    assert!(queue.enqueue('X').is_err());
    assert_eq!(queue.dequeue(), Ok('A'));
    queue.enqueue('E').unwrap();
    assert_eq!(queue.rear_index(), Some(0));
    assert!(queue.into_iter().eq(['B', 'C', 'D', 'E']));
}

#[test]
fn people() {
    let mut queue: ArrayQueue<Person, 2> = ArrayQueue::new();
    let color = Rgb::new(150, 150, 150);
    queue.enqueue(Person::new(7, color).unwrap()).unwrap();
    queue.enqueue(Person::new(8, color).unwrap()).unwrap();
    assert!(queue.is_full());
    assert_eq!(queue.peek().map(Person::key), Ok(7));
    assert!(queue.iter().map(Person::key).eq([7, 8]));
}
