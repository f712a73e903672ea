#![no_std]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/circdeque/0.1.0")]

//! A growable double-ended queue on a circular buffer.
//!
//! [`CircularDeque`] combines queue operations (`enqueue`, `dequeue`,
//! `element`) and stack operations (`push`, `remove`, `peek`) on one ring
//! buffer, which starts with two slots and doubles whenever it is full.

extern crate alloc;

pub mod deque;
mod storage;

pub use crate::deque::CircularDeque;
pub use crate::storage::MIN_CAPACITY;
