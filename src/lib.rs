//! Sliding-window maximum over `i64` sequences, built on a hand-written
//! binary max-heap.

pub mod heap;
pub mod window;

pub use heap::{MaxHeap, EMPTY_SENTINEL};
pub use window::{max_sliding_window, max_sliding_window_with, Strategy, WindowError};
