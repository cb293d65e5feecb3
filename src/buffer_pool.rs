//! Reusable scratch buffers for line assembly.
//!
//! Formatting runs on hot paths, so each line is assembled in a pooled
//! `String` that keeps its capacity between calls. A [`PooledBuffer`] guard
//! returns its buffer when dropped, which covers early returns and errors.

use std::ops::{Deref, DerefMut};

use parking_lot::Mutex;

/// Unbounded free list of cleared `String` buffers.
#[derive(Debug, Default)]
pub struct BufferPool {
    free: Mutex<Vec<String>>,
}

impl BufferPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check out a cleared buffer, allocating one if the pool is empty.
    ///
    /// The buffer is moved out of the free list, so no other caller can hold
    /// it until it is released.
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let buffer = self.free.lock().pop().unwrap_or_default();
        PooledBuffer {
            pool: self,
            buffer: Some(buffer),
        }
    }

    /// Clear `buffer` and return it to the pool. `None` is ignored.
    pub fn release(&self, buffer: Option<String>) {
        let Some(mut buffer) = buffer else {
            return;
        };
        buffer.clear();
        self.free.lock().push(buffer);
    }

    /// Number of buffers waiting in the pool.
    pub fn idle_count(&self) -> usize {
        self.free.lock().len()
    }
}

/// A checked-out buffer. Returns itself to its pool on drop.
#[derive(Debug)]
pub struct PooledBuffer<'p> {
    pool: &'p BufferPool,
    // Only `None` after `detach` or during `drop`.
    buffer: Option<String>,
}

impl PooledBuffer<'_> {
    /// Keep the buffer instead of returning it to the pool.
    pub fn detach(mut self) -> String {
        self.buffer.take().unwrap_or_default()
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        static EMPTY: String = String::new();
        self.buffer.as_ref().unwrap_or(&EMPTY)
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut String {
        self.buffer.get_or_insert_with(String::new)
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(self.buffer.take());
    }
}
