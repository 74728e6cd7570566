//! Reusable temporary argument buffers.
//!
//! Invocation paths that collect trailing arguments borrow a buffer from the
//! pool instead of allocating per call. [`ScratchBuffer`] is a guard: the
//! buffer returns to the pool when it drops, on every exit path including
//! the error path of a forwarded call. The pool counts acquisitions and
//! releases so tests can assert exactly-once release.

use std::cell::RefCell;
use std::rc::Rc;
use values::Value;

#[derive(Default)]
struct PoolInner {
    free: Vec<Vec<Value>>,
    acquired: usize,
    released: usize,
}

#[derive(Default)]
pub struct BufferPool {
    inner: Rc<RefCell<PoolInner>>,
}

impl BufferPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScratchBuffer {
        let mut inner = self.inner.borrow_mut();
        inner.acquired += 1;
        let buf = inner.free.pop().unwrap_or_default();
        ScratchBuffer {
            buf,
            pool: Rc::clone(&self.inner),
        }
    }

    /// Total buffers handed out since creation.
    pub fn acquired(&self) -> usize {
        self.inner.borrow().acquired
    }

    /// Total buffers returned since creation.
    pub fn released(&self) -> usize {
        self.inner.borrow().released
    }

    /// Buffers currently checked out. Zero between invocations.
    pub fn in_flight(&self) -> usize {
        let inner = self.inner.borrow();
        inner.acquired - inner.released
    }
}

/// A borrowed argument buffer. Returned to the pool exactly once, on drop.
pub struct ScratchBuffer {
    buf: Vec<Value>,
    pool: Rc<RefCell<PoolInner>>,
}

impl ScratchBuffer {
    pub fn push(&mut self, value: Value) {
        self.buf.push(value);
    }

    pub fn values(&self) -> &[Value] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Drop for ScratchBuffer {
    fn drop(&mut self) {
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        let mut inner = self.pool.borrow_mut();
        inner.released += 1;
        inner.free.push(buf);
    }
}
