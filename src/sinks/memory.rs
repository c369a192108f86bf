//! In-memory sink
//!
//! Clones share one buffer, so a test or an embedding application can hand
//! one clone to a logger and read the output through another.

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    chunks: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All bytes written so far
    pub fn contents(&self) -> Vec<u8> {
        self.chunks.lock().concat()
    }

    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Bytes of each `write` call, in order
    pub fn chunks(&self) -> Vec<Vec<u8>> {
        self.chunks.lock().clone()
    }

    /// Drain and return everything written so far
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.chunks.lock()).concat()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, buf: &[u8]) -> Result<()> {
        self.chunks.lock().push(buf.to_vec());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
