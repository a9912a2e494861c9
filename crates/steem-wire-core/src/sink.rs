//! Append-only byte accumulator.
//!
//! A [`Sink`] is created empty for one encode operation, written to by any
//! number of encoder calls, and finalized at most once into an immutable
//! [`Bytes`] value that can be handed to a signer or transport.

use bytes::{Bytes, BytesMut};
use std::fmt;

use crate::error::{EncodeError, Result};

/// Buffer pre-allocation settings for a [`Sink`].
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Bytes reserved up front.
    pub initial_capacity: usize,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 256,
        }
    }
}

/// Growable output buffer for encoders.
///
/// Bytes are never reordered or removed, except that [`Sink::atomic`] drops
/// the partial output of a composite write that failed.
#[derive(Default)]
pub struct Sink {
    buf: BytesMut,
    frozen: Option<Bytes>,
}

impl Sink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::with_config(&SinkConfig::default())
    }

    /// Create an empty sink using the given settings.
    pub fn with_config(config: &SinkConfig) -> Self {
        Self {
            buf: BytesMut::with_capacity(config.initial_capacity),
            frozen: None,
        }
    }

    /// Append raw bytes.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        if self.frozen.is_some() {
            return Err(EncodeError::Finalized);
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether [`Sink::finalize`] has been called.
    pub fn is_finalized(&self) -> bool {
        self.frozen.is_some()
    }

    /// View the current contents.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.frozen {
            Some(bytes) => &bytes[..],
            None => &self.buf[..],
        }
    }

    /// Freeze the sink and return everything written so far.
    ///
    /// Further writes and a second finalize fail with [`EncodeError::Finalized`].
    pub fn finalize(&mut self) -> Result<Bytes> {
        if self.frozen.is_some() {
            return Err(EncodeError::Finalized);
        }
        let bytes = std::mem::take(&mut self.buf).freeze();
        tracing::trace!(len = bytes.len(), "sink finalized");
        self.frozen = Some(bytes.clone());
        Ok(bytes)
    }

    /// Lowercase hex rendering of the current contents, no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Run a composite write, discarding its partial output if it fails.
    pub fn atomic<F>(&mut self, write: F) -> Result<usize>
    where
        F: FnOnce(&mut Self) -> Result<usize>,
    {
        let mark = self.buf.len();
        let result = write(self);
        if result.is_err() && self.frozen.is_none() {
            tracing::trace!(discarded = self.buf.len() - mark, "rolling back partial write");
            self.buf.truncate(mark);
        }
        result
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("len", &self.len())
            .field("finalized", &self.is_finalized())
            .finish()
    }
}
