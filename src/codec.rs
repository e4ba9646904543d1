//! The codec seam: how values become bytes and come back.
//!
//! The dispatch core is generic over a [`Codec`]. A codec writes values into a
//! growing byte sink and reads them back from a shrinking byte source, in the
//! same order. The provided [`Bincode`] codec covers the common case; anything
//! that can round-trip serde values in order can stand in for it.

use serde::{de::DeserializeOwned, Serialize};
use std::error::Error;
use thiserror::Error;

/// An ordered encode/decode pair over serde values.
///
/// `decode` must consume exactly the bytes that a matching `encode` produced
/// and leave the remainder of the source untouched, so that a sequence of
/// writes can be mirrored by a sequence of reads. A short or malformed source
/// is a [`DecodeError`]; trailing bytes left behind by a caller that stops
/// reading early are that caller's problem and are not detected here.
pub trait Codec: Clone + Send + Sync + 'static {
    fn encode<T: Serialize + ?Sized>(
        &self,
        sink: &mut Vec<u8>,
        value: &T,
    ) -> Result<(), EncodeError>;

    fn decode<T: DeserializeOwned>(&self, source: &mut &[u8]) -> Result<T, DecodeError>;
}

/// The default codec: bincode's fixed-int little-endian encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bincode;

impl Codec for Bincode {
    fn encode<T: Serialize + ?Sized>(
        &self,
        sink: &mut Vec<u8>,
        value: &T,
    ) -> Result<(), EncodeError> {
        bincode::serialize_into(sink, value).map_err(EncodeError::new)
    }

    fn decode<T: DeserializeOwned>(&self, source: &mut &[u8]) -> Result<T, DecodeError> {
        bincode::deserialize_from(&mut *source).map_err(DecodeError::new)
    }
}

/// A value could not be encoded.
#[derive(Debug, Error)]
#[error("encoding value: {0}")]
pub struct EncodeError(Box<dyn Error + Send + Sync>);

impl EncodeError {
    pub fn new(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// A payload could not be decoded: malformed, truncated, or the wrong shape
/// for the requested type.
#[derive(Debug, Error)]
#[error("decoding payload: {0}")]
pub struct DecodeError(Box<dyn Error + Send + Sync>);

impl DecodeError {
    pub fn new(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}
