//! Reply payloads and the traits that marshal return values into them.
//!
//! A void-returning function and a value-returning one look identical once
//! type-erased into the dispatcher, so the "did this call produce a value"
//! distinction has to be carried explicitly: [`IntoReply`] maps `()` to
//! [`Reply::Empty`] and everything else to an encoded [`Reply::Value`].
//! Decoding a reply goes through [`FromReply`], which `()` deliberately does
//! not implement, so asking for the result of a void function is a compile
//! error rather than a bad read.

use crate::codec::{Codec, DecodeError, EncodeError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// The outcome payload of one invocation: either nothing (the function
/// returns `()`) or one encoded value.
///
/// Serde-derived so hosts can forward it over whatever transport they use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    Empty,
    Value(Vec<u8>),
}

impl Reply {
    /// Whether the invoked function produced a value.
    pub fn carries_value(&self) -> bool {
        matches!(self, Reply::Value(_))
    }

    /// The encoded result, empty for [`Reply::Empty`].
    pub fn payload(&self) -> &[u8] {
        match self {
            Reply::Empty => &[],
            Reply::Value(payload) => payload,
        }
    }

    pub fn into_payload(self) -> Option<Vec<u8>> {
        match self {
            Reply::Empty => None,
            Reply::Value(payload) => Some(payload),
        }
    }
}

/// Conversion of a function's return value into a [`Reply`].
pub trait IntoReply {
    fn into_reply<C: Codec>(self, codec: &C) -> Result<Reply, EncodeError>;
}

/// Decoding of a [`Reply`] payload back into a return value.
///
/// Implemented for value types only; `()` has no reply payload to decode.
pub trait FromReply: Sized {
    fn from_reply<C: Codec>(codec: &C, payload: &[u8]) -> Result<Self, DecodeError>;
}

// Void functions encode nothing and report no result.
impl IntoReply for () {
    fn into_reply<C: Codec>(self, _codec: &C) -> Result<Reply, EncodeError> {
        Ok(Reply::Empty)
    }
}

crate::reply_value!(
    bool, char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64, String,
);

impl<T: Serialize> IntoReply for Vec<T> {
    fn into_reply<C: Codec>(self, codec: &C) -> Result<Reply, EncodeError> {
        let mut payload = Vec::new();
        codec.encode(&mut payload, &self)?;
        Ok(Reply::Value(payload))
    }
}

impl<T: DeserializeOwned> FromReply for Vec<T> {
    fn from_reply<C: Codec>(codec: &C, mut payload: &[u8]) -> Result<Self, DecodeError> {
        codec.decode(&mut payload)
    }
}

impl<T: Serialize> IntoReply for Option<T> {
    fn into_reply<C: Codec>(self, codec: &C) -> Result<Reply, EncodeError> {
        let mut payload = Vec::new();
        codec.encode(&mut payload, &self)?;
        Ok(Reply::Value(payload))
    }
}

impl<T: DeserializeOwned> FromReply for Option<T> {
    fn from_reply<C: Codec>(codec: &C, mut payload: &[u8]) -> Result<Self, DecodeError> {
        codec.decode(&mut payload)
    }
}

// The tuple element idents must not collide with the method-level codec
// generic below, so they get their own `T*` namespace.
macro_rules! impl_reply_tuple {
    ($($ty:ident),+) => {
        impl<$($ty: Serialize),+> IntoReply for ($($ty,)+) {
            fn into_reply<C: Codec>(self, codec: &C) -> Result<Reply, EncodeError> {
                let mut payload = Vec::new();
                codec.encode(&mut payload, &self)?;
                Ok(Reply::Value(payload))
            }
        }

        impl<$($ty: DeserializeOwned),+> FromReply for ($($ty,)+) {
            fn from_reply<C: Codec>(codec: &C, mut payload: &[u8]) -> Result<Self, DecodeError> {
                codec.decode(&mut payload)
            }
        }
    };
}

impl_reply_tuple!(T0);
impl_reply_tuple!(T0, T1);
impl_reply_tuple!(T0, T1, T2);
impl_reply_tuple!(T0, T1, T2, T3);
