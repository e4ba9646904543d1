//! The caller's half: building call payloads and reading reply payloads.
//!
//! Both operations take a reference to the function being called. The
//! reference is never invoked; it exists so the compiler checks the argument
//! tuple (and the reply type) against the exact signature the receiver
//! registered. Passing a different function than the one registered under
//! `name` compiles to a payload the receiver will misread; keeping the two
//! sides pointed at one shared `fn` item is the whole correctness contract.

use crate::{
    codec::{Codec, DecodeError, EncodeError},
    reply::FromReply,
    RpcFunction,
};
use serde::Serialize;

/// Encodes a call to `function`: the name, then `args` in declaration order.
///
/// `args` must be `function`'s wire-carried argument tuple; anything else is
/// a compile error. No registration is consulted here, so payloads can be
/// produced by processes that never build a dispatcher at all (e.g. writers
/// of a call log replayed elsewhere).
pub fn serialize_call<C, Ctx, Domain, F>(
    codec: &C,
    name: &str,
    _function: &F,
    args: Domain,
) -> Result<Vec<u8>, EncodeError>
where
    C: Codec,
    F: RpcFunction<Ctx, Domain>,
    Domain: Serialize,
{
    let mut payload = Vec::new();
    codec.encode(&mut payload, name)?;
    codec.encode(&mut payload, &args)?;
    Ok(payload)
}

/// Decodes a reply payload into `function`'s return type.
///
/// Only available when the return type carries a value; calling this for a
/// void-returning function does not compile. A truncated or malformed payload
/// fails with [`DecodeError`].
///
/// `name` is accepted for symmetry with [`serialize_call`] and is not read.
pub fn deserialize_reply<C, Ctx, Domain, F>(
    codec: &C,
    _name: &str,
    _function: &F,
    reply: &[u8],
) -> Result<F::Range, DecodeError>
where
    C: Codec,
    F: RpcFunction<Ctx, Domain>,
    F::Range: FromReply,
{
    F::Range::from_reply(codec, reply)
}
