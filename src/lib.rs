//! Name-addressed function dispatch with typed argument marshaling.
//!
//! A caller encodes a function name plus its arguments into a byte payload; a
//! [`Dispatcher`] decodes the payload, invokes the matching registered
//! function, and hands back the encoded return value (if the function produces
//! one). How payloads move between the two sides is up to the caller; this
//! crate only produces and consumes in-memory buffers.
//!
//! Registered functions take their wire-carried arguments followed by one
//! trailing context argument. The context is supplied locally at every
//! [`Dispatcher::invoke`] call and never travels inside a payload, which makes
//! it the place for request ids, connection handles, and similar
//! receiver-side state. Use `()` when there is nothing to pass.
//!
//! ```
//! use dispatchly::{deserialize_reply, serialize_call, Bincode, Dispatcher};
//!
//! fn add(x: i64, y: i64, _ctx: ()) -> i64 {
//!     x + y
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = Dispatcher::builder();
//! builder.register("add", add)?;
//! let dispatcher = builder.build();
//!
//! // Caller side: the `add` reference ties the argument tuple and the reply
//! // type to the registered signature at compile time.
//! let call = serialize_call(&Bincode, "add", &add, (3i64, 4i64))?;
//!
//! // Receiver side.
//! let reply = dispatcher.invoke(&call, ())?;
//!
//! // Back on the caller side.
//! let sum: i64 = deserialize_reply(&Bincode, "add", &add, reply.payload())?;
//! assert_eq!(sum, 7);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod dispatcher;
mod macros;
pub mod reply;

pub use client::{deserialize_reply, serialize_call};
pub use codec::{Bincode, Codec, DecodeError, EncodeError};
pub use dispatcher::{DispatchError, Dispatcher, DispatcherBuilder, RegisterError};
pub use reply::{FromReply, IntoReply, Reply};

/// A function callable through a [`Dispatcher`].
///
/// `Domain` is the tuple of wire-carried parameter types, in declaration
/// order; `Ctx` is the trailing context parameter, supplied at invocation and
/// never serialized. `Range` is the return type.
///
/// Implemented for every `Fn(A0, .., An, Ctx) -> Ret` up to eight wire-carried
/// arguments, so plain functions and closures register directly. The split
/// between `Domain` and `Ctx` happens entirely in the type system: registering
/// a function whose trailing parameter does not match the dispatcher's context
/// type is a compile error, not a runtime one.
pub trait RpcFunction<Ctx, Domain> {
    type Range: IntoReply;

    fn call(&self, args: Domain, ctx: Ctx) -> Self::Range;
}

macro_rules! impl_rpc_function {
    ($(($arg:ident, $ty:ident)),*) => {
        impl<Func, Ctx, Ret, $($ty),*> RpcFunction<Ctx, ($($ty,)*)> for Func
        where
            Func: Fn($($ty,)* Ctx) -> Ret,
            Ret: IntoReply,
        {
            type Range = Ret;

            fn call(&self, ($($arg,)*): ($($ty,)*), ctx: Ctx) -> Ret {
                self($($arg,)* ctx)
            }
        }
    };
}

impl_rpc_function!();
impl_rpc_function!((a0, A0));
impl_rpc_function!((a0, A0), (a1, A1));
impl_rpc_function!((a0, A0), (a1, A1), (a2, A2));
impl_rpc_function!((a0, A0), (a1, A1), (a2, A2), (a3, A3));
impl_rpc_function!((a0, A0), (a1, A1), (a2, A2), (a3, A3), (a4, A4));
impl_rpc_function!((a0, A0), (a1, A1), (a2, A2), (a3, A3), (a4, A4), (a5, A5));
impl_rpc_function!(
    (a0, A0),
    (a1, A1),
    (a2, A2),
    (a3, A3),
    (a4, A4),
    (a5, A5),
    (a6, A6)
);
impl_rpc_function!(
    (a0, A0),
    (a1, A1),
    (a2, A2),
    (a3, A3),
    (a4, A4),
    (a5, A5),
    (a6, A6),
    (a7, A7)
);
