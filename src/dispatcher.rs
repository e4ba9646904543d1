//! The registry of invokable functions and its two-phase lifecycle.
//!
//! Registration happens on a [`DispatcherBuilder`]; [`build`] freezes the set
//! into an immutable [`Dispatcher`] that only serves calls. There is no way
//! back: hot-swapping functions means building a fresh dispatcher and swapping
//! the reference to it.

use crate::{
    codec::{Bincode, Codec, DecodeError, EncodeError},
    reply::{IntoReply, Reply},
    RpcFunction,
};
use serde::de::DeserializeOwned;
use std::collections::{btree_map::Entry, BTreeMap};
use thiserror::Error;
use tracing::{debug, trace};

/// The stored, type-erased form of one registered function. Decodes its
/// argument tuple from the source, invokes, and marshals the return value.
type Invokable<Ctx> =
    Box<dyn Fn(&mut &[u8], Ctx) -> Result<Reply, DispatchError> + Send + Sync>;

/// Collects named functions before serving begins.
///
/// All functions registered on one builder share the context type `Ctx` and
/// the codec `C`. Registration is exclusive by construction; once [`build`]
/// has run, the resulting [`Dispatcher`] is read-only and safe to share across
/// threads.
///
/// [`build`]: DispatcherBuilder::build
pub struct DispatcherBuilder<Ctx = (), C: Codec = Bincode> {
    codec: C,
    rpc_functions: BTreeMap<String, Invokable<Ctx>>,
}

impl<Ctx: 'static> DispatcherBuilder<Ctx, Bincode> {
    pub fn new() -> Self {
        Self::with_codec(Bincode)
    }
}

impl<Ctx: 'static> Default for DispatcherBuilder<Ctx, Bincode> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx: 'static, C: Codec> DispatcherBuilder<Ctx, C> {
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            rpc_functions: BTreeMap::new(),
        }
    }

    /// Registers `function` under `name`.
    ///
    /// The function's wire-carried arguments are decoded as `Domain`, a tuple
    /// in declaration order; its trailing parameter must be the builder's
    /// `Ctx`. A name can be taken only once: registering it again fails with
    /// [`RegisterError::DuplicateName`] and leaves the existing entry in
    /// place.
    pub fn register<Domain, F>(&mut self, name: &str, function: F) -> Result<(), RegisterError>
    where
        F: RpcFunction<Ctx, Domain> + Send + Sync + 'static,
        Domain: DeserializeOwned + 'static,
    {
        let slot = match self.rpc_functions.entry(name.to_owned()) {
            Entry::Occupied(_) => return Err(RegisterError::DuplicateName(name.to_owned())),
            Entry::Vacant(slot) => slot,
        };

        let codec = self.codec.clone();
        let invokable: Invokable<Ctx> = Box::new(move |source, ctx| {
            // A decode failure aborts here: the function is never invoked
            // with partial or defaulted arguments.
            let args: Domain = codec.decode(source)?;
            let retval = function.call(args, ctx);
            Ok(retval.into_reply(&codec)?)
        });

        debug!(name, "registered function");
        slot.insert(invokable);
        Ok(())
    }

    /// Freezes the registered set into a serving [`Dispatcher`].
    pub fn build(self) -> Dispatcher<Ctx, C> {
        Dispatcher {
            codec: self.codec,
            rpc_functions: self.rpc_functions,
        }
    }
}

/// A set of named functions that can be invoked with an encoded call payload.
///
/// Lookup and invocation are read-only; a `Dispatcher` whose context and
/// codec are `Send + Sync` can serve concurrent calls without locking. Each
/// call reads from its own source slice and writes a fresh reply buffer, so
/// invocations never share codec state.
pub struct Dispatcher<Ctx = (), C: Codec = Bincode> {
    codec: C,
    rpc_functions: BTreeMap<String, Invokable<Ctx>>,
}

impl<Ctx: 'static> Dispatcher<Ctx, Bincode> {
    pub fn builder() -> DispatcherBuilder<Ctx, Bincode> {
        DispatcherBuilder::new()
    }
}

impl<Ctx, C: Codec> Dispatcher<Ctx, C> {
    /// Invokes the function named inside `call` with its decoded arguments
    /// followed by `ctx`.
    ///
    /// `call` is a payload from [`serialize_call`](crate::serialize_call):
    /// the function name first, then the argument tuple. The returned
    /// [`Reply`] carries the encoded result, or [`Reply::Empty`] for a
    /// void-returning function.
    ///
    /// An unknown name fails with [`DispatchError::NoSuchFunction`] before
    /// any arguments are decoded. A malformed or truncated payload fails with
    /// [`DispatchError::Decode`] without running the function. A result that
    /// fails to encode surfaces as [`DispatchError::Encode`], but by then the
    /// function has already run; its side effects stand.
    pub fn invoke(&self, call: &[u8], ctx: Ctx) -> Result<Reply, DispatchError> {
        let mut source = call;
        let name: String = self.codec.decode(&mut source)?;
        trace!(name = %name, "dispatching call");
        let function = self
            .rpc_functions
            .get(&name)
            .ok_or(DispatchError::NoSuchFunction(name))?;
        function(&mut source, ctx)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rpc_functions.contains_key(name)
    }

    /// Registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rpc_functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rpc_functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rpc_functions.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no function registered under {0:?}")]
    NoSuchFunction(String),

    #[error("decoding call: {0}")]
    Decode(#[from] DecodeError),

    #[error("encoding reply: {0}")]
    Encode(#[from] EncodeError),
}

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("a function is already registered under {0:?}")]
    DuplicateName(String),
}
