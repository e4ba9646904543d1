/// Implements [`IntoReply`](crate::IntoReply) and
/// [`FromReply`](crate::FromReply) for one or more serde-capable types,
/// letting them be used as dispatched return values.
///
/// The crate already covers primitives, `String`, `Vec`, `Option`, and small
/// tuples; use this for your own types:
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Stats {
///     hits: u64,
///     misses: u64,
/// }
///
/// dispatchly::reply_value!(Stats);
/// ```
#[macro_export]
macro_rules! reply_value {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::IntoReply for $ty {
            // The codec generic carries an unlikely name so it cannot shadow
            // a caller's type.
            fn into_reply<__Codec: $crate::Codec>(
                self,
                codec: &__Codec,
            ) -> Result<$crate::Reply, $crate::EncodeError> {
                let mut payload = Vec::new();
                codec.encode(&mut payload, &self)?;
                Ok($crate::Reply::Value(payload))
            }
        }

        impl $crate::FromReply for $ty {
            fn from_reply<__Codec: $crate::Codec>(
                codec: &__Codec,
                mut payload: &[u8],
            ) -> Result<Self, $crate::DecodeError> {
                codec.decode(&mut payload)
            }
        }
    )+};
}
