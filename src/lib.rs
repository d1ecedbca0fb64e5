#![deny(missing_docs)]

//! A distributed `n`-of-`n` aggregate Ed25519/Curve25519 signature service.
//!
//! Independent [`peer::Peer`]s each hold an additive share `s_i` of a secret
//! key; together they produce signatures that verify under the aggregate
//! public key `A = Σ A_i` as if it were a single Ed25519 key, transformed to
//! the Curve25519 (Montgomery) convention clients actually verify against
//! (see [`verification_key`] and [`signature`]). No single peer ever holds
//! the full secret key, and every signature requires live cooperation of
//! every configured peer — this is `n`-of-`n`, not threshold, signing.
//!
//! The [`coordinator::Coordinator`] trait is the entry point: `keygen`,
//! `sign`, and `get_public_key` are the only operations an HTTP/identity
//! shell needs to drive this crate. [`coordinator::LocalCoordinator`] and
//! [`peer::LocalPeer`] are in-process implementations; [`peer::Peer`] is
//! written as a capability so a networked peer can implement the same
//! trait over the [`messages`] wire types without the coordinator caring
//! which it's talking to.

mod arithmetic;
pub mod batch;
pub mod coordinator;
mod error;
mod hash;
pub mod ids;
pub mod messages;
pub mod peer;
mod secret;
pub mod signature;
pub mod verification_key;

pub use coordinator::{Coordinator, CoordinatorConfig, LocalCoordinator};
pub use error::Error;
pub use ids::{ClientId, SessionId};
pub use peer::{LocalPeer, Peer};
pub use signature::Signature;
pub use verification_key::{CurvePublicKey, VerificationKey, VerificationKeyBytes};
