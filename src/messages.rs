//! Wire messages for the peer RPC protocol.
//!
//! This crate ships only the in-process [`crate::peer::LocalPeer`], but the
//! peer capability is meant to be polymorphic — a networked peer is a
//! natural variant. This module gives such an implementation a ready-made,
//! validated, serde-codable message set for the three RPCs, split across
//! header/payload/constants/validate/serialize submodules the way a
//! hand-rolled wire protocol usually is.

use crate::error::Error;
use crate::ids::{ClientId, SessionId};

#[cfg(test)]
mod arbitrary;
mod constants;
#[cfg(feature = "serde")]
mod serialize;
mod validate;

pub use validate::{MsgErr, Validate};

/// An endpoint in the peer protocol: the coordinator, or one numbered peer.
/// Serialized (see `serialize.rs`) as a single `u16`, with a sentinel value
/// standing in for the coordinator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// The coordinator, which issues requests and receives responses.
    Coordinator,
    /// Peer number `n` in the coordinator's fixed roster.
    Peer(u16),
}

/// The data required to serialize the common header fields of every
/// message: protocol version and the two endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// The message-framing version.
    pub version: MsgVersion,
    /// The endpoint sending this message.
    pub sender: Role,
    /// The endpoint this message is addressed to.
    pub receiver: Role,
}

/// The numeric value identifying the message-framing version.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MsgVersion(pub(crate) u8);

/// A complete peer-protocol message: header plus payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// The common routing/version fields.
    pub header: Header,
    /// The request or response data.
    pub payload: Payload,
}

/// The request or response payload carried by a [`Message`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Payload {
    /// Coordinator → peer: request this peer's share of the aggregate key.
    AiRequest { client_id: ClientId },
    /// Peer → coordinator: this peer's share `A_i`, as a canonical point
    /// encoding.
    AiResponse { a_i: [u8; 32] },
    /// Coordinator → peer: request a nonce commitment for a signing
    /// session.
    RiRequest {
        client_id: ClientId,
        session_id: SessionId,
        message: Vec<u8>,
    },
    /// Peer → coordinator: this peer's nonce commitment `R_i`.
    RiResponse { r_i: [u8; 32] },
    /// Coordinator → peer: request the response scalar for a session, now
    /// that the aggregate challenge `k` is known.
    SiRequest {
        client_id: ClientId,
        session_id: SessionId,
        k: [u8; 32],
    },
    /// Peer → coordinator: this peer's response scalar `S_i`.
    SiResponse { s_i: [u8; 32] },
    /// Either direction: the request failed with the given error kind.
    Failure { kind: WireError },
}

/// The error kinds that can be signaled over the wire. Carries only the
/// kind, never internal detail — the wire/API surface signals what went
/// wrong, not why, the same way [`crate::Error`] does internally.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WireError {
    /// The entropy source failed during key or nonce derivation.
    EntropyFailure,
    /// No record exists for the given client id.
    UnknownClient,
    /// No `r_i` is stored under the given session id.
    UnknownSession,
    /// `Ri` was called twice for the same session id with two different
    /// messages.
    DuplicateSession,
    /// A peer could not be reached, or returned a transport-level failure.
    PeerUnavailable,
    /// The produced signature did not verify under the returned public key.
    VerifyMismatch,
    /// A point, scalar, or signature could not be decoded from its wire
    /// encoding.
    MalformedEncoding,
}

impl From<Error> for WireError {
    fn from(e: Error) -> Self {
        match e {
            Error::EntropyFailure => WireError::EntropyFailure,
            Error::UnknownClient => WireError::UnknownClient,
            Error::UnknownSession => WireError::UnknownSession,
            Error::DuplicateSession => WireError::DuplicateSession,
            Error::PeerUnavailable => WireError::PeerUnavailable,
            Error::VerifyMismatch => WireError::VerifyMismatch,
            Error::MalformedEncoding => WireError::MalformedEncoding,
        }
    }
}

impl From<WireError> for Error {
    fn from(e: WireError) -> Self {
        match e {
            WireError::EntropyFailure => Error::EntropyFailure,
            WireError::UnknownClient => Error::UnknownClient,
            WireError::UnknownSession => Error::UnknownSession,
            WireError::DuplicateSession => Error::DuplicateSession,
            WireError::PeerUnavailable => Error::PeerUnavailable,
            WireError::VerifyMismatch => Error::VerifyMismatch,
            WireError::MalformedEncoding => Error::MalformedEncoding,
        }
    }
}
