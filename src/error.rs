// -*- mode: rust; -*-
//
// This file is part of aggsig.
// Copyright (c) 2019-2021 Zcash Foundation
// See LICENSE for licensing information.

#[cfg(feature = "std")]
use thiserror::Error;

/// An error arising from the distributed signing protocol.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum Error {
    /// The entropy source failed during key or nonce derivation.
    #[cfg_attr(feature = "std", error("entropy source failed"))]
    EntropyFailure,
    /// No record exists for the given client id.
    #[cfg_attr(feature = "std", error("unknown client id"))]
    UnknownClient,
    /// No `r_i` is stored under the given session id.
    #[cfg_attr(feature = "std", error("unknown session id"))]
    UnknownSession,
    /// `Ri` was called twice for the same session id with two different
    /// messages; reusing `r_i` across distinct messages would leak `s_i`.
    #[cfg_attr(feature = "std", error("session id reused with a different message"))]
    DuplicateSession,
    /// A peer could not be reached, or returned a transport-level failure,
    /// during a signing or keygen phase.
    #[cfg_attr(feature = "std", error("a peer was unavailable"))]
    PeerUnavailable,
    /// The produced signature did not verify under the returned public key.
    /// Surfaced only by the optional self-check; indicates a protocol bug
    /// or an arithmetic mismatch, never a retry condition.
    #[cfg_attr(feature = "std", error("produced signature failed to verify"))]
    VerifyMismatch,
    /// A point, scalar, or signature could not be decoded from its wire
    /// encoding.
    #[cfg_attr(feature = "std", error("malformed wire encoding"))]
    MalformedEncoding,
}
