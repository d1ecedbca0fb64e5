// -*- mode: rust; -*-
//
// This file is part of aggsig.
// Copyright (c) 2019-2021 Zcash Foundation
// See LICENSE for licensing information.

//! Opaque identifiers used throughout the protocol.
//!
//! `ClientId` names a registered key-holder across `Keygen`/`Sign` calls;
//! `SessionId` names one in-flight `(clientID, message)` tuple across the two
//! signing phases. Both are validated newtypes over `String` rather than bare
//! strings, so a malformed identifier is rejected once, at the boundary,
//! instead of being re-checked (or silently trusted) at every call site.

use std::fmt;

use crate::Error;

/// The recommended maximum length, in bytes, of a [`ClientId`].
pub const MAX_CLIENT_ID_LEN: usize = 256;

/// A stable, opaque identity for a registered client.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientId(String);

impl ClientId {
    /// Wrap `id` as a [`ClientId`], rejecting the empty string and anything
    /// longer than [`MAX_CLIENT_ID_LEN`].
    pub fn new(id: impl Into<String>) -> Result<Self, Error> {
        let id = id.into();
        if id.is_empty() || id.len() > MAX_CLIENT_ID_LEN {
            return Err(Error::MalformedEncoding);
        }
        Ok(Self(id))
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The length, in bytes, of a coordinator-generated [`SessionId`].
pub const SESSION_ID_LEN: usize = 16;

const SESSION_ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// An opaque, coordinator-generated identifier naming one `(clientID,
/// message)` tuple across the two signing phases.
///
/// Collision probability within a peer's live session set is negligible:
/// with [`SESSION_ID_LEN`] characters drawn from a 36-symbol charset, there
/// are `36^16` possible values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh, random session id.
    pub fn generate<R: rand_core::RngCore>(rng: &mut R) -> Self {
        let id: String = (0..SESSION_ID_LEN)
            .map(|_| {
                let idx = (rng.next_u32() as usize) % SESSION_ID_CHARSET.len();
                SESSION_ID_CHARSET[idx] as char
            })
            .collect();
        Self(id)
    }

    /// Wrap an existing string as a session id, e.g. one received over the
    /// wire. Rejects the empty string.
    pub fn from_wire(id: impl Into<String>) -> Result<Self, Error> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::MalformedEncoding);
        }
        Ok(Self(id))
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
