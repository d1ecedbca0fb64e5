// -*- mode: rust; -*-
//
// This file is part of aggsig.
// Copyright (c) 2019-2021 Zcash Foundation
// See LICENSE for licensing information.

//! The peer capability: the unit that actually holds a long-term secret
//! share.
//!
//! [`Peer`] is a capability set (`ai`, `ri`, `si`), not a concrete
//! transport. [`LocalPeer`] is the in-process implementation; a networked
//! peer would implement the same trait over the `messages` wire types and
//! is not built here, since no transport is in scope.

use std::collections::HashMap;
use std::sync::RwLock;

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};

use crate::arithmetic::sc_mul_add;
use crate::error::Error;
use crate::ids::{ClientId, SessionId};
use crate::secret::{Nonce, Secret};

/// The capability a peer exposes: hold a per-client secret share, and
/// answer the two-phase nonce-commitment / response queries for a signing
/// session. Implementations MUST NOT ever return `s_i` or `r_i` to a
/// caller — only `A_i`, `R_i`, and `S_i`.
pub trait Peer {
    /// Return this peer's share `A_i` of the aggregate key for `client_id`,
    /// generating and storing a fresh `s_i` the first time this client id
    /// is seen. Idempotent for the lifetime of the peer.
    fn ai(&self, client_id: &ClientId) -> Result<EdwardsPoint, Error>;

    /// Return this peer's nonce commitment `R_i` for `session_id`, deriving
    /// and storing a fresh `r_i` the first time this session id is seen.
    /// A second call with the same `session_id` and the same `message`
    /// returns the already-computed `R_i`; a mismatched message fails
    /// [`Error::DuplicateSession`].
    fn ri(
        &self,
        client_id: &ClientId,
        session_id: &SessionId,
        message: &[u8],
    ) -> Result<EdwardsPoint, Error>;

    /// Return this peer's response scalar `S_i = k*s_i + r_i mod ℓ` for
    /// `session_id`, and delete the session's stored `r_i` — closing the
    /// nonce-reuse window exactly at the point it could otherwise be
    /// exploited.
    fn si(&self, client_id: &ClientId, session_id: &SessionId, k: Scalar) -> Result<Scalar, Error>;
}

impl<T: Peer + ?Sized> Peer for &T {
    fn ai(&self, client_id: &ClientId) -> Result<EdwardsPoint, Error> {
        (**self).ai(client_id)
    }

    fn ri(
        &self,
        client_id: &ClientId,
        session_id: &SessionId,
        message: &[u8],
    ) -> Result<EdwardsPoint, Error> {
        (**self).ri(client_id, session_id, message)
    }

    fn si(&self, client_id: &ClientId, session_id: &SessionId, k: Scalar) -> Result<Scalar, Error> {
        (**self).si(client_id, session_id, k)
    }
}

struct ClientRecord {
    secret: Secret,
    public: EdwardsPoint,
}

struct SessionRecord {
    nonce: Nonce,
    message_hash: [u8; 64],
}

/// An in-process [`Peer`]. Holds its client and session state behind a
/// `RwLock` each: many readers, rare writers, and single-writer exclusion
/// is sufficient since both maps are write-once-per-key.
pub struct LocalPeer<R> {
    rng: RwLock<R>,
    clients: RwLock<HashMap<ClientId, ClientRecord>>,
    sessions: RwLock<HashMap<SessionId, SessionRecord>>,
}

impl<R: RngCore + CryptoRng> LocalPeer<R> {
    /// Construct a peer that draws entropy from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng: RwLock::new(rng),
            clients: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Returns `true` once `Ai` has been called for `client_id`. Exposed for
    /// tests that check idempotence without depending on timing.
    pub fn has_client(&self, client_id: &ClientId) -> bool {
        self.clients.read().unwrap().contains_key(client_id)
    }

    /// Returns `true` while a session is still live (after `Ri`, before
    /// `Si`). Exposed for tests of the session lifecycle.
    pub fn has_session(&self, session_id: &SessionId) -> bool {
        self.sessions.read().unwrap().contains_key(session_id)
    }
}

impl<R: RngCore + CryptoRng> Peer for LocalPeer<R> {
    fn ai(&self, client_id: &ClientId) -> Result<EdwardsPoint, Error> {
        if let Some(record) = self.clients.read().unwrap().get(client_id) {
            return Ok(record.public);
        }

        // The read-check / write-if-absent sequence must be atomic under
        // the write lock, or two concurrent `ai` calls for a never-before
        // seen client id could each mint a distinct `s_i`, silently
        // corrupting the aggregate key.
        let mut clients = self.clients.write().unwrap();
        if let Some(record) = clients.get(client_id) {
            return Ok(record.public);
        }

        let secret = {
            let mut rng = self.rng.write().unwrap();
            Secret::generate(&mut *rng)?
        };
        let public = secret.public();
        clients.insert(client_id.clone(), ClientRecord { secret, public });
        Ok(public)
    }

    fn ri(
        &self,
        client_id: &ClientId,
        session_id: &SessionId,
        message: &[u8],
    ) -> Result<EdwardsPoint, Error> {
        let message_hash: [u8; 64] = Sha512::digest(message).into();

        if let Some(session) = self.sessions.read().unwrap().get(session_id) {
            if session.message_hash != message_hash {
                return Err(Error::DuplicateSession);
            }
            return Ok(session.nonce.commitment());
        }

        let secret_ptr = {
            let clients = self.clients.read().unwrap();
            let record = clients.get(client_id).ok_or(Error::UnknownClient)?;
            record.secret.clone()
        };

        let nonce = {
            let mut rng = self.rng.write().unwrap();
            secret_ptr.derive_nonce(message, &mut *rng)?
        };
        let commitment = nonce.commitment();

        let mut sessions = self.sessions.write().unwrap();
        // Another thread may have raced us for this exact session id; treat
        // the tuple (session_id, message) as the source of truth.
        if let Some(existing) = sessions.get(session_id) {
            if existing.message_hash != message_hash {
                return Err(Error::DuplicateSession);
            }
            return Ok(existing.nonce.commitment());
        }
        sessions.insert(
            session_id.clone(),
            SessionRecord {
                nonce,
                message_hash,
            },
        );
        Ok(commitment)
    }

    fn si(&self, client_id: &ClientId, session_id: &SessionId, k: Scalar) -> Result<Scalar, Error> {
        if !self.clients.read().unwrap().contains_key(client_id) {
            return Err(Error::UnknownClient);
        }

        let session = self
            .sessions
            .write()
            .unwrap()
            .remove(session_id)
            .ok_or(Error::UnknownSession)?;

        let s_i = {
            let clients = self.clients.read().unwrap();
            let record = clients.get(client_id).ok_or(Error::UnknownClient)?;
            sc_mul_add(&k, &record.secret.0, &session.nonce.0)
        };
        Ok(s_i)
    }
}
