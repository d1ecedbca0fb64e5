// -*- mode: rust; -*-
//
// This file is part of aggsig.
// Copyright (c) 2019-2021 Zcash Foundation
// See LICENSE for licensing information.

//! The coordinator: stateless per request apart from the aggregate-public-
//! key cache, orchestrating the two-phase fan-out to peers.

use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::RwLock;

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use rand_core::{CryptoRng, RngCore};

use crate::arithmetic::sc_mul_add;
use crate::error::Error;
use crate::hash::ScalarHash;
use crate::ids::{ClientId, SessionId};
use crate::peer::Peer;
use crate::signature::{RawSignature, Signature};
use crate::verification_key::{CurvePublicKey, VerificationKey};

/// Construction-time configuration for a [`LocalCoordinator`]. Every
/// configured peer participates in every session — there is no threshold,
/// only the full `n`-of-`n` set.
pub struct CoordinatorConfig {
    /// Run the optional belt-and-suspenders verification check after
    /// assembling each signature, surfacing [`Error::VerifyMismatch`]
    /// instead of returning an unverifiable signature. Off by default: the
    /// core returns exactly one signature attempt, and this self-check is
    /// opt-in, never a silent retry loop.
    pub verify_before_return: bool,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            verify_before_return: false,
        }
    }
}

/// The operations the coordinator exposes to the HTTP/identity shell.
/// Stateless apart from the aggregate-key cache.
pub trait Coordinator {
    /// Fan out `Ai` to every peer, aggregate `A = Σ A_i`, and cache it. A
    /// second call for the same `client_id` returns the cached key without
    /// re-contacting peers (idempotent).
    fn keygen(&self, client_id: &ClientId) -> Result<CurvePublicKey, Error>;

    /// Run the two-phase signing protocol for `client_id` over `message`,
    /// returning the Curve25519-verifiable signature.
    fn sign(&self, client_id: &ClientId, message: &[u8]) -> Result<Signature, Error>;

    /// Pure lookup into the aggregate-key cache.
    fn get_public_key(&self, client_id: &ClientId) -> Option<CurvePublicKey>;
}

/// The in-process coordinator: owns a fixed peer roster and the
/// `clientID → A` cache.
pub struct LocalCoordinator<P, R> {
    peers: Vec<P>,
    config: CoordinatorConfig,
    rng: RwLock<R>,
    keys: RwLock<HashMap<ClientId, VerificationKey>>,
}

impl<P: Peer + Sync, R: RngCore + CryptoRng> LocalCoordinator<P, R> {
    /// Construct a coordinator over a fixed `peers` roster. `sign`/`keygen`
    /// contact every peer in this set; the order they're listed in is
    /// irrelevant, since the aggregates are commutative sums.
    pub fn new(peers: Vec<P>, config: CoordinatorConfig, rng: R) -> Self {
        Self {
            peers,
            config,
            rng: RwLock::new(rng),
            keys: RwLock::new(HashMap::new()),
        }
    }

    /// Fan out `op` to every peer concurrently on scoped threads, and
    /// collect all responses. On the first peer error, returns that error
    /// immediately; the scope's receiver end is dropped on return, so peer
    /// threads that later try to send on it simply discard the result,
    /// cancelling the remaining work without needing an explicit
    /// cancellation token.
    fn fan_out<T, F>(&self, op: F) -> Result<Vec<T>, Error>
    where
        T: Send,
        F: Fn(&P) -> Result<T, Error> + Sync,
    {
        let (tx, rx) = mpsc::channel::<(usize, Result<T, Error>)>();

        std::thread::scope(|scope| {
            for (i, peer) in self.peers.iter().enumerate() {
                let tx = tx.clone();
                let op = &op;
                scope.spawn(move || {
                    let result = op(peer);
                    let _ = tx.send((i, result));
                });
            }
            drop(tx);

            let mut out: Vec<Option<T>> = (0..self.peers.len()).map(|_| None).collect();
            for _ in 0..self.peers.len() {
                match rx.recv() {
                    Ok((i, Ok(value))) => out[i] = Some(value),
                    Ok((_, Err(e))) => return Err(e),
                    Err(_) => return Err(Error::PeerUnavailable),
                }
            }
            Ok(out.into_iter().map(|v| v.expect("all slots filled")).collect())
        })
    }

    fn fresh_session_id(&self) -> SessionId {
        let mut rng = self.rng.write().unwrap();
        SessionId::generate(&mut *rng)
    }
}

impl<P: Peer + Sync, R: RngCore + CryptoRng> Coordinator for LocalCoordinator<P, R> {
    fn keygen(&self, client_id: &ClientId) -> Result<CurvePublicKey, Error> {
        if let Some(key) = self.keys.read().unwrap().get(client_id) {
            return Ok(key.to_curve25519_public_key());
        }

        let contributions: Vec<EdwardsPoint> = self.fan_out(|peer| peer.ai(client_id))?;
        let aggregate = VerificationKey::aggregate(&contributions);

        // The cache is never overwritten once set; a racing concurrent
        // `Keygen` for the same client id is harmless since `Ai` is
        // idempotent per peer and produces the same `A` either way.
        let mut keys = self.keys.write().unwrap();
        let key = keys.entry(client_id.clone()).or_insert(aggregate);
        Ok(key.to_curve25519_public_key())
    }

    fn sign(&self, client_id: &ClientId, message: &[u8]) -> Result<Signature, Error> {
        let aggregate = *self
            .keys
            .read()
            .unwrap()
            .get(client_id)
            .ok_or(Error::UnknownClient)?;

        let session_id = self.fresh_session_id();

        // Phase 1: collect R_i, aggregate R. Must complete in full before
        // phase 2 begins, since the challenge k depends on the aggregate R.
        let commitments: Vec<EdwardsPoint> =
            self.fan_out(|peer| peer.ri(client_id, &session_id, message))?;
        let r = VerificationKey::aggregate(&commitments);

        let k = challenge(&r.0, &aggregate.0, message);

        // Phase 2: collect S_i, aggregate S via repeated ScMulAdd rather
        // than a plain field add — a plain `+` would be wrong whenever an
        // S_i is close enough to ℓ that the sum wraps.
        let responses: Vec<Scalar> =
            self.fan_out(|peer| peer.si(client_id, &session_id, k))?;
        let one = Scalar::from(1u64);
        let s = responses
            .iter()
            .fold(Scalar::ZERO, |acc, s_i| sc_mul_add(&one, &acc, s_i));

        let raw = RawSignature { r: r.0, s };
        let signature = raw.into_curve_signature(&aggregate);

        if self.config.verify_before_return {
            crate::batch::verify_single(&aggregate.to_curve25519_public_key(), &signature, message)
                .map_err(|_| Error::VerifyMismatch)?;
        }

        Ok(signature)
    }

    fn get_public_key(&self, client_id: &ClientId) -> Option<CurvePublicKey> {
        self.keys
            .read()
            .unwrap()
            .get(client_id)
            .map(VerificationKey::to_curve25519_public_key)
    }
}

/// `k = ScReduce(SHA-512(encode(R) ‖ encode(A) ‖ m))`, the Fiat-Shamir
/// challenge binding the aggregate commitment, key, and message.
fn challenge(r: &EdwardsPoint, a: &EdwardsPoint, message: &[u8]) -> Scalar {
    use crate::arithmetic::point_to_bytes;
    ScalarHash::default()
        .update(point_to_bytes(r))
        .update(point_to_bytes(a))
        .update(message)
        .finalize()
}
