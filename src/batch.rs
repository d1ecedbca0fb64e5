// -*- mode: rust; -*-
//
// This file is part of aggsig.
// Copyright (c) 2019-2021 Zcash Foundation
// See LICENSE for licensing information.

//! Verifies signatures produced by this crate's `Coordinator::sign`.
//!
//! Verification is nominally a client-side concern, but it's useful to ship
//! a verifier beside the signer — both for tests and for the coordinator's
//! own optional self-check. `Verifier` amortizes many such checks with a
//! random linear combination rather than verifying each signature alone.

use curve25519_dalek::constants::ED25519_BASEPOINT_TABLE;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::montgomery::MontgomeryPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;
use rand_core::{CryptoRng, RngCore};

use crate::arithmetic::scalar_from_canonical_bytes;
use crate::error::Error;
use crate::hash::ScalarHash;
use crate::signature::Signature;
use crate::verification_key::CurvePublicKey;

/// Reconstruct the Edwards aggregate key `A` from its Montgomery `u`-
/// coordinate plus a sign bit smuggled in a signature, inverting
/// `CurvePKFromEdPK`: `y = (u-1)/(u+1)`, then recompress with the given
/// sign.
fn edwards_from_montgomery(pk: &CurvePublicKey, sign_bit: u8) -> Result<EdwardsPoint, Error> {
    let u = MontgomeryPoint(pk.0);
    let edwards_y = u
        .to_edwards(sign_bit >> 7)
        .ok_or(Error::MalformedEncoding)?;
    Ok(edwards_y)
}

/// A single verification item: a public key, a signature, and the message
/// it purportedly covers. Decoupled from the lifetime of the message so
/// items can be collected before queuing into a [`Verifier`].
#[derive(Clone)]
pub struct Item {
    group_key: EdwardsPoint,
    r: EdwardsPoint,
    s: Scalar,
    k: Scalar,
}

impl Item {
    /// Build a verification item, decoding and range-checking the
    /// signature and reconstructing the Edwards form of `pk`.
    pub fn new(pk: &CurvePublicKey, sig: &Signature, message: &[u8]) -> Result<Self, Error> {
        let group_key = edwards_from_montgomery(pk, sig.edwards_sign_bit())?;
        let r = CompressedEdwardsY(sig.r_bytes())
            .decompress()
            .ok_or(Error::MalformedEncoding)?;
        let s = scalar_from_canonical_bytes(&sig.s_bytes())?;
        let k = ScalarHash::default()
            .update(sig.r_bytes())
            .update(group_key.compress().to_bytes())
            .update(message)
            .finalize();
        Ok(Item { group_key, r, s, k })
    }

    /// Non-batched verification of this item: checks `S*B = R + k*A`.
    pub fn verify_single(&self) -> Result<(), Error> {
        let lhs = &self.s * &ED25519_BASEPOINT_TABLE;
        let rhs = self.r + self.group_key * self.k;
        if lhs == rhs {
            Ok(())
        } else {
            Err(Error::VerifyMismatch)
        }
    }
}

/// Verify a single signature. Equivalent to `Item::new(..).verify_single()`
/// but without an intermediate named item, for the common one-off case
/// (e.g. `Coordinator`'s optional `verify_before_return` self-check).
pub fn verify_single(pk: &CurvePublicKey, sig: &Signature, message: &[u8]) -> Result<(), Error> {
    Item::new(pk, sig, message)?.verify_single()
}

/// A batch verification context.
///
/// Checks the combined equation
/// `Σ z_i*s_i*B = Σ z_i*R_i + Σ z_i*k_i*A_i`
/// for random 128-bit scalars `z_i`, one per queued item. A batch that
/// fails tells you *some* item is invalid but not which one; callers that
/// need to localize a failure should fall back to `Item::verify_single` on
/// each item in the batch.
#[derive(Default)]
pub struct Verifier {
    items: Vec<Item>,
}

impl Verifier {
    /// Construct a new, empty batch verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an item for verification.
    pub fn queue(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Perform batch verification, returning `Ok(())` if every queued
    /// signature is valid and `Err(Error::VerifyMismatch)` otherwise.
    pub fn verify<Rng: RngCore + CryptoRng>(self, mut rng: Rng) -> Result<(), Error> {
        let mut s_acc = Scalar::ZERO;
        let mut point_acc = EdwardsPoint::identity();

        for item in &self.items {
            let mut z_bytes = [0u8; 16];
            rng.fill_bytes(&mut z_bytes);
            let mut wide = [0u8; 32];
            wide[..16].copy_from_slice(&z_bytes);
            let z = Scalar::from_bytes_mod_order(wide);

            s_acc += z * item.s;
            point_acc += z * item.r + (z * item.k) * item.group_key;
        }

        let lhs = &s_acc * &ED25519_BASEPOINT_TABLE;
        if lhs == point_acc {
            Ok(())
        } else {
            Err(Error::VerifyMismatch)
        }
    }
}
