// -*- mode: rust; -*-
//
// This file is part of aggsig.
// Copyright (c) 2019-2021 Zcash Foundation
// See LICENSE for licensing information.

//! A peer's long-lived secret share `s_i`, and the per-session nonce
//! scalar `r_i`. Both are zeroized on drop; neither is ever serialized or
//! handed to the coordinator.

use curve25519_dalek::scalar::Scalar;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use zeroize::Zeroize;

use crate::arithmetic::ge_scalar_mult_base;
use crate::error::Error;
use crate::hash::{ScalarHash, NONCE_DOM2_PREFIX};
use curve25519_dalek::edwards::EdwardsPoint;

/// A peer's secret key share `s_i`, derived once per client id and held for
/// the lifetime of the peer process.
#[derive(Clone)]
pub(crate) struct Secret(pub(crate) Scalar);

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Secret {
    /// Sample fresh randomness and derive `s_i` via RFC 8032 seed-to-scalar
    /// clamping: 32 random bytes are SHA-512-expanded, and the low half of
    /// the digest is clamped (bit 254 set, bottom three bits and top bit
    /// cleared) to form the scalar.
    pub(crate) fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        let mut seed = [0u8; 32];
        rng.try_fill_bytes(&mut seed)
            .map_err(|_| Error::EntropyFailure)?;

        let hash = Sha512::digest(seed);
        seed.zeroize();

        let mut clamp_input = [0u8; 32];
        clamp_input.copy_from_slice(&hash[..32]);
        let scalar = Scalar::from_bits_clamped(clamp_input);
        clamp_input.zeroize();

        Ok(Secret(scalar))
    }

    /// Compute `A_i = s_i * B`.
    pub(crate) fn public(&self) -> EdwardsPoint {
        ge_scalar_mult_base(&self.0)
    }

    /// Derive a fresh synthetic nonce `r_i = ScReduce(SHA-512(dom2 ‖ s_i ‖ m
    /// ‖ rand64))`: deterministic in `(s_i, m)` plus randomized, so a weak
    /// RNG degrades to deterministic RFC-8032 nonce derivation rather than
    /// to `s_i` disclosure.
    pub(crate) fn derive_nonce<R: RngCore + CryptoRng>(
        &self,
        message: &[u8],
        rng: &mut R,
    ) -> Result<Nonce, Error> {
        let mut random = [0u8; 64];
        rng.try_fill_bytes(&mut random)
            .map_err(|_| Error::EntropyFailure)?;

        let r = ScalarHash::default()
            .update(NONCE_DOM2_PREFIX)
            .update(self.0.as_bytes())
            .update(message)
            .update(random)
            .finalize();

        random.zeroize();
        Ok(Nonce(r))
    }
}

/// A per-session ephemeral nonce `r_i`. The invariant this type exists to
/// protect: the `r_i` written when `Ri` is first called for a session is
/// exactly the value read back when `Si` is called for that session, and it
/// is read at most once.
#[derive(Clone)]
pub(crate) struct Nonce(pub(crate) Scalar);

impl Drop for Nonce {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Nonce {
    /// Compute `R_i = r_i * B`.
    pub(crate) fn commitment(&self) -> EdwardsPoint {
        ge_scalar_mult_base(&self.0)
    }
}
