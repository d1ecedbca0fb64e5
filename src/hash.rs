// -*- mode: rust; -*-
//
// This file is part of aggsig.
// Copyright (c) 2019-2021 Zcash Foundation
// See LICENSE for licensing information.

//! Hash-to-scalar helpers.
//!
//! The protocol reduces SHA-512 output into a scalar mod `ℓ` in exactly two
//! places: the Fiat-Shamir challenge `k = H(R ‖ A ‖ m)` and the synthetic
//! nonce derivation `r_i = H(dom2 ‖ s_i ‖ m ‖ rand64)`. Both are a builder
//! over a running `Sha512` state, reduced once at the end, matching the
//! RFC 8032 convention of hashing a transcript incrementally and reducing
//! the wide digest only at the very end.

use curve25519_dalek::scalar::Scalar;
use sha2::{Digest, Sha512};

use crate::arithmetic::sc_reduce_wide;

/// The RFC 8032 "dom2" prefix used to domain-separate synthetic nonce
/// derivation from a standard deterministic Ed25519 nonce. Using this prefix
/// means a weak RNG degrades to ordinary RFC-8032 nonce derivation rather
/// than to outright `s_i` disclosure.
pub(crate) const NONCE_DOM2_PREFIX: [u8; 32] = {
    let mut p = [0xffu8; 32];
    p[0] = 0xfe;
    p
};

/// A running SHA-512 transcript that reduces to a scalar mod `ℓ` on
/// finalization.
#[derive(Default)]
pub(crate) struct ScalarHash {
    state: Sha512,
}

impl ScalarHash {
    /// Add `data` to the transcript, returning `self` for chaining.
    pub(crate) fn update(mut self, data: impl AsRef<[u8]>) -> Self {
        self.state.update(data.as_ref());
        self
    }

    /// Consume the transcript, reducing the 64-byte digest mod `ℓ`.
    pub(crate) fn finalize(self) -> Scalar {
        let digest: [u8; 64] = self.state.finalize().into();
        sc_reduce_wide(&digest)
    }
}
