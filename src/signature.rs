// -*- mode: rust; -*-
//
// This file is part of aggsig.
// Copyright (c) 2019-2021 Zcash Foundation
// See LICENSE for licensing information.

//! The Curve25519-verifiable aggregate signature, and the sign-bit
//! transform that produces it from a raw Ed25519-shape `(R, S)` pair.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;

use crate::arithmetic::point_to_bytes;
use crate::verification_key::VerificationKey;

/// The raw, pre-transform Ed25519-shape signature `(R, S)` the coordinator
/// assembles before applying the Curve25519 sign-bit transform.
pub(crate) struct RawSignature {
    pub(crate) r: EdwardsPoint,
    pub(crate) s: Scalar,
}

impl RawSignature {
    fn to_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&point_to_bytes(&self.r));
        bytes[32..].copy_from_slice(self.s.as_bytes());
        bytes
    }

    /// Apply `EdToCurveSig`: smuggle the aggregate key's Edwards `x`-sign
    /// bit into the signature's high bit, which is structurally zero after
    /// reduction mod `ℓ`. `R` is carried verbatim; only `S`'s top bit is
    /// touched.
    pub(crate) fn into_curve_signature(self, group_key: &VerificationKey) -> Signature {
        let mut bytes = self.to_bytes();
        let sign_bit = group_key.edwards_sign_bit();
        bytes[63] &= 0x7f;
        bytes[63] |= sign_bit;
        Signature(bytes)
    }
}

/// A 64-byte Curve25519-verifiable signature: `encode(R) ‖ encode(S)` with
/// `S`'s high bit replaced by the aggregate key's Edwards `x`-sign bit, the
/// XEdDSA-style transform that lets a standard Ed25519 signature verify
/// against a Curve25519 (Montgomery) public key.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature(
    /// The raw 64 bytes: `encode(R) ‖ encode(S)` with the sign-bit
    /// transform already applied.
    pub [u8; 64],
);

impl Signature {
    /// Split back into the raw Edwards `R` encoding and the `S` scalar
    /// bytes with the smuggled sign bit still set, as needed by a verifier
    /// that reconstructs `A`'s sign from the signature.
    pub fn r_bytes(&self) -> [u8; 32] {
        let mut r = [0u8; 32];
        r.copy_from_slice(&self.0[..32]);
        r
    }

    /// The `S` scalar half, with the high bit cleared back to its
    /// structural zero (the smuggled sign bit is not part of `S` itself).
    pub fn s_bytes(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        s.copy_from_slice(&self.0[32..]);
        s[31] &= 0x7f;
        s
    }

    /// The aggregate key's Edwards `x`-sign bit, smuggled into `S`'s high
    /// bit by `EdToCurveSig`.
    pub fn edwards_sign_bit(&self) -> u8 {
        self.0[63] & 0x80
    }
}

impl From<[u8; 64]> for Signature {
    fn from(bytes: [u8; 64]) -> Self {
        Signature(bytes)
    }
}

impl From<Signature> for [u8; 64] {
    fn from(sig: Signature) -> [u8; 64] {
        sig.0
    }
}
