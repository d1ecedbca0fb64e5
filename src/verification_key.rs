// -*- mode: rust; -*-
//
// This file is part of aggsig.
// Copyright (c) 2019-2021 Zcash Foundation
// See LICENSE for licensing information.

//! The aggregate verification key `A`, and its Curve25519 (Montgomery)
//! counterpart — the form clients actually verify signatures against.

use std::convert::{TryFrom, TryInto};

use curve25519_dalek::edwards::EdwardsPoint;

use crate::arithmetic::{ge_sum, point_from_bytes, point_to_bytes};
use crate::error::Error;

/// A refinement type for `[u8; 32]` indicating that the bytes represent a
/// canonical encoding of an aggregate Ed25519 verification key `A`.
///
/// This is useful for caching or transmitting an aggregate key; the
/// [`VerificationKey`] type in this crate holds the decompressed point used
/// for further arithmetic (aggregation, the Curve25519 transform).
#[derive(Copy, Clone, Hash, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerificationKeyBytes(
    /// The canonical 32-byte little-endian Ed25519 point encoding.
    pub [u8; 32],
);

impl From<VerificationKey> for VerificationKeyBytes {
    fn from(vk: VerificationKey) -> VerificationKeyBytes {
        VerificationKeyBytes(point_to_bytes(&vk.0))
    }
}

/// The aggregate Ed25519 public key `A = Σ A_i` for one registered client.
///
/// This type holds the decompressed point, ready for the group sum in
/// `Keygen` and the Curve25519 transform in `CurvePKFromEdPK`; it is never
/// mutated once formed (spec invariant: created by `Keygen`, read by `Sign`
/// and `GetPublicKey`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VerificationKey(pub(crate) EdwardsPoint);

impl VerificationKey {
    /// Aggregate per-peer contributions `A_i` into `A = Σ A_i`. The sum is
    /// commutative: the result does not depend on the order peer responses
    /// arrived in.
    pub(crate) fn aggregate(contributions: &[EdwardsPoint]) -> Self {
        VerificationKey(ge_sum(contributions))
    }

    /// The canonical Ed25519 `x`-sign bit of this key's encoding — the bit
    /// `EdToCurveSig` smuggles into the signature's high bit.
    pub(crate) fn edwards_sign_bit(&self) -> u8 {
        point_to_bytes(&self.0)[31] & 0x80
    }

    /// Convert this Edwards aggregate key to its Curve25519 (Montgomery
    /// `u`-coordinate) form: `u = (1+y)/(1-y) mod p`. This is the public key
    /// form clients verify signatures against.
    pub fn to_curve25519_public_key(&self) -> CurvePublicKey {
        CurvePublicKey(self.0.to_montgomery().to_bytes())
    }
}

impl TryFrom<VerificationKeyBytes> for VerificationKey {
    type Error = Error;

    fn try_from(bytes: VerificationKeyBytes) -> Result<Self, Self::Error> {
        Ok(VerificationKey(point_from_bytes(&bytes.0)?))
    }
}

impl TryFrom<[u8; 32]> for VerificationKey {
    type Error = Error;

    fn try_from(bytes: [u8; 32]) -> Result<Self, Self::Error> {
        VerificationKeyBytes(bytes).try_into()
    }
}

/// A Curve25519 (Montgomery) public key: the form clients verify signatures
/// against.
#[derive(Copy, Clone, Hash, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePublicKey(
    /// The canonical 32-byte little-endian Curve25519 (Montgomery `u`)
    /// encoding.
    pub [u8; 32],
);

impl AsRef<[u8; 32]> for CurvePublicKey {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}
