// -*- mode: rust; -*-
//
// This file is part of aggsig.
// Copyright (c) 2019-2021 Zcash Foundation
// See LICENSE for licensing information.

//! Field, scalar, and group arithmetic.
//!
//! This is a thin, named wrapper around `curve25519-dalek` rather than a
//! reimplementation: the protocol is only correct if the arithmetic matches
//! a reference Ed25519 implementation bit-for-bit, and `curve25519-dalek`'s
//! constant-time `Scalar`/`EdwardsPoint` operations are exactly that
//! reference. The function names below mirror the operations spec'd for
//! this protocol (`ScReduce`, `ScMulAdd`, `GeScalarMultBase`, `GeAdd`) so
//! call sites read the same way the protocol description does; the actual
//! arithmetic, including the constant-time guarantees for secret-keyed
//! operations, is `curve25519-dalek`'s.

use curve25519_dalek::constants::ED25519_BASEPOINT_TABLE;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;

use crate::Error;

/// Barrett-reduce a 64-byte value into a canonical scalar mod `ℓ`.
pub(crate) fn sc_reduce_wide(bytes: &[u8; 64]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(bytes)
}

/// `out = a*b + c mod ℓ`.
pub(crate) fn sc_mul_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Scalar {
    a * b + c
}

/// Fixed-base scalar multiplication `P = s*B`.
pub(crate) fn ge_scalar_mult_base(s: &Scalar) -> EdwardsPoint {
    s * &ED25519_BASEPOINT_TABLE
}

/// Sum a slice of group elements. Sums are commutative: the result does not
/// depend on the order peers' responses arrive in.
pub(crate) fn ge_sum(points: &[EdwardsPoint]) -> EdwardsPoint {
    points
        .iter()
        .fold(EdwardsPoint::identity(), |acc, p| acc + p)
}

/// Decode a canonical 32-byte Ed25519 point encoding.
pub(crate) fn point_from_bytes(bytes: &[u8; 32]) -> Result<EdwardsPoint, Error> {
    CompressedEdwardsY(*bytes)
        .decompress()
        .ok_or(Error::MalformedEncoding)
}

/// Encode a point to its canonical 32-byte form.
pub(crate) fn point_to_bytes(point: &EdwardsPoint) -> [u8; 32] {
    point.compress().to_bytes()
}

/// Decode a little-endian scalar encoding, requiring strict canonical form
/// (rejecting values `>= ℓ`), as required at protocol boundaries.
pub(crate) fn scalar_from_canonical_bytes(bytes: &[u8; 32]) -> Result<Scalar, Error> {
    Option::from(Scalar::from_canonical_bytes(*bytes)).ok_or(Error::MalformedEncoding)
}
