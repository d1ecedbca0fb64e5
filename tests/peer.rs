//! Per-peer unit behavior: idempotent `ai`, session lifecycle, duplicate
//! session handling, unknown client/session errors.

use aggsig::{ClientId, Error, LocalPeer, Peer, SessionId};
use rand_chacha::ChaChaRng;
use rand_core::SeedableRng;

fn peer() -> LocalPeer<ChaChaRng> {
    LocalPeer::new(ChaChaRng::seed_from_u64(42))
}

#[test]
fn ai_is_idempotent() {
    let p = peer();
    let client = ClientId::new("alice").unwrap();
    let a1 = p.ai(&client).unwrap();
    let a2 = p.ai(&client).unwrap();
    assert_eq!(a1.compress(), a2.compress());
}

#[test]
fn ri_requires_known_client() {
    let p = peer();
    let client = ClientId::new("unregistered").unwrap();
    let session = SessionId::from_wire("s1").unwrap();
    let err = p.ri(&client, &session, b"msg").unwrap_err();
    assert_eq!(err, Error::UnknownClient);
}

#[test]
fn si_requires_known_session() {
    let p = peer();
    let client = ClientId::new("alice").unwrap();
    p.ai(&client).unwrap();

    let session = SessionId::from_wire("never-opened").unwrap();
    let k = curve25519_dalek::scalar::Scalar::from(7u64);
    let err = p.si(&client, &session, k).unwrap_err();
    assert_eq!(err, Error::UnknownSession);
}

#[test]
fn si_requires_known_client() {
    let p = peer();
    let client = ClientId::new("unregistered").unwrap();
    let session = SessionId::from_wire("s1").unwrap();
    let k = curve25519_dalek::scalar::Scalar::from(7u64);
    let err = p.si(&client, &session, k).unwrap_err();
    assert_eq!(err, Error::UnknownClient);
}

#[test]
fn ri_on_same_session_and_message_is_idempotent() {
    let p = peer();
    let client = ClientId::new("alice").unwrap();
    p.ai(&client).unwrap();
    let session = SessionId::from_wire("s1").unwrap();

    let r1 = p.ri(&client, &session, b"same message").unwrap();
    let r2 = p.ri(&client, &session, b"same message").unwrap();
    assert_eq!(r1.compress(), r2.compress());
}

#[test]
fn ri_on_same_session_different_message_fails_duplicate_session() {
    let p = peer();
    let client = ClientId::new("alice").unwrap();
    p.ai(&client).unwrap();
    let session = SessionId::from_wire("s1").unwrap();

    p.ri(&client, &session, b"first message").unwrap();
    let err = p.ri(&client, &session, b"different message").unwrap_err();
    assert_eq!(err, Error::DuplicateSession);
}

#[test]
fn si_deletes_the_session_record() {
    let p = peer();
    let client = ClientId::new("alice").unwrap();
    p.ai(&client).unwrap();
    let session = SessionId::from_wire("s1").unwrap();

    p.ri(&client, &session, b"msg").unwrap();
    assert!(p.has_session(&session));

    let k = curve25519_dalek::scalar::Scalar::from(3u64);
    p.si(&client, &session, k).unwrap();
    assert!(!p.has_session(&session));

    // A second Si on the same (now-deleted) session fails UnknownSession.
    let err = p.si(&client, &session, k).unwrap_err();
    assert_eq!(err, Error::UnknownSession);
}

#[test]
fn two_distinct_sessions_for_the_same_client_are_independent() {
    let p = peer();
    let client = ClientId::new("alice").unwrap();
    p.ai(&client).unwrap();

    let s1 = SessionId::from_wire("session-one").unwrap();
    let s2 = SessionId::from_wire("session-two").unwrap();

    let r1 = p.ri(&client, &s1, b"msg one").unwrap();
    let r2 = p.ri(&client, &s2, b"msg two").unwrap();
    // Overwhelmingly likely to differ: independent fresh nonces.
    assert_ne!(r1.compress(), r2.compress());

    let k = curve25519_dalek::scalar::Scalar::from(11u64);
    p.si(&client, &s1, k).unwrap();
    // Completing session one must not disturb session two's stored nonce.
    assert!(p.has_session(&s2));
    p.si(&client, &s2, k).unwrap();
}
