//! Property-based tests for aggregation commutativity and nonce freshness,
//! across randomized peer counts and messages, with a seeded `ChaChaRng`
//! for reproducible failures.

use proptest::prelude::*;
use rand_chacha::ChaChaRng;
use rand_core::SeedableRng;

use aggsig::{ClientId, Coordinator, CoordinatorConfig, LocalCoordinator, LocalPeer};

fn peer_set(n: usize, seed: u64) -> Vec<LocalPeer<ChaChaRng>> {
    (0..n)
        .map(|i| LocalPeer::new(ChaChaRng::seed_from_u64(seed.wrapping_add(i as u64))))
        .collect()
}

proptest! {
    /// `A` computed from `Σ A_i` is identical (as a canonical encoding)
    /// regardless of the order peers are listed in.
    #[test]
    fn aggregate_key_is_order_independent(
        num_peers in 1usize..6,
        seed in any::<u64>(),
        client_name in "[a-z]{1,16}",
    ) {
        let peers = peer_set(num_peers, seed);
        let client = ClientId::new(client_name).unwrap();

        let forward = LocalCoordinator::new(
            peers.iter().collect::<Vec<_>>(),
            CoordinatorConfig::default(),
            ChaChaRng::seed_from_u64(seed.wrapping_add(1000)),
        );
        let pk_forward = forward.keygen(&client).unwrap();

        let mut reversed: Vec<_> = peers.iter().collect();
        reversed.reverse();
        let backward = LocalCoordinator::new(
            reversed,
            CoordinatorConfig::default(),
            ChaChaRng::seed_from_u64(seed.wrapping_add(2000)),
        );
        let pk_backward = backward.keygen(&client).unwrap();

        prop_assert_eq!(pk_forward, pk_backward);
    }

    /// Two `sign` calls on the same `(client_id, message)` produce
    /// different `R` with overwhelming probability, since each call derives
    /// a fresh nonce and a fresh session id.
    #[test]
    fn nonce_freshness_across_signs(
        num_peers in 1usize..4,
        seed in any::<u64>(),
        message in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let peers = peer_set(num_peers, seed);
        let coordinator = LocalCoordinator::new(
            peers.iter().collect::<Vec<_>>(),
            CoordinatorConfig::default(),
            ChaChaRng::seed_from_u64(seed.wrapping_add(3000)),
        );
        let client = ClientId::new("nonce-freshness-client").unwrap();
        let pk = coordinator.keygen(&client).unwrap();

        let sig1 = coordinator.sign(&client, &message).unwrap();
        let sig2 = coordinator.sign(&client, &message).unwrap();

        prop_assert_ne!(sig1.r_bytes(), sig2.r_bytes());
        prop_assert!(aggsig::batch::verify_single(&pk, &sig1, &message).is_ok());
        prop_assert!(aggsig::batch::verify_single(&pk, &sig2, &message).is_ok());
    }
}
