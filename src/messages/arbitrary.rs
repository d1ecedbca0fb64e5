use proptest::{arbitrary::any, array, prelude::*};

use super::*;

impl Arbitrary for Message {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (any::<Header>(), any::<Payload>())
            .prop_map(|(header, payload)| Message { header, payload })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for Header {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (any::<MsgVersion>(), any::<Role>(), any::<Role>())
            .prop_filter(
                "sender and receiver roles can not be the same",
                |(_, sender, receiver)| sender != receiver,
            )
            .prop_map(|(version, sender, receiver)| Header {
                version,
                sender,
                receiver,
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

fn client_id_strategy() -> impl Strategy<Value = ClientId> {
    "[a-z0-9]{1,32}".prop_map(|s| ClientId::new(s).expect("valid client id"))
}

fn session_id_strategy() -> impl Strategy<Value = SessionId> {
    "[a-z0-9]{1,32}".prop_map(|s| SessionId::from_wire(s).expect("valid session id"))
}

impl Arbitrary for Payload {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            client_id_strategy().prop_map(|client_id| Payload::AiRequest { client_id }),
            array::uniform32(any::<u8>()).prop_map(|a_i| Payload::AiResponse { a_i }),
            (
                client_id_strategy(),
                session_id_strategy(),
                any::<Vec<u8>>()
            )
                .prop_map(|(client_id, session_id, message)| Payload::RiRequest {
                    client_id,
                    session_id,
                    message,
                }),
            array::uniform32(any::<u8>()).prop_map(|r_i| Payload::RiResponse { r_i }),
            (
                client_id_strategy(),
                session_id_strategy(),
                array::uniform32(any::<u8>())
            )
                .prop_map(|(client_id, session_id, k)| Payload::SiRequest {
                    client_id,
                    session_id,
                    k,
                }),
            array::uniform32(any::<u8>()).prop_map(|s_i| Payload::SiResponse { s_i }),
            any::<WireError>().prop_map(|kind| Payload::Failure { kind }),
        ]
        .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for MsgVersion {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        Just(constants::CURRENT_VERSION).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for Role {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            (0u16..constants::MAX_PEERS).prop_map(Role::Peer),
            Just(Role::Coordinator),
        ]
        .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for WireError {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(WireError::EntropyFailure),
            Just(WireError::UnknownClient),
            Just(WireError::UnknownSession),
            Just(WireError::DuplicateSession),
            Just(WireError::PeerUnavailable),
            Just(WireError::VerifyMismatch),
            Just(WireError::MalformedEncoding),
        ]
        .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
