//! Validation rules for the peer wire protocol.
//!
//! Each wire type validates its own shape, and `Message` additionally
//! checks that sender and receiver roles match what the carried payload
//! requires (a peer response must come from a peer and go to the
//! coordinator, and vice versa for requests).

use super::constants::{CURRENT_VERSION, MAX_PEERS, MAX_PROTOCOL_MESSAGE_LEN};
use super::*;

#[cfg(feature = "std")]
use thiserror::Error;

/// Checks a wire type's structural validity, independent of decoding the
/// point/scalar bytes it carries (that happens lazily, when the payload is
/// converted into the arithmetic types `Peer`/`Coordinator` operate on).
pub trait Validate {
    /// Validate `self`, returning it unchanged on success.
    fn validate(&self) -> Result<&Self, MsgErr>;
}

impl Validate for Header {
    fn validate(&self) -> Result<&Self, MsgErr> {
        if self.version != CURRENT_VERSION {
            return Err(MsgErr::WrongVersion);
        }
        if self.sender == self.receiver {
            return Err(MsgErr::SameSenderAndReceiver);
        }
        if let Role::Peer(n) = self.sender {
            if n >= MAX_PEERS {
                return Err(MsgErr::PeerIndexOutOfRange);
            }
        }
        if let Role::Peer(n) = self.receiver {
            if n >= MAX_PEERS {
                return Err(MsgErr::PeerIndexOutOfRange);
            }
        }
        Ok(self)
    }
}

impl Validate for Payload {
    fn validate(&self) -> Result<&Self, MsgErr> {
        match self {
            Payload::AiRequest { .. } => {}
            Payload::AiResponse { .. } => {}
            Payload::RiRequest { message, .. } => {
                if message.len() > MAX_PROTOCOL_MESSAGE_LEN {
                    return Err(MsgErr::MsgTooBig);
                }
            }
            Payload::RiResponse { .. } => {}
            Payload::SiRequest { .. } => {}
            Payload::SiResponse { .. } => {}
            Payload::Failure { .. } => {}
        }
        Ok(self)
    }
}

impl Validate for Message {
    fn validate(&self) -> Result<&Self, MsgErr> {
        self.header.validate()?;
        self.payload.validate()?;

        let request_from_coordinator = matches!(
            self.payload,
            Payload::AiRequest { .. } | Payload::RiRequest { .. } | Payload::SiRequest { .. }
        );
        let response_from_peer = matches!(
            self.payload,
            Payload::AiResponse { .. } | Payload::RiResponse { .. } | Payload::SiResponse { .. }
        );

        if request_from_coordinator {
            if self.header.sender != Role::Coordinator {
                return Err(MsgErr::SenderMustBeCoordinator);
            }
            if self.header.receiver == Role::Coordinator {
                return Err(MsgErr::ReceiverMustBePeer);
            }
        } else if response_from_peer {
            if self.header.receiver != Role::Coordinator {
                return Err(MsgErr::ReceiverMustBeCoordinator);
            }
            if self.header.sender == Role::Coordinator {
                return Err(MsgErr::SenderMustBePeer);
            }
        }
        // Payload::Failure carries no sender/receiver constraint: either
        // endpoint may report a failure to the other.

        Ok(self)
    }
}

/// The error a message can produce if it fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum MsgErr {
    /// The header names a framing version this crate does not speak.
    #[cfg_attr(feature = "std", error("wrong version number"))]
    WrongVersion,
    /// Sender and receiver name the same endpoint.
    #[cfg_attr(feature = "std", error("sender and receiver are the same"))]
    SameSenderAndReceiver,
    /// A `Role::Peer` index names a roster slot outside the configured
    /// bound.
    #[cfg_attr(feature = "std", error("peer index out of range"))]
    PeerIndexOutOfRange,
    /// A request payload (`AiRequest`/`RiRequest`/`SiRequest`) must be sent
    /// by the coordinator.
    #[cfg_attr(feature = "std", error("the sender of a request must be the coordinator"))]
    SenderMustBeCoordinator,
    /// A request payload must be addressed to a peer, not the coordinator.
    #[cfg_attr(feature = "std", error("the receiver of a request must be a peer"))]
    ReceiverMustBePeer,
    /// A response payload (`AiResponse`/`RiResponse`/`SiResponse`) must be
    /// sent by a peer.
    #[cfg_attr(feature = "std", error("the sender of a response must be a peer"))]
    SenderMustBePeer,
    /// A response payload must be addressed to the coordinator.
    #[cfg_attr(
        feature = "std",
        error("the receiver of a response must be the coordinator")
    )]
    ReceiverMustBeCoordinator,
    /// An `RiRequest`'s message exceeds [`MAX_PROTOCOL_MESSAGE_LEN`].
    #[cfg_attr(feature = "std", error("the message is too big"))]
    MsgTooBig,
}
