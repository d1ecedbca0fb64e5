//! Definitions of constants used by the peer wire protocol.

use super::MsgVersion;

/// The only message-framing version this crate currently emits or accepts.
pub const CURRENT_VERSION: MsgVersion = MsgVersion(0);

/// The maximum length, in bytes, of a message payload carried over the wire
/// (the `message` field of an `RiRequest`). Chosen generously above any
/// realistic signed payload while bounding preallocation for a malformed or
/// hostile peer.
pub const MAX_PROTOCOL_MESSAGE_LEN: usize = 2 * 1024 * 1024;

/// The maximum number of peers a single coordinator roster may address.
/// [`super::Role::Peer`] indices are `u16`; this bound is far below that
/// range and exists only to reject an obviously-malformed roster index
/// early.
pub const MAX_PEERS: u16 = 1024;
