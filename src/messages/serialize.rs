//! Manual (de)serialization for [`Role`].
//!
//! Everything else in this module derives `Serialize`/`Deserialize`; `Role`
//! gets a hand-written implementation so it serializes as a single `u16`
//! (the coordinator sentinel or a peer index) rather than as a tagged enum.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use super::Role;

/// The sentinel `u16` value standing in for [`Role::Coordinator`]. Peer
/// indices below this value decode as `Role::Peer(n)`.
pub const ROLE_COORDINATOR_SENTINEL: u16 = u16::MAX;

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Role::Coordinator => serializer.serialize_u16(ROLE_COORDINATOR_SENTINEL),
            Role::Peer(n) => serializer.serialize_u16(n),
        }
    }
}

struct RoleVisitor;

impl<'de> Visitor<'de> for RoleVisitor {
    type Value = Role;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a u16 role index, or the coordinator sentinel")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value == ROLE_COORDINATOR_SENTINEL as u64 {
            Ok(Role::Coordinator)
        } else {
            Ok(Role::Peer(value as u16))
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Role, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_u16(RoleVisitor)
    }
}
