//! The composite (Type, Group, Instance) key addressing a record.

use std::fmt;
use std::str::FromStr;

use crate::dbpf::types::error::DbpfError;

/// Immutable composite key identifying one record in an archive.
///
/// The 64-bit instance is composed from the extended-instance word (upper
/// half) and the plain instance word (lower half); archives whose entry
/// layout has no extended-instance word leave the upper half zero.
///
/// Two keys are equal iff all three fields match. Ordering is
/// lexicographic over (type, group, instance), so enumeration through
/// ordered collections is deterministic. Every constructor returns an
/// independent value; there is no shared key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tgi {
    pub type_id: u32,
    pub group_id: u32,
    pub instance_id: u64,
}

impl Tgi {
    /// Builds a key from the on-disk words.
    ///
    /// `instance_high` carries the extended-instance bits; pass 0 for
    /// layouts without them.
    pub fn from_parts(type_id: u32, group_id: u32, instance_low: u32, instance_high: u32) -> Self {
        Self {
            type_id,
            group_id,
            instance_id: (u64::from(instance_high) << 32) | u64::from(instance_low),
        }
    }
}

impl fmt::Display for Tgi {
    /// Canonical fixed-width hexadecimal rendering
    /// (`TTTTTTTT-GGGGGGGG-IIIIIIIIIIIIIIII`), stable across calls and
    /// runs; usable as a map key or log identifier.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:08X}-{:08X}-{:016X}",
            self.type_id, self.group_id, self.instance_id
        )
    }
}

impl FromStr for Tgi {
    type Err = DbpfError;

    /// Parses the canonical rendering produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(DbpfError::InvalidFormat(format!(
                "malformed TGI key: {}",
                s
            )));
        }
        let field = |name: &str, raw: &str, width: usize| -> Result<u64, DbpfError> {
            if raw.len() != width {
                return Err(DbpfError::InvalidFormat(format!(
                    "bad {} width in TGI key: {}",
                    name, s
                )));
            }
            u64::from_str_radix(raw, 16).map_err(|_| {
                DbpfError::InvalidFormat(format!("bad {} in TGI key: {}", name, s))
            })
        };
        Ok(Self {
            type_id: field("type", parts[0], 8)? as u32,
            group_id: field("group", parts[1], 8)? as u32,
            instance_id: field("instance", parts[2], 16)?,
        })
    }
}
