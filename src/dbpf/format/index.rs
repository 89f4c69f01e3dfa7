//! Index table codec.
//!
//! The index is a packed array of fixed-width entries located via the
//! header. Entry width and field set depend on the header's declared index
//! version; the layout is resolved once ([`EntryLayout::for_version`]) and
//! then applied uniformly to every entry. Entries whose committed flag is
//! zero are still produced — live-vs-stale filtering is caller policy.

use byteorder::{ByteOrder, LittleEndian};
use log::debug;

use crate::dbpf::types::error::{DbpfError, Result};
use crate::dbpf::types::models::{EntryLayout, Header, IndexEntry};

/// Decodes the index table declared by `header` from the archive buffer.
///
/// # Errors
/// - [`DbpfError::OutOfBounds`] if the declared table extent
///   (`index_offset + entry_count * entry_width`) exceeds the buffer
/// - [`DbpfError::InvalidFormat`] if the header's declared index size
///   disagrees with the resolved layout — the layout is a configuration
///   point validated against the archive, and a mismatch is surfaced
///   instead of silently re-deriving an entry width
pub fn decode(buf: &[u8], header: &Header) -> Result<Vec<IndexEntry>> {
    let layout = header.entry_layout();
    let width = layout.entry_width();
    let count = header.index_entry_count as usize;
    let offset = header.index_offset as usize;

    let out_of_bounds = || DbpfError::OutOfBounds {
        region: "index table",
        offset: u64::from(header.index_offset),
        len: count as u64 * width as u64,
        buffer_len: buf.len(),
    };
    let end = count
        .checked_mul(width)
        .and_then(|table_len| offset.checked_add(table_len))
        .filter(|&end| end <= buf.len())
        .ok_or_else(out_of_bounds)?;

    if header.index_size != 0 && header.index_size as usize != end - offset {
        return Err(DbpfError::InvalidFormat(format!(
            "declared index size {} disagrees with {} entries of {} bytes ({:?} layout)",
            header.index_size, count, width, layout
        )));
    }

    debug!(
        "index table: {} entries, {:?} layout ({} bytes each) at offset {}",
        count, layout, width, offset
    );

    let mut entries = Vec::with_capacity(count);
    for raw in buf[offset..end].chunks_exact(width) {
        entries.push(decode_entry(raw, layout));
    }
    Ok(entries)
}

/// Encodes `entries` with the layout resolved from `header`.
///
/// Writes exactly the field set of the declared layout, in on-disk order,
/// little-endian, no padding. Fields outside the layout are dropped and
/// decode back as zero.
pub fn encode(entries: &[IndexEntry], header: &Header) -> Vec<u8> {
    let layout = header.entry_layout();
    let width = layout.entry_width();
    let mut buf = vec![0u8; entries.len() * width];
    for (entry, raw) in entries.iter().zip(buf.chunks_exact_mut(width)) {
        encode_entry(raw, entry, layout);
    }
    buf
}

fn decode_entry(raw: &[u8], layout: EntryLayout) -> IndexEntry {
    let word = |i: usize| LittleEndian::read_u32(&raw[i * 4..i * 4 + 4]);

    match layout {
        EntryLayout::Basic => IndexEntry {
            type_id: word(0),
            group_id: word(1),
            instance_ex: 0,
            instance_id: word(2),
            position: word(3),
            size: word(4),
            size_decompressed: 0,
            compression_type: 0,
            committed: 0,
        },
        EntryLayout::ExtendedInstance => IndexEntry {
            type_id: word(0),
            group_id: word(1),
            instance_ex: word(2),
            instance_id: word(3),
            position: word(4),
            size: word(5),
            size_decompressed: 0,
            compression_type: 0,
            committed: 0,
        },
        EntryLayout::Full => IndexEntry {
            type_id: word(0),
            group_id: word(1),
            instance_ex: word(2),
            instance_id: word(3),
            position: word(4),
            size: word(5),
            size_decompressed: word(6),
            // Each occupies a full on-disk word; only the low half is
            // meaningful.
            compression_type: word(7) as u16,
            committed: word(8) as u16,
        },
    }
}

fn encode_entry(raw: &mut [u8], entry: &IndexEntry, layout: EntryLayout) {
    let mut offset = 0;
    let mut word = |value: u32| {
        LittleEndian::write_u32(&mut raw[offset..offset + 4], value);
        offset += 4;
    };

    word(entry.type_id);
    word(entry.group_id);
    if layout != EntryLayout::Basic {
        word(entry.instance_ex);
    }
    word(entry.instance_id);
    word(entry.position);
    word(entry.size);
    if layout == EntryLayout::Full {
        word(entry.size_decompressed);
        word(u32::from(entry.compression_type));
        word(u32::from(entry.committed));
    }
}
