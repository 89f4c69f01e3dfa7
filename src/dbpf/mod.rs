//! Core DBPF archive module.

pub mod format;
pub mod tgi;
pub mod types;

use log::info;

use tgi::Tgi;
pub use types::error::{DbpfError, Result};
use types::models::{Header, IndexEntry, Record};

/// The main reader for DBPF archive buffers.
///
/// Borrows the archive bytes for its whole lifetime; every [`Record`] is a
/// view into the same buffer. All structural validation happens in
/// [`open`](DbpfArchive::open) — a malformed header, index table, or
/// payload range aborts the open and no partial archive is exposed.
///
/// Once constructed the archive is immutable, so shared references may be
/// read from multiple threads without locking, and record extraction can
/// be parallelized by the caller.
pub struct DbpfArchive<'a> {
    buf: &'a [u8],
    pub header: Header,
    entries: Vec<IndexEntry>,
}

impl<'a> DbpfArchive<'a> {
    /// Opens an archive over a fully loaded buffer.
    ///
    /// Runs the header codec, then the index codec, then validates every
    /// entry's payload range against the buffer, so later enumeration
    /// never re-checks bounds.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The magic is wrong or the header is structurally invalid
    /// - The buffer is shorter than the fixed header
    /// - The index table or any record payload falls outside the buffer
    pub fn open(buf: &'a [u8]) -> Result<Self> {
        let header = format::header::decode(buf)?;
        let entries = format::index::decode(buf, &header)?;

        for entry in &entries {
            let end = u64::from(entry.position) + u64::from(entry.size);
            if end > buf.len() as u64 {
                return Err(DbpfError::OutOfBounds {
                    region: "record payload",
                    offset: u64::from(entry.position),
                    len: u64::from(entry.size),
                    buffer_len: buf.len(),
                });
            }
        }

        info!(
            "DBPF archive opened: {} entries, file v{}, index v{}",
            entries.len(),
            header.file_version,
            header.index_version
        );

        Ok(Self {
            buf,
            header,
            entries,
        })
    }

    /// Decoded index entries in on-disk order, stale ones included.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Returns an iterator over all records, in on-disk index order.
    ///
    /// The iterator is a pure projection of already-decoded state: it can
    /// be created and consumed any number of times, and every record it
    /// yields borrows directly from the archive buffer.
    pub fn records(&self) -> RecordIter<'a, '_> {
        RecordIter {
            archive: self,
            next: 0,
        }
    }

    /// Keys of every record, in on-disk index order.
    pub fn keys(&self) -> impl Iterator<Item = Tgi> + '_ {
        self.entries.iter().map(IndexEntry::key)
    }

    /// Looks up a record by key.
    ///
    /// The format permits duplicate keys for superseded resources; the
    /// last matching entry in index order wins, mirroring the archive's
    /// last-write-wins semantics.
    pub fn record_by_key(&self, key: &Tgi) -> Option<Record<'a>> {
        self.entries
            .iter()
            .rfind(|entry| entry.key() == *key)
            .map(|entry| self.record_for(entry))
    }

    fn record_for(&self, entry: &IndexEntry) -> Record<'a> {
        // Range validated in open().
        let start = entry.position as usize;
        let end = start + entry.size as usize;
        Record {
            key: entry.key(),
            offset: entry.position,
            length: entry.size,
            raw: &self.buf[start..end],
        }
    }
}

/// Restartable iterator over the records of a [`DbpfArchive`].
///
/// Created by [`DbpfArchive::records()`]. Yields records in on-disk index
/// order, stale entries included.
pub struct RecordIter<'a, 'r> {
    archive: &'r DbpfArchive<'a>,
    next: usize,
}

impl<'a> Iterator for RecordIter<'a, '_> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.archive.entries.get(self.next)?;
        self.next += 1;
        Some(self.archive.record_for(entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.archive.entries.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIter<'_, '_> {}
