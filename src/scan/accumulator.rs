//! Bounded top-K accumulation
//!
//! `TopK` keeps the largest `count` entries seen during a walk without ever
//! holding more than `count + MAX_LIMIT` of them. New entries land in a
//! small working set; once that fills up it is merged into the current best
//! entries, re-ranked, and everything past `count` is dropped.
//!
//! Dropping is safe: an entry ranked below `count` others can never make it
//! back into the top `count`, since the entries above it are kept and later
//! arrivals only add competition.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::HogsError;

use super::entry::Ranked;

/// Capacity of the working set, and the exclusive upper bound on `count`.
pub const MAX_LIMIT: usize = 100;

/// Streaming top-K ranking keyed by path.
#[derive(Debug)]
pub struct TopK<V> {
    count: usize,
    working: HashMap<PathBuf, V>,
    best: HashMap<PathBuf, V>,
    spills: usize,
}

impl<V: Ranked + Clone> TopK<V> {
    /// Create an accumulator keeping the best `count` entries.
    ///
    /// `count` must be at least 1 and below [`MAX_LIMIT`].
    pub fn new(count: usize) -> Result<Self, HogsError> {
        if count == 0 || count >= MAX_LIMIT {
            return Err(HogsError::InvalidCount { count });
        }
        Ok(Self {
            count,
            working: HashMap::with_capacity(MAX_LIMIT),
            best: HashMap::with_capacity(count),
            spills: 0,
        })
    }

    /// Record an entry. A later record for the same path replaces the
    /// earlier one.
    pub fn record(&mut self, path: PathBuf, value: V) {
        self.working.insert(path, value);
        if self.working.len() >= MAX_LIMIT {
            self.spill();
        }
    }

    /// Merge the working set into the best entries and keep only the top
    /// `count`.
    pub fn spill(&mut self) {
        let mut merged = std::mem::take(&mut self.best);
        merged.extend(self.working.drain());

        let mut ranked: Vec<(PathBuf, V)> = merged.into_iter().collect();
        sort_ranked(&mut ranked);
        ranked.truncate(self.count);

        self.best = ranked.into_iter().collect();
        self.spills += 1;
        log::trace!("spill #{}: keeping {} entries", self.spills, self.best.len());
    }

    /// Flush whatever is still pending and return the ranking, largest
    /// first. Calling this again without new records returns the same
    /// ranking.
    pub fn finalize(&mut self) -> Vec<(PathBuf, V)> {
        self.spill();
        let mut ranked: Vec<(PathBuf, V)> = self
            .best
            .iter()
            .map(|(path, value)| (path.clone(), value.clone()))
            .collect();
        sort_ranked(&mut ranked);
        ranked
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Entries waiting in the working set.
    pub fn pending(&self) -> usize {
        self.working.len()
    }

    /// Entries currently held as the best seen so far.
    pub fn retained(&self) -> usize {
        self.best.len()
    }

    /// Number of spills performed so far.
    pub fn spills(&self) -> usize {
        self.spills
    }
}

/// Largest first; ties go to the lexicographically smaller path so output
/// is deterministic.
fn sort_ranked<V: Ranked>(ranked: &mut [(PathBuf, V)]) {
    ranked.sort_unstable_by(|(pa, a), (pb, b)| {
        Reverse(a.rank_key())
            .cmp(&Reverse(b.rank_key()))
            .then_with(|| pa.cmp(pb))
    });
}
