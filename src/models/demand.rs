//! Per-run remaining-demand ledger.

use std::collections::BTreeSet;

use super::Parcel;

/// Remaining quantity per parcel index for a single planning run.
///
/// Parcels with nothing left to deliver are never in the unassigned set.
/// Iteration over [`unassigned`](Self::unassigned) is in ascending index
/// order, which the constructor relies on for tie-breaking.
#[derive(Debug, Clone)]
pub struct DemandLedger {
    remaining: Vec<u32>,
    unassigned: BTreeSet<usize>,
}

impl DemandLedger {
    /// Opens a ledger holding every parcel's full quantity.
    pub fn new(parcels: &[Parcel]) -> Self {
        let remaining: Vec<u32> = parcels.iter().map(Parcel::quantity).collect();
        let unassigned = remaining
            .iter()
            .enumerate()
            .filter(|&(_, &q)| q > 0)
            .map(|(i, _)| i)
            .collect();
        Self {
            remaining,
            unassigned,
        }
    }

    /// Units still owed to parcel `index`.
    pub fn remaining(&self, index: usize) -> u32 {
        self.remaining[index]
    }

    /// Parcel indices with demand left, in ascending order.
    pub fn unassigned(&self) -> impl Iterator<Item = usize> + '_ {
        self.unassigned.iter().copied()
    }

    /// Number of parcels with demand left.
    pub fn num_unassigned(&self) -> usize {
        self.unassigned.len()
    }

    /// Returns `true` once every parcel is fully delivered.
    pub fn is_empty(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Records delivery of up to `units` to parcel `index`.
    ///
    /// Returns the number of units actually taken (never more than what
    /// remains).
    pub fn deliver(&mut self, index: usize, units: u32) -> u32 {
        let taken = units.min(self.remaining[index]);
        self.remaining[index] -= taken;
        if self.remaining[index] == 0 {
            self.unassigned.remove(&index);
        }
        taken
    }

    /// Total units not yet delivered.
    pub fn undelivered_units(&self) -> u64 {
        self.unassigned
            .iter()
            .map(|&i| u64::from(self.remaining[i]))
            .sum()
    }

    /// Indices of parcels that still have demand.
    pub fn unassigned_indices(&self) -> Vec<usize> {
        self.unassigned.iter().copied().collect()
    }
}
