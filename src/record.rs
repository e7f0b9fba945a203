//! SRV records.

use rand::Rng;
use std::{cmp::Reverse, fmt::Display};

/// Representation of types that contain the fields of a SRV record.
pub trait SrvRecord {
    /// Type representing the SRV record's target. Must implement `Display`
    /// so it can be rendered in lookup reports.
    type Target: Display + ?Sized;

    /// Gets a SRV record's target.
    fn target(&self) -> &Self::Target;

    /// Gets a SRV record's port.
    fn port(&self) -> u16;

    /// Gets a SRV record's priority. A lower value marks a more preferred
    /// target.
    fn priority(&self) -> u16;

    /// Gets a SRV record's weight, the relative selection likelihood among
    /// records of equal priority.
    fn weight(&self) -> u16;

    /// Generates a key to sort a SRV record by priority and weight per RFC 2782.
    fn sort_key(&self, rng: impl Rng) -> (u16, Reverse<u32>) {
        sort_key(self.priority(), self.weight(), rng)
    }
}

/// Generates a key to sort a SRV record by priority and weight per RFC 2782.
pub(crate) fn sort_key(priority: u16, weight: u16, mut rng: impl Rng) -> (u16, Reverse<u32>) {
    // Sort ascending by priority, then descending (hence `Reverse`) by randomized weight
    let rand = rng.random::<u16>() as u32;
    (priority, Reverse(weight as u32 * rand))
}
