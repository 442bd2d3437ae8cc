//! Team selection: validates forced members and derives the enumeration
//! parameters (free-choice pool and open slot count).

use crate::combinations::Combinations;
use crate::error::SelectionError;
use crate::roster;

/// Base team size without the guest slot.
pub const TEAM_SIZE: usize = 5;

/// A validated selection: which members are fixed in every team, which names
/// remain in the free-choice pool, and how many open slots are left.
///
/// Immutable once built; enumeration over it is restartable.
#[derive(Debug, Clone)]
pub struct Selection {
    pool: Vec<&'static str>,
    fixed: Vec<&'static str>,
    slots: usize,
}

impl Selection {
    /// Validates `requested` against the roster and derives the selection.
    ///
    /// Unknown names fail with [`SelectionError::InvalidMember`] (first
    /// offender wins). The request count, duplicates included, is then
    /// checked against the allowed team size (5, or 6 with `guest`);
    /// duplicates are collapsed afterwards, first occurrence kept.
    pub fn new(requested: &[String], guest: bool) -> Result<Self, SelectionError> {
        let team_size = if guest { TEAM_SIZE + 1 } else { TEAM_SIZE };

        let mut fixed: Vec<&'static str> = Vec::with_capacity(requested.len());
        for name in requested {
            let member = roster::canonical(name)
                .ok_or_else(|| SelectionError::InvalidMember(name.clone()))?;
            if !fixed.contains(&member) {
                fixed.push(member);
            }
        }
        // The bound applies to the request as given, not the distinct set.
        if requested.len() > team_size {
            return Err(SelectionError::TooManyMembers {
                count: requested.len(),
                max: team_size,
            });
        }

        // Sorted pool fixes the enumeration order.
        let mut pool: Vec<&'static str> =
            roster::ROSTER.iter().copied().filter(|member| !fixed.contains(member)).collect();
        pool.sort_unstable();

        let slots = team_size - fixed.len();
        log::debug!(
            "selection: {} fixed, {} open slots, pool of {}",
            fixed.len(),
            slots,
            pool.len()
        );

        Ok(Self { pool, fixed, slots })
    }

    pub fn pool(&self) -> &[&'static str] {
        &self.pool
    }

    pub fn fixed(&self) -> &[&'static str] {
        &self.fixed
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Every full team for this selection, lazily.
    pub fn teams(&self) -> impl Iterator<Item = Vec<&'static str>> + '_ {
        Combinations::new(&self.pool, self.slots).map(|partial| self.assemble(partial))
    }

    /// Joins an enumerated partial team with the fixed members.
    ///
    /// Pool and fixed members are disjoint by construction, so the result has
    /// exactly the requested team size with no duplicates. Sorted for stable
    /// display.
    pub fn assemble(&self, mut partial: Vec<&'static str>) -> Vec<&'static str> {
        partial.extend_from_slice(&self.fixed);
        partial.sort_unstable();
        partial
    }
}
