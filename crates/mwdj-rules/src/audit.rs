//! Collision audit for ordered rule chains.
//!
//! A collision is a later rule whose pattern occurs inside the replacement
//! of an earlier rule, so the later rule re-matches text the chain already
//! produced.

use crate::rule::Rule;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    /// Position of the earlier rule in the audited chain
    pub earlier_index: usize,
    pub earlier: Rule,
    /// Position of the later rule in the audited chain
    pub later_index: usize,
    pub later: Rule,
}

impl std::fmt::Display for Collision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "rule #{} ({}) re-matches output of rule #{} ({})",
            self.later_index, self.later, self.earlier_index, self.earlier
        )
    }
}

/// Every `(i, j)` with `i < j` where `rules[j].from` occurs in `rules[i].to`.
pub fn find_collisions<'a, I>(rules: I) -> Vec<Collision>
where
    I: IntoIterator<Item = &'a Rule>,
{
    let chain: Vec<&Rule> = rules.into_iter().collect();
    let mut found = Vec::new();

    for (i, earlier) in chain.iter().enumerate() {
        for (j, later) in chain.iter().enumerate().skip(i + 1) {
            if earlier.to.contains(later.from.as_str()) {
                found.push(Collision {
                    earlier_index: i,
                    earlier: (*earlier).clone(),
                    later_index: j,
                    later: (*later).clone(),
                });
            }
        }
    }

    found
}
