//! Hierarchy traversal over `is_a` edges

use std::collections::HashSet;

use crate::types::Term;

use super::Ontology;

/// Ancestors of `start`, breadth-first, bounded by `distance` hops
///
/// Parents are expanded in declaration order and each ancestor is reported
/// once, at the first hop it is reached. `start` itself is never included,
/// which also keeps cyclic input from looping.
pub(crate) fn ancestor_positions(
    parents: &[Vec<usize>],
    start: usize,
    distance: Option<usize>,
) -> Vec<usize> {
    let mut seen: HashSet<usize> = HashSet::from([start]);
    let mut ancestors = Vec::new();
    let mut frontier = vec![start];
    let mut hops = 0;

    while !frontier.is_empty() && distance.map_or(true, |max| hops < max) {
        let mut next = Vec::new();

        for node in frontier {
            for &parent in &parents[node] {
                if seen.insert(parent) {
                    ancestors.push(parent);
                    next.push(parent);
                }
            }
        }

        frontier = next;
        hops += 1;
    }

    ancestors
}

/// Superclasses of a term by identifier; unknown identifiers have none
pub(crate) fn superclasses<'a>(
    ontology: &'a Ontology,
    term_id: &str,
    distance: Option<usize>,
) -> Vec<&'a Term> {
    let Some(start) = ontology.position(term_id) else {
        return Vec::new();
    };

    ancestor_positions(&ontology.parents, start, distance)
        .into_iter()
        .map(|pos| &ontology.terms[pos])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    //   0
    //   |
    //   1
    //  / \
    // 2   3
    //  \ /
    //   4
    fn diamond() -> Vec<Vec<usize>> {
        vec![vec![], vec![0], vec![1], vec![1], vec![2, 3]]
    }

    #[test]
    fn test_zero_distance_is_empty() {
        assert!(ancestor_positions(&diamond(), 4, Some(0)).is_empty());
    }

    #[test]
    fn test_bounded_distance() {
        assert_eq!(ancestor_positions(&diamond(), 4, Some(1)), vec![2, 3]);
        assert_eq!(ancestor_positions(&diamond(), 4, Some(2)), vec![2, 3, 1]);
    }

    #[test]
    fn test_unbounded_deduplicates_shared_ancestors() {
        assert_eq!(ancestor_positions(&diamond(), 4, None), vec![2, 3, 1, 0]);
    }

    #[test]
    fn test_root_has_no_ancestors() {
        assert!(ancestor_positions(&diamond(), 0, None).is_empty());
    }

    #[test]
    fn test_cycle_terminates_and_excludes_start() {
        let cyclic = vec![vec![1], vec![2], vec![0]];
        assert_eq!(ancestor_positions(&cyclic, 0, None), vec![1, 2]);
    }
}
