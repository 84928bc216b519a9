//! Essential prime implicant selection
//!
//! Essential implicants are taken first. Whatever they leave uncovered is
//! filled greedily by the candidate covering the most uncovered minterms.
//! This does not always reach an exact minimum cover.

use super::prime::PrimeImplicants;
use super::term::Pattern;
use log::trace;
use std::collections::BTreeSet;

/// Choose a covering subset of prime implicants for `minterms`
pub fn select(primes: &PrimeImplicants, minterms: &[u32]) -> Vec<Pattern> {
    if primes.is_empty() {
        return Vec::new();
    }

    let coverage = primes.coverage();
    let minterm_set: BTreeSet<u32> = minterms.iter().copied().collect();
    let mut uncovered = minterm_set.clone();
    let mut chosen: Vec<usize> = Vec::new();

    for m in &minterm_set {
        let mut covering = coverage
            .iter()
            .enumerate()
            .filter(|(_, cov)| cov.contains(m))
            .map(|(i, _)| i);

        if let (Some(only), None) = (covering.next(), covering.next()) {
            if !chosen.contains(&only) {
                trace!("{} is essential for minterm {}", primes.pattern(only), m);
                chosen.push(only);
                uncovered.retain(|v| !coverage[only].contains(v));
            }
        }
    }

    let mut candidates: Vec<usize> = (0..primes.len()).filter(|i| !chosen.contains(i)).collect();

    while !uncovered.is_empty() && !candidates.is_empty() {
        // Ties go to the earliest candidate
        let mut best = 0;
        let mut best_gain = gain(&coverage[candidates[0]], &uncovered);
        for (slot, &i) in candidates.iter().enumerate().skip(1) {
            let g = gain(&coverage[i], &uncovered);
            if g > best_gain {
                best = slot;
                best_gain = g;
            }
        }

        let picked = candidates.remove(best);
        trace!(
            "greedy pick {} covering {} more",
            primes.pattern(picked),
            best_gain
        );
        uncovered.retain(|v| !coverage[picked].contains(v));
        chosen.push(picked);
    }

    chosen
        .into_iter()
        .map(|i| primes.pattern(i).clone())
        .collect()
}

fn gain(cov: &BTreeSet<u32>, uncovered: &BTreeSet<u32>) -> usize {
    cov.intersection(uncovered).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimize::prime::generate;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn run(minterms: &[u32], dont_cares: &[u32], num_vars: usize) -> Vec<String> {
        let primes = generate(minterms, dont_cares, num_vars);
        select(&primes, minterms)
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn test_essentials_only() {
        assert_eq!(run(&[1, 2], &[], 2), vec!["01", "10"]);
    }

    #[test]
    fn test_essential_counted_once() {
        assert_eq!(run(&[1, 3, 5, 7], &[], 3), vec!["--1"]);
    }

    #[test]
    fn test_greedy_fill_on_cyclic_function() {
        // No essentials; every candidate covers two minterms at the start
        assert_eq!(run(&[0, 1, 2, 5, 6, 7], &[], 3), vec!["00-", "-10", "1-1"]);
    }

    #[test]
    fn test_shared_minterm_not_forcing_extra_pick() {
        // 0 and 3 each have a single covering implicant; 1 is shared
        assert_eq!(run(&[0, 1, 3], &[], 2), vec!["0-", "-1"]);
    }

    #[test]
    fn test_essentials_then_greedy() {
        // 15 forces "-111"; the cyclic rest is filled greedily
        assert_eq!(
            run(&[0, 1, 2, 5, 6, 7, 15], &[], 4),
            vec!["-111", "000-", "0-10", "0-01"]
        );
    }

    #[test]
    fn test_empty_primes() {
        assert!(select(&PrimeImplicants::default(), &[]).is_empty());
    }
}
