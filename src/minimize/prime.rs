//! Prime-implicant generation
//!
//! Terms are bucketed by Hamming weight and only neighbouring buckets are
//! compared. Merged terms are keyed by their resulting pattern so two merges
//! that land on the same pattern accumulate coverage instead of duplicating.
//! Iteration stops once a round produces no merged term.

use super::term::{Pattern, Term};
use log::trace;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Prime implicants with the real minterms each one covers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimeImplicants {
    terms: Vec<Term>,
    coverage: Vec<BTreeSet<u32>>,
}

impl PrimeImplicants {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Prime implicant terms, in discovery order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Real-minterm coverage, parallel to `terms()`
    pub fn coverage(&self) -> &[BTreeSet<u32>] {
        &self.coverage
    }

    pub fn pattern(&self, index: usize) -> &Pattern {
        &self.terms[index].pattern
    }

    fn push(&mut self, term: Term, covered: BTreeSet<u32>) {
        self.terms.push(term);
        self.coverage.push(covered);
    }
}

/// Generate the prime implicants of a function given by minterms and don't-cares
pub fn generate(minterms: &[u32], dont_cares: &[u32], num_vars: usize) -> PrimeImplicants {
    let minterm_set: BTreeSet<u32> = minterms.iter().copied().collect();

    let mut current: Vec<Term> = minterms
        .iter()
        .map(|&m| Term::from_value(m, num_vars, false))
        .chain(
            dont_cares
                .iter()
                .map(|&d| Term::from_value(d, num_vars, true)),
        )
        .collect();

    let mut primes = PrimeImplicants::default();
    let mut round = 0;

    while !current.is_empty() {
        round += 1;
        let combined = merge_round(&mut current);

        trace!(
            "round {}: {} terms, {} merged",
            round,
            current.len(),
            combined.len()
        );

        for term in current {
            if term.consumed {
                continue;
            }
            let covered: BTreeSet<u32> =
                term.coverage.intersection(&minterm_set).copied().collect();
            if !covered.is_empty() {
                primes.push(term, covered);
            }
        }

        current = combined;
    }

    primes
}

/// One merge pass: marks consumed terms and returns the combined terms in discovery order
fn merge_round(terms: &mut [Term]) -> Vec<Term> {
    let mut buckets: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, term) in terms.iter().enumerate() {
        buckets.entry(term.weight()).or_default().push(i);
    }

    let mut combined: Vec<Term> = Vec::new();
    let mut by_pattern: HashMap<Pattern, usize> = HashMap::new();

    for (&weight, lower) in &buckets {
        let Some(higher) = buckets.get(&(weight + 1)) else {
            continue;
        };

        for &i in lower {
            for &j in higher {
                let Some(pos) = terms[i].pattern.single_difference(&terms[j].pattern) else {
                    continue;
                };

                terms[i].consumed = true;
                terms[j].consumed = true;

                let merged = terms[i].merge(&terms[j], pos);
                match by_pattern.get(&merged.pattern) {
                    Some(&k) => combined[k].absorb(merged),
                    None => {
                        by_pattern.insert(merged.pattern.clone(), combined.len());
                        combined.push(merged);
                    }
                }
            }
        }
    }

    combined
}
