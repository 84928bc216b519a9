//! Term representation for prime-implicant generation
//!
//! A term is a bit pattern over the input variables together with the set of
//! decimal values it stands for. Each position of the pattern is `0`, `1`, or
//! `-` once the variable has been eliminated by merging.

use std::collections::BTreeSet;
use std::fmt;

/// Value of a single variable in a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    /// Variable must be false (complemented literal)
    Zero,
    /// Variable must be true (plain literal)
    One,
    /// Variable was eliminated by a merge
    Eliminated,
}

impl Bit {
    /// Parse a character into a Bit
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            '-' => Some(Bit::Eliminated),
            _ => None,
        }
    }

    /// Convert to character representation
    pub fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
            Bit::Eliminated => '-',
        }
    }
}

/// Fixed-length bit pattern, most significant variable first
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(Vec<Bit>);

impl Pattern {
    /// Binary pattern of `value` padded to `num_vars` positions
    pub fn from_value(value: u32, num_vars: usize) -> Self {
        let bits = (0..num_vars)
            .rev()
            .map(|shift| {
                if (value >> shift) & 1 == 1 {
                    Bit::One
                } else {
                    Bit::Zero
                }
            })
            .collect();
        Pattern(bits)
    }

    /// Parse a pattern such as `"1-0"`
    pub fn parse(s: &str) -> Option<Self> {
        s.chars()
            .map(Bit::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Pattern)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    /// Hamming weight: number of `1` positions
    pub fn weight(&self) -> usize {
        self.0.iter().filter(|b| **b == Bit::One).count()
    }

    /// Position of the single differing bit, if the patterns differ in exactly one place.
    ///
    /// Eliminated positions must line up; a `-` facing a `0` or `1` never merges.
    pub fn single_difference(&self, other: &Pattern) -> Option<usize> {
        if self.0.len() != other.0.len() {
            return None;
        }

        let mut diff_pos = None;
        for (i, (a, b)) in self.0.iter().zip(&other.0).enumerate() {
            if a == b {
                continue;
            }
            if *a == Bit::Eliminated || *b == Bit::Eliminated || diff_pos.is_some() {
                return None;
            }
            diff_pos = Some(i);
        }
        diff_pos
    }

    /// Copy of this pattern with position `pos` eliminated
    pub fn eliminate(&self, pos: usize) -> Pattern {
        let mut bits = self.0.clone();
        bits[pos] = Bit::Eliminated;
        Pattern(bits)
    }

    /// Check whether the value's binary form matches this pattern
    pub fn matches(&self, value: u32) -> bool {
        let n = self.0.len();
        self.0.iter().enumerate().all(|(i, bit)| {
            let set = (value >> (n - 1 - i)) & 1 == 1;
            match bit {
                Bit::Eliminated => true,
                Bit::One => set,
                Bit::Zero => !set,
            }
        })
    }

    /// All decimal values matched by this pattern, ascending
    pub fn values(&self) -> BTreeSet<u32> {
        let n = self.0.len();
        (0..1u32 << n).filter(|v| self.matches(*v)).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.0.iter().map(|b| b.to_char()).collect();
        write!(f, "{}", s)
    }
}

/// A pattern plus the minterms and don't-cares it subsumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub pattern: Pattern,
    pub coverage: BTreeSet<u32>,
    /// Set only when every covered value is a don't-care. Never gates selection.
    pub is_pure_dont_care: bool,
    pub consumed: bool,
}

impl Term {
    /// Fully specified term for a single minterm or don't-care
    pub fn from_value(value: u32, num_vars: usize, dont_care: bool) -> Self {
        Term {
            pattern: Pattern::from_value(value, num_vars),
            coverage: BTreeSet::from([value]),
            is_pure_dont_care: dont_care,
            consumed: false,
        }
    }

    pub fn weight(&self) -> usize {
        self.pattern.weight()
    }

    /// Combine two terms differing at `diff_pos` into a fresh, unconsumed term
    pub fn merge(&self, other: &Term, diff_pos: usize) -> Term {
        Term {
            pattern: self.pattern.eliminate(diff_pos),
            coverage: self.coverage.union(&other.coverage).copied().collect(),
            is_pure_dont_care: self.is_pure_dont_care && other.is_pure_dont_care,
            consumed: false,
        }
    }

    /// Fold another term with the same pattern into this one
    pub fn absorb(&mut self, other: Term) {
        self.coverage.extend(other.coverage);
        self.is_pure_dont_care &= other.is_pure_dont_care;
    }
}
