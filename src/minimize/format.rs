//! Rendering of implicants as literal expressions

use super::term::{Bit, Pattern};
use super::Mode;
use std::fmt;

/// Marker appended to a complemented variable
pub const COMPLEMENT: char = '\'';

const SOP_JOIN: &str = " + ";
const POS_JOIN: &str = " · ";

/// A variable, possibly complemented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub name: String,
    pub complemented: bool,
}

impl Literal {
    pub fn toggled(&self) -> Literal {
        Literal {
            name: self.name.clone(),
            complemented: !self.complemented,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.complemented {
            write!(f, "{}{}", self.name, COMPLEMENT)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Conjunction of literals; displays as `AB'C`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product(Vec<Literal>);

impl Product {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// De Morgan dual: every literal toggled and joined as a disjunction
    pub fn to_sum(&self) -> String {
        self.0
            .iter()
            .map(|l| l.toggled().to_string())
            .collect::<Vec<_>>()
            .join(SOP_JOIN)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for literal in &self.0 {
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

/// Build the product term for a pattern; eliminated positions contribute nothing
pub fn format_product(pattern: &Pattern, names: &[String]) -> Product {
    let mut literals: Vec<Literal> = pattern
        .bits()
        .iter()
        .zip(names)
        .filter_map(|(bit, name)| match bit {
            Bit::One => Some(Literal {
                name: name.clone(),
                complemented: false,
            }),
            Bit::Zero => Some(Literal {
                name: name.clone(),
                complemented: true,
            }),
            Bit::Eliminated => None,
        })
        .collect();

    literals.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then(a.complemented.cmp(&b.complemented))
    });

    Product(literals)
}

/// Join products into the final expression.
///
/// Empty products are dropped and the rest ordered by their product text. For
/// POS the products are expected to come from the complement function and are
/// rendered as parenthesised sums.
pub fn assemble(products: Vec<Product>, mode: Mode) -> String {
    let mut keyed: Vec<(String, Product)> = products
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(|p| (p.to_string(), p))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    match mode {
        Mode::Sop => {
            if keyed.is_empty() {
                return "1".to_string();
            }
            keyed
                .into_iter()
                .map(|(text, _)| text)
                .collect::<Vec<_>>()
                .join(SOP_JOIN)
        }
        Mode::Pos => {
            if keyed.is_empty() {
                return "0".to_string();
            }
            keyed
                .iter()
                .map(|(_, p)| format!("({})", p.to_sum()))
                .collect::<Vec<_>>()
                .join(POS_JOIN)
        }
    }
}
