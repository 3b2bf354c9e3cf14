//! Comparison operators for filter clauses.
//!
//! The [`Op`] enum defines the seven operators a clause can use. Their
//! textual tokens are scanned in [`Op::SCAN_ORDER`], which tries every
//! two-character operator before the one-character ones so that `>` never
//! matches inside `>=`.
//!
//! Every operator applies to both field kinds; only `~=` changes meaning
//! between them.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::{Result, SeekerError};

/// Comparison operator for a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `~=`: substring match on names, approximate equality on numbers.
    Approx,
    /// `>`
    Gt,
    /// `<`
    Lt,
}

impl Op {
    /// Operators in the order a clause is scanned for them.
    pub const SCAN_ORDER: [Op; 7] = [
        Op::Gte,
        Op::Lte,
        Op::Eq,
        Op::Ne,
        Op::Approx,
        Op::Gt,
        Op::Lt,
    ];

    /// Maximum distance at which `~=` considers two numbers equal (exclusive).
    pub const APPROX_TOLERANCE: f64 = 0.1;

    /// Returns the textual token of this operator.
    pub fn token(self) -> &'static str {
        match self {
            Op::Gte => ">=",
            Op::Lte => "<=",
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Approx => "~=",
            Op::Gt => ">",
            Op::Lt => "<",
        }
    }

    /// Evaluates an ordering-based comparison.
    ///
    /// `ordering` is the field value compared against the operand.
    /// `Approx` is not ordering-based and always yields `false` here.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            Op::Approx => false,
        }
    }

    /// Finds the first operator (in scan order) contained in `clause` and
    /// splits the clause around its first occurrence.
    pub(crate) fn split_clause(clause: &str) -> Option<(&str, Op, &str)> {
        Op::SCAN_ORDER.iter().find_map(|op| {
            clause
                .split_once(op.token())
                .map(|(field, operand)| (field, *op, operand))
        })
    }
}

impl FromStr for Op {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        Op::SCAN_ORDER
            .into_iter()
            .find(|op| op.token() == token)
            .ok_or_else(|| SeekerError::UnknownOperator(token.to_string()))
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
