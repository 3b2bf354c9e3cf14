//! Filter clauses.
//!
//! A [`Predicate`] is one parsed `field OP value` clause. Parsing resolves
//! the field and operator to their enums and converts the operand to the
//! type the field requires, so evaluation against a game never fails.

use crate::error::{Result, SeekerError};
use crate::field::{Field, FieldKind};
use crate::game::{name_key, BoardGame};
use crate::op::Op;
use crate::value::{Number, Value};

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use gameshelf_seeker::{BoardGame, Field, Op, Predicate};
///
/// let clause = Predicate::parse("rating >= 4.5").unwrap();
/// assert_eq!(clause.field(), Field::Rating);
/// assert_eq!(clause.op(), Op::Gte);
///
/// let game = BoardGame::builder("Orange").rating(4.7).build();
/// assert!(clause.matches(&game));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    field: Field,
    op: Op,
    operand: Operand,
}

/// The comparison value of a clause, typed by its field.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Name operand, stored case-folded.
    Text(String),
    /// Numeric operand.
    Number(f64),
}

impl Predicate {
    /// Parses clause text of the form `field OP value`.
    ///
    /// Whitespace around the field, operator and value is ignored. The
    /// operand may not itself contain the operator token.
    pub fn parse(clause: &str) -> Result<Self> {
        let clause = clause.trim();
        let (field, op, operand) = Op::split_clause(clause)
            .ok_or_else(|| SeekerError::InvalidFilterSyntax(clause.to_string()))?;
        let field = Field::resolve(field)?;
        Predicate::new(field, op, operand.trim())
    }

    /// Builds a predicate from already-resolved parts.
    ///
    /// Fails with `BadOperand` if a numeric field gets a non-numeric operand.
    pub fn new(field: Field, op: Op, operand: &str) -> Result<Self> {
        let operand = match field.kind() {
            FieldKind::String => Operand::Text(name_key(operand)),
            FieldKind::Number => Operand::Number(parse_number(field, operand)?),
        };

        Ok(Predicate { field, op, operand })
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Evaluates this predicate against a game.
    pub fn matches(&self, game: &BoardGame) -> bool {
        match (&self.operand, self.field.value(game)) {
            (Operand::Text(pattern), Value::String(name)) => self.match_name(name, pattern),
            (Operand::Number(operand), Value::Number(value)) => {
                self.match_number(value, *operand)
            }
            // Operand types are fixed by the field at construction.
            _ => false,
        }
    }

    fn match_name(&self, name: &str, pattern: &str) -> bool {
        let name = name_key(name);
        match self.op {
            Op::Approx => name.contains(pattern),
            op => op.eval_ordering(name.as_str().cmp(pattern)),
        }
    }

    fn match_number(&self, value: Number, operand: f64) -> bool {
        match self.op {
            Op::Approx => (value.to_f64() - operand).abs() < Op::APPROX_TOLERANCE,
            // Exact comparison, no tolerance for `==`.
            op => match value.compare(Number::F64(operand)) {
                Some(ordering) => op.eval_ordering(ordering),
                None => op == Op::Ne,
            },
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.operand {
            Operand::Text(text) => write!(f, "{}{}{}", self.field, self.op, text),
            Operand::Number(n) => write!(f, "{}{}{}", self.field, self.op, n),
        }
    }
}

fn parse_number(field: Field, operand: &str) -> Result<f64> {
    match operand.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(SeekerError::bad_operand(field.as_str(), operand)),
    }
}
