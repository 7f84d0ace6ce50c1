use super::atom::AtomRecord;
use crate::core::utils::identifiers;
use serde::{Serialize, Serializer};
use std::fmt;

/// A set of atoms at one of four granularities.
///
/// Rendered with [`fmt::Display`] in the selection language of the target renderer:
///
/// | variant | text |
/// |---------|------|
/// | `All` | `*` |
/// | `Chain` | `:A` |
/// | `ResidueRange` | `1-3:A`, or `8:A` when start equals end |
/// | `Atom` | `10:B.CA` |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectionExpression {
    All,
    Chain {
        chain: String,
    },
    ResidueRange {
        chain: String,
        start: i64,
        end: i64,
    },
    Atom {
        chain: String,
        residue_id: String,
        atom_name: String,
    },
}

impl SelectionExpression {
    /// Whether `atom` is denoted by this expression.
    pub fn matches(&self, atom: &AtomRecord) -> bool {
        match self {
            SelectionExpression::All => true,
            SelectionExpression::Chain { chain } => atom.chain == *chain,
            SelectionExpression::ResidueRange { chain, start, end } => {
                atom.chain == *chain
                    && identifiers::parse_residue_number(&atom.residue_id)
                        .is_some_and(|n| (*start..=*end).contains(&n))
            }
            SelectionExpression::Atom {
                chain,
                residue_id,
                atom_name,
            } => {
                atom.chain == *chain && atom.residue_id == *residue_id && atom.atom_name == *atom_name
            }
        }
    }
}

impl fmt::Display for SelectionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionExpression::All => write!(f, "*"),
            SelectionExpression::Chain { chain } => write!(f, ":{}", chain),
            SelectionExpression::ResidueRange { chain, start, end } if start == end => {
                write!(f, "{}:{}", start, chain)
            }
            SelectionExpression::ResidueRange { chain, start, end } => {
                write!(f, "{}-{}:{}", start, end, chain)
            }
            SelectionExpression::Atom {
                chain,
                residue_id,
                atom_name,
            } => write!(f, "{}:{}.{}", residue_id, chain, atom_name),
        }
    }
}

impl Serialize for SelectionExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The ordered expressions of one representation channel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SelectionSet {
    expressions: Vec<SelectionExpression>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, expression: SelectionExpression) {
        self.expressions.push(expression);
    }

    pub fn expressions(&self) -> &[SelectionExpression] {
        &self.expressions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectionExpression> {
        self.expressions.iter()
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Whether any expression of the set denotes `atom`.
    pub fn covers(&self, atom: &AtomRecord) -> bool {
        self.expressions.iter().any(|e| e.matches(atom))
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.expressions.iter().map(ToString::to_string).collect()
    }

    /// Joins the expressions into one renderer selection string (`a or b or c`).
    pub fn to_selection_string(&self) -> String {
        self.to_strings().join(" or ")
    }
}

impl From<Vec<SelectionExpression>> for SelectionSet {
    fn from(expressions: Vec<SelectionExpression>) -> Self {
        Self { expressions }
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a SelectionExpression;
    type IntoIter = std::slice::Iter<'a, SelectionExpression>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.iter()
    }
}
