//! Normalized answers parsed from the service's XML response.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value carried by one resolver answer.
///
/// A `data` element with exactly one `item` collapses to [`Single`](Self::Single);
/// any other count (including zero) stays a [`Multiple`](Self::Multiple) in
/// document order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ResolvedValue {
    /// Build a value from `item` texts, collapsing a single item.
    pub fn from_items(mut items: Vec<String>) -> Self {
        if items.len() == 1 {
            Self::Single(items.remove(0))
        } else {
            Self::Multiple(items)
        }
    }

    /// The string when the value collapsed to a single item.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multiple(_) => None,
        }
    }

    /// The first item, whatever the shape.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multiple(items) => items.first().map(String::as_str),
        }
    }

    /// Number of items carried.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multiple(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All items as a list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(s) => vec![s],
            Self::Multiple(items) => items,
        }
    }
}

impl fmt::Display for ResolvedValue {
    /// Multiple items are written one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(s) => f.write_str(s),
            Self::Multiple(items) => f.write_str(&items.join("\n")),
        }
    }
}

/// One resolver's answer for a query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// The identifier the service received
    pub input: String,

    /// The representation that was requested
    pub representation: String,

    /// The resolver that produced this answer (e.g., "name_by_opsin")
    pub resolver: String,

    /// How the resolver classified the input (e.g., "chemical name", "SMILES")
    pub input_format: String,

    /// The notation the resolver actually matched
    pub notation: String,

    /// The resolved value
    pub value: ResolvedValue,
}
