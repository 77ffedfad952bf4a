// qenmlrs/src/schema.rs

//! The schema registry contract and the types it speaks.
//!
//! The registry is the external source of truth mapping parameter names to
//! their owning namelist group(s) and declared types. This crate consumes the
//! contract; the full Quantum ESPRESSO parameter tables are supplied by the
//! caller. [`MemoryRegistry`] is an in-memory implementation suitable both for
//! production registries built at startup and for deterministic test fixtures.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The recognized namelist group identifiers of a Quantum ESPRESSO input deck.
///
/// Parsing is case-insensitive ("control", "Control", and "CONTROL" all
/// resolve); display is the conventional upper-case spelling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupName {
    Control,
    System,
    Electrons,
    Ions,
    Cell,
    Inputph,
}

/// Schema-declared type of a namelist parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    /// Integer scalar
    Integer,
    /// Floating-point scalar
    Real,
    /// Fortran logical
    Logical,
    /// Character string
    Character,
    /// Fixed-length float array addressed one slot at a time, e.g. the
    /// six lattice parameters of `celldm`
    RealArray { len: usize },
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableType::Integer => write!(f, "integer"),
            VariableType::Real => write!(f, "real"),
            VariableType::Logical => write!(f, "logical"),
            VariableType::Character => write!(f, "character"),
            VariableType::RealArray { len } => write!(f, "real array({})", len),
        }
    }
}

/// Source of truth for which namelists declare a parameter and as what type.
///
/// Implementations are treated as immutable for the lifetime of any
/// [`NamelistVariable`](crate::NamelistVariable) holding a handle to them.
pub trait SchemaRegistry {
    /// The namelist groups in which the normalized `name` is a recognized
    /// parameter; empty if the name is unknown.
    fn groups_declaring(&self, name: &str) -> Vec<GroupName>;

    /// The declared type of `name` within a specific `group`, if any.
    fn declared_type(&self, group: GroupName, name: &str) -> Option<VariableType>;
}

/// In-memory [`SchemaRegistry`] built up with [`declare`](Self::declare).
///
/// Names are normalized to lower case on insert and lookup, so schema data may
/// be declared in whichever case its source uses.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    entries: HashMap<GroupName, HashMap<String, VariableType>>,
}

impl MemoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Declare a parameter in a namelist group.
    pub fn declare(&mut self, group: GroupName, name: &str, ty: VariableType) -> &mut Self {
        self.entries
            .entry(group)
            .or_default()
            .insert(name.to_lowercase(), ty);
        self
    }

    /// Check if the registry holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|vars| vars.is_empty())
    }

    /// Number of declared (group, name) pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(|vars| vars.len()).sum()
    }
}

impl SchemaRegistry for MemoryRegistry {
    fn groups_declaring(&self, name: &str) -> Vec<GroupName> {
        let name = name.to_lowercase();
        let mut groups: Vec<GroupName> = self
            .entries
            .iter()
            .filter(|(_, vars)| vars.contains_key(&name))
            .map(|(group, _)| *group)
            .collect();
        // HashMap iteration order is arbitrary; keep candidate sets stable
        groups.sort();
        groups
    }

    fn declared_type(&self, group: GroupName, name: &str) -> Option<VariableType> {
        self.entries.get(&group)?.get(&name.to_lowercase()).copied()
    }
}
