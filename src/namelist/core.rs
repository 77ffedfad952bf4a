// qenmlrs/src/namelist/core.rs

//! The group-uniform namelist container.

use std::collections::HashMap;
use std::fmt;

use serde::ser::{Error as SerError, SerializeMap};
use serde::{Serialize, Serializer};

use super::variable::NamelistVariable;
use crate::error::{QenmlError, Result};
use crate::schema::GroupName;

/// An ordered mapping of distinct variable names to namelist variables, all
/// belonging to the same namelist group.
///
/// The group is derived from the first member at construction and is
/// immutable thereafter; individual members stay mutable through
/// [`get_mut`](Self::get_mut) and the variable's own setter.
#[derive(Debug, Clone, PartialEq)]
pub struct Namelist {
    /// Variables keyed by normalized name
    variables: HashMap<String, NamelistVariable>,
    /// Order of variables (to preserve insertion order)
    variable_order: Vec<String>,
    /// The namelist group shared by every member
    group: GroupName,
}

impl Namelist {
    /// Assemble a namelist from variables keyed by their own names.
    ///
    /// Fails with `EmptyNamelist` on no input and with `GroupMismatch` if any
    /// member resolved to a different group than the first. A repeated name
    /// replaces the earlier variable, keeping its original position.
    pub fn from_variables<I>(variables: I) -> Result<Self>
    where
        I: IntoIterator<Item = NamelistVariable>,
    {
        let mut map = HashMap::new();
        let mut order = Vec::new();
        let mut group: Option<GroupName> = None;

        for variable in variables {
            match group {
                None => group = Some(variable.group()),
                Some(benchmark) if variable.group() != benchmark => {
                    return Err(QenmlError::GroupMismatch {
                        name: variable.name().to_string(),
                        expected: benchmark,
                        found: variable.group(),
                    });
                }
                _ => {}
            }

            let name = variable.name().to_string();
            if !map.contains_key(&name) {
                order.push(name.clone());
            }
            map.insert(name, variable);
        }

        let group = group.ok_or(QenmlError::EmptyNamelist)?;

        Ok(Self {
            variables: map,
            variable_order: order,
            group,
        })
    }

    /// The namelist group every member belongs to.
    pub fn group(&self) -> GroupName {
        self.group
    }

    /// Get a member by name.
    pub fn get(&self, name: &str) -> Option<&NamelistVariable> {
        self.variables.get(&name.to_lowercase())
    }

    /// Get a mutable reference to a member by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut NamelistVariable> {
        self.variables.get_mut(&name.to_lowercase())
    }

    /// Check if a member exists.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(&name.to_lowercase())
    }

    /// Member names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.variable_order
    }

    /// Iterate over members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &NamelistVariable)> {
        self.variable_order
            .iter()
            .filter_map(move |name| self.variables.get(name).map(|var| (name, var)))
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if the namelist has no members. Always false for a
    /// successfully constructed namelist.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl fmt::Display for Namelist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "&{}", self.group)?;
        for (name, variable) in self.iter() {
            match variable.value() {
                Ok(value) => writeln!(f, "    {} = {}", name, value)?,
                Err(_) => writeln!(f, "    {} = <uncoercible>", name)?,
            }
        }
        write!(f, "/")
    }
}

/// Serializes as an ordered map of member name to coerced value; a member
/// whose coercion fails aborts serialization.
impl Serialize for Namelist {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, variable) in self.iter() {
            let value = variable.value().map_err(S::Error::custom)?;
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
