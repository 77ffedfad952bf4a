// qenmlrs/src/namelist/variable.rs

//! A single schema-resolved namelist variable.

use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::error::{QenmlError, Result};
use crate::schema::{GroupName, SchemaRegistry, VariableType};
use crate::values::{
    coerce_character, coerce_integer, coerce_logical, coerce_real, InputValue, TypedValue,
};

/// A validated, typed namelist entry resolved against a schema registry.
///
/// Construction normalizes the name (lower case, index suffix stripped) and
/// resolves the owning namelist group; the declared type is looked up lazily
/// on first value access and memoized for the life of the instance. The
/// resolved group is immutable; the raw value may be reassigned.
#[derive(Clone)]
pub struct NamelistVariable {
    name: String,
    index: Option<usize>,
    raw_value: InputValue,
    resolved_group: GroupName,
    registry: Arc<dyn SchemaRegistry>,
    declared_type: OnceCell<VariableType>,
}

impl NamelistVariable {
    /// Construct a variable from a raw (name, value, optional group hint)
    /// triple.
    ///
    /// The name may carry an `identifier(digits)` index suffix addressing one
    /// slot of an array-typed parameter. The hint is consulted only when the
    /// registry declares the name in more than one namelist; it must then
    /// name one of the candidate groups (case-insensitively) or construction
    /// fails with `AmbiguousName`.
    pub fn new<V>(
        registry: Arc<dyn SchemaRegistry>,
        name: &str,
        value: V,
        in_namelist: Option<&str>,
    ) -> Result<Self>
    where
        V: Into<InputValue>,
    {
        let lowered = name.to_lowercase();
        let (name, index) = split_index(&lowered)?;

        let candidates = registry.groups_declaring(&name);
        let resolved_group = match candidates.as_slice() {
            [] => return Err(QenmlError::unknown_name(name)),
            // a hint, if supplied, is not required to match the single owner
            [only] => *only,
            _ => resolve_hint(&name, &candidates, in_namelist)?,
        };
        debug!("resolved '{}' to namelist {}", name, resolved_group);

        Ok(Self {
            name,
            index,
            raw_value: value.into(),
            resolved_group,
            registry,
            declared_type: OnceCell::new(),
        })
    }

    /// The normalized (lower-case, index-free) parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The array slot addressed by the original name, if it carried one.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The namelist group this variable resolved to at construction.
    pub fn group(&self) -> GroupName {
        self.resolved_group
    }

    /// The value as supplied, before coercion.
    pub fn raw_value(&self) -> &InputValue {
        &self.raw_value
    }

    /// Replace the raw value. Name, index, resolved group, and the memoized
    /// declared type are unaffected.
    pub fn set_raw_value<V: Into<InputValue>>(&mut self, value: V) {
        self.raw_value = value.into();
    }

    /// The schema-declared type of this variable, looked up on first access
    /// and memoized.
    ///
    /// A registry with no type entry for (group, name) fails with
    /// `UnknownType`; nothing is cached in that case, so a registry finalized
    /// later is picked up by the next access.
    pub fn declared_type(&self) -> Result<VariableType> {
        if let Some(ty) = self.declared_type.get() {
            return Ok(*ty);
        }

        let ty = self
            .registry
            .declared_type(self.resolved_group, &self.name)
            .ok_or_else(|| QenmlError::UnknownType {
                group: self.resolved_group,
                name: self.name.clone(),
            })?;
        trace!(
            "declared type of {}::{} is {}",
            self.resolved_group,
            self.name,
            ty
        );

        Ok(*self.declared_type.get_or_init(|| ty))
    }

    /// The raw value coerced to the declared type.
    ///
    /// For a fixed-length float array type the result is the indexed view: a
    /// sequence with the coerced value in the slot this variable addresses
    /// and the null-marker everywhere else. An index beyond the declared
    /// length leaves every slot null.
    pub fn value(&self) -> Result<TypedValue> {
        match self.declared_type()? {
            VariableType::Integer => {
                coerce_integer(&self.name, &self.raw_value).map(TypedValue::Integer)
            }
            VariableType::Real => coerce_real(&self.name, &self.raw_value).map(TypedValue::Real),
            VariableType::Logical => {
                coerce_logical(&self.name, &self.raw_value).map(TypedValue::Logical)
            }
            VariableType::Character => {
                coerce_character(&self.name, &self.raw_value).map(TypedValue::Character)
            }
            VariableType::RealArray { len } => {
                let index = self.index.ok_or_else(|| QenmlError::Coercion {
                    name: self.name.clone(),
                    value: self.raw_value.to_string(),
                    expected: format!("real array({}) slot, but no index was given", len),
                })?;

                let mut slots = vec![None; len];
                if index < len {
                    slots[index] = Some(coerce_real(&self.name, &self.raw_value)?);
                }
                Ok(TypedValue::RealArray(slots))
            }
        }
    }
}

impl fmt::Debug for NamelistVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamelistVariable")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("raw_value", &self.raw_value)
            .field("resolved_group", &self.resolved_group)
            .finish()
    }
}

/// Variables are equal iff name, declared type, coerced value, and resolved
/// group all compare equal. `!=` is the exact negation.
impl PartialEq for NamelistVariable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.resolved_group == other.resolved_group
            && self.declared_type().ok() == other.declared_type().ok()
            && self.value().ok() == other.value().ok()
    }
}

/// Split a lower-cased name into its identifier and optional index suffix.
///
/// `celldm(2)` yields (`celldm`, index 2); empty digits (`celldm()`) yield no
/// index; anything else inside the parentheses is malformed.
fn split_index(name: &str) -> Result<(String, Option<usize>)> {
    let Some(open) = name.find('(') else {
        return Ok((name.to_string(), None));
    };

    let ident = &name[..open];
    if ident.is_empty() || !ident.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(QenmlError::invalid_index(
            name,
            "no identifier before the index",
        ));
    }

    let suffix = &name[open + 1..];
    let digits = suffix.strip_suffix(')').unwrap_or(suffix);
    if digits.is_empty() {
        return Ok((ident.to_string(), None));
    }

    let index = digits.parse::<usize>().map_err(|_| {
        QenmlError::invalid_index(name, "index is not an unsigned integer")
    })?;

    Ok((ident.to_string(), Some(index)))
}

/// Pick the resolved group when a name is declared in several namelists.
fn resolve_hint(
    name: &str,
    candidates: &[GroupName],
    hint: Option<&str>,
) -> Result<GroupName> {
    let ambiguous = || QenmlError::ambiguous_name(name, candidates.to_vec());

    let hint = hint.ok_or_else(ambiguous)?;
    let group = hint.parse::<GroupName>().map_err(|_| ambiguous())?;
    if candidates.contains(&group) {
        Ok(group)
    } else {
        Err(ambiguous())
    }
}
