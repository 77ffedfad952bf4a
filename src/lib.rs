// qenmlrs/src/lib.rs

//! A Rust-native library for modeling Quantum ESPRESSO namelist and card
//! input records.
//!
//! This library provides functionality to:
//! - Normalize parameter names and extract `(i)` index suffixes
//! - Resolve a parameter's owning namelist group against a schema registry
//! - Coerce raw values to their schema-declared types, including the indexed
//!   view over fixed-length float array parameters
//! - Assemble variables into ordered, group-uniform namelists
//! - Carry tabular card sections alongside the namelists
//!
//! The schema registry is injected: construction takes a
//! [`SchemaRegistry`] handle, so production code and tests alike decide which
//! parameter tables back the resolution.
//!
//! ```
//! use std::sync::Arc;
//! use qenmlrs::{GroupName, MemoryRegistry, NamelistVariable, SchemaRegistry, VariableType};
//!
//! fn main() -> Result<(), qenmlrs::QenmlError> {
//!     let mut registry = MemoryRegistry::new();
//!     registry.declare(GroupName::Control, "dt", VariableType::Real);
//!     let registry: Arc<dyn SchemaRegistry> = Arc::new(registry);
//!
//!     let dt = NamelistVariable::new(registry, "DT", "20", None)?;
//!     assert_eq!(dt.group(), GroupName::Control);
//!     Ok(())
//! }
//! ```

pub mod card;
pub mod error;
pub mod namelist;
pub mod schema;
pub mod values;

pub use card::{AtomicPositions, AtomicSpecies, Card, CellParameters};
pub use error::{QenmlError, Result};
pub use namelist::{Namelist, NamelistVariable};
pub use schema::{GroupName, MemoryRegistry, SchemaRegistry, VariableType};
pub use values::{InputValue, TypedValue};

#[cfg(feature = "json")]
/// Serialize a namelist to a JSON object of coerced member values.
pub fn to_json(namelist: &Namelist) -> Result<String> {
    serde_json::to_string_pretty(namelist).map_err(QenmlError::from)
}

#[cfg(feature = "yaml")]
/// Serialize a namelist to a YAML mapping of coerced member values.
pub fn to_yaml(namelist: &Namelist) -> Result<String> {
    serde_yaml::to_string(namelist).map_err(QenmlError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn registry() -> Arc<dyn SchemaRegistry> {
        let mut registry = MemoryRegistry::new();
        registry
            .declare(GroupName::Control, "calculation", VariableType::Character)
            .declare(GroupName::Control, "dt", VariableType::Real);
        Arc::new(registry)
    }

    #[test]
    fn test_variable_to_namelist() {
        let registry = registry();
        let namelist = Namelist::from_variables(vec![
            NamelistVariable::new(registry.clone(), "calculation", "scf", None).unwrap(),
            NamelistVariable::new(registry.clone(), "dt", 20, None).unwrap(),
        ])
        .unwrap();

        assert_eq!(namelist.group(), GroupName::Control);
        assert_eq!(
            namelist.get("dt").unwrap().value().unwrap(),
            TypedValue::Real(20.0)
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_to_json() {
        let registry = registry();
        let namelist = Namelist::from_variables(vec![
            NamelistVariable::new(registry.clone(), "calculation", "scf", None).unwrap(),
            NamelistVariable::new(registry.clone(), "dt", "20", None).unwrap(),
        ])
        .unwrap();

        let json = to_json(&namelist).unwrap();
        assert!(json.contains("\"calculation\""));
        assert!(json.contains("\"scf\""));
        assert!(json.contains("20.0"));
    }
}
