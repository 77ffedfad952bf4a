// qenmlrs/src/card.rs

//! Thin containers for the tabular card sections of an input deck.
//!
//! Cards carry row-oriented data plus a free-form option tag (the unit or
//! coordinate convention, e.g. "angstrom" or "alat"). This module performs no
//! content validation; cards are downstream consumers of already-validated
//! values.

use serde::{Deserialize, Serialize};

use crate::values::InputValue;

/// A labeled tabular card: ordered rows of fields plus an option tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    data: Vec<Vec<InputValue>>,
    option: String,
}

impl Card {
    /// Create a card from its rows and option tag.
    pub fn new<S: Into<String>>(data: Vec<Vec<InputValue>>, option: S) -> Self {
        Self {
            data,
            option: option.into(),
        }
    }

    /// The tabular payload, one tuple of fields per row.
    pub fn data(&self) -> &[Vec<InputValue>] {
        &self.data
    }

    /// The option tag.
    pub fn option(&self) -> &str {
        &self.option
    }

    /// Lazily project one column across all rows.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &InputValue> {
        self.data.iter().filter_map(move |row| row.get(index))
    }
}

/// An ATOMIC_SPECIES card: symbol, mass, pseudopotential file per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomicSpecies(Card);

impl AtomicSpecies {
    pub fn new(card: Card) -> Self {
        Self(card)
    }

    /// The underlying card.
    pub fn card(&self) -> &Card {
        &self.0
    }

    /// Species symbols (column 0).
    pub fn species(&self) -> impl Iterator<Item = &InputValue> {
        self.0.column(0)
    }

    /// Atomic masses (column 1).
    pub fn masses(&self) -> impl Iterator<Item = &InputValue> {
        self.0.column(1)
    }

    /// Pseudopotential file names (column 2).
    pub fn pseudopotentials(&self) -> impl Iterator<Item = &InputValue> {
        self.0.column(2)
    }
}

/// An ATOMIC_POSITIONS card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomicPositions(Card);

impl AtomicPositions {
    pub fn new(card: Card) -> Self {
        Self(card)
    }

    /// The underlying card.
    pub fn card(&self) -> &Card {
        &self.0
    }
}

/// A CELL_PARAMETERS card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellParameters(Card);

impl CellParameters {
    pub fn new(card: Card) -> Self {
        Self(card)
    }

    /// The underlying card.
    pub fn card(&self) -> &Card {
        &self.0
    }
}
