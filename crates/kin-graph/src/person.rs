//! Person records
//!
//! [`NewPerson`] is the ingest record handed to
//! [`PersonGraph::add_person`](crate::PersonGraph::add_person); [`Person`] is
//! the stored record, whose relational state is only mutated by the graph.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential person identifier, assigned by the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl PersonId {
    /// Wrap a raw id
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Recorded gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Not recorded
    #[default]
    #[serde(other)]
    Unknown,
}

/// Display-only life status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStatus {
    /// Alive
    #[default]
    Living,
    /// Deceased, kept in remembrance
    Remembering,
}

/// Data supplied when adding a person
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    /// Display name
    pub name: String,
    /// Recorded gender
    #[serde(default)]
    pub gender: Gender,
    /// Age in years, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Position among siblings; 0 means no information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_order: Option<u32>,
    /// External correlation key, unique across the graph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    /// Display-only life status
    #[serde(default)]
    pub life_status: LifeStatus,
    /// Image reference, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Image preview reference, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_preview: Option<String>,
}

impl NewPerson {
    /// Create a record with a name and gender
    #[must_use]
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            ..Self::default()
        }
    }

    /// With age
    #[inline]
    #[must_use]
    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    /// With birth order
    #[inline]
    #[must_use]
    pub fn with_birth_order(mut self, order: u32) -> Self {
        self.birth_order = Some(order);
        self
    }

    /// With external member id
    #[inline]
    #[must_use]
    pub fn with_member_id(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }

    /// With life status
    #[inline]
    #[must_use]
    pub fn with_life_status(mut self, status: LifeStatus) -> Self {
        self.life_status = status;
        self
    }
}

/// A person stored in the graph
///
/// Relation sets are ordered: `children` and `siblings` follow birth order,
/// `parents` and `spouses` follow insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Immutable sequential id
    pub id: PersonId,
    /// External correlation key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    /// Display name
    pub name: String,
    /// Recorded gender
    #[serde(default)]
    pub gender: Gender,
    /// Age in years, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Position among siblings; 0 means no information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_order: Option<u32>,
    /// Display-only life status
    #[serde(default)]
    pub life_status: LifeStatus,
    /// Image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Image preview reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_preview: Option<String>,

    #[serde(default)]
    pub(crate) generation: Option<i32>,
    #[serde(default)]
    pub(crate) parents: IndexSet<PersonId>,
    #[serde(default)]
    pub(crate) children: IndexSet<PersonId>,
    #[serde(default)]
    pub(crate) spouses: IndexSet<PersonId>,
    #[serde(default)]
    pub(crate) siblings: IndexSet<PersonId>,
}

impl Person {
    pub(crate) fn from_new(id: PersonId, data: NewPerson) -> Self {
        Self {
            id,
            member_id: data.member_id,
            name: data.name,
            gender: data.gender,
            age: data.age,
            birth_order: data.birth_order,
            life_status: data.life_status,
            img: data.img,
            img_preview: data.img_preview,
            generation: None,
            parents: IndexSet::new(),
            children: IndexSet::new(),
            spouses: IndexSet::new(),
            siblings: IndexSet::new(),
        }
    }

    /// Generation relative to the root, if derived
    #[inline]
    #[must_use]
    pub fn generation(&self) -> Option<i32> {
        self.generation
    }

    /// Parent ids
    #[inline]
    #[must_use]
    pub fn parents(&self) -> &IndexSet<PersonId> {
        &self.parents
    }

    /// Child ids, in birth order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &IndexSet<PersonId> {
        &self.children
    }

    /// Spouse ids
    #[inline]
    #[must_use]
    pub fn spouses(&self) -> &IndexSet<PersonId> {
        &self.spouses
    }

    /// Sibling ids, in birth order
    #[inline]
    #[must_use]
    pub fn siblings(&self) -> &IndexSet<PersonId> {
        &self.siblings
    }

    /// Birth order with 0 treated as missing
    #[inline]
    #[must_use]
    pub fn known_birth_order(&self) -> Option<u32> {
        self.birth_order.filter(|&order| order > 0)
    }

    /// First recorded spouse
    #[inline]
    #[must_use]
    pub fn first_spouse(&self) -> Option<PersonId> {
        self.spouses.first().copied()
    }
}
