use std::collections::BTreeMap;

use crate::{error::PedigreeError, Individual};

/// A validated family pedigree.
/// # Fields:
/// - `individuals`: BTreeMap containing all members of the pedigree (founders and offspring)
///                  - Key  : (String)     - Name of the individual
///                  - Value: (Individual) - The individual itself.
///
/// Individuals are kept in a `BTreeMap` so that iteration order is the
/// lexicographic order of names: downstream indexing and reporting become
/// deterministic across runs for free.
///
/// The pedigree is read-only for the lifetime of inference: members are only
/// added during construction, and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Pedigree {
    individuals: BTreeMap<String, Individual>,
}

impl Pedigree {
    /// Instantiate a blank pedigree.
    pub fn new() -> Pedigree {
        Pedigree::default()
    }

    /// Add a new member to the pedigree.
    /// # Arguments
    /// - `name`        : Unique name of the individual.
    /// - `parents`     : Size-two array of parent names (`[mother, father]`), or `None` for a founder.
    /// - `trait_status`: Observed trait evidence, or `None` when unobserved.
    ///
    /// # Errors
    /// - [`PedigreeError::EmptyName`] when `name` is blank.
    /// - [`PedigreeError::DuplicateIndividual`] when `name` was already added.
    pub fn add_individual(
        &mut self,
        name: &str,
        parents: Option<[&str; 2]>,
        trait_status: Option<bool>,
    ) -> Result<(), PedigreeError> {
        if name.trim().is_empty() {
            return Err(PedigreeError::EmptyName);
        }
        if self.individuals.contains_key(name) {
            return Err(PedigreeError::DuplicateIndividual(name.to_string()));
        }
        self.individuals.insert(name.to_string(), Individual::new(name, parents, trait_status));
        Ok(())
    }

    /// Ensure every recorded parent resolves to another member of this pedigree.
    ///
    /// # Errors
    /// - [`PedigreeError::UnknownParent`] on the first dangling parent reference.
    pub fn validate(&self) -> Result<(), PedigreeError> {
        for individual in self.iter() {
            let Some(parents) = individual.parents() else { continue };
            for parent in parents.names() {
                if !self.individuals.contains_key(parent) {
                    return Err(PedigreeError::UnknownParent {
                        individual: individual.name().to_string(),
                        parent    : parent.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Fetch a member by name.
    pub fn get(&self, name: &str) -> Option<&Individual> {
        self.individuals.get(name)
    }

    /// Iterate over all members, in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values()
    }

    /// Iterate over all member names, in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.individuals.keys().map(String::as_str)
    }

    /// Iterate over the founders of this pedigree (members without recorded parents).
    pub fn founders(&self) -> impl Iterator<Item = &Individual> {
        self.iter().filter(|individual| individual.is_founder())
    }

    /// Number of members within this pedigree.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}
