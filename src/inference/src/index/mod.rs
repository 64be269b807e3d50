use std::collections::HashMap;

use pedigree::Pedigree;

pub mod error;
pub use error::IndexError;

/// Flattened, positionally-indexed view of a [`Pedigree`].
///
/// Built once before enumeration begins: name-keyed lookups are resolved to
/// vector positions so that the hot loop never touches a map. Individuals are
/// indexed in lexicographic name order (the pedigree's own iteration order),
/// making indices stable and the whole computation deterministic.
#[derive(Debug, Clone)]
pub struct PedigreeIndex {
    names   : Vec<String>,
    parents : Vec<Option<[usize; 2]>>,
    evidence: Vec<Option<bool>>,
}

impl PedigreeIndex {
    /// Flatten a pedigree.
    ///
    /// # Errors
    /// - [`IndexError::UnknownParent`] on a dangling parent reference. A
    ///   loader-validated pedigree can never trigger this; the check is
    ///   defensive.
    pub fn new(pedigree: &Pedigree) -> Result<PedigreeIndex, IndexError> {
        let names: Vec<String> = pedigree.names().map(ToOwned::to_owned).collect();
        let position: HashMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), idx))
            .collect();

        let mut parents  = Vec::with_capacity(names.len());
        let mut evidence = Vec::with_capacity(names.len());
        for individual in pedigree.iter() {
            let parent_indices = match individual.parents() {
                None              => None,
                Some(pair) => {
                    let [mother, father] = pair.names();
                    let resolve = |parent: &str| {
                        position.get(parent).copied().ok_or_else(|| IndexError::UnknownParent {
                            individual: individual.name().to_string(),
                            parent    : parent.to_string(),
                        })
                    };
                    Some([resolve(mother)?, resolve(father)?])
                }
            };
            parents.push(parent_indices);
            evidence.push(individual.trait_status());
        }

        Ok(PedigreeIndex { names, parents, evidence })
    }

    /// Number of indexed individuals.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the individual at `idx`.
    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    /// `[mother, father]` indices of the individual at `idx`, or `None` for a founder.
    #[inline]
    pub fn parents_of(&self, idx: usize) -> Option<[usize; 2]> {
        self.parents[idx]
    }

    /// Observed trait evidence of the individual at `idx`.
    #[inline]
    pub fn evidence_of(&self, idx: usize) -> Option<bool> {
        self.evidence[idx]
    }

    /// Number of individuals carrying observed trait evidence.
    pub fn observed_count(&self) -> usize {
        self.evidence.iter().filter(|evidence| evidence.is_some()).count()
    }

    /// Observed trait evidence folded into two bitmasks over individual
    /// indices: `required` flags individuals known to express the trait,
    /// `excluded` flags individuals known not to. A candidate trait set
    /// `mask` agrees with the evidence iff it contains every required bit and
    /// no excluded bit.
    pub fn evidence_masks(&self) -> (u64, u64) {
        let mut required = 0u64;
        let mut excluded = 0u64;
        for (idx, evidence) in self.evidence.iter().enumerate() {
            match evidence {
                Some(true)  => required |= 1 << idx,
                Some(false) => excluded |= 1 << idx,
                None        => (),
            }
        }
        (required, excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trio() -> Pedigree {
        let mut pedigree = Pedigree::new();
        pedigree.add_individual("James", None, Some(true)).expect("Individual should be includable");
        pedigree.add_individual("Lily", None, Some(false)).expect("Individual should be includable");
        pedigree.add_individual("Harry", Some(["Lily", "James"]), None).expect("Individual should be includable");
        pedigree
    }

    #[test]
    fn indices_follow_name_order() {
        let index = PedigreeIndex::new(&trio()).expect("Index should build");
        assert_eq!(index.len(), 3);
        assert_eq!(index.name(0), "Harry");
        assert_eq!(index.name(1), "James");
        assert_eq!(index.name(2), "Lily");
    }

    #[test]
    fn parents_are_resolved_to_indices() {
        let index = PedigreeIndex::new(&trio()).expect("Index should build");
        assert_eq!(index.parents_of(0), Some([2, 1])); // Harry: [Lily, James]
        assert_eq!(index.parents_of(1), None);
        assert_eq!(index.parents_of(2), None);
    }

    #[test]
    fn evidence_masks() {
        let index = PedigreeIndex::new(&trio()).expect("Index should build");
        let (required, excluded) = index.evidence_masks();
        assert_eq!(required, 0b010); // James (idx 1) is known to express the trait.
        assert_eq!(excluded, 0b100); // Lily (idx 2) is known not to.
        assert_eq!(index.observed_count(), 2);
    }

    #[test]
    fn dangling_parent_is_rejected() {
        let mut pedigree = Pedigree::new();
        pedigree.add_individual("Harry", Some(["Lily", "James"]), None).expect("Individual should be includable");
        pedigree.add_individual("Lily", None, None).expect("Individual should be includable");
        assert!(PedigreeIndex::new(&pedigree).is_err());
    }
}
