use std::hash::{Hash, Hasher};

mod parents;
pub use parents::Parents;

/// Space padding lengths used for `std::fmt::Display` of Individual
const NAME_DISPLAY_LEN   : usize = 10; // Space padding of `self.name`
const PARENTS_DISPLAY_LEN: usize = 25; // Space padding of `self.parents`

/// A single member of a pedigree.
/// # Fields:
/// - `name`        : Unique name of the individual within its pedigree.
/// - `parents`     : Optional pair of parent names.
///                     - `None`           if the individual is a founder.
///                     - `Some(Parents)`  otherwise. Both parents, or none: one
///                       recorded parent alone is unrepresentable.
/// - `trait_status`: Observed trait evidence.
///                     - `Some(true)`  the individual is known to express the trait.
///                     - `Some(false)` the individual is known not to.
///                     - `None`        unobserved (to be inferred).
#[derive(Debug, Clone)]
pub struct Individual {
    name        : String,
    parents     : Option<Parents>,
    trait_status: Option<bool>,
}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let parents = match &self.parents {
            None          => "None".to_string(),
            Some(parents) => format!("{parents}"),
        };
        let trait_status = match self.trait_status {
            None            => "unknown",
            Some(true)      => "expressed",
            Some(false)     => "unexpressed",
        };
        write!(
            f,
            "name: {: <NAME_DISPLAY_LEN$} - parents: {: <PARENTS_DISPLAY_LEN$} - trait: {trait_status}",
            self.name, parents
        )
    }
}

impl PartialEq for Individual {
    fn eq(&self, other: &Individual) -> bool {
        self.name == other.name
    }
}

impl Eq for Individual {}

impl Hash for Individual {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Individual {
    /// Instantiate a new individual.
    /// # Arguments
    /// - `name`        : Unique name of the individual (e.g. "Harry")
    /// - `parents`     : Size-two array of parent names, or `None` for a founder.
    /// - `trait_status`: Observed trait evidence, or `None` when unobserved.
    pub fn new(name: &str, parents: Option<[&str; 2]>, trait_status: Option<bool>) -> Individual {
        let parents = parents.map(|[mother, father]| Parents::new(mother, father));
        Individual { name: name.to_string(), parents, trait_status }
    }

    /// Return the name of this individual.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return a reference to this individual's parents, if any.
    pub fn parents(&self) -> Option<&Parents> {
        self.parents.as_ref()
    }

    /// Return the observed trait evidence of this individual.
    pub fn trait_status(&self) -> Option<bool> {
        self.trait_status
    }

    /// Check whether or not this individual is a founder. Returns `true` if `self.parents == None`
    #[inline(always)]
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}
