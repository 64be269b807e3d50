use crate::{assignment::Assignment, gene_count::GeneCount, index::PedigreeIndex};

pub mod error;
pub use error::PosteriorError;

/// Normalized posterior distribution over the gene counts of one individual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneDistribution {
    pub two : f64,
    pub one : f64,
    pub zero: f64,
}

impl GeneDistribution {
    pub fn get(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One  => self.one,
            GeneCount::Two  => self.two,
        }
    }

    pub fn sum(&self) -> f64 {
        self.zero + self.one + self.two
    }
}

/// Normalized posterior distribution over the trait expression of one individual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitDistribution {
    pub present: f64,
    pub absent : f64,
}

impl TraitDistribution {
    pub fn sum(&self) -> f64 {
        self.present + self.absent
    }
}

/// Running unnormalized posterior mass for one individual: three gene-count
/// buckets and two trait buckets.
#[derive(Debug, Clone, Default, PartialEq)]
struct PersonMass {
    gene        : [f64; 3],
    trait_status: [f64; 2],
}

/// Additive posterior-mass accumulator over a whole population.
///
/// Every scored assignment is folded into every individual's buckets,
/// including zero-probability assignments, which add nothing. Accumulators are
/// mergeable bucket-wise, which makes them usable as the identity/operator
/// pair of a parallel reduction; addition being commutative and associative,
/// merge order only affects the last bits of floating point precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    mass: Vec<PersonMass>,
}

impl Accumulator {
    /// Zero-initialized accumulator for `n` individuals.
    pub fn new(n: usize) -> Accumulator {
        Accumulator { mass: vec![PersonMass::default(); n] }
    }

    /// Fold one scored assignment into every individual's buckets.
    pub fn add(&mut self, assignment: &Assignment, p: f64) {
        for (person, mass) in self.mass.iter_mut().enumerate() {
            mass.gene[assignment.gene_count(person).index()] += p;
            mass.trait_status[usize::from(assignment.has_trait(person))] += p;
        }
    }

    /// Bucket-wise sum of two accumulators. Used as the reduction operator
    /// when enumeration shards run on parallel workers.
    pub fn merge(mut self, other: Accumulator) -> Accumulator {
        for (mass, other_mass) in self.mass.iter_mut().zip(other.mass) {
            for (bucket, other_bucket) in mass.gene.iter_mut().zip(other_mass.gene) {
                *bucket += other_bucket;
            }
            for (bucket, other_bucket) in mass.trait_status.iter_mut().zip(other_mass.trait_status) {
                *bucket += other_bucket;
            }
        }
        self
    }

    /// Unnormalized gene-count mass of the individual at `person`, indexed by count.
    pub fn gene_mass(&self, person: usize) -> [f64; 3] {
        self.mass[person].gene
    }

    /// Unnormalized trait mass of the individual at `person`: `[absent, present]`.
    pub fn trait_mass(&self, person: usize) -> [f64; 2] {
        self.mass[person].trait_status
    }

    /// Rescale every individual's two distributions to sum to one, consuming
    /// the accumulator. Performed exactly once, after enumeration completes.
    ///
    /// # Errors
    /// - [`PosteriorError::ZeroMass`] when some individual accumulated no mass
    ///   at all: the supplied evidence is impossible under the model. Under
    ///   the default probability tables every gene/trait combination carries
    ///   nonzero probability, so this check is defensively unreachable for a
    ///   validly loaded population.
    pub fn normalize(self, index: &PedigreeIndex) -> Result<Posteriors, PosteriorError> {
        let mut persons = Vec::with_capacity(self.mass.len());
        for (person, mass) in self.mass.into_iter().enumerate() {
            let gene_sum: f64 = mass.gene.iter().sum();
            if gene_sum <= 0.0 {
                return Err(PosteriorError::ZeroMass {
                    name        : index.name(person).to_string(),
                    distribution: "gene",
                });
            }
            let trait_sum: f64 = mass.trait_status.iter().sum();
            if trait_sum <= 0.0 {
                return Err(PosteriorError::ZeroMass {
                    name        : index.name(person).to_string(),
                    distribution: "trait",
                });
            }

            persons.push(PersonPosterior {
                name: index.name(person).to_string(),
                gene: GeneDistribution {
                    two : mass.gene[GeneCount::Two.index()] / gene_sum,
                    one : mass.gene[GeneCount::One.index()] / gene_sum,
                    zero: mass.gene[GeneCount::Zero.index()] / gene_sum,
                },
                trait_status: TraitDistribution {
                    present: mass.trait_status[1] / trait_sum,
                    absent : mass.trait_status[0] / trait_sum,
                },
            });
        }
        Ok(Posteriors { persons })
    }
}

/// Normalized posterior distributions of one individual.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonPosterior {
    pub name        : String,
    pub gene        : GeneDistribution,
    pub trait_status: TraitDistribution,
}

/// Final, normalized posterior distributions: one entry per individual, in
/// lexicographic name order.
#[derive(Debug, Clone, PartialEq)]
pub struct Posteriors {
    persons: Vec<PersonPosterior>,
}

impl Posteriors {
    pub fn iter(&self) -> impl Iterator<Item = &PersonPosterior> {
        self.persons.iter()
    }

    /// Fetch one individual's posteriors by name.
    pub fn get(&self, name: &str) -> Option<&PersonPosterior> {
        self.persons.iter().find(|person| person.name == name)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

impl From<Vec<PersonPosterior>> for Posteriors {
    fn from(persons: Vec<PersonPosterior>) -> Posteriors {
        Posteriors { persons }
    }
}
