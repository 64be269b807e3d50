use crate::gene_count::GeneCount;

pub mod error;
pub use error::TablesError;

/// Tolerance when checking that a distribution sums to one.
const MASS_TOLERANCE: f64 = 1e-9;

/// Unconditional prior over founder gene counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenePrior {
    zero: f64,
    one : f64,
    two : f64,
}

impl GenePrior {
    /// # Errors
    /// - if any probability falls outside [0, 1], or the three probabilities
    ///   do not sum to one.
    pub fn new(zero: f64, one: f64, two: f64) -> Result<GenePrior, TablesError> {
        for (name, value) in [("gene prior P(0)", zero), ("gene prior P(1)", one), ("gene prior P(2)", two)] {
            check_probability(name, value)?;
        }
        let sum = zero + one + two;
        if (sum - 1.0).abs() > MASS_TOLERANCE {
            return Err(TablesError::UnnormalizedPrior { sum });
        }
        Ok(GenePrior { zero, one, two })
    }

    /// P(count) for a founder.
    #[inline]
    pub fn get(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One  => self.one,
            GeneCount::Two  => self.two,
        }
    }
}

/// Penetrance table: probability of expressing the trait, conditioned on the
/// carried gene count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetrance {
    expressed: [f64; 3],
}

impl Penetrance {
    /// # Arguments
    /// - `expressed`: P(trait | count), indexed by gene count.
    ///
    /// # Errors
    /// - if any probability falls outside [0, 1].
    pub fn new(expressed: [f64; 3]) -> Result<Penetrance, TablesError> {
        for (count, value) in expressed.iter().enumerate() {
            check_probability(match count { 0 => "P(trait|0)", 1 => "P(trait|1)", _ => "P(trait|2)" }, *value)?;
        }
        Ok(Penetrance { expressed })
    }

    /// P(trait membership | count). The complement is returned when
    /// `expressed` is false.
    #[inline]
    pub fn get(&self, count: GeneCount, expressed: bool) -> f64 {
        let p = self.expressed[count.index()];
        if expressed { p } else { 1.0 - p }
    }
}

/// Immutable probability tables of the inheritance model.
///
/// Constructed (and validated) once at startup, passed by reference into every
/// component, and never mutated afterwards. [`ProbabilityTables::default`]
/// carries the fixed model constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityTables {
    gene_prior   : GenePrior,
    penetrance   : Penetrance,
    mutation_rate: f64,
}

impl ProbabilityTables {
    /// # Errors
    /// - if `mutation_rate` falls outside [0, 1].
    pub fn new(
        gene_prior: GenePrior,
        penetrance: Penetrance,
        mutation_rate: f64,
    ) -> Result<ProbabilityTables, TablesError> {
        check_probability("mutation rate", mutation_rate)?;
        Ok(ProbabilityTables { gene_prior, penetrance, mutation_rate })
    }

    /// Unconditional P(count) for a founder.
    #[inline]
    pub fn prior(&self, count: GeneCount) -> f64 {
        self.gene_prior.get(count)
    }

    /// P(trait membership | count).
    #[inline]
    pub fn penetrance(&self, count: GeneCount, expressed: bool) -> f64 {
        self.penetrance.get(count, expressed)
    }

    /// Probability that a parent carrying `count` gene copies transmits the
    /// gene to a child, mutation folded in:
    /// - two copies  : transmission is near-certain, barring a mutation away.
    /// - one copy    : either allele is transmitted with equal chance; the
    ///                 symmetric mutation terms cancel out to an even coin flip.
    /// - zero copies : only a mutation can introduce the gene.
    #[inline]
    pub fn transmission(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.mutation_rate,
            GeneCount::One  => 0.5,
            GeneCount::Two  => 1.0 - self.mutation_rate,
        }
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }
}

impl Default for ProbabilityTables {
    fn default() -> Self {
        ProbabilityTables {
            gene_prior   : GenePrior { zero: 0.96, one: 0.03, two: 0.01 },
            penetrance   : Penetrance { expressed: [0.01, 0.56, 0.65] },
            mutation_rate: 0.01,
        }
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), TablesError> {
    if !(0.0..=1.0).contains(&value) || value.is_nan() {
        return Err(TablesError::OutOfRange { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_pass_validation() {
        let tables = ProbabilityTables::default();
        let rebuilt = ProbabilityTables::new(
            GenePrior::new(0.96, 0.03, 0.01).expect("Prior should be valid"),
            Penetrance::new([0.01, 0.56, 0.65]).expect("Penetrance should be valid"),
            0.01,
        )
        .expect("Tables should be valid");
        assert_eq!(tables, rebuilt);
    }

    #[test]
    fn prior_lookup() {
        let tables = ProbabilityTables::default();
        assert_eq!(tables.prior(GeneCount::Zero), 0.96);
        assert_eq!(tables.prior(GeneCount::One),  0.03);
        assert_eq!(tables.prior(GeneCount::Two),  0.01);
    }

    #[test]
    fn penetrance_lookup_and_complement() {
        let tables = ProbabilityTables::default();
        assert_eq!(tables.penetrance(GeneCount::One, true),  0.56);
        assert!((tables.penetrance(GeneCount::One, false) - 0.44).abs() < 1e-12);
        for count in GeneCount::ALL {
            let total = tables.penetrance(count, true) + tables.penetrance(count, false);
            assert!((total - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn transmission_probabilities() {
        let tables = ProbabilityTables::default();
        assert_eq!(tables.transmission(GeneCount::Two),  0.99);
        assert_eq!(tables.transmission(GeneCount::One),  0.5);
        assert_eq!(tables.transmission(GeneCount::Zero), 0.01);
    }

    #[test]
    fn unnormalized_prior_is_rejected() {
        let result = GenePrior::new(0.5, 0.5, 0.5);
        assert!(matches!(result, Err(TablesError::UnnormalizedPrior { .. })));
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        assert!(GenePrior::new(-0.1, 1.0, 0.1).is_err());
        assert!(Penetrance::new([0.01, 1.56, 0.65]).is_err());
        let prior = GenePrior::new(0.96, 0.03, 0.01).expect("Prior should be valid");
        let penetrance = Penetrance::new([0.01, 0.56, 0.65]).expect("Penetrance should be valid");
        assert!(ProbabilityTables::new(prior, penetrance, 1.01).is_err());
    }
}
