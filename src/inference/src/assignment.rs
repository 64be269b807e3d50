use crate::gene_count::GeneCount;

/// One complete, population-wide candidate assignment: a gene count for every
/// individual, and a trait membership bit for every individual.
///
/// Assignments are transient views: the gene counts live in the enumerator's
/// reusable buffer, and trait membership is a plain bitmask over individual
/// indices. An assignment is constructed, scored, accumulated, and discarded;
/// it owns no long-lived state.
#[derive(Debug, Clone, Copy)]
pub struct Assignment<'a> {
    genotypes : &'a [GeneCount],
    trait_mask: u64,
}

impl<'a> Assignment<'a> {
    pub fn new(genotypes: &'a [GeneCount], trait_mask: u64) -> Assignment<'a> {
        Assignment { genotypes, trait_mask }
    }

    /// Gene count assigned to the individual at `idx`.
    #[inline(always)]
    pub fn gene_count(&self, idx: usize) -> GeneCount {
        self.genotypes[idx]
    }

    /// Whether the individual at `idx` expresses the trait under this assignment.
    #[inline(always)]
    pub fn has_trait(&self, idx: usize) -> bool {
        (self.trait_mask >> idx) & 1 == 1
    }

    /// Number of individuals covered by this assignment.
    pub fn len(&self) -> usize {
        self.genotypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genotypes.is_empty()
    }
}

/// Visit every assignment of {0, 1, 2} gene copies to `n` individuals.
///
/// The population three-way partition is enumerated directly: one base-3 digit
/// per individual, advanced odometer-style through all `3^n` combinations.
/// A single buffer is reused across visits, so enumeration performs no
/// per-assignment allocation.
pub fn for_each_gene_partition<F>(n: usize, mut visit: F)
where
    F: FnMut(&[GeneCount]),
{
    let mut counts = vec![GeneCount::Zero; n];
    loop {
        visit(&counts);

        // ---- Advance the odometer; carry rolls each exhausted digit back to zero.
        let mut digit = 0;
        loop {
            if digit == n {
                return;
            }
            match counts[digit].bump() {
                Some(next) => {
                    counts[digit] = next;
                    break;
                }
                None => {
                    counts[digit] = GeneCount::Zero;
                    digit += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn partition_count_is_three_to_the_n() {
        for n in 0..=4 {
            let mut visited = 0usize;
            for_each_gene_partition(n, |_| visited += 1);
            assert_eq!(visited, 3usize.pow(n as u32));
        }
    }

    #[test]
    fn partitions_are_distinct() {
        let mut seen = HashSet::new();
        for_each_gene_partition(3, |counts| {
            assert!(seen.insert(counts.to_vec()));
        });
        assert_eq!(seen.len(), 27);
    }

    #[test]
    fn empty_population_is_visited_once() {
        let mut visited = 0usize;
        for_each_gene_partition(0, |counts| {
            assert!(counts.is_empty());
            visited += 1;
        });
        assert_eq!(visited, 1);
    }

    #[test]
    fn membership_lookups() {
        let genotypes = [GeneCount::One, GeneCount::Zero, GeneCount::Two];
        let assignment = Assignment::new(&genotypes, 0b101);

        assert_eq!(assignment.len(), 3);
        assert_eq!(assignment.gene_count(0), GeneCount::One);
        assert_eq!(assignment.gene_count(2), GeneCount::Two);
        assert!(assignment.has_trait(0));
        assert!(!assignment.has_trait(1));
        assert!(assignment.has_trait(2));
    }
}
