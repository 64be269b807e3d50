use crate::{
    assignment::Assignment,
    gene_count::GeneCount,
    index::PedigreeIndex,
    tables::ProbabilityTables,
};

/// Joint probability of one complete assignment under the network's
/// factorization: the product, over every individual, of the gene count's
/// causal probability (prior for founders, parental transmission otherwise)
/// and the penetrance factor for the individual's trait membership.
///
/// Given gene counts, trait expression is conditionally independent across
/// individuals; given parental gene counts, a child's gene count is
/// conditionally independent of all other ancestry. The result always lies
/// within [0, 1]. No side effects.
pub fn joint_probability(
    index: &PedigreeIndex,
    tables: &ProbabilityTables,
    assignment: &Assignment,
) -> f64 {
    let mut joint = 1.0;
    for person in 0..index.len() {
        let count = assignment.gene_count(person);

        let inheritance = match index.parents_of(person) {
            None => tables.prior(count),
            Some([mother, father]) => {
                let donor_mother = tables.transmission(assignment.gene_count(mother));
                let donor_father = tables.transmission(assignment.gene_count(father));
                child_probability(count, donor_mother, donor_father)
            }
        };
        let expression = tables.penetrance(count, assignment.has_trait(person));

        joint *= inheritance * expression;
    }
    joint
}

/// P(child carries `count` copies), given each parent's transmission probability.
fn child_probability(count: GeneCount, donor_mother: f64, donor_father: f64) -> f64 {
    match count {
        GeneCount::Zero => (1.0 - donor_mother) * (1.0 - donor_father),
        GeneCount::One  => donor_mother * (1.0 - donor_father) + donor_father * (1.0 - donor_mother),
        GeneCount::Two  => donor_mother * donor_father,
    }
}
