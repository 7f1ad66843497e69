//! Random CNF instances for demo runs and test-data production. The solver
//! itself never depends on this module.

use crate::formula::{Clause, Formula, Literal, Variable};
use rand::seq::index;
use rand::Rng;

/// A clause of `width` distinct variables drawn from `0..num_vars`, each
/// with a fair-coin polarity. Panics if `width` is zero or exceeds
/// `num_vars`.
pub fn random_clause<R: Rng>(rng: &mut R, num_vars: usize, width: usize) -> Clause {
    assert!(
        width >= 1 && width <= num_vars,
        "clause width must be between 1 and num_vars"
    );
    let variables = index::sample(rng, num_vars, width);
    Clause::new(variables.into_iter().map(|x| {
        if rng.gen::<bool>() {
            Literal::Positive(Variable(x))
        } else {
            Literal::Negative(Variable(x))
        }
    }))
    .expect("width is at least one literal")
}

/// `num_clauses` independent random clauses. Width 3 gives the usual
/// random 3-SAT distribution.
pub fn random_formula<R: Rng>(
    rng: &mut R,
    num_vars: usize,
    num_clauses: usize,
    width: usize,
) -> Formula {
    Formula::new((0..num_clauses).map(|_| random_clause(rng, num_vars, width)))
}
