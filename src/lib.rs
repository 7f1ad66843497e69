pub mod formula;
pub mod gen;
mod solver;

#[cfg(test)]
mod brute_force;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SatResult {
    Satisfiable, // TODO return the satisfying assignment alongside
    Unsatisfiable,
}

pub use formula::{Assignment, Clause, Formula, FormulaError, Literal, Reduction, Variable};
pub use gen::{random_clause, random_formula};
pub use solver::Solver;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{formula_3sat_strategy, n, p};
    use proptest::prelude::*;
    use test_env_log::test;

    // Every polarity combination over three variables: (A v B v C) through
    // (!A v !B v !C). Together they rule out all eight assignments.
    fn full_polarity_cube() -> Vec<Clause> {
        (0..8u8)
            .map(|bits| {
                Clause::new((0..3usize).map(|v| {
                    if bits >> v & 1 == 0 {
                        p(v)
                    } else {
                        n(v)
                    }
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn single_clause_is_always_sat() {
        let f = Formula::new(vec![Clause::new(vec![p(0)]).unwrap()]);
        assert_eq!(Solver::new(f).solve(), SatResult::Satisfiable);

        let f = Formula::new(vec![Clause::new(vec![p(0), n(1)]).unwrap()]);
        assert_eq!(Solver::new(f).solve(), SatResult::Satisfiable);
    }

    #[test]
    fn full_polarity_cube_is_unsat() {
        let f = Formula::new(full_polarity_cube());
        assert_eq!(Solver::new(f).solve(), SatResult::Unsatisfiable);
    }

    #[test]
    fn dropping_any_cube_clause_restores_satisfiability() {
        let cube = full_polarity_cube();
        for skipped in 0..cube.len() {
            let f = Formula::new(
                cube.iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skipped)
                    .map(|(_, c)| c.clone()),
            );
            assert_eq!(
                Solver::new(f).solve(),
                SatResult::Satisfiable,
                "cube minus clause {} should be satisfiable",
                skipped
            );
        }
    }

    proptest! {
        #[test]
        fn solve_is_invariant_under_reordering(f in formula_3sat_strategy()) {
            let reversed = Formula::new(
                f.clauses()
                    .map(|c| {
                        let mut literals: Vec<_> = c.literals().copied().collect();
                        literals.reverse();
                        Clause::new(literals).unwrap()
                    })
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev(),
            );
            prop_assert_eq!(Solver::new(f).solve(), Solver::new(reversed).solve());
        }

        #[test]
        fn solve_is_idempotent(f in formula_3sat_strategy()) {
            let copy = f.clone();
            let first = Solver::new(f).solve();
            let second = Solver::new(copy).solve();
            prop_assert_eq!(first, second);
        }
    }
}
