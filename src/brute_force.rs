use crate::*;

// Exhaustive reference implementation used to cross-check the DPLL search
pub(crate) fn solve_brute_force(f: &Formula) -> SatResult {
    let num_variables = f.num_variables();
    assert!(num_variables <= 20); // keeps the enumeration cheap

    'search: for bits in 0..(1u32 << num_variables) {
        'clauses: for clause in f.clauses() {
            for literal in clause.literals() {
                let value = (bits >> literal.idx()) & 1 == 1;
                if value == literal.is_positive() {
                    // clause satisfied, move on to the next one
                    continue 'clauses;
                }
            }
            // every literal false under this assignment, try the next one
            continue 'search;
        }
        // every clause satisfied
        return SatResult::Satisfiable;
    }
    SatResult::Unsatisfiable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    #[test]
    fn brute_force_sat() {
        let c1 = Clause::new(vec![p(0), p(1)]).unwrap();
        let c2 = Clause::new(vec![n(0)]).unwrap();
        let f = Formula::new(vec![c1, c2]);

        assert_eq!(solve_brute_force(&f), SatResult::Satisfiable);
    }

    #[test]
    fn brute_force_unsat() {
        let c1 = Clause::new(vec![p(0), p(1)]).unwrap();
        let c2 = Clause::new(vec![n(0)]).unwrap();
        let c3 = Clause::new(vec![n(1)]).unwrap();
        let f = Formula::new(vec![c1, c2, c3]);

        assert_eq!(solve_brute_force(&f), SatResult::Unsatisfiable);
    }

    #[test]
    fn brute_force_empty_formula() {
        assert_eq!(solve_brute_force(&Formula::new(vec![])), SatResult::Satisfiable);
    }

    #[test]
    fn brute_force_contradiction() {
        let c1 = Clause::new(vec![p(0)]).unwrap();
        let c2 = Clause::new(vec![n(0)]).unwrap();
        let f = Formula::new(vec![c1, c2]);

        assert_eq!(solve_brute_force(&f), SatResult::Unsatisfiable);
    }
}
