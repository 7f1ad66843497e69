use crate::formula::{Assignment, Clause, Formula, Reduction};
use crate::SatResult;
use log::trace;

pub struct Solver {
    clauses: Vec<Clause>,
    assignment: Assignment,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        Self::with_assignment(formula, Assignment::new())
    }

    /// Starts the search from a partial assignment, e.g. one produced by an
    /// external preprocessor.
    pub fn with_assignment(formula: Formula, assignment: Assignment) -> Self {
        Self {
            clauses: formula.into_clauses(),
            assignment,
        }
    }

    /// Recursion depth is bounded by the number of undecided variables:
    /// every call decides exactly one variable before recursing, so a
    /// formula over n variables descends at most n frames.
    pub fn solve(&self) -> SatResult {
        dpll(&self.clauses, self.assignment.clone())
    }
}

fn dpll(clauses: &[Clause], assignment: Assignment) -> SatResult {
    let mut open = Vec::with_capacity(clauses.len());
    for clause in clauses {
        match clause.reduce(&assignment) {
            Reduction::Satisfied => continue,
            Reduction::Reduced(reduced) => open.push(reduced),
            Reduction::Conflict => {
                trace!("conflict at {} under depth-{} assignment", clause, assignment.len());
                return SatResult::Unsatisfiable;
            }
        }
    }

    if open.is_empty() {
        return SatResult::Satisfiable;
    }

    // Deterministic branch selection: the first literal of the first clause
    // still open. Any fixed choice from an open clause preserves
    // completeness; this one keeps runs reproducible.
    let decision = open[0].first_literal();
    trace!("decide {} at depth {}", decision, assignment.len());

    let mut positive = assignment.clone();
    positive.assign(&decision);

    // OR of the two branches; a satisfiable positive branch settles the
    // question, so the negative branch only runs on failure.
    match dpll(&open, positive) {
        SatResult::Satisfiable => SatResult::Satisfiable,
        SatResult::Unsatisfiable => {
            let mut negative = assignment;
            negative.assign(&decision.negated());
            dpll(&open, negative)
        }
    }
}
