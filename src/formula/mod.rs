pub mod dimacs;

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(pub usize);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    pub fn variable(&self) -> Variable {
        match self {
            Literal::Positive(v) => *v,
            Literal::Negative(v) => *v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn idx(&self) -> usize {
        self.variable().0
    }

    /// The complementary literal: same variable, opposite polarity.
    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(*v),
            Literal::Negative(v) => Literal::Positive(*v),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Literal::Positive(Variable(x)) => write!(f, "{}", x),
            Literal::Negative(Variable(x)) => write!(f, "!{}", x),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FormulaError {
    // An empty clause only ever *arises* during search, as a conflict.
    // Accepting one as input would make a false solve result
    // indistinguishable from malformed input.
    EmptyClause,
}

/// A disjunction of literals with set semantics: duplicates collapse and
/// literal order is irrelevant for equality.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clause {
    // Sorted by (variable, polarity) and deduplicated, so derived equality
    // is set equality.
    literals: Vec<Literal>,
}

/// Outcome of reducing a clause under a partial assignment.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Reduction {
    /// Some literal is true; the clause needs no further consideration in
    /// this branch.
    Satisfied,
    /// False literals removed, at least one literal still undetermined.
    Reduced(Clause),
    /// Every literal is false: the assignment that produced this cannot
    /// satisfy the clause.
    Conflict,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Result<Self, FormulaError> {
        let mut literals: Vec<Literal> = disjuncts.into_iter().collect();
        literals.sort_unstable_by_key(|l| (l.idx(), l.is_positive()));
        literals.dedup();
        if literals.is_empty() {
            return Err(FormulaError::EmptyClause);
        }
        Ok(Self { literals })
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    // Clauses are never empty, so there is always a first literal.
    pub fn first_literal(&self) -> Literal {
        self.literals[0]
    }

    /// Evaluates the clause as far as the assignment allows. `Reduced`
    /// means "not yet determined", never "unsatisfiable"; a conflict is
    /// only established once every literal is false.
    pub fn reduce(&self, assignment: &Assignment) -> Reduction {
        let mut remaining = Vec::with_capacity(self.literals.len());
        for literal in &self.literals {
            match assignment.value_of(literal) {
                Some(true) => return Reduction::Satisfied,
                Some(false) => continue,
                None => remaining.push(*literal),
            }
        }
        if remaining.is_empty() {
            Reduction::Conflict
        } else {
            Reduction::Reduced(Self { literals: remaining })
        }
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("(")?;
        let mut first = true;
        for literal in &self.literals {
            if first {
                first = false;
            } else {
                f.write_str(" v ")?;
            }
            write!(f, "{}", literal)?;
        }
        f.write_str(")")
    }
}

/// A partial mapping from variables to boolean values. Keying by variable
/// keeps the two polarities of a decision consistent by construction: once
/// `x` is true, `!x` is false, with no second entry to keep in sync.
#[derive(Clone, Default, Debug)]
pub struct Assignment {
    values: HashMap<Variable, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Some(true)` if the literal holds, `Some(false)` if its complement
    /// holds, `None` while the variable is undecided.
    pub fn value_of(&self, literal: &Literal) -> Option<bool> {
        self.values
            .get(&literal.variable())
            .map(|&value| value == literal.is_positive())
    }

    /// Decides the literal's variable so that the literal holds.
    pub fn assign(&mut self, literal: &Literal) {
        self.values.insert(literal.variable(), literal.is_positive());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: conjuncts.into_iter().collect(),
        }
    }

    pub fn num_variables(&self) -> usize {
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .map(|literal| literal.idx())
            .max()
            .map_or(0, |max| max + 1)
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub(crate) fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut first = true;
        for clause in &self.clauses {
            if first {
                first = false;
            } else {
                f.write_str(" & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

#[cfg(test)]
pub(crate) fn formula_3sat_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    const MAX_VARS: usize = 8;
    const MAX_CLAUSES: usize = 12;

    prop::collection::vec(
        prop::collection::vec((0..MAX_VARS, any::<bool>()), 1..=3),
        0..=MAX_CLAUSES,
    )
    .prop_map(|clauses| {
        Formula::new(clauses.into_iter().map(|literals| {
            Clause::new(literals.into_iter().map(|(x, positive)| {
                if positive {
                    Literal::Positive(Variable(x))
                } else {
                    Literal::Negative(Variable(x))
                }
            }))
            .expect("strategy generates at least one literal per clause")
        }))
    })
}
