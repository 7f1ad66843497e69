use crate::formula::{Clause, Formula, FormulaError, Literal, Variable};
use std::io::{BufRead, BufReader, Read};

#[derive(Debug)]
pub enum DimacsParseError {
    Io(std::io::Error),
    Format(String),
}

impl From<std::io::Error> for DimacsParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<FormulaError> for DimacsParseError {
    fn from(e: FormulaError) -> Self {
        match e {
            FormulaError::EmptyClause => Self::Format("empty clause in input".into()),
        }
    }
}

/// Parses the DIMACS CNF format. Clause literals are terminated by `0` and
/// may span lines; `c` lines are comments and a single `p cnf V C` line
/// must precede the clauses.
pub fn parse<R: Read>(reader: R) -> Result<Formula, DimacsParseError> {
    let reader = BufReader::new(reader);

    let mut num_clauses = None;
    let mut clauses = vec![];
    let mut pending: Vec<Literal> = vec![];

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace().peekable();

        match tokens.peek() {
            None | Some(&"c") => continue,
            Some(&"p") => {
                if num_clauses.is_some() {
                    return Err(DimacsParseError::Format("duplicate 'p' line".into()));
                }
                num_clauses = Some(parse_problem_line(tokens)?);
            }
            Some(_) => {
                if num_clauses.is_none() {
                    return Err(DimacsParseError::Format("missing 'p' line before clauses".into()));
                }
                for token in tokens {
                    match parse_literal(token)? {
                        Some(literal) => pending.push(literal),
                        // terminating 0: the pending literals form one clause
                        None => clauses.push(Clause::new(pending.drain(..))?),
                    }
                }
            }
        }

        if let Some(n) = num_clauses {
            if clauses.len() >= n {
                break;
            }
        }
    }

    if num_clauses.is_none() {
        return Err(DimacsParseError::Format("missing 'p' line before clauses".into()));
    }

    // tolerate a final clause with no terminating 0
    if !pending.is_empty() {
        clauses.push(Clause::new(pending)?);
    }

    Ok(Formula::new(clauses))
}

fn parse_problem_line<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<usize, DimacsParseError> {
    let _ = tokens.next(); // the "p" itself

    if tokens.next() != Some("cnf") {
        return Err(DimacsParseError::Format("missing 'cnf' in 'p' line".into()));
    }

    let _num_variables: usize = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| DimacsParseError::Format("invalid variable count".into()))?;

    tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| DimacsParseError::Format("invalid clause count".into()))
}

// `0` is the clause terminator, not a literal, hence the Option
fn parse_literal(token: &str) -> Result<Option<Literal>, DimacsParseError> {
    let l: isize = token
        .parse()
        .map_err(|_| DimacsParseError::Format(format!("invalid literal '{}'", token)))?;
    if l > 0 {
        Ok(Some(Literal::Positive(Variable(l as usize))))
    } else if l < 0 {
        Ok(Some(Literal::Negative(Variable(-l as usize))))
    } else {
        Ok(None)
    }
}
