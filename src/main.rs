use clap::{App, Arg, ArgMatches};
use dpllsat::formula::dimacs::parse;
use dpllsat::{random_formula, Formula, SatResult, Solver};
use std::fs::File;

fn main() {
    env_logger::init();

    let matches = App::new("dpllsat")
        .about("decides satisfiability of a CNF formula by recursive DPLL search")
        .arg(Arg::with_name("INPUT").help("input file (in DIMACS CNF); stdin when absent").index(1))
        .arg(
            Arg::with_name("random")
                .long("random")
                .value_name("CLAUSES")
                .takes_value(true)
                .help("solve a random 3-CNF instance with this many clauses instead of reading input"),
        )
        .arg(
            Arg::with_name("vars")
                .long("vars")
                .value_name("N")
                .takes_value(true)
                .help("variable universe for --random (default 26)"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .help("print the clauses before solving"),
        )
        .get_matches();

    let f = match build_formula(&matches) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(-1);
        }
    };

    if matches.is_present("verbose") {
        for clause in f.clauses() {
            println!("{}", clause);
        }
    }

    let solver = Solver::new(f);
    let exit_code = match solver.solve() {
        SatResult::Satisfiable => {
            println!("s SATISFIABLE");
            0
        }
        SatResult::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            1
        }
    };
    std::process::exit(exit_code);
}

fn build_formula(matches: &ArgMatches) -> Result<Formula, String> {
    if let Some(count) = matches.value_of("random") {
        let num_clauses: usize = count
            .parse()
            .map_err(|_| format!("invalid clause count '{}'", count))?;
        let vars = matches.value_of("vars").unwrap_or("26");
        let num_vars: usize = vars
            .parse()
            .map_err(|_| format!("invalid variable count '{}'", vars))?;
        if num_vars < 3 {
            return Err("--vars must be at least 3 for 3-CNF generation".into());
        }
        Ok(random_formula(&mut rand::thread_rng(), num_vars, num_clauses, 3))
    } else if let Some(path) = matches.value_of("INPUT") {
        let file = File::open(path).map_err(|e| format!("cannot open {}: {}", path, e))?;
        parse(file).map_err(|e| format!("parse error: {:?}", e))
    } else {
        parse(std::io::stdin()).map_err(|e| format!("parse error: {:?}", e))
    }
}
