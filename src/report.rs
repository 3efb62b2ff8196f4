//! Plain text report of a finished search.

use std::io::{self, Write};

use crate::format_r;
use crate::search::{BurdenProblem, SearchResult};

/// Writes the target burdens, the best combination with its betas, and one line for every
/// retained combination.
pub fn write_report<W: Write>(
    out: &mut W,
    problem: &BurdenProblem,
    result: &SearchResult,
) -> io::Result<()> {
    writeln!(
        out,
        "Ideal burdens -> r1: {:6.3}  r2: {:6.3}",
        problem.ideal_burden_1, problem.ideal_burden_2
    )?;

    let best = match result.best() {
        Some(best) => best,
        None => {
            writeln!(out, "No combinations found.")?;
            return Ok(());
        }
    };

    writeln!(out, "Your best option is:")?;
    writeln!(out, "    b1: {}", format_r(best.b1))?;
    writeln!(out, "    b2: {}", format_r(best.b2))?;
    writeln!(out, "    bc: {}", format_r(best.bc))?;
    writeln!(out, "Your calculated betas are:")?;
    writeln!(out, "    beta 1: {}", best.beta_1(problem.turns))?;
    writeln!(out, "    beta 2: {}", best.beta_2(problem.turns))?;

    writeln!(out)?;
    writeln!(out, "--- Full report: ---")?;
    for c in result.iter() {
        let r1 = c.burden_1();
        let r2 = c.burden_2();
        writeln!(
            out,
            "Score: {:6.3}, b1: {:>5}, b2: {:>5}, bc: {:>5}, r1: {:.3} ({:5.2}), r2: {:.3} ({:5.2}), beta1: {:.5}, beta2: {:.5}",
            c.score,
            format_r(c.b1),
            format_r(c.b2),
            format_r(c.bc),
            r1,
            problem.ideal_burden_1 - r1,
            r2,
            problem.ideal_burden_2 - r2,
            c.beta_1(problem.turns),
            c.beta_2(problem.turns),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::BurdenCalc;
    use crate::Catalog;

    #[test]
    fn report_lists_best_and_every_retained_combination() {
        let cat = Catalog::from_values(vec![10.0, 20.0]).unwrap();
        let problem = BurdenProblem {
            turns: 2000.0,
            ideal_burden_1: 15.0,
            ideal_burden_2: 6.0,
        };
        let res = BurdenCalc::new(&cat, 15.0, 6.0, 3).search();

        let mut out = Vec::new();
        write_report(&mut out, &problem, &res).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Ideal burdens -> r1: 15.000  r2:  6.000");
        assert_eq!(lines[1], "Your best option is:");
        assert_eq!(lines[2], "    b1: 20R");
        assert_eq!(lines[3], "    b2: 10R");
        assert_eq!(lines[4], "    bc: 20R");
        assert_eq!(lines[6], "    beta 1: 200");
        assert_eq!(lines[9], "--- Full report: ---");
        assert_eq!(lines.len(), 10 + 3);
        assert!(lines[10]
            .starts_with("Score:  0.176, b1:   20R, b2:   10R, bc:   20R, r1: 10.000 ( 5.00)"));
    }

    #[test]
    fn empty_result_says_so() {
        let problem = BurdenProblem::new(100.0, 0.05, 30.0, 50.0, 1.5);
        let cat = Catalog::from_values(vec![10.0]).unwrap();
        let res = BurdenCalc::new(&cat, 1.0, 1.0, 0).search();
        let mut out = Vec::new();
        write_report(&mut out, &problem, &res).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("No combinations found.\n"));
    }
}
