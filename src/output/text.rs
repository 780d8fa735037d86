//! Human-readable text output

use crate::distribution::ParamValue;
use crate::random::RandomState;
use crate::search::{Candidate, SearchSpace, SearchStrategy};

/// Print the search space and generation settings
pub fn print_configuration(space: &SearchSpace, strategy: SearchStrategy, n_iter: usize, state: RandomState) {
    println!("Search Configuration:");
    println!("  Strategy:   {}", strategy);
    if strategy == SearchStrategy::Random {
        println!("  Candidates: {}", n_iter);
        println!("  Random:     {}", state);
    }
    println!("  Parameters:");
    for (name, dist) in space {
        println!("    {:<24} {}", name, dist);
    }
}

/// Print drawn samples, one per line
pub fn print_samples(samples: &[ParamValue]) {
    for value in samples {
        println!("{}", value);
    }
}

/// Print candidates as a table
///
/// Displays one row per candidate with a column per parameter, in name order.
pub fn print_candidates(candidates: &[Candidate]) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                    CANDIDATES ({})", candidates.len());
    println!("═══════════════════════════════════════════════════════════");

    let Some(first) = candidates.first() else {
        return;
    };

    let names: Vec<&String> = first.keys().collect();
    let widths: Vec<usize> = names
        .iter()
        .map(|name| {
            candidates
                .iter()
                .filter_map(|c| c.get(name.as_str()))
                .map(|v| v.to_string().len())
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = names
        .iter()
        .zip(&widths)
        .map(|(name, width)| format!("{:<width$}", name, width = width))
        .collect();
    println!("{:>5}  {}", "#", header.join("  "));

    for (i, candidate) in candidates.iter().enumerate() {
        println!("{:>5}  {}", i + 1, format_row(candidate, &names, &widths));
    }
}

fn format_row(candidate: &Candidate, names: &[&String], widths: &[usize]) -> String {
    names
        .iter()
        .zip(widths)
        .map(|(name, width)| {
            let value = candidate
                .get(name.as_str())
                .map(ToString::to_string)
                .unwrap_or_default();
            format!("{:<width$}", value, width = width)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_pads_columns() {
        let mut candidate = Candidate::new();
        candidate.insert("a".to_string(), ParamValue::Int(7));
        candidate.insert("bb".to_string(), ParamValue::Str("x".into()));

        let a = "a".to_string();
        let bb = "bb".to_string();
        let row = format_row(&candidate, &[&a, &bb], &[3, 4]);
        assert_eq!(row, "7    \"x\" ");
    }
}
