//! Demonstration scenarios
//!
//! Prints a base holder, then an extended holder carrying two extra traits.

use eyre::{Context, Result};
use std::io::{self, Write};

use crate::powers::{Describe, ExtendedTraitHolder, TraitHolder};

/// Extra traits given to the extended holder in the demo
pub const DEMO_TRAITS: [&str; 2] = ["x-ray vision", "insane speed"];

/// Descriptions produced by the demo, in print order
pub fn scenarios() -> Vec<String> {
    let base = TraitHolder::new();
    let extended = ExtendedTraitHolder::new(DEMO_TRAITS);
    vec![base.describe(), extended.describe()]
}

/// Write every scenario line to `out`
pub fn write_to<W: Write>(out: &mut W) -> Result<()> {
    for line in scenarios() {
        writeln!(out, "{}", line).context("Failed to write demo output")?;
    }
    Ok(())
}

pub fn run() -> Result<()> {
    log::info!("Running demo scenarios");
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_to(&mut lock)?;
    lock.flush().context("Failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        assert_eq!(
            scenarios(),
            [
                "Superpowers ['flight']",
                "Superpowers ['flight', 'x-ray vision', 'insane speed']",
            ]
        );
    }

    #[test]
    fn test_write_to_emits_two_lines() {
        let mut buf = Vec::new();
        write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Superpowers ['flight']\nSuperpowers ['flight', 'x-ray vision', 'insane speed']\n"
        );
    }

    #[test]
    fn test_repeated_runs_do_not_leak_traits() {
        let first = scenarios();
        let second = scenarios();
        assert_eq!(first, second);
    }
}
