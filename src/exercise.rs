//! Scoped exercise banners.
//!
//! Every exercise runs inside [`exercise`], which prints the header before
//! the body and the closing rule after it, whatever the body returns.

use colored::Colorize;

/// Runs `body` between an exercise header and the closing rule, passing the
/// body's return value through.
pub fn exercise<R>(name: &str, body: impl FnOnce() -> R) -> R {
    println!("{}", name.bold());
    println!();
    let result = body();
    println!();
    println!("------------------");
    println!();
    result
}

/// Prints a section header for a group of exercises.
pub fn section(title: &str) {
    println!("{}", format!("=== {title} ===").cyan().bold());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_passes_return_value_through() {
        let n = exercise("Exercise 0", || 42);
        assert_eq!(n, 42);
    }

    #[test]
    fn test_exercise_runs_body_exactly_once() {
        let mut calls = 0;
        exercise("Exercise 0", || calls += 1);
        assert_eq!(calls, 1);
    }
}
