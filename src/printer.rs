//! Printing helpers shared by the exercise binaries.
//!
//! Values fall into a closed set of categories. Numbers and booleans get a
//! trailing space so a whole vector stays readable on one line; strings and
//! records carry their own layout and are emitted as-is.

use itertools::{EitherOrBoth, Itertools};

/// The category a printable value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Numeric,
    Boolean,
    Text,
    Record,
}

/// A value the exercise helpers know how to print.
///
/// Anything outside the four categories simply does not implement the trait,
/// so passing it is a compile error rather than a runtime one.
pub trait Printable {
    fn category(&self) -> Category;
    fn render(&self) -> String;
}

macro_rules! impl_printable_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Printable for $ty {
                fn category(&self) -> Category {
                    Category::Numeric
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_printable_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Printable for bool {
    fn category(&self) -> Category {
        Category::Boolean
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Printable for &str {
    fn category(&self) -> Category {
        Category::Text
    }

    fn render(&self) -> String {
        (*self).to_string()
    }
}

impl Printable for String {
    fn category(&self) -> Category {
        Category::Text
    }

    fn render(&self) -> String {
        self.clone()
    }
}

/// Formats a single value by the scalar rule: numbers and booleans are
/// followed by one space, everything else is rendered verbatim.
pub fn format_scalar<T: Printable>(value: &T) -> String {
    match value.category() {
        Category::Numeric | Category::Boolean => {
            let mut out = value.render();
            out.push(' ');
            out
        }
        Category::Text | Category::Record => value.render(),
    }
}

/// Formats every element of a sequence by the scalar rule, in order, with a
/// single trailing line break. An empty sequence formats as just the break.
pub fn format_all<'a, T, I>(values: I) -> String
where
    T: Printable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::new();
    for value in values {
        out.push_str(&format_scalar(value));
    }
    out.push('\n');
    out
}

/// Formats two columns side by side, one `left<TAB>right` row per line.
/// Unequal column lengths leave the missing side blank.
pub fn format_table<S: AsRef<str>>(left: &[S], right: &[S]) -> String {
    left.iter()
        .zip_longest(right.iter())
        .map(|row| match row {
            EitherOrBoth::Both(l, r) => format!("{}\t{}\n", l.as_ref(), r.as_ref()),
            EitherOrBoth::Left(l) => format!("{}\t\n", l.as_ref()),
            EitherOrBoth::Right(r) => format!("\t{}\n", r.as_ref()),
        })
        .collect()
}

/// Prints a single value to stdout by the scalar rule.
pub fn print<T: Printable>(value: &T) {
    std::print!("{}", format_scalar(value));
}

/// Prints a sequence to stdout, one line break at the end.
pub fn print_all<'a, T, I>(values: I)
where
    T: Printable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    std::print!("{}", format_all(values));
}

/// Prints two columns side by side to stdout.
pub fn print_table<S: AsRef<str>>(left: &[S], right: &[S]) {
    std::print!("{}", format_table(left, right));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;

    #[test]
    fn test_numeric_sequence_spacing() {
        let v = vec![10, 11, 12];
        assert_eq!(format_all(&v), "10 11 12 \n");
    }

    #[test]
    fn test_boolean_scalar_renders_words() {
        assert_eq!(format_scalar(&true), "true ");
        assert_eq!(format_scalar(&false), "false ");
    }

    #[test]
    fn test_string_sequence_concatenates_without_separator() {
        let v = vec!["ab", "cd", "ef"];
        assert_eq!(format_all(&v), "abcdef\n");
    }

    #[test]
    fn test_empty_sequence_is_only_a_line_break() {
        let v: Vec<i32> = Vec::new();
        assert_eq!(format_all(&v), "\n");
    }

    #[test]
    fn test_float_scalar() {
        assert_eq!(format_scalar(&2.5f64), "2.5 ");
    }

    #[test]
    fn test_text_scalar_unseparated() {
        assert_eq!(format_scalar(&"plain"), "plain");
        assert_eq!(format_scalar(&String::from("owned")), "owned");
    }

    #[test]
    fn test_record_sequence_uses_record_layout() {
        let products = vec![
            Product::new("P1", 10, true),
            Product::new("P2", 44, false),
        ];
        assert_eq!(
            format_all(&products),
            "Name:P1\t Price:10\t Shipping:free\nName:P2\t Price:44\t Shipping:not free\n\n"
        );
    }

    #[test]
    fn test_table_equal_columns() {
        let left = vec!["a".to_string(), "b".to_string()];
        let right = vec!["x".to_string(), "y".to_string()];
        assert_eq!(format_table(&left, &right), "a\tx\nb\ty\n");
    }

    #[test]
    fn test_table_unequal_columns() {
        let left = vec!["a", "b", "c"];
        let right = vec!["x"];
        assert_eq!(format_table(&left, &right), "a\tx\nb\t\nc\t\n");
    }
}
