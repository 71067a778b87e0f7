//! The product record used by the sorting and partitioning exercises.

use crate::printer::{Category, Printable};

/// A tiny catalogue entry: name, whole-dollar price, free-delivery flag.
///
/// Ordering is derived field by field, name first, so a product list sorts
/// by name unless an exercise asks for a different key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Product {
    pub name: String,
    pub price: u32,
    pub free_delivery: bool,
}

impl Product {
    pub fn new(name: &str, price: u32, free_delivery: bool) -> Self {
        Self {
            name: name.to_string(),
            price,
            free_delivery,
        }
    }
}

impl Printable for Product {
    fn category(&self) -> Category {
        Category::Record
    }

    fn render(&self) -> String {
        format!(
            "Name:{}\t Price:{}\t Shipping:{}\n",
            self.name,
            self.price,
            if self.free_delivery { "free" } else { "not free" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::format_scalar;

    #[test]
    fn test_orders_by_name_first() {
        let a = Product::new("P1", 99, false);
        let b = Product::new("P2", 1, true);
        assert!(a < b);
    }

    #[test]
    fn test_equal_products_compare_equal() {
        let a = Product::new("P1", 10, true);
        let b = Product::new("P1", 10, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_record_rendering() {
        let p = Product::new("P6", 2, true);
        assert_eq!(format_scalar(&p), "Name:P6\t Price:2\t Shipping:free\n");
        let q = Product::new("P3", 23, false);
        assert_eq!(format_scalar(&q), "Name:P3\t Price:23\t Shipping:not free\n");
    }
}
