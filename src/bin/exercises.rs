//! Exercise set, second revision: the container warm-ups extended with
//! rotation, partitioning and ordered-insert tasks, a handful of
//! miscellaneous exercises (comparisons, binary search, float equality),
//! and iterator-adapter exercises.
//!
//! Run with: cargo run --bin exercises

// The stubs leave their inputs untouched until a student fills them in.
#![allow(unused_variables, unused_mut)]

use algorithm_exercises::section;

mod container {
    use algorithm_exercises::{exercise, print, print_all, print_table, Product};

    pub fn exercise1() {
        // Copy all elements from v1 to the end of v2.
        exercise("Container:Exercise 1", || {
            let v1 = vec![1, 2, 3, 4, 5, 6, 7, 8];
            let mut v2 = vec![10, 11, 12, 13, 14, 15, 16, 17, 18, 19];

            // Implementation here

            print_all(&v2);
        });
    }

    pub fn exercise2() {
        // Copy all elements from v1 that are greater than 5 to the end of v2.
        exercise("Container:Exercise 2", || {
            let v1 = vec![3, 1, 2, 6, 7, 8, 5, 7, 9];
            let mut v2 = vec![10, 11, 12, 13, 14, 15, 16, 17, 18, 19];

            // Implementation here

            print_all(&v2);
        });
    }

    pub fn exercise3() {
        // Move all elements from v1 to the end of v2, leaving v1 empty.
        // This one ships solved as a worked example.
        exercise("Container:Exercise 3", || {
            let mut v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
            let mut v2 = vec![10, 11, 12, 13, 14, 15, 16, 17, 18, 19];

            // Implementation here
            v2.append(&mut v1);

            print_all(&v1);
            print_all(&v2);
        });
    }

    pub fn exercise4() {
        // Copy all elements from v1 in reverse order to the end of v2.
        exercise("Container:Exercise 4", || {
            let v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
            let mut v2 = vec![10, 11, 12, 13, 14, 15, 16, 17, 18, 19];

            // Implementation here

            print_all(&v1);
            print_all(&v2);
        });
    }

    pub fn exercise5() {
        // Copy the first 5 elements of v1 over the positions starting after
        // position 3 of the same vector, so that { 1,2,3,4,5,6,7,8,9 }
        // becomes { 1,2,3,1,2,3,4,5,9 }. Mind the overlap.
        exercise("Container:Exercise 5", || {
            let mut v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];

            // Implementation here

            print_all(&v1);
        });
    }

    pub fn exercise6() {
        // Increment each number in v1 by 1 so that it becomes { 2,3,...,10 }.
        exercise("Container:Exercise 6", || {
            let mut v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];

            // Implementation here

            print_all(&v1);
        });
    }

    pub fn exercise7() {
        // Count how many elements of v1 are even numbers.
        exercise("Container:Exercise 7", || {
            let v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];

            // Implementation here
        });
    }

    pub fn exercise8() {
        // Collect the elements of v1 that are not in v2 into a new vector v3.
        exercise("Container:Exercise 8", || {
            let v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
            let v2 = vec![4, 5, 6, 7, 8, 9, 10, 11, 12];

            // Implementation here
            let v3: Vec<i32> = Vec::new();

            print_all(&v3);
        });
    }

    pub fn exercise9() {
        // Create a vector v containing the numbers from 10 to 100.
        exercise("Container:Exercise 9", || {
            // Implementation here

            // print_all(&v);
        });
    }

    pub fn exercise10() {
        // Reverse the order of the elements in v, in place.
        exercise("Container:Exercise 10", || {
            let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];

            // Implementation here

            print_all(&v);
        });
    }

    pub fn exercise11() {
        // The list below has 16 elements; four consecutive ones are marked
        // with '#'. Move those four elements forwards and backwards within
        // the list:
        //   - towards the end, to position 15:  -----------####-
        //   - towards the start, to position 3: ---####---------
        //   - to the beginning (position 0):    ####------------
        // The loop prepares the list and sets new_begin to 15, 3 and 0 in
        // turn; implement your solution in the loop body (one rotation per
        // pass).
        exercise("Container:Exercise 11", || {
            let marked = || {
                vec![
                    "-", "-", "-", "-", "-", "-", "-", "-", "#", "#", "#", "#", "-", "-", "-", "-",
                ]
            };
            let range_size = 4; // number of marked elements
            let range_begin = 8; // where the marked range starts

            let v = marked();
            print(&format!("Original {range_begin}:\t"));
            print_all(&v);

            for new_begin in [15, 3, 0] {
                // Re-init the vector
                let mut v = marked();
                print(&format!("Starting at {new_begin}:\t"));

                // Implementation here

                print_all(&v);
            }
        });
    }

    pub fn exercise12() {
        // Reorder v so that the marked elements (the # entries) in positions
        // 1 through 8 move to the end of that range, and the marked elements
        // from position 9 onward move to the top of that range, keeping the
        // relative order preserved (a stable partition in each half). The
        // expected outcome is printed next to your result.
        exercise("Container:Exercise 12", || {
            let should_be: Vec<String> = [
                "-2", "-4", "-6", "-8", "#3", "#1", "#5", "#7", "#9", "#11", "#13", "#15", "-18",
                "-16", "-20", "-12", "-22",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect();
            let mut v: Vec<String> = [
                "-2", "#3", "#1", "-4", "#5", "-6", "#7", "-8", "-18", "-16", "-20", "#9", "#11",
                "-12", "#13", "#15", "-22",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect();

            // Implementation here

            print_table(&should_be, &v);
        });
    }

    pub fn exercise13() {
        // Three sub-tasks on the product list below.
        exercise("Container:Exercise 13", || {
            let mut products = vec![
                Product::new("P1", 10, true),
                Product::new("P5", 5, false),
                Product::new("P6", 2, true),
                Product::new("P3", 23, false),
                Product::new("P4", 69, true),
                Product::new("P7", 11, true),
                Product::new("P2", 44, false),
            ];

            // Exercise 13a: sort the product list by price.

            print_all(&products);

            // Exercise 13b: put the free-shipping products at the top of
            // the list without breaking the ordering by price.

            print_all(&products);

            // Exercise 13c: find all products with free shipping that cost
            // less than 20 dollars and copy them into free_under_20.
            let free_under_20: Vec<Product> = Vec::new();
            let max_price = 20;

            print_all(&free_under_20);
        });
    }

    pub fn exercise14() {
        // Remove all odd numbers from v so that its length shrinks
        // accordingly.
        exercise("Container:Exercise 14", || {
            let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

            // Implementation here

            print_all(&v);
        });
    }

    pub fn exercise15() {
        // Insert new_item into v while keeping v ordered. Do not hard-code
        // the insert position; compute where the new item belongs.
        exercise("Container:Exercise 15", || {
            let mut v: Vec<String> = ["A", "B", "C", "D", "F", "G", "H"]
                .iter()
                .map(|s| s.to_string())
                .collect();
            let new_item = String::from("E");

            // Implementation here

            print_all(&v);
            debug_assert!(v.windows(2).all(|w| w[0] <= w[1]));
        });
    }
}

mod misc {
    use algorithm_exercises::{exercise, print};

    pub fn exercise1() {
        // x is signed, y is unsigned. Write the six comparisons between
        // them; a plain `x < y as i32`-style cast is not the point, make
        // the comparison itself correct for any values.
        exercise("Misc:Exercise 1", || {
            let x: i32 = -1;
            let y: u32 = 1;
            let b = false;

            // Implementation here, like: b = comparison(x, y);

            // equal
            print(&b);

            // not equal
            print(&b);

            // x is less than y
            print(&b);

            // x is less or equal to y
            print(&b);

            // x is greater than y
            print(&b);

            // x is greater or equal to y
            print(&b);

            println!();
        });
    }

    // A fraction storing numerator and denominator. The derived comparisons
    // below compare field by field, which is not how fractions compare:
    // replace them with implementations so that 10/15 == 2/3 holds. Try to
    // implement as few operators as possible.
    #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
    struct Fraction {
        numerator: i64,
        denominator: i64,
    }

    impl Fraction {
        fn new(numerator: i64, denominator: i64) -> Self {
            Self {
                numerator,
                denominator,
            }
        }
    }

    pub fn exercise2() {
        exercise("Misc:Exercise 2", || {
            let a = Fraction::new(10, 15);
            let b = Fraction::new(2, 3);
            let c = Fraction::new(5, 3);

            let d = Fraction::new(1, 3);
            let e = Fraction::new(2, 6);

            let f = Fraction::new(1, 5);
            let g = Fraction::new(2, 10);

            // Remove the early return and un-comment the checks below once
            // the comparisons are implemented.
            return;

            // println!("a < c  should be true and is: {}", a < c);
            // assert!(a < c);
            // println!("a > c  should be false and is: {}", a > c);
            // assert!(!(a > c));
            // println!("c < a  should be false and is: {}", c < a);
            // assert!(!(c < a));
            // println!("a == b should be true and is: {}", a == b);
            // assert!(a == b);
            // println!("a != b should be false and is: {}", a != b);
            // assert!(!(a != b));
            // println!("a <= b should be true and is: {}", a <= b);
            // assert!(a <= b);
            // println!("a <= c should be true and is: {}", a <= c);
            // assert!(a <= c);
            // println!("a >= c should be false and is: {}", a >= c);
            // assert!(!(a >= c));
            // println!("c >= a should be true and is: {}", c >= a);
            // assert!(c >= a);
            // println!("c <= a should be false and is: {}", c <= a);
            // assert!(!(c <= a));
            // println!("a != c should be true and is: {}", a != c);
            // assert!(a != c);
            // println!("d == e should be true and is: {}", d == e);
            // assert!(d == e);
            // println!("f == g should be true and is: {}", f == g);
            // assert!(f == g);
        });
    }

    /// Returns the index of the first element in the sorted slice `items`
    /// satisfying `element >= value`, or `items.len()` if there is none.
    /// Write the binary search by hand; `items` is guaranteed sorted.
    fn lower_bound<T: Ord>(items: &[T], value: &T) -> usize {
        // Implementation here
        0
    }

    pub fn exercise3() {
        // Implement the binary search in lower_bound above.
        exercise("Misc:Exercise 3", || {
            let v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
            let pos = lower_bound(&v, &5);
        });
    }

    /// Returns true when f1 and f2 differ by less than `precision`.
    fn almost_equal(f1: f32, f2: f32, precision: f32) -> bool {
        // Implementation here
        false
    }

    fn calculate(mut start: f32, decrement: f32, count: i32) -> f32 {
        for _ in 0..count {
            start -= decrement;
        }
        start
    }

    pub fn exercise4() {
        // The loop below runs 10 000 comparisons of floats that are equal
        // up to accumulated rounding drift. Implement almost_equal above so
        // that the assert at the end holds; every difference smaller than
        // 1.0e-5 counts as equal.
        exercise("Misc:Exercise 4", || {
            const PRECISION: f32 = 1.0e-5;
            let num_tests = 10_000;
            let mut equal_comparisons = 0;
            for i in 0..num_tests {
                let expected = i as f32 / 10.0;
                let actual = calculate(9.0 + expected, 0.2, 45);
                // actual and expected are equal
                if almost_equal(actual, expected, PRECISION) {
                    equal_comparisons += 1;
                }
            }
            debug_assert_eq!(equal_comparisons, num_tests);
        });
    }
}

mod views {
    use algorithm_exercises::{exercise, print_all};

    pub fn exercise1() {
        // Solve the following with iterator adapters (the lazy counterpart
        // of the container exercises: nothing is computed until collected).
        exercise("Views:Exercise 1", || {
            let v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];

            // Example: a pass-through view of every element in v:
            let view: Vec<i32> = v.iter().copied().collect();
            print_all(&view);

            // 1) collect view1: the first 5 elements of v in reverse order.

            // print_all(&view1);

            // 2) collect view2: only the even numbers of v.

            // print_all(&view2);

            // 3) collect view3: the squares of the even numbers of v.

            // print_all(&view3);
        });
    }
}

fn main() {
    section("Container Algorithms");
    container::exercise1();
    container::exercise2();
    container::exercise3();
    container::exercise4();
    container::exercise5();
    container::exercise6();
    container::exercise7();
    container::exercise8();
    container::exercise9();
    container::exercise10();
    container::exercise11();
    container::exercise12();
    container::exercise13();
    container::exercise14();
    container::exercise15();

    section("Misc");
    misc::exercise1();
    misc::exercise2();
    misc::exercise3();
    misc::exercise4();

    section("Views");
    views::exercise1();
}
