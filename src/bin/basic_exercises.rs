//! Exercise set, first revision: eight container warm-ups plus two advanced
//! tasks. Solve each stub with one or a few lines of iterator/slice
//! algorithms (`extend`, `filter`, `rotate_*`, `sort_by_key`, ...).
//!
//! Run with: cargo run --bin basic_exercises

// The stubs leave their inputs untouched until a student fills them in.
#![allow(unused_variables, unused_mut)]

use algorithm_exercises::{exercise, print_all, Product};

fn exercise1() {
    // Copy all elements from v1 to the end of v2.
    exercise("Exercise 1", || {
        let v1 = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let mut v2 = vec![10, 11, 12, 13, 14, 15, 16, 17, 18, 19];

        // Implementation here

        print_all(&v2);
    });
}

fn exercise2() {
    // Copy all elements from v1 that are greater than 5 to the end of v2.
    exercise("Exercise 2", || {
        let v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut v2 = vec![10, 11, 12, 13, 14, 15, 16, 17, 18, 19];

        // Implementation here

        print_all(&v2);
    });
}

fn exercise3() {
    // Move all elements from v1 to the end of v2, leaving v1 empty.
    // This one ships solved as a worked example.
    exercise("Exercise 3", || {
        let mut v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut v2 = vec![10, 11, 12, 13, 14, 15, 16, 17, 18, 19];

        // Implementation here
        v2.append(&mut v1);

        print_all(&v1);
        print_all(&v2);
    });
}

fn exercise4() {
    // Copy all elements from v1 in reverse order to the end of v2.
    exercise("Exercise 4", || {
        let v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut v2 = vec![10, 11, 12, 13, 14, 15, 16, 17, 18, 19];

        // Implementation here

        print_all(&v1);
        print_all(&v2);
    });
}

fn exercise5() {
    // Copy the first 5 elements of v1 over the positions starting after
    // position 3 of the same vector, so that { 1,2,3,4,5,6,7,8,9 } becomes
    // { 1,2,3,1,2,3,4,5,9 }. Mind the overlap.
    exercise("Exercise 5", || {
        let mut v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];

        // Implementation here

        print_all(&v1);
    });
}

fn exercise6() {
    // Increment each number in v1 by 1 so that it becomes { 2,3,...,10 }.
    exercise("Exercise 6", || {
        let mut v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];

        // Implementation here

        print_all(&v1);
    });
}

fn exercise7() {
    // Count how many elements of v1 are even numbers - even though we
    // already know the answer.
    exercise("Exercise 7", || {
        let v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];

        // Implementation here
    });
}

fn exercise8() {
    // Collect the elements of v1 that are not in v2 into a new vector v3.
    exercise("Exercise 8", || {
        let v1 = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        let v2 = vec![4, 5, 6, 7, 8, 9, 10, 11, 12];

        // Implementation here
        let v3: Vec<i32> = Vec::new();

        print_all(&v3);
    });
}

// +++++++++++++++++++  Advanced  +++++++++++++++++++

fn exercise9() {
    // Reorder v1 so that the odd elements of positions 1 through 8 move to
    // the end of that range, and the odd elements from position 9 onward
    // move to the top of that range. Keep the relative order of the
    // elements preserved (a stable partition in each half).
    //
    // Before           After
    // 2                2
    // 3  <-            4
    // 1  <-            6
    // 4                8
    // 5  <-            3  <-
    // 6                1  <-
    // 7  <-            5  <-
    // 8                7  <-
    // -----            -----
    // 18               9  <-
    // 16               11 <-
    // 20               13 <-
    // 9  <-            15 <-
    // 11 <-            18
    // 12               16
    // 13 <-            20
    // 15 <-            12
    // 22               22
    exercise("Exercise 9", || {
        let mut v1 = vec![2, 3, 1, 4, 5, 6, 7, 8, 18, 16, 20, 9, 11, 12, 13, 15, 22];

        // Implementation here

        print_all(&v1);
    });
}

fn exercise10() {
    // Three sub-tasks on the product list below.
    exercise("Exercise 10", || {
        let mut products = vec![
            Product::new("P1", 10, true),
            Product::new("P5", 5, false),
            Product::new("P6", 2, true),
            Product::new("P3", 23, false),
            Product::new("P4", 69, true),
            Product::new("P7", 11, true),
            Product::new("P2", 44, false),
        ];

        // Exercise 10a: sort the product list by price.

        print_all(&products);

        // Exercise 10b: put the free-shipping products at the top of the
        // list without breaking the ordering by price (stable partition).

        print_all(&products);

        // Exercise 10c: find all products with free shipping that cost less
        // than 20 dollars and copy them into free_under_20.
        let free_under_20: Vec<Product> = Vec::new();
        let max_price = 20;

        print_all(&free_under_20);
    });
}

fn main() {
    exercise1();
    exercise2();
    exercise3();
    exercise4();
    exercise5();
    exercise6();
    exercise7();
    exercise8();
    exercise9();
    exercise10();
}
