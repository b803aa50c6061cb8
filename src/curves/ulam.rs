// src/curves/ulam.rs

use ndarray::Array2;

use crate::types::PrimeGrid;

/// Trial division by odd numbers up to `sqrt(num)`.
pub fn is_prime(num: u64) -> bool {
    if num < 2 {
        return false;
    }
    if num == 2 {
        return true;
    }
    if num % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor * divisor <= num {
        if num % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Side of the square grid needed for `n` cells: `ceil(sqrt(n))`.
pub fn grid_side(n: u64) -> usize {
    let mut side = (n as f64).sqrt() as u64;
    // Correct float rounding in either direction.
    while side * side > n {
        side -= 1;
    }
    while side * side < n {
        side += 1;
    }
    side as usize
}

/// Walks an outward square spiral from the grid centre over the integers
/// `1..=n`, flagging the cells that hold a prime.
///
/// Starting direction is up (`dy = -1`). The walk turns a quarter left at the
/// corners `x == y`, `x < y && x + y == side - 1` and `x > y && x + y == side`.
/// Positions that leave the grid are skipped but the walk continues.
pub fn ulam_spiral(n: u64) -> PrimeGrid {
    let side = grid_side(n);
    let mut grid = Array2::from_elem((side, side), false);

    let side = side as i64;
    let (mut x, mut y) = (side / 2, side / 2);
    let (mut dx, mut dy) = (0_i64, -1_i64);

    for i in 1..=n {
        if (0..side).contains(&x) && (0..side).contains(&y) && is_prime(i) {
            grid[[y as usize, x as usize]] = true;
        }

        if x == y || (x < y && x + y == side - 1) || (x > y && x + y == side) {
            (dx, dy) = (-dy, dx);
        }
        x += dx;
        y += dy;
    }

    grid
}
