//! simple-vector quickstart: growth, insertion, removal, and checked access.
//!
//! Demonstrates:
//!   1. Appending and watching the capacity double
//!   2. Reserving up front so appends never reallocate
//!   3. Inserting and erasing in the middle
//!   4. The two access tiers: `at()` errors, `v[i]` is a contract
//!
//! Run with reallocation tracing:
//!   RUST_LOG=simple_vector=trace cargo run --example quickstart

use simple_vector::{DynamicArray, ReserveHint, VectorError};

fn main() -> Result<(), VectorError> {
    pretty_env_logger::init();

    // ─── Growth ─────────────────────────────────────────────────
    let mut v = DynamicArray::new();
    for value in [5, 7, 9, 11, 13] {
        v.push(value);
        println!("push {value:>2}: len {}, capacity {}", v.len(), v.capacity());
    }

    // ─── Reservation ────────────────────────────────────────────
    let mut reserved = DynamicArray::from(ReserveHint::new(10));
    for i in 0..10 {
        reserved.push(i * i);
    }
    println!("reserved: {reserved:?} (capacity {})", reserved.capacity());

    // ─── Insert / erase ─────────────────────────────────────────
    let at = v.insert(1, 6)?;
    println!("inserted 6 at {at}: {v:?}");
    let next = v.erase(3);
    println!("erased index 3, next element now at {next}: {v:?}");
    v.remove_last();
    println!("remove_last: {v:?} (capacity {})", v.capacity());

    // ─── Access tiers ───────────────────────────────────────────
    println!("v[0] = {}", v[0]);
    match v.at(100) {
        Ok(value) => println!("unexpected element {value}"),
        Err(err) => println!("at(100): {err}"),
    }

    // ─── Copies compare by value ────────────────────────────────
    let copy = v.clone();
    println!(
        "copy == v: {}, copy capacity {} (source {})",
        copy == v,
        copy.capacity(),
        v.capacity()
    );
    Ok(())
}
