//! Basic usage example for the guarded-returns crate.
//!
//! Run with: `cargo run --example basic_usage`

use guarded_returns::{Field, Guarded, Maybe, Outcome, Payload};

#[derive(Debug)]
struct Unavailable;

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Something went wrong")
    }
}

impl std::error::Error for Unavailable {}

/// An operation that can fail
fn fetch(ok: bool) -> Outcome<&'static str, Unavailable> {
    if !ok {
        return Outcome::err(Unavailable);
    }
    Outcome::ok("Everything is fine")
}

/// An operation whose result may legitimately be absent
fn lookup(found: bool) -> Maybe<&'static str> {
    Maybe::new(found.then_some("Everything is fine"))
}

fn main() -> Result<(), Unavailable> {
    println!("=== Outcome ===\n");

    let ok = fetch(true);
    println!("{ok}: is_ok = {}", ok.is_ok());
    println!("  unwrap()     -> {}", ok.unwrap());
    println!("  unwrap_err() -> {:?}", ok.unwrap_err());

    let err = fetch(false);
    println!("{err}: is_ok = {}", err.is_ok());
    if let Payload::Error(error) = err.unwrap() {
        // Inspect without propagating
        println!("  unwrap()     -> {error}");
    }
    println!("  unwrap_err() -> {:?}", err.unwrap_err());
    let Err(fault) = err.read_field(Field::Error);
    println!("  direct read  -> {fault}");

    // Wrap absence in a Maybe instead of building a nullish outcome
    let nested: Outcome<Maybe<&str>, Unavailable> = Outcome::ok(lookup(false));
    println!("{nested}");

    println!("\n=== Maybe ===\n");

    let some = lookup(true);
    println!("{some}: is_some = {}", some.is_some());
    println!("  coalesce(None)            -> {:?}", some.coalesce(None));
    println!("  coalesce(Some(\"Default\")) -> {:?}", some.coalesce(Some("Default")));

    let none = lookup(false);
    println!("{none}: is_none = {}", none.is_none());
    println!("  coalesce(None)            -> {:?}", none.coalesce(None));
    println!("  coalesce(Some(\"Default\")) -> {:?}", none.coalesce(Some("Default")));

    let zero = Maybe::new(Some(0));
    println!("\n{zero}: zero is a value, is_some = {}", zero.is_some());

    // `?` propagates the held error; the ok branch passes through
    let value = fetch(true).into_result()?;
    println!("\npropagated ok value: {value}");

    Ok(())
}
