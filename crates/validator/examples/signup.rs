//! Validating a signup form with `#[derive(Inspect)]`.
//!
//! Run with `cargo run -p structval --example signup`.

use structval::prelude::*;

#[derive(Inspect)]
struct Signup {
    #[validate("min:18", rename = "Age")]
    pub age: i64,

    #[validate("len:4;in:AAAA,BBBB", rename = "Code")]
    pub code: String,

    #[validate("min:1;max:3")]
    pub interests: Vec<String>,
}

fn report(label: &str, signup: &Signup) {
    match validate(signup) {
        Ok(()) => println!("✓ {label} is valid"),
        Err(err) => {
            println!("✗ {label} is invalid:");
            for failure in err.failures() {
                println!("  [{}] {failure}", failure.code());
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    report(
        "adult with a known code",
        &Signup {
            age: 30,
            code: "AAAA".to_owned(),
            interests: vec!["go".to_owned(), "rust".to_owned()],
        },
    );

    report(
        "minor with an unknown code",
        &Signup {
            age: 17,
            code: "CCCC".to_owned(),
            interests: vec![String::new()],
        },
    );

    if let Err(err) = validate(&42_i64) {
        println!("✗ plain integer: {err}");
    }
}
