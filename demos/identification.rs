use identifica::core::IdentificationConfigBuilder;
use identifica::dispatch::{EcuadorIdentification, Operation};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=identifica=debug shows each accepted/rejected rule
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut validator = EcuadorIdentification::default();

    println!("=== Document type detection ===\n");

    let numbers = [
        "1710034065",    // cédula
        "1710034065001", // natural-person RUC
        "1790011674001", // private company RUC
        "1760001550001", // public entity RUC
        "9999999999999", // final consumer
        "9999999999998", // nothing
        "0154567890",    // bad check digit
        "17-10034065",   // not digits
    ];

    for number in &numbers {
        match validator.identify(number) {
            Some(kind) => println!(
                "  {number:<14} => {kind} (billing code {})",
                kind.billing_code()
            ),
            None => println!(
                "  {number:<14} => INVALID: {}",
                validator
                    .last_error()
                    .map(ToString::to_string)
                    .unwrap_or_default()
            ),
        }
    }

    println!("\n=== Operations by key ===\n");

    for op in Operation::ALL {
        let result = validator.run(op, "1710034065001");
        println!(
            "  {:<24} 1710034065001 => {}",
            op.key(),
            result.map_or_else(|| "-".to_string(), |code| code.to_string())
        );
    }

    println!("\n=== Custom province count ===\n");

    let config = IdentificationConfigBuilder::new()
        .province_count(10)
        .build()
        .expect("10 provinces is a valid configuration");
    let mut narrow = EcuadorIdentification::new(config);
    if narrow.validate_personal_identification("1710034065").is_none() {
        if let Some(err) = narrow.last_error() {
            println!("  1710034065 with 10 provinces => {err}");
        }
    }
}
