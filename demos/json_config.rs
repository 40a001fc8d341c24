use identifica::core::IdentificationConfig;
use identifica::dispatch::EcuadorIdentification;

fn main() {
    let documents = [
        r#"{}"#,
        r#"{ "province_count": 30 }"#,
        r#"{ "final_consumer": "0000000000000" }"#,
        r#"{ "province_count": 0 }"#,
        r#"{ "province_count": "24" }"#,
    ];

    for doc in &documents {
        match IdentificationConfig::from_json(doc) {
            Ok(config) => {
                let mut validator = EcuadorIdentification::new(config);
                let code = validator.validate_all_identifications("0000000000000");
                println!(
                    "  {doc:<40} => ok, 0000000000000 => {}",
                    code.map_or_else(|| "invalid".to_string(), |c| c.to_string())
                );
            }
            Err(e) => println!("  {doc:<40} => ERROR: {e}"),
        }
    }
}
