#![cfg(feature = "json")]

use identifica::core::*;
use identifica::dispatch::EcuadorIdentification;

#[test]
fn full_document() {
    let config = IdentificationConfig::from_json(
        r#"{ "province_count": 30, "final_consumer": "0000000000000" }"#,
    )
    .unwrap();
    assert_eq!(config.province_count(), 30);
    assert_eq!(config.final_consumer(), "0000000000000");
}

#[test]
fn empty_document_is_default() {
    let config = IdentificationConfig::from_json("{}").unwrap();
    assert_eq!(config, IdentificationConfig::default());
}

#[test]
fn malformed_json() {
    let err = IdentificationConfig::from_json("{ province_count: ").unwrap_err();
    assert!(matches!(err, IdentificaError::Json(_)));
}

#[test]
fn wrong_type() {
    let err = IdentificationConfig::from_json(r#"{ "province_count": "24" }"#).unwrap_err();
    assert!(matches!(err, IdentificaError::Json(_)));
}

#[test]
fn out_of_range_values() {
    let err = IdentificationConfig::from_json(r#"{ "province_count": 0 }"#).unwrap_err();
    assert!(matches!(err, IdentificaError::Config(_)));

    let err = IdentificationConfig::from_json(r#"{ "final_consumer": "99" }"#).unwrap_err();
    assert!(matches!(err, IdentificaError::Config(_)));
}

#[test]
fn serialize_round_trip() {
    let config = IdentificationConfigBuilder::new()
        .province_count(26)
        .build()
        .unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(IdentificationConfig::from_json(&json).unwrap(), config);
}

#[test]
fn loaded_config_drives_dispatcher() {
    let config = IdentificationConfig::from_json(r#"{ "province_count": 16 }"#).unwrap();
    let mut v = EcuadorIdentification::new(config);

    assert!(v.validate_ruc("1790011674001").is_none());
    assert_eq!(
        v.last_error(),
        Some(&ValidationFailure::BadProvinceCode { max: 16 })
    );
    assert!(v.validate_final_consumer("9999999999999").is_some());
}
