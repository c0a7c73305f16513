//! End-to-end decode/format behaviour through the public API.

use ulrv_core::ulr::{self, Decoded, Discipline, ScopeFlag, ScopeStatus, UlrRecord};

fn record(raw: &str) -> UlrRecord {
    UlrRecord::from(&ulr::decode(raw))
}

#[test]
fn full_scope_certificate() {
    let rec = record("TC123425000000001F");
    assert_eq!(
        rec,
        UlrRecord {
            discipline: "TC".into(),
            cert_number: "1234".into(),
            year: "25".into(),
            location_node: "0".into(),
            ledger: "00000001".into(),
            scope_flag: "F".into(),
            is_valid: true,
        }
    );
}

#[test]
fn partial_scope_certificate() {
    let decoded = ulr::decode("TC999925000000002P");
    let code = decoded.as_code().expect("valid");
    assert_eq!(code.discipline(), Discipline::Testing);
    assert_eq!(code.cert_number(), "9999");
    assert_eq!(code.ledger(), "00000002");
    assert_eq!(code.scope(), ScopeFlag::Partial);
    assert_eq!(ScopeStatus::of(&decoded), ScopeStatus::Partial);
}

#[test]
fn unknown_discipline_is_rejected() {
    assert_eq!(ulr::decode("XX123425000000001F"), Decoded::Invalid);
    assert_eq!(record("XX123425000000001F"), UlrRecord::default());
}

#[test]
fn lowercase_input_decodes_the_same() {
    assert_eq!(
        ulr::decode("tc123425000000001f"),
        ulr::decode("TC123425000000001F")
    );
}

#[test]
fn one_character_short_is_rejected() {
    // 17 characters.
    assert_eq!(ulr::decode("TC12342500000001F"), Decoded::Invalid);
}

#[test]
fn format_renders_spaced_fields() {
    assert_eq!(
        ulr::format(&ulr::decode("TC123425000000001F")),
        "TC 1234 25 0 00000001 F"
    );
}

#[test]
fn case_variants_and_padding_agree() {
    let base = "Cc0001261DeAdBeEfP";
    let expected = ulr::decode(&base.to_uppercase());
    assert!(expected.is_valid());
    assert_eq!(ulr::decode(base), expected);
    assert_eq!(ulr::decode(&format!("  {base}  ")), expected);
    assert_eq!(ulr::canonical(&expected), "CC0001261DEADBEEFP");
}

#[test]
fn decode_is_usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let raw = format!("RC00{i:02}24512345678F");
                ulr::decode(&raw)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap().is_valid());
    }
}
