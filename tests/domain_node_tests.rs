//! Node derivation tests against the public surface.

use soroban_domains_sdk::parse_domain;

#[test]
fn test_known_domains_resolve_to_reference_nodes() {
    assert_eq!(
        parse_domain("example", None),
        "dc75a4bce9e729fa81f394f85e2d09e0e47d7b0b2f3bbd5ffe8aef88cedb9eca"
    );
    assert_eq!(
        parse_domain("stellar", None),
        "2fe4cc6a15f9466bad71ed407a8f1b7da81efd931e7712753152aa17abc0e06e"
    );
    assert_eq!(
        parse_domain("a", None),
        "a77fcf77cf904c66c037b4d8e1ff6d007522e964626bc6b822a36e3bf7f99ede"
    );
}

#[test]
fn test_sub_domain_nodes_resolve_to_reference_nodes() {
    assert_eq!(
        parse_domain("example", Some("www")),
        "0af7ad23e7e1d84ec4c6cef1788e93737ed317c1226b59acc397a4dde3a973b8"
    );
    assert_eq!(
        parse_domain("stellar", Some("pay")),
        "ecb15d77821834ae62418430e7b2f58300e3cc13742577afdfe4a0799c81d171"
    );
}

#[test]
fn test_every_node_is_64_lowercase_hex_chars() {
    for (domain, sub) in [
        ("example", None),
        ("example", Some("www")),
        ("UPPER", None),
        ("with-dash", Some("deep")),
    ] {
        let node = parse_domain(domain, sub);
        assert_eq!(node.len(), 64, "node for {:?}/{:?}", domain, sub);
        assert!(node.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }
}

#[test]
fn test_distinct_names_produce_distinct_nodes() {
    let parent = parse_domain("example", None);
    assert_ne!(parse_domain("example", Some("www")), parent);
    assert_ne!(parse_domain("examples", None), parent);
    assert_ne!(parse_domain("Example", None), parent);
}
