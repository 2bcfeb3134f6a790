use serde_json::json;

use crate::api::convert::{FlagEncoding, WireLiteral};
use crate::api::dns_record::WireDnsRecord;
use crate::api::domain::WireDomain;
use crate::api::url_forward::WireUrlForward;
use crate::api::{parse_price, DnsRecord, Domain, Pricing, UrlForward};

fn wire_domain(security_lock: &str, whois_privacy: &str, auto_renew: &str, not_local: &str) -> WireDomain {
    serde_json::from_value(json!({
        "domain": "example.com",
        "status": "ACTIVE",
        "TLD": "com",
        "createDate": "2020-01-01 00:00:00",
        "expireDate": "2030-01-01 00:00:00",
        "securityLock": security_lock,
        "whoisPrivacy": whois_privacy,
        "autoRenew": auto_renew,
        "notLocal": not_local
    }))
    .unwrap()
}

#[test]
fn test_flag_tables() {
    assert_eq!(FlagEncoding::Binary.decode("f", "1"), Ok(true));
    assert_eq!(FlagEncoding::Binary.decode("f", "0"), Ok(false));
    assert_eq!(FlagEncoding::YesNo.decode("f", "yes"), Ok(true));
    assert_eq!(FlagEncoding::YesNo.decode("f", "no"), Ok(false));
    assert_eq!(FlagEncoding::Binary.encode(true), "1");
    assert_eq!(FlagEncoding::YesNo.encode(false), "no");

    for literal in ["", "yes", "true", "01", " 1"] {
        let err = FlagEncoding::Binary.decode("security lock", literal).unwrap_err();
        assert_eq!(err.field, "security lock");
        assert_eq!(err.literal, literal);
    }
    for literal in ["", "1", "0", "Yes", "true"] {
        assert!(FlagEncoding::YesNo.decode("wildcard", literal).is_err());
    }
}

#[test]
fn test_wire_number_accepts_loose_json() {
    let parsed: Vec<WireLiteral> = serde_json::from_value(json!(["600", 600, null, ""])).unwrap();
    assert_eq!(parsed[0].required("ttl"), Ok(600));
    assert_eq!(parsed[1].required("ttl"), Ok(600));
    assert_eq!(parsed[2].optional("prio"), Ok(None));
    assert_eq!(parsed[3].optional("prio"), Ok(None));
    assert!(parsed[3].required("ttl").is_err());

    let err = WireLiteral::from("ten").optional("id").unwrap_err();
    assert_eq!(err.to_string(), "expected id of an integer, got 'ten'");

    // Wrong JSON types still decode, then fail closed on conversion.
    let parsed: Vec<WireLiteral> =
        serde_json::from_value(json!([true, 600.0, [1], { "a": 1 }])).unwrap();
    assert_eq!(parsed[0].as_str(), "true");
    assert_eq!(parsed[1].as_str(), "600.0");
    assert_eq!(parsed[2].as_str(), "[...]");
    assert_eq!(parsed[3].as_str(), "{...}");
    assert!(FlagEncoding::Binary.decode("security lock", parsed[0].as_str()).is_err());
    for literal in &parsed {
        assert!(literal.required("ttl").is_err());
    }
    assert_eq!(parsed[1].optional("prio").unwrap_err().literal, "600.0");
}

#[test]
fn test_domain_conversion() {
    let domain = Domain::try_from(&wire_domain("1", "1", "1", "0")).unwrap();
    assert_eq!(domain.domain, "example.com");
    assert_eq!(domain.tld, "com");
    assert_eq!(domain.create_date, "2020-01-01 00:00:00");
    assert!(domain.security_lock);
    assert!(!domain.not_local);
}

#[test]
fn test_domain_flags_follow_not_local() {
    let domain = Domain::try_from(&wire_domain("0", "0", "0", "1")).unwrap();
    assert!(!domain.security_lock);
    assert!(domain.whois_privacy);
    assert!(domain.auto_renew);
    assert!(domain.not_local);

    let err = Domain::try_from(&wire_domain("0", "0", "0", "2")).unwrap_err();
    assert_eq!(err.field, "whois privacy");
    assert_eq!(err.literal, "2");
}

#[test]
fn test_domain_rejects_unknown_literal() {
    let err = Domain::try_from(&wire_domain("on", "1", "1", "1")).unwrap_err();
    assert_eq!(err.field, "security lock");
    assert_eq!(err.literal, "on");
    assert_eq!(err.to_string(), "expected security lock of '1' or '0', got 'on'");
}

#[test]
fn test_dns_record_round_trip() {
    let full = DnsRecord {
        id: Some(106926659),
        subdomain: "mail".to_string(),
        record_type: "MX".to_string(),
        content: "mx.example.net".to_string(),
        ttl: 3600,
        priority: Some(10),
        notes: "primary".to_string(),
    };
    let wire = WireDnsRecord::from(&full);
    assert_eq!(wire.ttl.as_str(), "3600");
    assert_eq!(wire.prio.as_str(), "10");
    assert_eq!(DnsRecord::try_from(&wire).unwrap(), full);

    let bare = DnsRecord {
        id: None,
        priority: None,
        ..full
    };
    let wire = WireDnsRecord::from(&bare);
    assert!(wire.id.is_empty());
    assert!(wire.prio.is_empty());
    let back = DnsRecord::try_from(&wire).unwrap();
    assert_eq!(back.id, None);
    assert_eq!(back.priority, None);
    assert_eq!(back, bare);
}

#[test]
fn test_dns_record_serializes_numbers_as_strings() {
    let record = DnsRecord {
        id: None,
        subdomain: "www".to_string(),
        record_type: "A".to_string(),
        content: "1.2.3.4".to_string(),
        ttl: 600,
        priority: None,
        notes: String::new(),
    };
    let value = serde_json::to_value(WireDnsRecord::from(&record)).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "www",
            "type": "A",
            "content": "1.2.3.4",
            "ttl": "600",
            "prio": "",
            "notes": ""
        })
    );
}

#[test]
fn test_dns_record_bad_priority() {
    let wire: WireDnsRecord = serde_json::from_value(json!({
        "id": "1", "name": "a", "type": "MX", "content": "b", "ttl": "600", "prio": "high"
    }))
    .unwrap();
    let err = DnsRecord::try_from(&wire).unwrap_err();
    assert_eq!(err.field, "priority");
    assert_eq!(err.literal, "high");
}

#[test]
fn test_url_forward_round_trip() {
    let forward = UrlForward {
        id: Some(3),
        subdomain: "go".to_string(),
        location: "https://example.net".to_string(),
        forward_type: "temporary".to_string(),
        include_path: false,
        wildcard: true,
    };
    let wire = WireUrlForward::from(&forward);
    assert_eq!(wire.include_path.as_str(), "no");
    assert_eq!(wire.wildcard.as_str(), "yes");
    assert_eq!(UrlForward::try_from(&wire).unwrap(), forward);
}

#[test]
fn test_url_forward_rejects_binary_literal() {
    let wire: WireUrlForward = serde_json::from_value(json!({
        "id": "", "subdomain": "", "location": "x", "type": "permanent",
        "includePath": "no", "wildcard": "0"
    }))
    .unwrap();
    let err = UrlForward::try_from(&wire).unwrap_err();
    assert_eq!(err.field, "wildcard");
    assert_eq!(err.literal, "0");
}

#[test]
fn test_parse_price() {
    assert_eq!(parse_price("registration", "9.68"), Ok(9.68));
    assert_eq!(parse_price("renewal", "1,079.16"), Ok(1079.16));
    let err = parse_price("transfer", "n/a").unwrap_err();
    assert_eq!(err.field, "transfer");
    assert_eq!(parse_price("registration", "12"), Ok(12.0));
    assert_eq!(parse_price("registration", "12,345,678.9"), Ok(12345678.9));
    for literal in ["inf", "NaN", "1e3", "-5", "+5", "1,2,3", "1234,567", ",123", "1.", ".5", "1.2.3", " 9.68"] {
        let err = parse_price("renewal", literal).unwrap_err();
        assert_eq!(err.literal, literal);
    }

    let pricing = Pricing {
        registration: "12.00".to_string(),
        renewal: "2,000.50".to_string(),
        transfer: "".to_string(),
        special_type: None,
    };
    let err = pricing.amounts().unwrap_err();
    assert_eq!(err.field, "transfer");
    assert_eq!(err.literal, "");
}
