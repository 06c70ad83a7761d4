use labelroute::{format_number, format_weight};

#[test]
fn test_format_weight() {
    assert_eq!(format_weight(16.0), "16");
    assert_eq!(format_weight(0.0), "0");
    assert_eq!(format_weight(0.75), "0.75");
    assert_eq!(format_weight(1.5), "1.5");
    assert_eq!(format_weight(2.0 / 3.0), "0.667");
    assert_eq!(format_weight(f64::INFINITY), "∞");
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1000), "1,000");
    assert_eq!(format_number(1234567), "1,234,567");
}
