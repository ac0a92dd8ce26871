// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Shape Checks

use once_cell::sync::Lazy;
use regex::Regex;

/// Four dot-separated groups of one to three ASCII digits, then a one or two
/// digit prefix length.
static CIDR_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}/[0-9]{1,2}$").expect("CIDR pattern is a valid regex")
});

/// Check that `cidr` has the shape of an IPv4 CIDR block
///
/// Only the shape is checked: octets above 255 and prefixes above 32 are
/// accepted.
///
/// # Examples
///
/// ```rust
/// use ecs_platform::domain::is_valid_cidr;
///
/// assert!(is_valid_cidr("10.0.0.0/16"));
/// assert!(!is_valid_cidr("10.0.0/16"));
/// ```
pub fn is_valid_cidr(cidr: &str) -> bool {
    CIDR_SHAPE.is_match(cidr)
}

/// Zone letter of an availability zone (`"us-east-1a"` → `"a"`)
///
/// Empty input yields an empty suffix.
pub fn availability_zone_suffix(az: &str) -> &str {
    az.char_indices()
        .last()
        .map(|(idx, _)| &az[idx..])
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("10.0.0.0/16" ; "vpc block")]
    #[test_case("10.0.10.0/24" ; "subnet block")]
    #[test_case("0.0.0.0/0" ; "default route")]
    #[test_case("999.999.999.999/99" ; "octets are not range checked")]
    fn test_shape_accepted(cidr: &str) {
        assert!(is_valid_cidr(cidr));
    }

    #[test_case("10.0.0/16" ; "three octets")]
    #[test_case("10.0.0.0" ; "missing prefix")]
    #[test_case("10.0.0.0/123" ; "three digit prefix")]
    #[test_case("1000.0.0.0/16" ; "four digit octet")]
    #[test_case(" 10.0.0.0/16" ; "leading whitespace")]
    #[test_case("10.0.0.0/16\n" ; "trailing newline")]
    #[test_case("a.b.c.d/16" ; "letters")]
    #[test_case("" ; "empty")]
    #[test_case("١٠.0.0.0/16" ; "non ascii digits")]
    fn test_shape_rejected(cidr: &str) {
        assert!(!is_valid_cidr(cidr));
    }

    #[test]
    fn test_availability_zone_suffix() {
        assert_eq!(availability_zone_suffix("us-east-1a"), "a");
        assert_eq!(availability_zone_suffix("ap-southeast-1c"), "c");
        assert_eq!(availability_zone_suffix(""), "");
    }
}
