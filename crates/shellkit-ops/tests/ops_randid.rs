use rand::rngs::StdRng;
use rand::SeedableRng;

use shellkit_ops::ops_randid::{id_length, parse_columns, random_id, terminal_columns};

#[test]
fn test_id_length_is_width_minus_one() {
    assert_eq!(id_length(80), 79);
    assert_eq!(id_length(2), 1);
    assert_eq!(id_length(1), 1);
    assert_eq!(id_length(0), 1);
}

#[test]
fn test_parse_columns() {
    assert_eq!(parse_columns("120"), Some(120));
    assert_eq!(parse_columns(" 40\n"), Some(40));
    assert_eq!(parse_columns("0"), None);
    assert_eq!(parse_columns("wide"), None);
}

#[test]
fn test_terminal_columns_prefers_override() {
    assert_eq!(terminal_columns(Some("33")), 33);
}

#[test]
fn test_random_id_is_lowercase_of_requested_length() {
    let mut rng = StdRng::seed_from_u64(7);
    let id = random_id(&mut rng, 500);
    assert_eq!(id.len(), 500);
    assert!(id.chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn test_random_id_is_reproducible_with_seed() {
    let a = random_id(&mut StdRng::seed_from_u64(42), 32);
    let b = random_id(&mut StdRng::seed_from_u64(42), 32);
    let c = random_id(&mut StdRng::seed_from_u64(43), 32);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
