use super::*;

#[test]
fn test_name_layout() {
    let name = Name::new(5, 1000);
    assert_eq!(name.shard(), 5);
    assert_eq!(name.local(), 1000);
}

#[test]
fn test_name_empty() {
    assert_eq!(Name::EMPTY.shard(), 0);
    assert_eq!(Name::EMPTY.local(), 0);
    assert_eq!(Name::default(), Name::EMPTY);
}

#[test]
fn test_name_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Name::new(0, 1));
    set.insert(Name::new(0, 1)); // duplicate
    set.insert(Name::new(0, 2));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_symbol_equality_uses_name() {
    let a = Symbol::new(Name::new(3, 7), "x");
    let b = Symbol::new(Name::new(3, 7), "x");
    let c = Symbol::new(Name::new(3, 8), "y");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.as_str(), "x");
    assert_eq!(a.to_string(), "x");
    assert_eq!(format!("{c:?}"), "\"y\"");
}
