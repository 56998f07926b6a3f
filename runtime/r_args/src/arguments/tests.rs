use super::*;
use crate::SignatureTable;
use pretty_assertions::assert_eq;

#[test]
fn test_values_round_trip() {
    let table = SignatureTable::new();
    let sig = table.get(&[Some("x"), None, Some("...")]);
    let args = ArgumentList::new(vec![10, 20, 30], sig.clone());

    assert_eq!(args.len(), 3);
    assert!(!args.is_empty());
    assert_eq!(args.signature(), &sig);
    for (i, expected) in [10, 20, 30].iter().enumerate() {
        assert_eq!(args.argument(i), expected);
    }
    assert_eq!(args.arguments(), &[10, 20, 30]);
}

#[test]
fn test_length_mismatch() {
    let table = SignatureTable::new();
    let result = ArgumentList::try_new(vec!["a"], table.empty(2));
    assert_eq!(
        result.map(|_| ()),
        Err(ArgumentsError::LengthMismatch {
            values: 1,
            signature: 2
        })
    );
}

#[test]
#[should_panic(expected = "argument list has 3 values but its signature has 1 slots")]
fn test_new_panics_on_mismatch() {
    let table = SignatureTable::new();
    let _ = ArgumentList::new(vec![1, 2, 3], table.get(&[Some("a")]));
}

#[test]
fn test_empty_list() {
    let table = SignatureTable::new();
    let args: ArgumentList<i32> = ArgumentList::new(Vec::new(), table.empty(0));
    assert!(args.is_empty());
    assert_eq!(args.to_string(), "Args={}");
}

#[test]
fn test_mutation_is_visible() {
    let table = SignatureTable::new();
    let mut args = ArgumentList::new(vec![1, 2], table.empty(2));

    args.arguments_mut()[0] = 5;
    let old = args.replace(1, 7);

    assert_eq!(old, 2);
    assert_eq!(args.arguments(), &[5, 7]);
    assert_eq!(args.signature(), &table.empty(2));
}

#[test]
fn test_lookup_by_name() {
    let table = SignatureTable::new();
    let args = ArgumentList::new(
        vec!["first", "second", "third"],
        table.get(&[Some("a"), None, Some("a")]),
    );

    assert_eq!(args.value_named("a"), Some(&"first"));
    assert_eq!(args.value_named("b"), None);
    assert_eq!(
        args.iter().collect::<Vec<_>>(),
        vec![(Some("a"), &"first"), (None, &"second"), (Some("a"), &"third")]
    );
}

#[test]
fn test_map_keeps_signature() {
    let table = SignatureTable::new();
    let sig = table.get(&[Some("n"), None]);
    let args = ArgumentList::new(vec![1, 2], sig.clone());

    let doubled = args.map(|v| v * 2);
    let (values, signature) = doubled.into_parts();

    assert_eq!(&*values, &[2, 4]);
    assert_eq!(signature, sig);
}

#[test]
fn test_display() {
    let table = SignatureTable::new();
    let args = ArgumentList::new(vec![1.5, 2.0, 3.25], table.get(&[Some("x"), None, Some("...")]));
    assert_eq!(args.to_string(), "Args={x=1.5, arg1=2, ...=3.25}");
}
