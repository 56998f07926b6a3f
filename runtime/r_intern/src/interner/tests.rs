use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    let empty = interner.intern("");
    assert_eq!(empty, Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_var_args_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();

    let dots = interner.intern_symbol("...");
    let na_rm = interner.intern_symbol("na.rm");

    assert_eq!(interner.len(), before);
    assert_eq!(dots.as_str(), "...");
    assert_eq!(na_rm.as_str(), "na.rm");
}

#[test]
fn test_symbol_text_is_shared() {
    let interner = StringInterner::new();

    let a = interner.intern_symbol("alpha");
    let b = interner.intern_symbol(&String::from("alpha"));

    assert_eq!(a, b);
    assert!(std::ptr::eq(a.as_str(), b.as_str()));
}

#[test]
fn test_get_does_not_insert() {
    let interner = StringInterner::new();
    let before = interner.len();

    assert!(interner.get("never.seen").is_none());
    assert_eq!(interner.len(), before);

    let sym = interner.intern_symbol("never.seen");
    assert_eq!(interner.get("never.seen"), Some(sym));
    assert_eq!(interner.len(), before + 1);
}

#[test]
fn test_shared_interner() {
    let interner = SharedInterner::new();
    let interner2 = interner.clone();

    let name1 = interner.intern("shared");
    let name2 = interner2.intern("shared");

    assert_eq!(name1, name2);
}

#[test]
fn test_concurrent_intern_agrees() {
    let interner = SharedInterner::new();

    let names: Vec<Name> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let interner = interner.clone();
                scope.spawn(move || interner.intern("contended"))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(names.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_string_lookup_trait() {
    fn via_trait<L: StringLookup>(lookup: &L, name: Name) -> String {
        lookup.lookup(name).to_owned()
    }

    let interner = StringInterner::new();
    let name = interner.intern("trait.lookup");
    assert_eq!(via_trait(&interner, name), "trait.lookup");
}

#[test]
fn test_overflow_message() {
    let err = InternError::ShardOverflow {
        shard_idx: 3,
        count: 10,
    };
    assert_eq!(
        err.to_string(),
        format!("interner shard 3 exceeded capacity: 10 strings, max is {}", Name::MAX_LOCAL)
    );
}
