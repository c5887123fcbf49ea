// tests/proptest.rs

use proptest::prelude::*;
use state_set::{MAX_CAPACITY, StateSet};

/// Builds a set whose states match `model`, without exclusivity.
fn build(model: &[bool]) -> StateSet {
    let mut set = StateSet::try_new(model.len()).unwrap();
    for (i, &b) in model.iter().enumerate() {
        set.set_value(i, b, false);
    }
    set
}

fn primary_is_consistent(set: &StateSet) -> bool {
    match set.primary_index() {
        Some(i) => set.get_value(i),
        None => !set.is_any_set(),
    }
}

#[derive(Debug, Clone)]
enum Op {
    SetTrue(usize, bool),
    SetValue(usize, bool, bool),
    Toggle(usize),
    ResetAll,
    SetAll(bool),
    SetDefault,
    SetRange(usize, usize, bool),
    InvertAll,
    Save,
    Restore,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..300, any::<bool>()).prop_map(|(i, e)| Op::SetTrue(i, e)),
        (0usize..300, any::<bool>(), any::<bool>()).prop_map(|(i, v, e)| Op::SetValue(i, v, e)),
        (0usize..300).prop_map(Op::Toggle),
        Just(Op::ResetAll),
        any::<bool>().prop_map(Op::SetAll),
        Just(Op::SetDefault),
        (0usize..300, 0usize..300, any::<bool>()).prop_map(|(s, e, v)| Op::SetRange(s, e, v)),
        Just(Op::InvertAll),
        Just(Op::Save),
        Just(Op::Restore),
    ]
}

fn apply(set: &mut StateSet, op: &Op) {
    match *op {
        Op::SetTrue(i, e) => set.set_true(i, e),
        Op::SetValue(i, v, e) => set.set_value(i, v, e),
        Op::Toggle(i) => set.toggle(i),
        Op::ResetAll => set.reset_all(),
        Op::SetAll(v) => set.set_all(v),
        Op::SetDefault => set.set_default(),
        Op::SetRange(s, e, v) => set.set_range(s, e, v),
        Op::InvertAll => set.invert_all(),
        Op::Save => set.save(),
        Op::Restore => set.restore(),
    }
}

//
// -----------------------------------------------------------------------------
// Exclusive Selection
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_exclusive_set_true(
        model in prop::collection::vec(any::<bool>(), 1..=MAX_CAPACITY),
        index in 0usize..MAX_CAPACITY
    ) {
        let mut set = build(&model);
        let i = index % model.len();
        set.set_true(i, true);

        prop_assert!(set.get_value(i));
        prop_assert_eq!(set.count(), 1);
        prop_assert_eq!(set.first_true_index(), Some(i));
        prop_assert_eq!(set.primary_index(), Some(i));
    }
}

proptest! {
    #[test]
    fn prop_clearing_primary_falls_back_to_first(
        model in prop::collection::vec(any::<bool>(), 1..=MAX_CAPACITY),
        index in 0usize..MAX_CAPACITY
    ) {
        let mut set = build(&model);
        let i = index % model.len();
        set.set_true(i, false);
        set.set_value(i, false, true);

        prop_assert!(!set.get_value(i));
        prop_assert_eq!(set.primary_index(), set.first_true_index());
    }
}

//
// -----------------------------------------------------------------------------
// Bulk Operations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_all_then_invert(capacity in 1usize..=MAX_CAPACITY) {
        let mut set = StateSet::try_new(capacity).unwrap();
        set.set_all(true);
        set.invert_all();
        prop_assert_eq!(set.count(), 0);
        prop_assert_eq!(set.primary_index(), None);

        set.invert_all();
        prop_assert_eq!(set.count(), capacity);
        prop_assert_eq!(set.primary_index(), Some(0));
    }
}

proptest! {
    #[test]
    fn prop_set_range_matches_model(
        model in prop::collection::vec(any::<bool>(), 1..=MAX_CAPACITY),
        start in 0usize..300,
        end in 0usize..300,
        value in any::<bool>()
    ) {
        let mut set = build(&model);
        set.set_range(start, end, value);

        if start >= model.len() {
            prop_assert_eq!(set, build(&model));
        } else {
            let last = end.min(model.len() - 1);
            for i in 0..model.len() {
                let expected = value && (start..=last).contains(&i);
                prop_assert_eq!(set.get_value(i), expected);
            }
            let primary = (value && start <= last).then_some(start);
            prop_assert_eq!(set.primary_index(), primary);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Snapshots and Text
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_save_restore_roundtrip(
        model in prop::collection::vec(any::<bool>(), 1..=MAX_CAPACITY),
        ops in prop::collection::vec(op(), 0..40)
    ) {
        let mut set = build(&model);
        set.save();
        let saved = set.clone();

        for op in ops.iter().filter(|op| !matches!(op, Op::Save | Op::Restore)) {
            apply(&mut set, op);
        }

        set.restore();
        prop_assert_eq!(set, saved);
    }
}

proptest! {
    #[test]
    fn prop_serialize_roundtrip(model in prop::collection::vec(any::<bool>(), 1..=MAX_CAPACITY)) {
        let set = build(&model);
        let mut buf = vec![0xAAu8; set.serialized_size()];
        let written = set.serialize(&mut buf);

        prop_assert_eq!(written, model.len());
        prop_assert_eq!(buf[written], 0);
        for (i, &b) in model.iter().enumerate() {
            prop_assert_eq!(buf[i] == b'1', b);
        }

        let mut loaded = StateSet::try_new(model.len()).unwrap();
        loaded.load_serialized(&buf).unwrap();
        for (i, &b) in model.iter().enumerate() {
            prop_assert_eq!(loaded.get_value(i), b);
        }
    }
}

proptest! {
    #[test]
    fn prop_serialize_never_overflows(
        capacity in 1usize..=MAX_CAPACITY,
        buf_len in 0usize..300
    ) {
        let mut set = StateSet::try_new(capacity).unwrap();
        set.set_all(true);
        let mut buf = vec![0xAAu8; buf_len];
        let written = set.serialize(&mut buf);

        if buf_len == 0 {
            prop_assert_eq!(written, 0);
        } else {
            prop_assert_eq!(written, capacity.min(buf_len - 1));
            prop_assert_eq!(buf[written], 0);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Invariants
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_primary_stays_consistent(
        capacity in 0usize..300,
        ops in prop::collection::vec(op(), 0..60)
    ) {
        let mut set = StateSet::try_new(capacity).unwrap();

        for op in &ops {
            apply(&mut set, op);
            prop_assert!(primary_is_consistent(&set), "after {:?}: {:?}", op, set);
            prop_assert!(set.count() <= set.capacity());
            prop_assert_eq!(set.all_true_indices().len(), set.count());
        }
    }
}
