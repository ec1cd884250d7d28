use multiverse_core::{Coordinator, CoordinatorError, FocusState, FocusTransition, RealityRegistry};

fn coordinator() -> Coordinator {
    Coordinator::new(RealityRegistry::builtin())
}

fn assert_weights_clamped(coordinator: &Coordinator) {
    let blend = coordinator.blend_state();
    assert_eq!(blend.len(), coordinator.realities().len());
    for reality in coordinator.realities() {
        let weight = blend.get(&reality.id).expect("every reality has a weight");
        assert!((0.0..=100.0).contains(&weight), "{} = {weight}", reality.id);
    }
}

#[test]
fn initial_state_spotlights_first_reality_unlocked() {
    let coordinator = coordinator();

    assert_eq!(
        coordinator.focus_state(),
        FocusState {
            focused_index: 0,
            locked: false
        }
    );
    let blend = coordinator.blend_state();
    assert_eq!(blend.get("technical"), Some(100.0));
    assert_eq!(blend.get("creative"), Some(30.0));
    assert_eq!(blend.get("personal"), Some(30.0));
    assert_eq!(blend.get("conceptual"), Some(30.0));
}

#[test]
fn shift_focus_applies_spotlight_reset() {
    let mut coordinator = coordinator();
    coordinator.set_blend("personal", 64.0).unwrap();

    let transition = coordinator.shift_focus(1).unwrap();

    assert_eq!(transition, FocusTransition::Shifted);
    assert_eq!(coordinator.focus_state().focused_index, 1);
    let blend = coordinator.blend_state();
    assert_eq!(blend.get("creative"), Some(100.0));
    for id in ["technical", "personal", "conceptual"] {
        assert_eq!(blend.get(id), Some(30.0), "{id}");
    }
}

#[test]
fn shift_focus_rejects_out_of_range_index_without_mutation() {
    let mut coordinator = coordinator();
    coordinator.set_blend("creative", 12.0).unwrap();
    let before_blend = coordinator.blend_state();
    let before_focus = coordinator.focus_state();

    let err = coordinator.shift_focus(4).unwrap_err();

    assert_eq!(err, CoordinatorError::IndexOutOfRange { index: 4, len: 4 });
    assert_eq!(coordinator.blend_state(), before_blend);
    assert_eq!(coordinator.focus_state(), before_focus);
}

#[test]
fn locked_focus_ignores_other_indices_and_unlocks_on_same_index() {
    let mut coordinator = coordinator();
    coordinator.shift_focus(1).unwrap();
    coordinator.set_blend("conceptual", 80.0).unwrap();
    assert!(coordinator.toggle_lock());
    let before = coordinator.blend_state();

    assert_eq!(coordinator.shift_focus(2).unwrap(), FocusTransition::Ignored);
    assert_eq!(
        coordinator.focus_state(),
        FocusState {
            focused_index: 1,
            locked: true
        }
    );
    assert_eq!(coordinator.blend_state(), before);

    assert_eq!(coordinator.shift_focus(1).unwrap(), FocusTransition::Unlocked);
    assert_eq!(
        coordinator.focus_state(),
        FocusState {
            focused_index: 1,
            locked: false
        }
    );
    assert_eq!(coordinator.blend_state(), before);

    assert_eq!(coordinator.shift_focus(2).unwrap(), FocusTransition::Shifted);
    assert_eq!(coordinator.focus_state().focused_index, 2);
}

#[test]
fn toggle_lock_twice_restores_flag_and_keeps_blend() {
    let mut coordinator = coordinator();
    coordinator.set_blend("personal", 55.5).unwrap();
    let before_blend = coordinator.blend_state();
    let before_focus = coordinator.focus_state();

    coordinator.toggle_lock();
    coordinator.toggle_lock();

    assert_eq!(coordinator.focus_state(), before_focus);
    assert_eq!(coordinator.blend_state(), before_blend);
}

#[test]
fn set_blend_clamps_and_touches_only_named_entry() {
    let mut coordinator = coordinator();

    assert_eq!(coordinator.set_blend("creative", 250.0).unwrap(), 100.0);
    assert_eq!(coordinator.set_blend("personal", -20.0).unwrap(), 0.0);
    assert_eq!(coordinator.set_blend("conceptual", f64::NAN).unwrap(), 0.0);
    assert_eq!(coordinator.set_blend("technical", 42.25).unwrap(), 42.25);

    let blend = coordinator.blend_state();
    assert_eq!(blend.get("creative"), Some(100.0));
    assert_eq!(blend.get("personal"), Some(0.0));
    assert_eq!(blend.get("conceptual"), Some(0.0));
    assert_eq!(blend.get("technical"), Some(42.25));
    assert_eq!(coordinator.focus_state().focused_index, 0);
    assert_weights_clamped(&coordinator);
}

#[test]
fn set_blend_rejects_unknown_reality() {
    let mut coordinator = coordinator();
    let before = coordinator.blend_state();

    let err = coordinator.set_blend("astral", 50.0).unwrap_err();

    assert_eq!(err, CoordinatorError::RealityNotFound("astral".to_string()));
    assert!(err.is_not_found());
    assert_eq!(coordinator.blend_state(), before);
}

#[test]
fn set_blend_is_allowed_while_locked() {
    let mut coordinator = coordinator();
    coordinator.toggle_lock();

    coordinator.set_blend("creative", 90.0).unwrap();

    assert_eq!(coordinator.blend_state().get("creative"), Some(90.0));
    assert!(coordinator.focus_state().locked);
}

#[test]
fn scrub_maps_positions_to_indices() {
    let cases = [(0.0, 0), (0.26, 1), (0.999, 3), (1.0, 3), (-0.5, 0), (3.0, 3)];
    for (position, expected) in cases {
        let mut coordinator = coordinator();
        coordinator.scrub(position);
        assert_eq!(
            coordinator.focus_state().focused_index,
            expected,
            "position {position}"
        );
    }
}

#[test]
fn scrub_follows_lock_semantics() {
    let mut coordinator = coordinator();
    coordinator.scrub(0.3);
    coordinator.toggle_lock();

    assert_eq!(coordinator.scrub(0.9), FocusTransition::Ignored);
    assert_eq!(coordinator.focus_state().focused_index, 1);

    assert_eq!(coordinator.scrub(0.4), FocusTransition::Unlocked);
    assert!(!coordinator.focus_state().locked);
}

#[test]
fn drag_sequence_leaves_last_applied_value() {
    let mut coordinator = coordinator();
    for step in [10.0, 35.0, 72.5, 140.0, 66.0] {
        coordinator.set_blend("personal", step).unwrap();
        assert_weights_clamped(&coordinator);
    }
    assert_eq!(coordinator.blend_state().get("personal"), Some(66.0));
}
