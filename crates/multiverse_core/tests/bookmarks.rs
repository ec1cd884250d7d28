use multiverse_core::{Coordinator, CoordinatorError, RealityRegistry};

fn coordinator() -> Coordinator {
    Coordinator::new(RealityRegistry::builtin())
}

#[test]
fn bookmark_round_trip_restores_blend_and_focus_exactly() {
    let mut coordinator = coordinator();
    coordinator.shift_focus(2).unwrap();
    coordinator.set_blend("creative", 61.37).unwrap();
    let saved_blend = coordinator.blend_state();
    let saved_focus = coordinator.focus_state().focused_index;

    let id = coordinator.bookmark(None);

    coordinator.shift_focus(3).unwrap();
    coordinator.set_blend("technical", 3.0).unwrap();
    coordinator.set_blend("personal", 99.9).unwrap();

    coordinator.load_bookmark(id).unwrap();

    assert_eq!(coordinator.blend_state(), saved_blend);
    assert_eq!(coordinator.focus_state().focused_index, saved_focus);
}

#[test]
fn bookmark_snapshot_is_isolated_from_later_set_blend() {
    let mut coordinator = coordinator();
    let id = coordinator.bookmark(Some("baseline"));
    let snapshot_before = coordinator.get_bookmark(id).unwrap().blend_snapshot().clone();

    coordinator.set_blend("technical", 0.0).unwrap();
    coordinator.set_blend("creative", 100.0).unwrap();

    let bookmark = coordinator.get_bookmark(id).unwrap();
    assert_eq!(bookmark.blend_snapshot(), &snapshot_before);
    assert_eq!(bookmark.blend_snapshot().get("technical"), Some(100.0));
}

#[test]
fn loaded_state_is_isolated_from_stored_snapshot() {
    let mut coordinator = coordinator();
    let id = coordinator.bookmark(None);

    coordinator.load_bookmark(id).unwrap();
    coordinator.set_blend("technical", 1.0).unwrap();

    let bookmark = coordinator.get_bookmark(id).unwrap();
    assert_eq!(bookmark.blend_snapshot().get("technical"), Some(100.0));
}

#[test]
fn bookmark_names_default_to_configuration_count() {
    let mut coordinator = coordinator();

    coordinator.bookmark(None);
    coordinator.bookmark(Some("  Deep focus  "));
    coordinator.bookmark(Some("   "));

    let names = coordinator
        .bookmarks()
        .into_iter()
        .map(|summary| summary.name)
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["Configuration 1", "Deep focus", "Configuration 3"]
    );
}

#[test]
fn bookmarks_accumulate_in_creation_order_with_increasing_ids() {
    let mut coordinator = coordinator();
    let ids = (0..5)
        .map(|index| {
            coordinator.shift_focus(index % 4).unwrap();
            coordinator.bookmark(None)
        })
        .collect::<Vec<_>>();

    let listed = coordinator
        .bookmarks()
        .into_iter()
        .map(|summary| summary.id)
        .collect::<Vec<_>>();
    assert_eq!(listed, ids);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn load_bookmark_keeps_lock_flag() {
    let mut coordinator = coordinator();
    coordinator.shift_focus(3).unwrap();
    let id = coordinator.bookmark(None);
    coordinator.shift_focus(0).unwrap();
    coordinator.toggle_lock();

    coordinator.load_bookmark(id).unwrap();

    let focus = coordinator.focus_state();
    assert_eq!(focus.focused_index, 3);
    assert!(focus.locked);
}

#[test]
fn load_unknown_bookmark_fails_without_mutation() {
    let mut coordinator = coordinator();
    coordinator.set_blend("personal", 12.0).unwrap();
    let before = coordinator.blend_state();

    let err = coordinator.load_bookmark(42).unwrap_err();

    assert_eq!(err, CoordinatorError::BookmarkNotFound(42));
    assert!(err.is_not_found());
    assert_eq!(coordinator.blend_state(), before);
}

#[test]
fn delete_bookmark_removes_entry_and_never_reuses_id() {
    let mut coordinator = coordinator();
    let first = coordinator.bookmark(None);
    let second = coordinator.bookmark(None);

    coordinator.delete_bookmark(first).unwrap();
    let third = coordinator.bookmark(None);

    let listed = coordinator
        .bookmarks()
        .into_iter()
        .map(|summary| (summary.id, summary.name))
        .collect::<Vec<_>>();
    assert_eq!(
        listed,
        vec![
            (second, "Configuration 2".to_string()),
            (third, "Configuration 2".to_string()),
        ]
    );
    assert!(third > second);
    assert_eq!(
        coordinator.delete_bookmark(first),
        Err(CoordinatorError::BookmarkNotFound(first))
    );
}

#[test]
fn bookmark_summary_reports_dominant_reality() {
    let mut coordinator = coordinator();
    coordinator.shift_focus(1).unwrap();
    coordinator.bookmark(None);

    coordinator.set_blend("technical", 0.0).unwrap();
    coordinator.set_blend("creative", 0.0).unwrap();
    coordinator.set_blend("personal", 0.0).unwrap();
    coordinator.set_blend("conceptual", 0.0).unwrap();
    coordinator.bookmark(None);

    let summaries = coordinator.bookmarks();
    assert_eq!(summaries[0].dominant_reality.as_deref(), Some("creative"));
    assert_eq!(summaries[0].focused_index, 1);
    assert_eq!(summaries[1].dominant_reality, None);
    assert!(summaries[0].created_at_ms > 0);
}
