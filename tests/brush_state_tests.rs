use brushchart_rs::brush::{BrushPhase, BrushState, SelectionBounds};

#[test]
fn starts_unselected_with_no_bounds() {
    let state = BrushState::default();
    assert_eq!(state.phase(), BrushPhase::Unselected);
    assert_eq!(state.selection(), None);
    assert_eq!(state.pending(), None);
}

#[test]
fn pointer_down_enters_selecting_with_a_degenerate_rectangle() {
    let mut state = BrushState::default();
    state.on_pointer_down(150.0, 30.0);

    assert_eq!(state.phase(), BrushPhase::Selecting);
    assert_eq!(
        state.pending(),
        Some(SelectionBounds::new(150.0, 150.0, 30.0, 30.0))
    );
    assert_eq!(state.selection(), None);
}

#[test]
fn dragging_updates_pending_bounds_continuously() {
    let mut state = BrushState::default();
    state.on_pointer_down(150.0, 30.0);
    state.on_pointer_move(200.0, 10.0);
    assert_eq!(
        state.pending(),
        Some(SelectionBounds::new(150.0, 200.0, 10.0, 30.0))
    );

    state.on_pointer_move(120.0, 45.0);
    assert_eq!(
        state.pending(),
        Some(SelectionBounds::new(120.0, 150.0, 30.0, 45.0))
    );
}

#[test]
fn drag_direction_does_not_invert_committed_bounds() {
    let mut state = BrushState::default();
    state.on_pointer_down(300.0, 50.0);
    state.on_pointer_move(100.0, 5.0);

    let committed = state.on_pointer_up().expect("committed bounds");
    assert_eq!(committed, SelectionBounds::new(100.0, 300.0, 5.0, 50.0));
}

#[test]
fn pointer_up_commits_and_freezes_the_selection() {
    let mut state = BrushState::default();
    state.on_pointer_down(100.0, 0.0);
    state.on_pointer_move(200.0, 30.0);

    let committed = state.on_pointer_up().expect("committed bounds");
    assert_eq!(state.phase(), BrushPhase::Selected);
    assert_eq!(state.selection(), Some(committed));

    // Movement after commit leaves the frozen selection alone.
    state.on_pointer_move(500.0, 99.0);
    assert_eq!(state.selection(), Some(committed));
}

#[test]
fn pointer_up_without_pointer_down_is_a_no_op() {
    let mut state = BrushState::default();
    assert_eq!(state.on_pointer_up(), None);
    assert_eq!(state.phase(), BrushPhase::Unselected);
}

#[test]
fn clear_resets_from_any_phase() {
    let mut state = BrushState::default();
    state.on_pointer_down(100.0, 0.0);
    state.on_clear();
    assert_eq!(state.phase(), BrushPhase::Unselected);
    assert_eq!(state.pending(), None);

    state.on_pointer_down(100.0, 0.0);
    state.on_pointer_move(200.0, 30.0);
    state.on_pointer_up();
    state.on_clear();
    assert_eq!(state.phase(), BrushPhase::Unselected);
    assert_eq!(state.selection(), None);
}

#[test]
fn the_cycle_repeats_after_a_committed_selection() {
    let mut state = BrushState::default();
    state.on_pointer_down(100.0, 0.0);
    state.on_pointer_move(200.0, 30.0);
    state.on_pointer_up();

    state.on_pointer_down(250.0, 10.0);
    assert_eq!(state.phase(), BrushPhase::Selecting);
    state.on_pointer_move(280.0, 40.0);

    let committed = state.on_pointer_up().expect("second selection");
    assert_eq!(committed, SelectionBounds::new(250.0, 280.0, 10.0, 40.0));
}
