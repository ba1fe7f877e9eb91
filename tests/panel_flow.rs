use crux_core::testing::AppTester;
use resonance_core::model::{AvailabilityStatus, Panel, ToastKind, UserId};
use resonance_core::{App, Effect, Event, Model};

#[test]
fn toggling_the_same_panel_closes_it() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    assert_eq!(model.active_panel, None);

    let update = app.update(Event::PanelToggled { panel: Panel::Events }, &mut model);
    assert_eq!(model.active_panel, Some(Panel::Events));
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));

    app.update(Event::PanelToggled { panel: Panel::Events }, &mut model);
    assert_eq!(model.active_panel, None);
}

#[test]
fn toggling_a_different_panel_switches() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::PanelToggled { panel: Panel::Events }, &mut model);
    app.update(Event::PanelToggled { panel: Panel::Dashboard }, &mut model);
    assert_eq!(model.active_panel, Some(Panel::Dashboard));
}

#[test]
fn selection_is_plain_replace() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::UserSelected { user_id: UserId::new("user-2") },
        &mut model,
    );
    assert_eq!(model.selected_user_id, Some(UserId::new("user-2")));

    app.update(
        Event::UserSelected { user_id: UserId::new("user-5") },
        &mut model,
    );
    assert_eq!(model.selected_user_id, Some(UserId::new("user-5")));

    app.update(Event::UserDeselected, &mut model);
    assert_eq!(model.selected_user_id, None);
}

#[test]
fn selecting_an_unknown_user_is_a_noop() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::UserSelected { user_id: UserId::new("user-99") },
        &mut model,
    );
    assert_eq!(model.selected_user_id, None);
}

#[test]
fn search_query_replaces_without_side_effects() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::SearchQueryChanged { query: "guitar".into() },
        &mut model,
    );
    assert_eq!(model.search_query, "guitar");
    assert!(model.active_toast.is_none());
}

#[test]
fn status_change_updates_current_user_and_toasts() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::StatusChanged { status: AvailabilityStatus::Studying },
        &mut model,
    );
    assert_eq!(model.current_user.status, AvailabilityStatus::Studying);

    let toast = model.active_toast.as_ref().expect("status change toasts");
    assert_eq!(toast.kind, ToastKind::Success);
    assert!(toast.message.contains("Studying"));

    app.update(Event::ToastDismissed, &mut model);
    assert!(model.active_toast.is_none());
}
