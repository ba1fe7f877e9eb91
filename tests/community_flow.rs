use crux_core::testing::AppTester;
use resonance_core::model::{AidKind, AidPostId, NotificationId, Panel, ToastKind, UserId};
use resonance_core::{App, CreateAidPostPayload, Effect, Event, Model};

#[test]
fn responding_to_aid_is_one_way_and_idempotent() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::AidResponded { aid_id: AidPostId::new("aid-2") },
        &mut model,
    );

    let post = &model.aid_posts[1];
    assert!(post.responded);
    let toast = model.active_toast.clone().expect("responding toasts");
    assert_eq!(toast.kind, ToastKind::Success);
    assert!(toast.message.contains("Jake Wilson"));
    assert!(toast.message.contains("Need help with Calculus II"));

    // Second response: still responded, no fresh toast.
    model.clear_toast();
    app.update(
        Event::AidResponded { aid_id: AidPostId::new("aid-2") },
        &mut model,
    );
    assert!(model.aid_posts[1].responded);
    assert!(model.active_toast.is_none());
}

#[test]
fn responding_to_an_unknown_post_is_a_silent_noop() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    let before = model.aid_posts.clone();

    app.update(
        Event::AidResponded { aid_id: AidPostId::new("aid-404") },
        &mut model,
    );

    assert_eq!(model.aid_posts, before);
    assert!(model.active_toast.is_none());
}

#[test]
fn created_aid_post_lands_first_and_opens_the_panel() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let payload = CreateAidPostPayload::new(
        AidKind::Need,
        "Looking for a running buddy",
        "Training for a 10k, would love company on morning runs.",
        "Sports",
        "🏃",
    )
    .expect("payload is valid");

    app.update(Event::CreateAidPostRequested(Box::new(payload)), &mut model);

    assert_eq!(model.active_panel, Some(Panel::Aid));
    assert_eq!(model.aid_posts.len(), 6);
    let post = &model.aid_posts[0];
    assert_eq!(post.author_name, "You");
    assert_eq!(post.kind, AidKind::Need);
    assert!(!post.responded);
    assert_eq!(post.distance_m, 0);
}

#[test]
fn connect_toggle_keeps_the_profile_card_in_agreement() {
    use crux_core::App as CruxApp;

    let app = AppTester::<App, Effect>::default();
    let core = App::default();
    let mut model = Model::default();

    app.update(
        Event::UserSelected { user_id: UserId::new("user-3") },
        &mut model,
    );
    app.update(
        Event::ConnectToggled { user_id: UserId::new("user-3") },
        &mut model,
    );

    let view = core.view(&model);
    let profile = view.selected_profile.expect("a user is selected");
    assert!(profile.connected);
    let pin = view
        .pins
        .iter()
        .find(|p| p.user_id == "user-3")
        .expect("selected user has a pin");
    assert_eq!(pin.connected, profile.connected);

    // Toggling back flips both views together.
    app.update(
        Event::ConnectToggled { user_id: UserId::new("user-3") },
        &mut model,
    );
    let view = core.view(&model);
    assert!(!view.selected_profile.expect("still selected").connected);
}

#[test]
fn connect_toggle_toasts_connect_and_disconnect() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::ConnectToggled { user_id: UserId::new("user-0") },
        &mut model,
    );
    let toast = model.active_toast.clone().expect("connect toasts");
    assert_eq!(toast.kind, ToastKind::Success);
    assert!(toast.message.contains("Connected with Sofia Chen"));

    app.update(
        Event::ConnectToggled { user_id: UserId::new("user-0") },
        &mut model,
    );
    let toast = model.active_toast.clone().expect("disconnect toasts");
    assert_eq!(toast.kind, ToastKind::Info);
    assert!(toast.message.contains("Disconnected from Sofia Chen"));
}

#[test]
fn marking_one_notification_read_leaves_the_rest_alone() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    assert_eq!(model.unread_count(), 3);

    app.update(
        Event::NotificationRead { id: NotificationId::new("notif-2") },
        &mut model,
    );

    assert!(!model.notifications[0].read);
    assert!(model.notifications[1].read);
    assert!(!model.notifications[2].read);
    assert_eq!(model.unread_count(), 2);

    // Idempotent on repeat.
    app.update(
        Event::NotificationRead { id: NotificationId::new("notif-2") },
        &mut model,
    );
    assert_eq!(model.unread_count(), 2);
}

#[test]
fn marking_an_unknown_notification_is_a_noop() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::NotificationRead { id: NotificationId::new("notif-404") },
        &mut model,
    );
    assert_eq!(model.unread_count(), 3);
}
