#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod capabilities;
pub mod event;
pub mod model;
pub mod seed;

use serde::{Deserialize, Serialize};

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use event::{CreateAidPostPayload, CreateEventPayload, Event, ValidationError};
pub use model::{
    AidKind, AidPost, AidPostId, AvailabilityStatus, ChatMessage, ChatSender, CommunityUser,
    EventId, Interest, MessageId, MicroEvent, Model, Notification, NotificationId, Panel,
    SkillLevel, ToastKind, ToastMessage, UserId,
};

/// Fixed delay before a simulated chat reply lands.
pub const REPLY_DELAY_MS: u64 = 1200;

/// Pool the simulated peer draws replies from, uniformly at random.
pub const SIMULATED_REPLIES: &[&str] = &[
    "Sounds good!",
    "Haha, totally",
    "I'm near the library if you want to meet up",
    "What time works for you?",
    "Let me check my schedule real quick",
    "That works for me 😄",
];

#[must_use]
pub fn get_current_time_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[must_use]
pub fn format_distance(meters: f64) -> String {
    if !meters.is_finite() || meters < 0.0 {
        return "Unknown".into();
    }
    if meters < 1000.0 {
        return format!("{} m", meters.round() as u64);
    }
    let km = meters / 1000.0;
    if km < 10.0 {
        format!("{km:.1} km")
    } else {
        format!("{} km", km.round() as u64)
    }
}

#[must_use]
pub fn format_time_ago(created_at_ms: u64, now_ms: u64) -> String {
    if created_at_ms > now_ms {
        return if created_at_ms - now_ms < 60_000 {
            "Just now".into()
        } else {
            "Upcoming".into()
        };
    }
    let delta = now_ms - created_at_ms;
    match delta {
        0..=4_999 => "Just now".into(),
        5_000..=59_999 => format!("{}s ago", delta / 1_000),
        60_000..=3_599_999 => format!("{}m ago", delta / 60_000),
        3_600_000..=86_399_999 => format!("{}h ago", delta / 3_600_000),
        86_400_000..=604_799_999 => format!("{}d ago", delta / 86_400_000),
        _ => format!("{}w ago", delta / 604_800_000),
    }
}

/// Hours until an event ends, rounded to one decimal, clamped at zero.
/// Matches what the event cards display.
#[must_use]
pub fn hours_left(ends_at_ms: u64, now_ms: u64) -> f64 {
    let remaining_ms = ends_at_ms.saturating_sub(now_ms) as f64;
    (remaining_ms / 3_600_000.0 * 10.0).round() / 10.0
}

// --- View model ---

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MapPin {
    pub user_id: String,
    pub name: String,
    pub avatar: String,
    pub lat: f64,
    pub lng: f64,
    pub status: AvailabilityStatus,
    pub status_label: String,
    pub connected: bool,
    pub is_me: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub emoji: String,
    pub creator_name: String,
    pub lat: f64,
    pub lng: f64,
    pub spots_left: u32,
    pub total_spots: u32,
    pub hours_left: f64,
    pub attendees: Vec<String>,
    pub rsvped: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AidCard {
    pub id: String,
    pub kind: AidKind,
    pub kind_label: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub emoji: String,
    pub author_name: String,
    pub author_avatar: String,
    pub distance_text: String,
    pub posted_ago: String,
    pub responded: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProfileCard {
    pub user_id: String,
    pub name: String,
    pub avatar: String,
    pub university: String,
    pub bio: String,
    pub status: AvailabilityStatus,
    pub status_label: String,
    pub interests: Vec<Interest>,
    pub distance_text: Option<String>,
    pub connected: bool,
    /// Interest names this user shares with the current user, in this
    /// user's interest order.
    pub shared_interests: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatMessageView {
    pub id: String,
    pub sender: ChatSender,
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatView {
    pub peer_id: String,
    pub peer_name: String,
    pub peer_avatar: String,
    pub peer_university: String,
    pub messages: Vec<ChatMessageView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrendBar {
    pub day: String,
    pub value: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChampionView {
    pub name: String,
    pub score: u32,
    pub avatar: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DashboardView {
    pub connection_index: u8,
    pub nearby_count: usize,
    pub event_count: usize,
    pub helped_count: u32,
    pub weekly_trend: Vec<TrendBar>,
    pub champions: Vec<ChampionView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NotificationView {
    pub id: String,
    pub text: String,
    pub time_label: String,
    pub read: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ToastView {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u64,
}

impl From<&ToastMessage> for ToastView {
    fn from(t: &ToastMessage) -> Self {
        Self {
            message: t.message.clone(),
            kind: t.kind,
            duration_ms: t.duration_ms,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub active_panel: Option<Panel>,
    pub search_query: String,
    pub current_status: AvailabilityStatus,
    pub current_status_label: String,
    pub pins: Vec<MapPin>,
    pub events: Vec<EventCard>,
    pub aid_posts: Vec<AidCard>,
    pub selected_profile: Option<ProfileCard>,
    pub chat: Option<ChatView>,
    pub dashboard: DashboardView,
    pub notifications: Vec<NotificationView>,
    pub unread_count: usize,
    pub toast: Option<ToastView>,
}

pub mod app {
    use super::*;
    use crate::model::{AidPostId, ChatMessage, EventId, MicroEvent, Panel, ToastKind, UserId};
    use crux_core::App as CruxApp;
    use rand::{Rng, SeedableRng};

    #[derive(Default)]
    pub struct App;

    impl App {
        fn toggle_panel(model: &mut Model, panel: Panel) {
            model.active_panel = if model.active_panel == Some(panel) {
                None
            } else {
                Some(panel)
            };
        }

        fn toggle_rsvp(model: &mut Model, event_id: &EventId) {
            let me = model.current_user.name.clone();
            let mut toast = None;
            if let Some(event) = model.events.iter_mut().find(|e| &e.id == event_id) {
                if event.rsvped {
                    event.rsvped = false;
                    event.spots_left = (event.spots_left + 1).min(event.total_spots);
                    event.attendees.retain(|name| name != &me);
                    toast = Some((format!("RSVP cancelled for {}", event.title), ToastKind::Info));
                } else if event.spots_left > 0 {
                    event.rsvped = true;
                    event.spots_left -= 1;
                    event.attendees.push(me);
                    toast = Some((format!("RSVP'd to {}", event.title), ToastKind::Success));
                }
                // No spots and not attending: leave the event untouched.
            }
            if let Some((message, kind)) = toast {
                model.show_toast(message, kind);
            }
        }

        fn toggle_connect(model: &mut Model, user_id: &UserId) {
            let mut toast = None;
            if let Some(user) = model.user_mut(user_id) {
                user.connected = !user.connected;
                toast = Some(if user.connected {
                    (format!("Connected with {}", user.name), ToastKind::Success)
                } else {
                    (format!("Disconnected from {}", user.name), ToastKind::Info)
                });
            }
            if let Some((message, kind)) = toast {
                model.show_toast(message, kind);
            }
        }

        fn respond_aid(model: &mut Model, aid_id: &AidPostId) {
            let mut toast = None;
            if let Some(post) = model
                .aid_posts
                .iter_mut()
                .find(|p| &p.id == aid_id && !p.responded)
            {
                post.responded = true;
                toast = Some(format!(
                    "Response sent to {} about \"{}\"",
                    post.author_name, post.title
                ));
            }
            if let Some(message) = toast {
                model.show_toast(message, ToastKind::Success);
            }
        }

        fn open_chat(model: &mut Model, user_id: UserId) {
            let Some(name) = model.user(&user_id).map(|u| u.name.clone()) else {
                return;
            };
            let now_ms = model.view_timestamp_ms;
            model.chat_peer_id = Some(user_id);
            model.chat_messages = vec![ChatMessage::system(
                format!("You started a conversation with {name}"),
                now_ms,
            )];
            model.selected_user_id = None;
            // Opening a chat always lands on the chat panel, no toggling.
            model.active_panel = Some(Panel::Chat);
        }

        fn build_pins(model: &Model) -> Vec<MapPin> {
            let mut pins = Vec::with_capacity(model.nearby_users.len() + 1);
            let me = &model.current_user;
            pins.push(MapPin {
                user_id: me.id.as_str().to_string(),
                name: me.name.clone(),
                avatar: me.avatar.clone(),
                lat: me.lat,
                lng: me.lng,
                status: me.status,
                status_label: me.status.label().to_string(),
                connected: false,
                is_me: true,
            });
            for user in &model.nearby_users {
                pins.push(MapPin {
                    user_id: user.id.as_str().to_string(),
                    name: user.name.clone(),
                    avatar: user.avatar.clone(),
                    lat: user.lat,
                    lng: user.lng,
                    status: user.status,
                    status_label: user.status.label().to_string(),
                    connected: user.connected,
                    is_me: false,
                });
            }
            pins
        }

        fn build_event_cards(model: &Model, now_ms: u64) -> Vec<EventCard> {
            model
                .events
                .iter()
                .map(|event| EventCard {
                    id: event.id.as_str().to_string(),
                    title: event.title.clone(),
                    category: event.category.clone(),
                    emoji: event.emoji.clone(),
                    creator_name: event.creator_name.clone(),
                    lat: event.lat,
                    lng: event.lng,
                    spots_left: event.spots_left,
                    total_spots: event.total_spots,
                    hours_left: hours_left(event.ends_at_ms, now_ms),
                    attendees: event.attendees.clone(),
                    rsvped: event.rsvped,
                })
                .collect()
        }

        fn build_aid_cards(model: &Model, now_ms: u64) -> Vec<AidCard> {
            model
                .aid_posts
                .iter()
                .map(|post| AidCard {
                    id: post.id.as_str().to_string(),
                    kind: post.kind,
                    kind_label: post.kind.label().to_string(),
                    title: post.title.clone(),
                    description: post.description.clone(),
                    category: post.category.clone(),
                    emoji: post.emoji.clone(),
                    author_name: post.author_name.clone(),
                    author_avatar: post.author_avatar.clone(),
                    distance_text: format_distance(f64::from(post.distance_m)),
                    posted_ago: format_time_ago(post.created_at_ms, now_ms),
                    responded: post.responded,
                })
                .collect()
        }

        fn build_profile(model: &Model) -> Option<ProfileCard> {
            let user = model.selected_user()?;
            Some(ProfileCard {
                user_id: user.id.as_str().to_string(),
                name: user.name.clone(),
                avatar: user.avatar.clone(),
                university: user.university.clone(),
                bio: user.bio.clone(),
                status: user.status,
                status_label: user.status.label().to_string(),
                interests: user.interests.clone(),
                distance_text: user.distance_m.map(|d| format_distance(f64::from(d))),
                connected: user.connected,
                shared_interests: model.shared_interest_names(user),
            })
        }

        fn build_chat(model: &Model) -> Option<ChatView> {
            let peer = model.chat_peer()?;
            Some(ChatView {
                peer_id: peer.id.as_str().to_string(),
                peer_name: peer.name.clone(),
                peer_avatar: peer.avatar.clone(),
                peer_university: peer.university.clone(),
                messages: model
                    .chat_messages
                    .iter()
                    .map(|m| ChatMessageView {
                        id: m.id.as_str().to_string(),
                        sender: m.sender.clone(),
                        text: m.text.clone(),
                    })
                    .collect(),
            })
        }

        fn build_dashboard(model: &Model) -> DashboardView {
            DashboardView {
                connection_index: model.connection_index,
                nearby_count: model.nearby_users.len(),
                event_count: model.events.len(),
                helped_count: model.helped_count,
                weekly_trend: model
                    .weekly_trend
                    .iter()
                    .zip(seed::TREND_DAYS.iter())
                    .map(|(value, day)| TrendBar {
                        day: (*day).to_string(),
                        value: *value,
                    })
                    .collect(),
                champions: model
                    .champions
                    .iter()
                    .map(|c| ChampionView {
                        name: c.name.clone(),
                        score: c.score,
                        avatar: c.avatar.clone(),
                    })
                    .collect(),
            }
        }
    }

    impl CruxApp for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            model.update_timestamp();
            tracing::debug!(event = event.name(), "handling event");

            match event {
                Event::Noop => {}

                Event::AppStarted => {
                    caps.render.render();
                }

                Event::PanelToggled { panel } => {
                    Self::toggle_panel(model, panel);
                    caps.render.render();
                }

                Event::UserSelected { user_id } => {
                    if model.user(&user_id).is_some() {
                        model.selected_user_id = Some(user_id);
                    }
                    caps.render.render();
                }

                Event::UserDeselected => {
                    model.selected_user_id = None;
                    caps.render.render();
                }

                Event::SearchQueryChanged { query } => {
                    model.search_query = query;
                    caps.render.render();
                }

                Event::StatusChanged { status } => {
                    model.current_user.status = status;
                    model.show_toast(
                        format!("Status set to {}", status.label()),
                        ToastKind::Success,
                    );
                    caps.render.render();
                }

                Event::ConnectToggled { user_id } => {
                    Self::toggle_connect(model, &user_id);
                    caps.render.render();
                }

                Event::EventRsvpToggled { event_id } => {
                    Self::toggle_rsvp(model, &event_id);
                    caps.render.render();
                }

                Event::CreateEventRequested(payload) => {
                    let event = MicroEvent {
                        id: EventId::random(),
                        title: payload.title,
                        category: payload.category,
                        emoji: payload.emoji,
                        creator_name: model.current_user.name.clone(),
                        lat: payload.lat,
                        lng: payload.lng,
                        spots_left: payload.total_spots,
                        total_spots: payload.total_spots,
                        ends_at_ms: payload.ends_at_ms,
                        attendees: Vec::new(),
                        rsvped: false,
                    };
                    model.events.insert(0, event);
                    model.active_panel = Some(Panel::Events);
                    model.show_toast("Event created", ToastKind::Success);
                    caps.render.render();
                }

                Event::AidResponded { aid_id } => {
                    Self::respond_aid(model, &aid_id);
                    caps.render.render();
                }

                Event::CreateAidPostRequested(payload) => {
                    let post = AidPost {
                        id: AidPostId::random(),
                        kind: payload.kind,
                        title: payload.title,
                        description: payload.description,
                        category: payload.category,
                        emoji: payload.emoji,
                        author_name: model.current_user.name.clone(),
                        author_avatar: model.current_user.avatar.clone(),
                        // Your own post sits where you are.
                        distance_m: 0,
                        created_at_ms: model.view_timestamp_ms,
                        responded: false,
                    };
                    let message = match post.kind {
                        AidKind::Offer => "Help offer posted",
                        AidKind::Need => "Help request posted",
                    };
                    model.aid_posts.insert(0, post);
                    model.active_panel = Some(Panel::Aid);
                    model.show_toast(message, ToastKind::Success);
                    caps.render.render();
                }

                Event::ChatOpened { user_id } => {
                    Self::open_chat(model, user_id);
                    caps.render.render();
                }

                Event::MessageSent { text } => {
                    let text = text.trim();
                    if text.is_empty() {
                        return;
                    }
                    let Some(peer_id) = model.chat_peer_id.clone() else {
                        return;
                    };
                    let now_ms = model.view_timestamp_ms;
                    model.push_chat_message(ChatMessage::me(text, now_ms));
                    caps.delay
                        .start(REPLY_DELAY_MS, Event::ReplyArrived { peer_id });
                    caps.render.render();
                }

                Event::ReplyArrived { peer_id } => {
                    // The timer is not cancellable; a reply scheduled for a
                    // conversation that has since moved on is dropped here.
                    if model.chat_peer_id.as_ref() != Some(&peer_id) {
                        tracing::warn!(peer = peer_id.as_str(), "discarding stale chat reply");
                        return;
                    }
                    let Some(name) = model.user(&peer_id).map(|u| u.name.clone()) else {
                        return;
                    };
                    let mut rng = rand::rngs::StdRng::from_entropy();
                    let text = SIMULATED_REPLIES[rng.gen_range(0..SIMULATED_REPLIES.len())];
                    let now_ms = model.view_timestamp_ms;
                    model.push_chat_message(ChatMessage::peer(name, text, now_ms));
                    caps.render.render();
                }

                Event::NotificationRead { id } => {
                    if let Some(notification) = model
                        .notifications
                        .iter_mut()
                        .find(|n| n.id == id && !n.read)
                    {
                        notification.read = true;
                    }
                    caps.render.render();
                }

                Event::ToastDismissed => {
                    model.clear_toast();
                    caps.render.render();
                }
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            let now_ms = model.view_timestamp_ms;

            ViewModel {
                active_panel: model.active_panel,
                search_query: model.search_query.clone(),
                current_status: model.current_user.status,
                current_status_label: model.current_user.status.label().to_string(),
                pins: Self::build_pins(model),
                events: Self::build_event_cards(model, now_ms),
                aid_posts: Self::build_aid_cards(model, now_ms),
                selected_profile: Self::build_profile(model),
                chat: Self::build_chat(model),
                dashboard: Self::build_dashboard(model),
                notifications: model
                    .notifications
                    .iter()
                    .map(|n| NotificationView {
                        id: n.id.as_str().to_string(),
                        text: n.text.clone(),
                        time_label: n.time_label.clone(),
                        read: n.read,
                    })
                    .collect(),
                unread_count: model.unread_count(),
                toast: model.active_toast.as_ref().map(ToastView::from),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod format_tests {
        use super::*;

        #[test]
        fn test_format_distance_meters() {
            assert_eq!(format_distance(0.0), "0 m");
            assert_eq!(format_distance(500.0), "500 m");
            assert_eq!(format_distance(999.0), "999 m");
        }

        #[test]
        fn test_format_distance_kilometers() {
            assert_eq!(format_distance(1000.0), "1.0 km");
            assert_eq!(format_distance(1500.0), "1.5 km");
            assert_eq!(format_distance(15000.0), "15 km");
        }

        #[test]
        fn test_format_distance_invalid() {
            assert_eq!(format_distance(f64::NAN), "Unknown");
            assert_eq!(format_distance(f64::INFINITY), "Unknown");
            assert_eq!(format_distance(-100.0), "Unknown");
        }

        #[test]
        fn test_format_time_ago_buckets() {
            assert_eq!(format_time_ago(1000, 1004), "Just now");
            assert_eq!(format_time_ago(0, 10_000), "10s ago");
            assert_eq!(format_time_ago(0, 300_000), "5m ago");
            assert_eq!(format_time_ago(0, 7_200_000), "2h ago");
            assert_eq!(format_time_ago(0, 172_800_000), "2d ago");
            assert_eq!(format_time_ago(0, 2_419_200_000), "4w ago");
        }

        #[test]
        fn test_format_time_ago_future() {
            assert_eq!(format_time_ago(2000, 1000), "Just now");
            assert_eq!(format_time_ago(120_000, 1000), "Upcoming");
        }
    }

    mod hours_left_tests {
        use super::*;

        #[test]
        fn rounds_to_one_decimal() {
            // 1h30m -> 1.5, 100min -> 1.7
            assert!((hours_left(5_400_000, 0) - 1.5).abs() < f64::EPSILON);
            assert!((hours_left(6_000_000, 0) - 1.7).abs() < f64::EPSILON);
        }

        #[test]
        fn past_events_clamp_to_zero() {
            assert!((hours_left(1_000, 2_000_000) - 0.0).abs() < f64::EPSILON);
        }
    }

    mod reply_pool_tests {
        use super::*;

        #[test]
        fn pool_is_never_empty() {
            assert!(!SIMULATED_REPLIES.is_empty());
        }
    }

    mod view_model_tests {
        use super::*;
        use crux_core::App as CruxApp;

        #[test]
        fn view_model_serializes() {
            let app = App::default();
            let model = Model::default();
            let view = app.view(&model);
            let json = serde_json::to_string(&view).expect("view model is serializable");
            assert!(json.contains("connection_index"));
        }

        #[test]
        fn pins_lead_with_current_user() {
            let app = App::default();
            let model = Model::default();
            let view = app.view(&model);
            assert_eq!(view.pins.len(), model.nearby_users.len() + 1);
            assert!(view.pins[0].is_me);
            assert_eq!(view.pins[0].user_id, "me");
        }

        #[test]
        fn dashboard_reflects_seeded_fixtures() {
            let app = App::default();
            let model = Model::default();
            let view = app.view(&model);
            assert_eq!(view.dashboard.connection_index, 73);
            assert_eq!(view.dashboard.nearby_count, 12);
            assert_eq!(view.dashboard.event_count, 3);
            assert_eq!(view.dashboard.helped_count, 24);
            assert_eq!(view.dashboard.weekly_trend.len(), 7);
            assert_eq!(view.dashboard.weekly_trend[0].day, "Mon");
            assert_eq!(view.dashboard.champions[0].name, "Aarav Sharma");
        }
    }
}
