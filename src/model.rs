use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{get_current_time_ms, seed};

// --- Typed IDs ---

macro_rules! typed_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            #[must_use]
            pub fn random() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

typed_id!(UserId);
typed_id!(EventId);
typed_id!(AidPostId);
typed_id!(MessageId);
typed_id!(NotificationId);

// --- Domain enums replacing stringly-typed fields ---

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Studying,
    Busy,
    OpenToChat,
}

impl AvailabilityStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Studying => "Studying",
            Self::Busy => "Busy",
            Self::OpenToChat => "Open to Chat",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "available" => Some(Self::Available),
            "studying" => Some(Self::Studying),
            "busy" => Some(Self::Busy),
            "open-to-chat" | "open_to_chat" => Some(Self::OpenToChat),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Interest {
    pub name: String,
    pub category: String,
    pub level: SkillLevel,
    pub emoji: String,
}

/// Keeps the first occurrence of each interest name.
/// A user's interest list is unique by name.
#[must_use]
pub fn dedupe_interests(interests: Vec<Interest>) -> Vec<Interest> {
    let mut seen: Vec<String> = Vec::with_capacity(interests.len());
    interests
        .into_iter()
        .filter(|i| {
            if seen.iter().any(|n| n == &i.name) {
                false
            } else {
                seen.push(i.name.clone());
                true
            }
        })
        .collect()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CommunityUser {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
    pub university: String,
    pub bio: String,
    pub status: AvailabilityStatus,
    pub interests: Vec<Interest>,
    pub lat: f64,
    pub lng: f64,
    /// Pre-baked by the backend simulation; absent on the current user.
    pub distance_m: Option<u32>,
    pub connected: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MicroEvent {
    pub id: EventId,
    pub title: String,
    pub category: String,
    pub emoji: String,
    pub creator_name: String,
    pub lat: f64,
    pub lng: f64,
    pub spots_left: u32,
    pub total_spots: u32,
    pub ends_at_ms: u64,
    pub attendees: Vec<String>,
    pub rsvped: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AidKind {
    Offer,
    Need,
}

impl AidKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Offer => "Offering",
            Self::Need => "Needed",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AidPost {
    pub id: AidPostId,
    pub kind: AidKind,
    pub title: String,
    pub description: String,
    pub category: String,
    pub emoji: String,
    pub author_name: String,
    pub author_avatar: String,
    pub distance_m: u32,
    pub created_at_ms: u64,
    pub responded: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    Me,
    System,
    Peer(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: ChatSender,
    pub text: String,
    pub sent_at_ms: u64,
}

impl ChatMessage {
    #[must_use]
    pub fn me(text: impl Into<String>, now_ms: u64) -> Self {
        Self {
            id: MessageId::random(),
            sender: ChatSender::Me,
            text: text.into(),
            sent_at_ms: now_ms,
        }
    }

    #[must_use]
    pub fn system(text: impl Into<String>, now_ms: u64) -> Self {
        Self {
            id: MessageId::random(),
            sender: ChatSender::System,
            text: text.into(),
            sent_at_ms: now_ms,
        }
    }

    #[must_use]
    pub fn peer(name: impl Into<String>, text: impl Into<String>, now_ms: u64) -> Self {
        Self {
            id: MessageId::random(),
            sender: ChatSender::Peer(name.into()),
            text: text.into(),
            sent_at_ms: now_ms,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub text: String,
    pub time_label: String,
    pub read: bool,
}

// --- Panels ---

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Events,
    Aid,
    Dashboard,
    Profile,
    Chat,
    Notifications,
}

// --- Toasts ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn default_duration_ms(self) -> u64 {
        match self {
            Self::Info => 3000,
            Self::Success => 2000,
            Self::Warning => 4000,
            Self::Error => 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastMessage {
    pub message: String,
    pub kind: ToastKind,
    pub created_at_ms: u64,
    pub duration_ms: u64,
}

impl ToastMessage {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at_ms: get_current_time_ms(),
            duration_ms: kind.default_duration_ms(),
        }
    }

    #[must_use]
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at_ms) > self.duration_ms
    }
}

// --- Dashboard fixtures ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Champion {
    pub name: String,
    pub score: u32,
    pub avatar: String,
}

// --- Model ---

/// The single authoritative state container. Views hold no copies; they
/// receive snapshots through `App::view` and dispatch `Event`s back.
#[derive(Clone, Debug)]
pub struct Model {
    pub current_user: CommunityUser,
    pub nearby_users: Vec<CommunityUser>,
    pub events: Vec<MicroEvent>,
    pub aid_posts: Vec<AidPost>,
    pub notifications: Vec<Notification>,

    pub active_panel: Option<Panel>,
    /// Selection is an id reference into `nearby_users`, never a second copy.
    pub selected_user_id: Option<UserId>,
    pub search_query: String,

    pub chat_peer_id: Option<UserId>,
    pub chat_messages: Vec<ChatMessage>,

    pub connection_index: u8,
    pub helped_count: u32,
    pub weekly_trend: Vec<u32>,
    pub champions: Vec<Champion>,

    pub active_toast: Option<ToastMessage>,
    pub view_timestamp_ms: u64,
}

impl Default for Model {
    fn default() -> Self {
        let now_ms = get_current_time_ms();
        Self {
            current_user: seed::current_user(),
            nearby_users: seed::nearby_users(),
            events: seed::micro_events(now_ms),
            aid_posts: seed::aid_posts(now_ms),
            notifications: seed::notifications(),
            active_panel: None,
            selected_user_id: None,
            search_query: String::new(),
            chat_peer_id: None,
            chat_messages: Vec::new(),
            connection_index: seed::CONNECTION_INDEX,
            helped_count: seed::HELPED_COUNT,
            weekly_trend: seed::WEEKLY_TREND.to_vec(),
            champions: seed::champions(),
            active_toast: None,
            view_timestamp_ms: now_ms,
        }
    }
}

impl Model {
    pub fn update_timestamp(&mut self) {
        self.view_timestamp_ms = get_current_time_ms();
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.active_toast = Some(ToastMessage::new(message, kind));
    }

    pub fn clear_toast(&mut self) {
        self.active_toast = None;
    }

    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<&CommunityUser> {
        self.nearby_users.iter().find(|u| &u.id == id)
    }

    pub fn user_mut(&mut self, id: &UserId) -> Option<&mut CommunityUser> {
        self.nearby_users.iter_mut().find(|u| &u.id == id)
    }

    #[must_use]
    pub fn selected_user(&self) -> Option<&CommunityUser> {
        self.selected_user_id.as_ref().and_then(|id| self.user(id))
    }

    #[must_use]
    pub fn chat_peer(&self) -> Option<&CommunityUser> {
        self.chat_peer_id.as_ref().and_then(|id| self.user(id))
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Interests both the current user and the given user hold, by name,
    /// in the other user's interest order.
    #[must_use]
    pub fn shared_interest_names(&self, other: &CommunityUser) -> Vec<String> {
        other
            .interests
            .iter()
            .filter(|i| {
                self.current_user
                    .interests
                    .iter()
                    .any(|mine| mine.name == i.name)
            })
            .map(|i| i.name.clone())
            .collect()
    }

    pub fn push_chat_message(&mut self, message: ChatMessage) {
        self.chat_messages.push(message);
    }
}
