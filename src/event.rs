use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    AidKind, AidPostId, AvailabilityStatus, EventId, NotificationId, Panel, UserId,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("an event needs at least one spot")]
    NoSpots,
}

/// Already-validated input for `Event::CreateEventRequested`.
///
/// The store trusts its callers; the constructor is where that trust is
/// earned.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateEventPayload {
    pub title: String,
    pub category: String,
    pub emoji: String,
    pub lat: f64,
    pub lng: f64,
    pub total_spots: u32,
    pub ends_at_ms: u64,
}

impl CreateEventPayload {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        emoji: impl Into<String>,
        lat: f64,
        lng: f64,
        total_spots: u32,
        ends_at_ms: u64,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if total_spots == 0 {
            return Err(ValidationError::NoSpots);
        }
        Ok(Self {
            title,
            category: category.into(),
            emoji: emoji.into(),
            lat,
            lng,
            total_spots,
            ends_at_ms,
        })
    }
}

/// Already-validated input for `Event::CreateAidPostRequested`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateAidPostPayload {
    pub kind: AidKind,
    pub title: String,
    pub description: String,
    pub category: String,
    pub emoji: String,
}

impl CreateAidPostPayload {
    pub fn new(
        kind: AidKind,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Self {
            kind,
            title,
            description,
            category: category.into(),
            emoji: emoji.into(),
        })
    }
}

// --- Event enum: large payloads boxed to keep the enum small ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    Noop,

    AppStarted,

    // Panels & selection
    PanelToggled {
        panel: Panel,
    },
    UserSelected {
        user_id: UserId,
    },
    UserDeselected,
    SearchQueryChanged {
        query: String,
    },

    // Current user
    StatusChanged {
        status: AvailabilityStatus,
    },

    // Community
    ConnectToggled {
        user_id: UserId,
    },
    EventRsvpToggled {
        event_id: EventId,
    },
    CreateEventRequested(Box<CreateEventPayload>),
    AidResponded {
        aid_id: AidPostId,
    },
    CreateAidPostRequested(Box<CreateAidPostPayload>),

    // Chat
    ChatOpened {
        user_id: UserId,
    },
    MessageSent {
        text: String,
    },
    /// Fired by the shell when a scheduled reply delay elapses. Carries the
    /// peer the reply was scheduled for, captured at send time.
    ReplyArrived {
        peer_id: UserId,
    },

    // Notifications & toasts
    NotificationRead {
        id: NotificationId,
    },
    ToastDismissed,
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::AppStarted => "app_started",
            Self::PanelToggled { .. } => "panel_toggled",
            Self::UserSelected { .. } => "user_selected",
            Self::UserDeselected => "user_deselected",
            Self::SearchQueryChanged { .. } => "search_query_changed",
            Self::StatusChanged { .. } => "status_changed",
            Self::ConnectToggled { .. } => "connect_toggled",
            Self::EventRsvpToggled { .. } => "event_rsvp_toggled",
            Self::CreateEventRequested(_) => "create_event_requested",
            Self::AidResponded { .. } => "aid_responded",
            Self::CreateAidPostRequested(_) => "create_aid_post_requested",
            Self::ChatOpened { .. } => "chat_opened",
            Self::MessageSent { .. } => "message_sent",
            Self::ReplyArrived { .. } => "reply_arrived",
            Self::NotificationRead { .. } => "notification_read",
            Self::ToastDismissed => "toast_dismissed",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        !matches!(self, Self::Noop | Self::AppStarted | Self::ReplyArrived { .. })
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::Noop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_size_is_reasonable() {
        // Boxing the create payloads keeps the enum small.
        let size = std::mem::size_of::<Event>();
        assert!(
            size <= 64,
            "Event enum is {} bytes — too large, box more variants",
            size
        );
    }

    #[test]
    fn event_payload_rejects_blank_title() {
        let err = CreateEventPayload::new("  ", "Study", "📚", 0.0, 0.0, 5, 0);
        assert_eq!(err, Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn event_payload_rejects_zero_spots() {
        let err = CreateEventPayload::new("Study session", "Study", "📚", 0.0, 0.0, 0, 0);
        assert_eq!(err, Err(ValidationError::NoSpots));
    }

    #[test]
    fn event_payload_trims_title() {
        let payload =
            CreateEventPayload::new("  Study session  ", "Study", "📚", 0.0, 0.0, 5, 0).unwrap();
        assert_eq!(payload.title, "Study session");
    }

    #[test]
    fn aid_payload_requires_description() {
        let err = CreateAidPostPayload::new(AidKind::Offer, "Tutoring", "   ", "Tech", "🐍");
        assert_eq!(err, Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn reply_arrival_is_not_user_initiated() {
        assert!(!Event::ReplyArrived { peer_id: UserId::new("u") }.is_user_initiated());
        assert!(Event::UserDeselected.is_user_initiated());
    }
}
