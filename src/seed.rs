//! Fixture data standing in for a backend. Regenerated fresh on every
//! process start; nothing here survives a reload.
//!
//! Seeding is deterministic so tests can rely on exact contents.

use crate::model::{
    dedupe_interests, AidKind, AidPost, AidPostId, AvailabilityStatus, Champion, CommunityUser,
    EventId, Interest, MicroEvent, Notification, NotificationId, SkillLevel, UserId,
};

// Center around a university campus (MIT area).
pub const CENTER_LAT: f64 = 42.3601;
pub const CENTER_LNG: f64 = -71.0942;

pub const CONNECTION_INDEX: u8 = 73;
pub const HELPED_COUNT: u32 = 24;
pub const WEEKLY_TREND: [u32; 7] = [62, 58, 67, 71, 69, 73, 73];
pub const TREND_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MINUTE_MS: u64 = 60_000;
const HOUR_MS: u64 = 3_600_000;

const INTEREST_CATALOG: [(&str, &str, SkillLevel, &str); 12] = [
    ("Photography", "Creative", SkillLevel::Advanced, "📸"),
    ("Python", "Tech", SkillLevel::Expert, "🐍"),
    ("Running", "Sports", SkillLevel::Intermediate, "🏃"),
    ("Guitar", "Creative", SkillLevel::Beginner, "🎸"),
    ("Machine Learning", "Tech", SkillLevel::Advanced, "🤖"),
    ("Yoga", "Wellness", SkillLevel::Intermediate, "🧘"),
    ("Spanish", "Languages", SkillLevel::Beginner, "🇪🇸"),
    ("Calculus", "Academic", SkillLevel::Advanced, "📐"),
    ("Writing", "Creative", SkillLevel::Expert, "✍️"),
    ("Basketball", "Sports", SkillLevel::Intermediate, "🏀"),
    ("React", "Tech", SkillLevel::Expert, "⚛️"),
    ("Meditation", "Wellness", SkillLevel::Beginner, "🧠"),
];

const NAMES: [&str; 12] = [
    "Sofia Chen",
    "Marcus Johnson",
    "Aisha Patel",
    "Jake Wilson",
    "Luna Garcia",
    "Kai Nakamura",
    "Priya Sharma",
    "Omar Hassan",
    "Zara Kim",
    "Leo Torres",
    "Mia Rivera",
    "Noah Zhang",
];

const UNIVERSITIES: [&str; 6] = [
    "MIT",
    "Harvard",
    "Boston University",
    "Northeastern",
    "Tufts",
    "Wellesley",
];

const STATUS_CYCLE: [AvailabilityStatus; 4] = [
    AvailabilityStatus::Available,
    AvailabilityStatus::Studying,
    AvailabilityStatus::OpenToChat,
    AvailabilityStatus::Busy,
];

const BIOS: [&str; 12] = [
    "CS major who loves late-night coding sessions ☕",
    "Art history nerd exploring the intersection of tech & creativity",
    "Aspiring data scientist, always down for study groups",
    "Transfer student looking to meet new people!",
    "Grad student, coffee enthusiast, amateur photographer",
    "Freshman finding my people 🌱",
    "Math tutor by day, guitar player by night 🎶",
    "International student from Seoul, love trying new foods",
    "Pre-med but secretly want to be a writer",
    "Engineering major who runs 5ks for fun",
    "Philosophy major contemplating existence over coffee",
    "Film student, always looking for collaborators",
];

fn avatar_url(avatar_seed: &str) -> String {
    format!("https://api.dicebear.com/9.x/adventurer/svg?seed={avatar_seed}")
}

fn first_name(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}

#[must_use]
pub fn interest_catalog() -> Vec<Interest> {
    INTEREST_CATALOG
        .iter()
        .map(|(name, category, level, emoji)| Interest {
            name: (*name).to_string(),
            category: (*category).to_string(),
            level: *level,
            emoji: (*emoji).to_string(),
        })
        .collect()
}

#[must_use]
pub fn current_user() -> CommunityUser {
    let catalog = interest_catalog();
    CommunityUser {
        id: UserId::new("me"),
        name: "You".into(),
        avatar: avatar_url("CurrentUser"),
        university: "MIT".into(),
        bio: "Just joined ResonanceMap!".into(),
        status: AvailabilityStatus::Available,
        interests: vec![catalog[0].clone(), catalog[4].clone(), catalog[2].clone()],
        lat: CENTER_LAT,
        lng: CENTER_LNG,
        distance_m: None,
        connected: false,
    }
}

// Small deterministic jitter standing in for real positions.
fn coord_offset(i: usize, stride: usize) -> f64 {
    (((i * stride) % 15) as f64 - 7.0) * 0.001
}

#[must_use]
pub fn nearby_users() -> Vec<CommunityUser> {
    let catalog = interest_catalog();
    NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let count = 3 + i % 3;
            // Stride 5 is coprime with the catalog size, so picks stay unique.
            let interests = dedupe_interests(
                (0..count)
                    .map(|k| catalog[(i + k * 5) % catalog.len()].clone())
                    .collect(),
            );
            CommunityUser {
                id: UserId::new(format!("user-{i}")),
                name: (*name).to_string(),
                avatar: avatar_url(first_name(name)),
                university: UNIVERSITIES[i % UNIVERSITIES.len()].to_string(),
                bio: BIOS[i].to_string(),
                status: STATUS_CYCLE[i % STATUS_CYCLE.len()],
                interests,
                lat: CENTER_LAT + coord_offset(i, 7),
                lng: CENTER_LNG + coord_offset(i, 11),
                distance_m: Some(100 + (i as u32 * 397) % 2000),
                connected: false,
            }
        })
        .collect()
}

#[must_use]
pub fn micro_events(now_ms: u64) -> Vec<MicroEvent> {
    vec![
        MicroEvent {
            id: EventId::new("event-1"),
            title: "☕ Study session at Blue Bottle".into(),
            category: "Study".into(),
            emoji: "📚".into(),
            creator_name: "Sofia Chen".into(),
            lat: CENTER_LAT + 0.002,
            lng: CENTER_LNG - 0.003,
            spots_left: 3,
            total_spots: 5,
            ends_at_ms: now_ms + 2 * HOUR_MS,
            attendees: vec!["Marcus Johnson".into()],
            rsvped: false,
        },
        MicroEvent {
            id: EventId::new("event-2"),
            title: "🏃 Morning jog around the Charles".into(),
            category: "Sports".into(),
            emoji: "🏃".into(),
            creator_name: "Jake Wilson".into(),
            lat: CENTER_LAT - 0.004,
            lng: CENTER_LNG + 0.002,
            spots_left: 7,
            total_spots: 10,
            ends_at_ms: now_ms + HOUR_MS,
            attendees: vec!["Luna Garcia".into(), "Leo Torres".into()],
            rsvped: false,
        },
        MicroEvent {
            id: EventId::new("event-3"),
            title: "🎸 Open mic jam session".into(),
            category: "Creative".into(),
            emoji: "🎵".into(),
            creator_name: "Kai Nakamura".into(),
            lat: CENTER_LAT + 0.005,
            lng: CENTER_LNG + 0.004,
            spots_left: 4,
            total_spots: 8,
            ends_at_ms: now_ms + 3 * HOUR_MS,
            attendees: vec!["Priya Sharma".into()],
            rsvped: false,
        },
    ]
}

#[must_use]
pub fn aid_posts(now_ms: u64) -> Vec<AidPost> {
    vec![
        AidPost {
            id: AidPostId::new("aid-1"),
            kind: AidKind::Offer,
            title: "Python tutoring available".into(),
            description: "I have 2 free hours and love teaching Python basics. Happy to help \
                          with homework or projects!"
                .into(),
            category: "Tech".into(),
            emoji: "🐍".into(),
            author_name: "Sofia Chen".into(),
            author_avatar: avatar_url("Sofia"),
            distance_m: 300,
            created_at_ms: now_ms.saturating_sub(30 * MINUTE_MS),
            responded: false,
        },
        AidPost {
            id: AidPostId::new("aid-2"),
            kind: AidKind::Need,
            title: "Need help with Calculus II".into(),
            description: "Struggling with integration techniques. Would love a 1-on-1 session."
                .into(),
            category: "Academic".into(),
            emoji: "📐".into(),
            author_name: "Jake Wilson".into(),
            author_avatar: avatar_url("Jake"),
            distance_m: 500,
            created_at_ms: now_ms.saturating_sub(60 * MINUTE_MS),
            responded: false,
        },
        AidPost {
            id: AidPostId::new("aid-3"),
            kind: AidKind::Offer,
            title: "Free photography lessons".into(),
            description: "Got my DSLR and free afternoon. Want to learn composition basics?"
                .into(),
            category: "Creative".into(),
            emoji: "📸".into(),
            author_name: "Priya Sharma".into(),
            author_avatar: avatar_url("Priya"),
            distance_m: 800,
            created_at_ms: now_ms.saturating_sub(45 * MINUTE_MS),
            responded: false,
        },
        AidPost {
            id: AidPostId::new("aid-4"),
            kind: AidKind::Need,
            title: "Looking for Spanish practice partner".into(),
            description: "Intermediate level, want to practice conversational Spanish over \
                          coffee."
                .into(),
            category: "Languages".into(),
            emoji: "🇪🇸".into(),
            author_name: "Leo Torres".into(),
            author_avatar: avatar_url("Leo"),
            distance_m: 200,
            created_at_ms: now_ms.saturating_sub(20 * MINUTE_MS),
            responded: false,
        },
        AidPost {
            id: AidPostId::new("aid-5"),
            kind: AidKind::Offer,
            title: "Resume review for tech jobs".into(),
            description: "Senior CS student, interned at Google. Happy to review your resume!"
                .into(),
            category: "Career".into(),
            emoji: "💼".into(),
            author_name: "Marcus Johnson".into(),
            author_avatar: avatar_url("Marcus"),
            distance_m: 600,
            created_at_ms: now_ms.saturating_sub(90 * MINUTE_MS),
            responded: false,
        },
    ]
}

#[must_use]
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: NotificationId::new("notif-1"),
            text: "Sofia Chen RSVP'd to your study session".into(),
            time_label: "2m ago".into(),
            read: false,
        },
        Notification {
            id: NotificationId::new("notif-2"),
            text: "New aid post near you: Need help with Calculus II".into(),
            time_label: "1h ago".into(),
            read: false,
        },
        Notification {
            id: NotificationId::new("notif-3"),
            text: "Marcus Johnson wants to connect".into(),
            time_label: "3h ago".into(),
            read: false,
        },
    ]
}

#[must_use]
pub fn champions() -> Vec<Champion> {
    vec![
        Champion {
            name: "Aarav Sharma".into(),
            score: 142,
            avatar: avatar_url("Aarav"),
        },
        Champion {
            name: "Meera Patel".into(),
            score: 128,
            avatar: avatar_url("Meera"),
        },
        Champion {
            name: "Diya Iyer".into(),
            score: 115,
            avatar: avatar_url("Diya"),
        },
    ]
}
