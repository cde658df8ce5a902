use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A registered account. Usernames are immutable keys, so nothing here
/// changes after registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Compared verbatim on login. Not hashed.
    pub password: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub profile_pic: Option<String>,
}

/// Single-letter avatar derived from the first character of a username.
pub fn profile_pic_for(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Public view of a user, as returned by `/api/current-user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub profile_pic: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Profile for a session whose username has no directory entry.
    pub fn unknown(username: &str) -> Self {
        Self {
            username: username.to_string(),
            email: String::new(),
            profile_pic: profile_pic_for(username),
            created_at: None,
        }
    }
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            profile_pic: user
                .profile_pic
                .clone()
                .unwrap_or_else(|| profile_pic_for(&user.username)),
            created_at: Some(user.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// 1-based position within the owning post.
    pub id: u64,
    pub username: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A short-lived post. Posts are never removed from the store; once
/// `expires_at` passes they are only hidden from feed reads and stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub username: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// emoji -> usernames holding that reaction. A username appears under
    /// at most one emoji.
    pub reactions: IndexMap<String, Vec<String>>,
    pub reactions_count: u64,
    pub comments: Vec<Comment>,
    /// Never incremented. Kept so clients reading the field keep working.
    pub views: u64,
}

/// Aggregate over the active feed, plus the registered user count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_posts: usize,
    pub total_reactions: u64,
    pub total_comments: usize,
    pub total_users: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_pic_is_uppercased_first_char() {
        assert_eq!(profile_pic_for("alice"), "A");
        assert_eq!(profile_pic_for("Žofia"), "Ž");
        assert_eq!(profile_pic_for(""), "");
    }

    #[test]
    fn profile_recomputes_missing_pic() {
        let user = User {
            username: "bob".into(),
            password: "hunter22".into(),
            email: "bob@example.com".into(),
            created_at: Utc::now(),
            profile_pic: None,
        };
        let profile = Profile::from(&user);
        assert_eq!(profile.profile_pic, "B");
        assert_eq!(profile.created_at, Some(user.created_at));
    }

    #[test]
    fn post_serializes_wire_field_names() {
        let now = Utc::now();
        let post = Post {
            id: 7,
            username: "alice".into(),
            content: "hi".into(),
            timestamp: now,
            expires_at: now,
            reactions: IndexMap::from([("👍".to_string(), vec!["bob".to_string()])]),
            reactions_count: 1,
            comments: vec![],
            views: 0,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["reactions"]["👍"][0], "bob");
        assert_eq!(json["reactions_count"], 1);
        assert_eq!(json["views"], 0);
        assert!(json["expires_at"].is_string());
    }

    #[test]
    fn reactions_serialize_in_insertion_order() {
        let now = Utc::now();
        let post = Post {
            id: 1,
            username: "alice".into(),
            content: String::new(),
            timestamp: now,
            expires_at: now,
            reactions: IndexMap::from([
                ("😮".to_string(), vec![]),
                ("👍".to_string(), vec!["bob".to_string()]),
            ]),
            reactions_count: 1,
            comments: vec![],
            views: 0,
        };
        let text = serde_json::to_string(&post).unwrap();
        let wow = text.find("😮").unwrap();
        let thumbs = text.find("👍").unwrap();
        assert!(wow < thumbs, "{text}");
    }

    #[test]
    fn unknown_profile_has_null_created_at() {
        let json = serde_json::to_value(Profile::unknown("ghost")).unwrap();
        assert_eq!(json["profile_pic"], "G");
        assert_eq!(json["email"], "");
        assert!(json["created_at"].is_null());
    }
}
