//! Expiry and ranking rules for the post feed.
//!
//! These are pure functions of the posts and the current instant; the
//! [`Store`](crate::Store) supplies both.

use chrono::{DateTime, Utc};
use ephemera_types::models::{Comment, Post};

/// A post is active while its expiry lies strictly in the future.
pub fn is_active(post: &Post, now: DateTime<Utc>) -> bool {
    post.expires_at > now
}

/// Total interactions on a post: reactions plus comments.
pub fn engagement(post: &Post) -> u64 {
    post.reactions_count + post.comments.len() as u64
}

/// Sort by engagement, then timestamp, both descending. The sort is stable,
/// so posts with equal keys keep their relative order.
pub fn rank(posts: &mut [Post]) {
    posts.sort_by(|a, b| (engagement(b), b.timestamp).cmp(&(engagement(a), a.timestamp)));
}

/// Active posts, ranked.
pub fn active_feed<'a, I>(posts: I, now: DateTime<Utc>) -> Vec<Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut active: Vec<Post> = posts
        .into_iter()
        .filter(|post| is_active(post, now))
        .cloned()
        .collect();
    rank(&mut active);
    active
}

/// Give `username` the `emoji` reaction, dropping whatever reaction they
/// held before. Reapplying the same emoji leaves the post unchanged.
pub fn apply_reaction(post: &mut Post, username: &str, emoji: &str) {
    post.reactions.entry(emoji.to_string()).or_default();

    for users in post.reactions.values_mut() {
        if let Some(pos) = users.iter().position(|u| u == username) {
            users.remove(pos);
            post.reactions_count -= 1;
        }
    }

    if let Some(users) = post.reactions.get_mut(emoji) {
        users.push(username.to_string());
        post.reactions_count += 1;
    }
}

/// Append a comment numbered after the existing ones.
pub fn append_comment(post: &mut Post, username: &str, content: &str, now: DateTime<Utc>) {
    let id = post.comments.len() as u64 + 1;
    post.comments.push(Comment {
        id,
        username: username.to_string(),
        content: content.to_string(),
        timestamp: now,
    });
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use indexmap::IndexMap;

    use super::*;

    fn post(id: u64, timestamp: DateTime<Utc>) -> Post {
        Post {
            id,
            username: "alice".into(),
            content: format!("post {id}"),
            timestamp,
            expires_at: timestamp + Duration::minutes(30),
            reactions: IndexMap::new(),
            reactions_count: 0,
            comments: Vec::new(),
            views: 0,
        }
    }

    fn reaction_sum(post: &Post) -> u64 {
        post.reactions.values().map(|u| u.len() as u64).sum()
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let p = post(1, now);
        assert!(is_active(&p, now));
        assert!(is_active(&p, p.expires_at - Duration::seconds(1)));
        assert!(!is_active(&p, p.expires_at));
        assert!(!is_active(&p, p.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn rank_prefers_engagement_then_recency() {
        let t0 = Utc::now();
        let old_busy = {
            let mut p = post(1, t0);
            apply_reaction(&mut p, "bob", "👍");
            append_comment(&mut p, "bob", "hey", t0);
            p
        };
        let new_quiet = post(2, t0 + Duration::minutes(1));
        let newer_quiet = post(3, t0 + Duration::minutes(2));
        let one_reaction = {
            let mut p = post(4, t0);
            apply_reaction(&mut p, "carol", "😂");
            p
        };

        let mut posts = vec![new_quiet, old_busy, one_reaction, newer_quiet];
        rank(&mut posts);
        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4, 3, 2]);
    }

    #[test]
    fn rank_keeps_insertion_order_on_full_ties() {
        let t0 = Utc::now();
        let mut posts = vec![post(1, t0), post(2, t0), post(3, t0)];
        rank(&mut posts);
        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn active_feed_drops_expired() {
        let t0 = Utc::now();
        let posts = vec![post(1, t0 - Duration::minutes(45)), post(2, t0)];
        let feed = active_feed(&posts, t0);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, 2);
    }

    #[test]
    fn reaction_switch_moves_user() {
        let mut p = post(1, Utc::now());
        apply_reaction(&mut p, "alice", "👍");
        apply_reaction(&mut p, "alice", "❤️");

        assert_eq!(p.reactions_count, 1);
        assert!(p.reactions["👍"].is_empty());
        assert_eq!(p.reactions["❤️"], vec!["alice".to_string()]);
    }

    #[test]
    fn same_reaction_twice_is_idempotent() {
        let mut p = post(1, Utc::now());
        apply_reaction(&mut p, "alice", "👍");
        apply_reaction(&mut p, "alice", "👍");

        assert_eq!(p.reactions_count, 1);
        assert_eq!(p.reactions["👍"], vec!["alice".to_string()]);
    }

    #[test]
    fn reaction_count_matches_sets_after_mixed_sequence() {
        let mut p = post(1, Utc::now());
        let moves = [
            ("alice", "👍"),
            ("bob", "👍"),
            ("carol", "😮"),
            ("alice", "😢"),
            ("bob", "👍"),
            ("carol", "👍"),
            ("dave", "😡"),
            ("alice", "😢"),
        ];
        for (user, emoji) in moves {
            apply_reaction(&mut p, user, emoji);
            assert_eq!(p.reactions_count, reaction_sum(&p));
        }
        assert_eq!(p.reactions_count, 4);
        assert_eq!(p.reactions["👍"], vec!["bob".to_string(), "carol".to_string()]);
        assert!(p.reactions["😮"].is_empty());
    }

    #[test]
    fn emoji_keys_keep_first_reaction_order() {
        let mut p = post(1, Utc::now());
        apply_reaction(&mut p, "alice", "😮");
        apply_reaction(&mut p, "bob", "👍");
        apply_reaction(&mut p, "alice", "👍");

        let keys: Vec<&str> = p.reactions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["😮", "👍"]);
    }

    #[test]
    fn comments_are_numbered_sequentially() {
        let now = Utc::now();
        let mut p = post(1, now);
        append_comment(&mut p, "bob", "first", now);
        append_comment(&mut p, "carol", "", now);

        let ids: Vec<u64> = p.comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(p.comments[1].username, "carol");
        assert_eq!(engagement(&p), 2);
    }
}
