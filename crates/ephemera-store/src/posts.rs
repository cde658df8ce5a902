use ephemera_types::models::{Post, Stats};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::Store;
use crate::error::{Result, StoreError};
use crate::feed;

impl Store {
    // -- Feed --

    pub fn create_post(&self, author: &str, content: &str) -> Post {
        let now = self.now();
        let expires_at = now + self.post_lifetime;

        let post = self.with_state(|state| {
            let post = Post {
                id: state.next_post_id,
                username: author.to_string(),
                content: content.to_string(),
                timestamp: now,
                expires_at,
                reactions: IndexMap::new(),
                reactions_count: 0,
                comments: Vec::new(),
                views: 0,
            };
            state.next_post_id += 1;
            state.posts.push(post.clone());
            post
        });

        info!("Post {} created by {}", post.id, author);
        post
    }

    /// Posts that have not expired, most engaging first.
    pub fn active_posts(&self) -> Vec<Post> {
        let now = self.now();
        self.with_state(|state| feed::active_feed(&state.posts, now))
    }

    /// Look up any stored post, expired or not.
    pub fn post(&self, id: u64) -> Option<Post> {
        self.with_state(|state| state.posts.iter().find(|p| p.id == id).cloned())
    }

    /// Set `username`'s single reaction on a post. Expired posts still
    /// accept reactions.
    pub fn react(&self, id: u64, username: &str, emoji: &str) -> Result<Post> {
        let post = self.with_post_mut(id, |post| {
            feed::apply_reaction(post, username, emoji);
            post.clone()
        })?;

        debug!("{} reacted {} on post {}", username, emoji, id);
        Ok(post)
    }

    /// Append a comment. Expired posts still accept comments.
    pub fn comment(&self, id: u64, username: &str, content: &str) -> Result<Post> {
        let now = self.now();
        let post = self.with_post_mut(id, |post| {
            feed::append_comment(post, username, content, now);
            post.clone()
        })?;

        debug!("{} commented on post {}", username, id);
        Ok(post)
    }

    pub fn stats(&self) -> Stats {
        let now = self.now();
        self.with_state(|state| {
            let active = state.posts.iter().filter(|p| feed::is_active(p, now));

            let mut stats = Stats {
                total_posts: 0,
                total_reactions: 0,
                total_comments: 0,
                total_users: state.users.len(),
            };
            for post in active {
                stats.total_posts += 1;
                stats.total_reactions += post.reactions_count;
                stats.total_comments += post.comments.len();
            }
            stats
        })
    }

    fn with_post_mut<F, T>(&self, id: u64, f: F) -> Result<T>
    where
        F: FnOnce(&mut Post) -> T,
    {
        self.with_state(|state| {
            state
                .posts
                .iter_mut()
                .find(|p| p.id == id)
                .map(f)
                .ok_or(StoreError::PostNotFound(id))
        })
    }
}
