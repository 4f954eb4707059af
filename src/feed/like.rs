//! Like toggles for community feed items.
//!
//! Like state is ephemeral and view-local. [`FeedState`] keys it by post id and
//! creates it from the post's baseline counter whenever a post becomes visible,
//! so a post that is filtered out and back in starts over.

use std::collections::HashMap;

use crate::domain::{Post, RecordId};

/// Like flag and counter of one feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub count: i64,
}

impl LikeState {
    /// Unliked state starting from a baseline counter.
    #[must_use]
    pub const fn new(count: i64) -> Self {
        Self { liked: false, count }
    }

    /// Flips the flag and moves the counter by one in the matching direction.
    ///
    /// ```
    /// use devhub::feed::LikeState;
    ///
    /// let liked = LikeState::new(10).toggle();
    /// assert_eq!((liked.liked, liked.count), (true, 11));
    /// assert_eq!(liked.toggle(), LikeState::new(10));
    /// ```
    #[must_use]
    pub const fn toggle(self) -> Self {
        if self.liked {
            Self {
                liked: false,
                count: self.count - 1,
            }
        } else {
            Self {
                liked: true,
                count: self.count + 1,
            }
        }
    }
}

/// Per-post like state owned by the feed container.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    baselines: HashMap<RecordId, i64>,
    likes: HashMap<RecordId, LikeState>,
}

impl FeedState {
    /// Creates fresh like state for every post, all of them visible.
    #[must_use]
    pub fn new(posts: &[Post]) -> Self {
        let baselines: HashMap<RecordId, i64> = posts.iter().map(|p| (p.id, p.likes)).collect();
        let likes = baselines
            .iter()
            .map(|(&id, &count)| (id, LikeState::new(count)))
            .collect();
        Self { baselines, likes }
    }

    /// Aligns the state with the set of visible post ids.
    ///
    /// Posts that left the view lose their state; posts that entered it start
    /// again from their baseline.
    pub fn sync_visible(&mut self, visible: &[RecordId]) {
        self.likes.retain(|id, _| visible.contains(id));
        for id in visible {
            if let Some(&baseline) = self.baselines.get(id) {
                self.likes.entry(*id).or_insert_with(|| LikeState::new(baseline));
            }
        }
    }

    /// Toggles the like on a visible post. Returns the new state, or `None` if
    /// the post is not visible.
    pub fn toggle_like(&mut self, id: RecordId) -> Option<LikeState> {
        let state = self.likes.get_mut(&id)?;
        *state = state.toggle();
        tracing::debug!(post_id = id, liked = state.liked, count = state.count, "like toggled");
        Some(*state)
    }

    #[must_use]
    pub fn like_state(&self, id: RecordId) -> Option<LikeState> {
        self.likes.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    fn feed() -> (Vec<Post>, FeedState) {
        let posts = Catalog::embedded().unwrap().posts().to_vec();
        let state = FeedState::new(&posts);
        (posts, state)
    }

    #[test]
    fn toggles_conserve_the_baseline() {
        let (posts, mut state) = feed();
        let post = &posts[0];
        for n in 1..=5_i64 {
            let like = state.toggle_like(post.id).unwrap();
            let expected = if n % 2 == 1 { post.likes + 1 } else { post.likes };
            assert_eq!(like.count, expected);
            assert_eq!(like.liked, n % 2 == 1);
        }
    }

    #[test]
    fn items_are_independent() {
        let (posts, mut state) = feed();
        state.toggle_like(posts[0].id);
        assert_eq!(state.like_state(posts[1].id), Some(LikeState::new(posts[1].likes)));
    }

    #[test]
    fn hidden_posts_reset_when_shown_again() {
        let (posts, mut state) = feed();
        let id = posts[1].id;
        state.toggle_like(id);

        state.sync_visible(&[posts[0].id]);
        assert_eq!(state.like_state(id), None);
        assert_eq!(state.toggle_like(id), None);

        state.sync_visible(&[posts[0].id, id]);
        assert_eq!(state.like_state(id), Some(LikeState::new(posts[1].likes)));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let (_, mut state) = feed();
        state.sync_visible(&[999]);
        assert_eq!(state.like_state(999), None);
    }
}
