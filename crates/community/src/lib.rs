//! In-memory community message board.
//!
//! The board is an explicit state container with exactly two transitions,
//! [`Board::post`] and [`Board::like`]. It lives for the lifetime of the
//! process and is lost on restart by design; there is no persistence and no
//! per-user like de-duplication. The web layer wraps it in a lock, but the
//! board itself is plain synchronous state so the transitions stay trivially
//! testable.

use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;

use diabetcare_shared::PostCategory;

pub type PostId = u64;

#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub content: String,
    pub category: PostCategory,
    pub likes: u32,
    #[serde(with = "time::serde::timestamp")]
    pub posted_at: OffsetDateTime,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("author must not be empty")]
    EmptyAuthor,

    #[error("content must not be empty")]
    EmptyContent,

    #[error("post {0} not found")]
    PostNotFound(PostId),
}

/// Newest-first feed of community posts.
#[derive(Default)]
pub struct Board {
    posts: Vec<Post>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// A board pre-filled with the demo conversation shown on a fresh
    /// deployment.
    pub fn seeded() -> Self {
        let mut board = Self::new();
        let now = OffsetDateTime::now_utc();
        let seeds = [
            (
                "Sarah M.",
                "Just wanted to share that I've been using the meal planner for 2 weeks now and my blood sugar levels have been much more stable! The recipes are actually delicious too. Thank you for this amazing resource!",
                PostCategory::SuccessStory,
                12u32,
                time::Duration::hours(2),
            ),
            (
                "Mike R.",
                "Does anyone have tips for managing blood sugar during travel? I have a business trip coming up and I'm worried about maintaining my routine.",
                PostCategory::Question,
                3,
                time::Duration::hours(5),
            ),
            (
                "Jennifer L.",
                "The Greek Yogurt Berry Bowl has become my go-to breakfast! I add some chopped walnuts for extra protein. My morning readings have improved significantly.",
                PostCategory::RecipeShare,
                8,
                time::Duration::days(1),
            ),
            (
                "David K.",
                "Remember everyone - small changes make a big difference. I started with just swapping white rice for quinoa and it's helped so much. Don't try to change everything at once!",
                PostCategory::Motivation,
                15,
                time::Duration::days(2),
            ),
        ];

        // Oldest first so ids and feed order come out like organic posting.
        for (author, content, category, likes, age) in seeds.iter().rev() {
            let post = board
                .post(author, content, *category)
                .expect("seed posts are non-empty");
            let id = post.id;
            if let Some(post) = board.posts.iter_mut().find(|p| p.id == id) {
                post.likes = *likes;
                post.posted_at = now - *age;
            }
        }

        board
    }

    /// Append a new post at the front of the feed with zero likes.
    ///
    /// Ids are assigned as current length + 1; since the board has no delete
    /// transition this never collides.
    pub fn post(
        &mut self,
        author: &str,
        content: &str,
        category: PostCategory,
    ) -> Result<&Post, BoardError> {
        let author = author.trim();
        let content = content.trim();
        if author.is_empty() {
            return Err(BoardError::EmptyAuthor);
        }
        if content.is_empty() {
            return Err(BoardError::EmptyContent);
        }

        let post = Post {
            id: self.posts.len() as PostId + 1,
            author: author.to_owned(),
            content: content.to_owned(),
            category,
            likes: 0,
            posted_at: OffsetDateTime::now_utc(),
        };
        self.posts.insert(0, post);

        Ok(&self.posts[0])
    }

    /// Increment the like count of `id` by exactly one and return the new
    /// count. Unknown ids are an explicit error, not a crash.
    pub fn like(&mut self, id: PostId) -> Result<u32, BoardError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BoardError::PostNotFound(id))?;

        post.likes += 1;
        Ok(post.likes)
    }

    /// Posts in feed order, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
