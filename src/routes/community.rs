use std::str::FromStr;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use strum::VariantArray;
use time::OffsetDateTime;

use diabetcare_community::{Post, PostId};
use diabetcare_shared::PostCategory;

use crate::error::AppError;
use crate::routes::AppState;
use crate::template::{Template, filters};

pub struct PostView {
    pub id: PostId,
    pub author: String,
    pub initial: String,
    pub content: String,
    pub category: String,
    pub likes: u32,
    pub posted_at: OffsetDateTime,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            author: post.author.clone(),
            initial: post.author.chars().next().unwrap_or('?').to_string(),
            content: post.content.clone(),
            category: post.category.to_string(),
            likes: post.likes,
            posted_at: post.posted_at,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "community.html")]
pub struct CommunityTemplate {
    pub current_path: String,
    pub categories: Vec<String>,
    pub posts: Vec<PostView>,
    pub error: Option<String>,
}

impl CommunityTemplate {
    fn for_posts(posts: Vec<PostView>, error: Option<String>) -> Self {
        Self {
            current_path: "community".to_owned(),
            categories: PostCategory::VARIANTS.iter().map(|c| c.to_string()).collect(),
            posts,
            error,
        }
    }
}

fn feed(app: &AppState) -> Vec<PostView> {
    let board = app.board.read().expect("community board lock poisoned");
    board.posts().iter().map(PostView::from).collect()
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(CommunityTemplate::for_posts(feed(&app), None))
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: String,
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> Response {
    let category = PostCategory::from_str(&input.category).unwrap_or_default();

    let outcome = {
        let mut board = app.board.write().expect("community board lock poisoned");
        board.post(&input.author, &input.content, category).map(|p| p.id)
    };

    match outcome {
        Ok(id) => {
            tracing::debug!(post = id, "community post published");
            Redirect::to("/community").into_response()
        }
        Err(err) => {
            let mut response =
                template.render(CommunityTemplate::for_posts(feed(&app), Some(err.to_string())));
            *response.status_mut() = StatusCode::UNPROCESSABLE_ENTITY;
            response
        }
    }
}

pub async fn like(
    State(app): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Redirect, AppError> {
    let likes = {
        let mut board = app.board.write().expect("community board lock poisoned");
        board.like(id)?
    };

    tracing::debug!(post = id, likes, "community post liked");
    Ok(Redirect::to("/community"))
}
