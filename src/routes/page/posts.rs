use super::Viewer;
use crate::blog::PostID;
use crate::render::{CommentList, Page, PostListView};
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use maud::Render;

pub(super) async fn list(
    State(state): SharedState,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Html<String>, StatusCode> {
    render_posts(&state, None, &Viewer::from_query(query)).await
}

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Html<String>, StatusCode> {
    render_posts(&state, Some(&post_id), &Viewer::from_query(query)).await
}

async fn render_posts(
    state: &crate::state::State,
    selected: Option<&str>,
    viewer: &Viewer,
) -> Result<Html<String>, StatusCode> {
    let posts = match state.posts.all().await {
        Ok(it) => it,
        Err(err) => {
            tracing::error!("Error loading posts: {err}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let blog_name = &state.config.blog_name;
    let title = match selected.and_then(|post_id| posts.iter().find(|post| post.id == post_id)) {
        Some(post) => format!("{} | {blog_name}", post.title),
        None => blog_name.clone(),
    };

    let body = PostListView {
        posts: posts.as_slice(),
        selected,
        logged_in_user: viewer.logged_in_user(),
        comments: &CommentList,
    }
    .render();

    Ok(Html(
        Page {
            title: &title,
            body,
        }
        .render()
        .into_string(),
    ))
}
