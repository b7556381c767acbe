use crate::blog::{Post, PostID};
use crate::state::SharedState;
use crate::store::StoreError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub(super) async fn list(State(state): SharedState) -> Result<Json<Vec<Post>>, StatusCode> {
    match state.posts.all().await {
        Ok(posts) => Ok(Json(posts.to_vec())),
        Err(err) => {
            tracing::error!("Error loading posts: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
) -> Result<Json<Post>, StatusCode> {
    match state.posts.get(&post_id).await {
        Ok(Some(post)) => Ok(Json(post)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(StoreError::InvalidId(_)) => Err(StatusCode::BAD_REQUEST),
        Err(err) => {
            tracing::error!("Error reading post {post_id}: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
