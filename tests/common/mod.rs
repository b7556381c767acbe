//! Shared helpers for the integration tests

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use blog_render::blog::{Comment, Post};
use blog_render::config::Config;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestBlog {
    // kept alive for the duration of the test
    pub dir: tempfile::TempDir,
    pub state: Arc<blog_render::state::State>,
}

impl TestBlog {
    pub fn new(posts: &[Post]) -> TestBlog {
        TestBlog::with_cache_ttl(posts, 0)
    }

    pub fn with_cache_ttl(posts: &[Post], cache_ttl_secs: u64) -> TestBlog {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("post")).unwrap();
        for post in posts {
            std::fs::write(
                dir.path().join("post").join(format!("{}.json", post.id)),
                serde_json::to_vec(post).unwrap(),
            )
            .unwrap();
        }

        let config = Config {
            store_path: dir.path().to_path_buf(),
            bind_address: ([127, 0, 0, 1], 0).into(),
            blog_name: "Test Blog".to_string(),
            cache_ttl_secs,
        };

        TestBlog {
            dir,
            state: Arc::new(blog_render::state::State::new(config)),
        }
    }

    /// Writes `post` to `{file_stem}.json`
    pub fn write_post_file(&self, file_stem: &str, post: &Post) {
        std::fs::write(
            self.dir.path().join("post").join(format!("{file_stem}.json")),
            serde_json::to_vec(post).unwrap(),
        )
        .unwrap();
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = blog_render::app(self.state.clone())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}

pub fn post(id: &str, username: &str, timestamp: &str) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Post {id}"),
        username: username.to_string(),
        content: format!("Words about {id}"),
        category: None,
        comments: Vec::new(),
        timestamp: Some(timestamp.parse().unwrap()),
    }
}

pub fn comment(username: &str, text: &str) -> Comment {
    Comment {
        username: username.to_string(),
        comment: text.to_string(),
    }
}

/// Three posts, `first` being the oldest. `second` is bob's and has a comment.
pub fn three_posts() -> Vec<Post> {
    let first = post("first", "alice", "2023-01-01T00:00:00Z");
    let mut second = post("second", "bob", "2023-02-01T00:00:00Z");
    second.category = Some("travel".to_string());
    second.comments = vec![comment("alice", "Lovely trip")];
    let third = post("third", "alice", "2023-03-01T00:00:00Z");

    vec![first, second, third]
}
