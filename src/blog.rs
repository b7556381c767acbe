use serde::{Deserialize, Serialize};

pub type PostID = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(alias = "_id")]
    pub id: PostID,
    pub title: String,
    /// Username of the author
    pub username: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    // in the order they were made
    #[serde(default)]
    pub comments: Vec<Comment>,

    #[serde(default)]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

/// Passed through to the comments view untouched; post rendering never looks
/// inside one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub comment: String,
}

impl Post {
    pub fn link(&self) -> String {
        format!("/posts/{}", urlencoding::encode(&self.id))
    }

    /// The category, if there is one worth showing
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty())
    }

    /// Authors can't comment on their own posts. Anonymous viewers never match
    /// an author.
    pub fn show_add_comment(&self, logged_in_user: Option<&str>) -> bool {
        logged_in_user != Some(self.username.as_str())
    }
}

pub fn is_valid_post_id(post_id: &str) -> bool {
    static POST_ID_PATTERN: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();

    let post_id_pattern = POST_ID_PATTERN.get_or_init(|| {
        regex::Regex::new(r"^[a-zA-Z0-9_-]+$").expect("constant pattern should parse")
    });

    post_id_pattern.is_match(post_id)
}

/// Newest first. Undated posts go last and otherwise keep their order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[cfg(test)]
pub(crate) fn test_post(id: &str, username: &str) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Title {id}"),
        username: username.to_string(),
        content: format!("Content {id}"),
        category: None,
        comments: Vec::new(),
        timestamp: None,
    }
}
