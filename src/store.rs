use crate::blog::{Post, PostID};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse post file {path:?}: {source}")]
    Deserialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("post file {path:?} holds post {id}")]
    IdMismatch { path: PathBuf, id: PostID },
    #[error("invalid post id {0:?}")]
    InvalidId(String),
}

/// Posts stored one per file as `{store}/post/{id}.json`
#[derive(Debug)]
pub struct PostStore {
    post_dir: PathBuf,
    cache_ttl: Duration,
    cache: RwLock<Option<CachedPosts>>,
    missing_dir_reported: AtomicBool,
}

#[derive(Debug)]
struct CachedPosts {
    posts: Arc<Vec<Post>>,
    loaded_at: Instant,
}

impl PostStore {
    pub fn new(store_path: impl AsRef<Path>, cache_ttl: Duration) -> PostStore {
        PostStore {
            post_dir: store_path.as_ref().join("post"),
            cache_ttl,
            cache: RwLock::new(None),
            missing_dir_reported: AtomicBool::new(false),
        }
    }

    /// Every post, newest first
    pub async fn all(&self) -> Result<Arc<Vec<Post>>, StoreError> {
        if let Some(posts) = self.fresh(self.cache.read().await.as_ref()) {
            return Ok(posts);
        }

        let mut cache = self.cache.write().await;
        // another request may have refreshed it while this one waited for the lock
        if let Some(posts) = self.fresh(cache.as_ref()) {
            return Ok(posts);
        }

        let posts = Arc::new(self.load_all().await?);
        tracing::debug!(count = posts.len(), "refreshed post listing");

        *cache = Some(CachedPosts {
            posts: posts.clone(),
            loaded_at: Instant::now(),
        });

        Ok(posts)
    }

    /// `Ok(None)` if there is no post with that id. Answers from the same
    /// listing as `all`, so both always agree on which posts exist.
    pub async fn get(&self, post_id: &str) -> Result<Option<Post>, StoreError> {
        if !crate::blog::is_valid_post_id(post_id) {
            return Err(StoreError::InvalidId(post_id.to_string()));
        }

        Ok(self
            .all()
            .await?
            .iter()
            .find(|post| post.id == post_id)
            .cloned())
    }

    fn fresh(&self, cached: Option<&CachedPosts>) -> Option<Arc<Vec<Post>>> {
        cached
            .filter(|cached| cached.loaded_at.elapsed() < self.cache_ttl)
            .map(|cached| cached.posts.clone())
    }

    async fn load_all(&self) -> Result<Vec<Post>, StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.post_dir.clone(),
            source,
        };

        let mut entries = match tokio::fs::read_dir(&self.post_dir).await {
            Ok(it) => it,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                if self.missing_dir_reported.swap(true, Ordering::Relaxed) {
                    tracing::debug!("Post folder {:?} does not exist yet", self.post_dir);
                } else {
                    tracing::warn!("Post folder {:?} does not exist yet", self.post_dir);
                }
                return Ok(Vec::new());
            }
            Err(err) => return Err(io_error(err)),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut posts = Vec::with_capacity(paths.len());
        for path in paths {
            let post = read_post(&path).await?;
            if path.file_stem().and_then(|stem| stem.to_str()) != Some(post.id.as_str()) {
                return Err(StoreError::IdMismatch { path, id: post.id });
            }
            posts.push(post);
        }

        crate::blog::sort_newest_first(&mut posts);
        Ok(posts)
    }
}

async fn read_post(path: &Path) -> Result<Post, StoreError> {
    let file = tokio::fs::read(path).await.map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&file).map_err(|source| StoreError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}
