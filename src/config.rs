use envconfig::Envconfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Envconfig)]
pub struct Config {
    #[envconfig(from = "BLOG_STORE_PATH", default = "./store")]
    pub store_path: PathBuf,

    #[envconfig(from = "BLOG_BIND_ADDRESS", default = "0.0.0.0:8010")]
    pub bind_address: SocketAddr,

    /// Shown in page titles
    #[envconfig(from = "BLOG_NAME", default = "Blog")]
    pub blog_name: String,

    #[envconfig(from = "BLOG_CACHE_TTL_SECS", default = "60")]
    pub cache_ttl_secs: u64,
}

impl Config {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
