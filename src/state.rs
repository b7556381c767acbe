use crate::config::Config;
use crate::store::PostStore;
use std::sync::Arc;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub posts: PostStore,
}

impl State {
    pub fn new(config: Config) -> State {
        State {
            posts: PostStore::new(&config.store_path, config.cache_ttl()),
            config,
        }
    }
}
