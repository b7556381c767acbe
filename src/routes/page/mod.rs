use crate::state::NestedRouter;
use axum::routing::get;

mod posts;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", get(posts::list))
        .route("/posts", get(posts::list))
        .route("/posts/:id", get(posts::get))
}

/// Who is looking at the page. Sessions are handled in front of this server,
/// which passes the logged in username along as `?user=`.
#[derive(Debug, Default)]
pub struct Viewer {
    pub user: Option<String>,
}

impl Viewer {
    /// The first `user` wins if it is repeated
    pub fn from_query(query: Vec<(String, String)>) -> Viewer {
        Viewer {
            user: query
                .into_iter()
                .find(|(key, _)| key == "user")
                .map(|(_, user)| user),
        }
    }

    pub fn logged_in_user(&self) -> Option<&str> {
        self.user.as_deref().filter(|user| !user.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn first_user_wins() {
        let viewer = Viewer::from_query(query(&[("user", "bob"), ("user", "alice")]));

        assert_eq!(viewer.logged_in_user(), Some("bob"));
    }

    #[test]
    fn empty_or_missing_user_is_anonymous() {
        assert_eq!(Viewer::from_query(query(&[])).logged_in_user(), None);
        assert_eq!(
            Viewer::from_query(query(&[("user", ""), ("user", "bob")])).logged_in_user(),
            None
        );
        assert_eq!(
            Viewer::from_query(query(&[("theme", "dark")])).logged_in_user(),
            None
        );
    }
}
