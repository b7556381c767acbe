use super::comments::CommentsView;
use super::post::PostView;
use crate::blog::Post;
use maud::{html, Markup, Render};

/// Which posts a listing shows, and whether it counts as a single post view
#[derive(Debug, PartialEq, Eq)]
pub struct Selection<'a> {
    pub posts: Vec<&'a Post>,
    pub single_post: bool,
}

/// With a selected id only matching posts are kept and the view is always a
/// single post view, even when nothing matches. Without one every post is
/// kept.
pub fn select<'a>(posts: &'a [Post], selected: Option<&str>) -> Selection<'a> {
    match selected {
        Some(post_id) => Selection {
            posts: posts.iter().filter(|post| post.id == post_id).collect(),
            single_post: true,
        },
        None => Selection {
            posts: posts.iter().collect(),
            single_post: posts.len() == 1,
        },
    }
}

#[derive(Debug)]
pub struct PostListView<'a, C: ?Sized> {
    pub posts: &'a [Post],
    pub selected: Option<&'a str>,
    pub logged_in_user: Option<&'a str>,
    pub comments: &'a C,
}

impl<C: CommentsView + ?Sized> Render for PostListView<'_, C> {
    fn render(&self) -> Markup {
        let selection = select(self.posts, self.selected);

        html! {
            div {
                @for post in selection.posts.iter().copied() {
                    (PostView {
                        post,
                        logged_in_user: self.logged_in_user,
                        single_post: selection.single_post,
                        comments: self.comments,
                    })
                }
            }
        }
    }
}
