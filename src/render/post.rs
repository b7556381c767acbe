use super::comments::CommentsView;
use crate::blog::Post;
use maud::{html, Markup, Render};

/// A single post. Comments are only shown when the post is being viewed on
/// its own.
#[derive(Debug)]
pub struct PostView<'a, C: ?Sized> {
    pub post: &'a Post,
    pub logged_in_user: Option<&'a str>,
    pub single_post: bool,
    pub comments: &'a C,
}

impl<C: CommentsView + ?Sized> Render for PostView<'_, C> {
    fn render(&self) -> Markup {
        let post = self.post;

        html! {
            section class="content" {
                a href=(post.link()) {
                    h1 class="title" { (post.title) }
                }
                p { (post.username) }
                @if let Some(category) = post.category() {
                    p { "Category: " (category) }
                }
                p { (post.content) }
            }
            @if self.single_post {
                section class="content" {
                    (self.comments.render_comments(
                        &post.comments,
                        post.show_add_comment(self.logged_in_user),
                    ))
                }
            }
        }
    }
}
