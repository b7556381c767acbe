use crate::blog::Comment;
use maud::{html, Markup};

/// Renders the comments under a post shown on its own
pub trait CommentsView {
    fn render_comments(&self, comments: &[Comment], show_add_comment: bool) -> Markup;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CommentList;

impl CommentsView for CommentList {
    fn render_comments(&self, comments: &[Comment], show_add_comment: bool) -> Markup {
        html! {
            h2 class="subtitle" { "Comments" }
            @if comments.is_empty() {
                p class="no-comments" { "No comments yet" }
            } @else {
                ul class="comments" {
                    @for comment in comments {
                        li {
                            strong { (comment.username) }
                            ": "
                            (comment.comment)
                        }
                    }
                }
            }
            // submission is handled by whatever fronts the page
            @if show_add_comment {
                form class="add-comment" method="post" {
                    textarea name="comment" placeholder="Add a comment" {}
                    button type="submit" { "Add comment" }
                }
            }
        }
    }
}
