pub mod comments;
pub mod page;
pub mod post;
pub mod posts;

pub use comments::{CommentList, CommentsView};
pub use page::Page;
pub use post::PostView;
pub use posts::{select, PostListView, Selection};
