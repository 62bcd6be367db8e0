//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ArticleFilter, ArticlePatch, ArticleRepository, CommentRepository, FollowRepository,
    NewArticle, NewComment, NewUser, Page, RepoResult, TagRepository, UserPatch, UserRepository,
};
