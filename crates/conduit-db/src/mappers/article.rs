//! Article model <-> entity mappers

use conduit_core::entities::{Article, ArticleView, Profile};

use crate::models::{ArticleModel, ArticleViewModel};

impl From<ArticleModel> for Article {
    fn from(model: ArticleModel) -> Self {
        Article {
            id: model.id,
            slug: model.slug,
            title: model.title,
            description: model.description,
            body: model.body,
            author_id: model.author_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl ArticleViewModel {
    /// Assemble the hydrated view once the tag list has been loaded
    pub fn into_view(self, tag_list: Vec<String>) -> ArticleView {
        ArticleView {
            article: Article {
                id: self.id,
                slug: self.slug,
                title: self.title,
                description: self.description,
                body: self.body,
                author_id: self.author_id,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author: Profile {
                username: self.author_username,
                bio: self.author_bio,
                image: self.author_image,
                following: self.following,
            },
            tag_list,
            favorited: self.favorited,
            favorites_count: self.favorites_count,
        }
    }
}
