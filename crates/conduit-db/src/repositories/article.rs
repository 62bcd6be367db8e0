//! PostgreSQL implementation of ArticleRepository
//!
//! The hydrated view is computed in SQL: favorites count via a correlated
//! subquery (never stored denormalized), `favorited` / `following` via
//! EXISTS probes against the viewer id. Binding a NULL viewer makes both
//! probes come out false, which is the anonymous-request semantics.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use conduit_core::entities::{Article, ArticleView};
use conduit_core::error::DomainError;
use conduit_core::traits::{
    ArticleFilter, ArticlePatch, ArticleRepository, NewArticle, Page, RepoResult,
};

use crate::models::{ArticleModel, ArticleTagRow, ArticleViewModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ArticleRepository
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    /// Create a new PgArticleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the ordered tag lists for a set of articles in one query
    async fn tag_lists(&self, article_ids: &[i64]) -> RepoResult<HashMap<i64, Vec<String>>> {
        if article_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ArticleTagRow>(
            r"
            SELECT at.article_id, t.name
            FROM article_tags at
            JOIN tags t ON t.id = at.tag_id
            WHERE at.article_id = ANY($1)
            ORDER BY at.article_id, at.position
            ",
        )
        .bind(article_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut lists: HashMap<i64, Vec<String>> = HashMap::new();
        for row in rows {
            lists.entry(row.article_id).or_default().push(row.name);
        }
        Ok(lists)
    }

    /// Attach tag lists to a batch of view rows, preserving row order
    async fn hydrate(&self, rows: Vec<ArticleViewModel>) -> RepoResult<Vec<ArticleView>> {
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut lists = self.tag_lists(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let tags = lists.remove(&row.id).unwrap_or_default();
                row.into_view(tags)
            })
            .collect())
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[instrument(skip(self, new_article), fields(slug = new_article.slug))]
    async fn create(&self, new_article: NewArticle<'_>) -> RepoResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row = sqlx::query_as::<_, ArticleModel>(
            r"
            INSERT INTO articles (slug, title, description, body, author_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, slug, title, description, body, author_id, created_at, updated_at
            ",
        )
        .bind(new_article.slug)
        .bind(new_article.title)
        .bind(new_article.description)
        .bind(new_article.body)
        .bind(new_article.author_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for (position, name) in new_article.tags.iter().enumerate() {
            // Insert-or-return-existing: the DO UPDATE is a no-op write that
            // makes RETURNING yield the id on the conflict path too.
            let tag_id = sqlx::query_scalar::<_, i64>(
                r"
                INSERT INTO tags (name)
                VALUES ($1)
                ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                RETURNING id
                ",
            )
            .bind(name)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            sqlx::query(
                r"
                INSERT INTO article_tags (article_id, tag_id, position)
                VALUES ($1, $2, $3)
                ON CONFLICT (article_id, tag_id) DO NOTHING
                ",
            )
            .bind(row.id)
            .bind(tag_id)
            .bind(i32::try_from(position).unwrap_or(i32::MAX))
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Article>> {
        let result = sqlx::query_as::<_, ArticleModel>(
            r"
            SELECT id, slug, title, description, body, author_id, created_at, updated_at
            FROM articles
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Article::from))
    }

    #[instrument(skip(self))]
    async fn view_by_slug(
        &self,
        slug: &str,
        viewer_id: Option<i64>,
    ) -> RepoResult<Option<ArticleView>> {
        let row = sqlx::query_as::<_, ArticleViewModel>(
            r"
            SELECT a.id, a.slug, a.title, a.description, a.body, a.author_id,
                   a.created_at, a.updated_at,
                   u.username AS author_username, u.bio AS author_bio, u.image AS author_image,
                   (SELECT COUNT(*) FROM favorites f
                     WHERE f.article_id = a.id) AS favorites_count,
                   EXISTS(SELECT 1 FROM favorites f
                           WHERE f.article_id = a.id AND f.user_id = $2::bigint) AS favorited,
                   EXISTS(SELECT 1 FROM follows fo
                           WHERE fo.follower_id = $2::bigint
                             AND fo.following_id = a.author_id) AS following
            FROM articles a
            JOIN users u ON u.id = a.author_id
            WHERE a.slug = $1
            ",
        )
        .bind(slug)
        .bind(viewer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match row {
            Some(row) => {
                let tags = self
                    .tag_lists(&[row.id])
                    .await?
                    .remove(&row.id)
                    .unwrap_or_default();
                Ok(Some(row.into_view(tags)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: ArticlePatch) -> RepoResult<()> {
        // The slug is deliberately absent: it is pinned at creation time.
        let result = sqlx::query(
            r"
            UPDATE articles
            SET title       = COALESCE($2::text, title),
                description = COALESCE($3::text, description),
                body        = COALESCE($4::text, body),
                updated_at  = now()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.body)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ArticleNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // Tag links, favorites, and comments go with it via ON DELETE CASCADE.
        let result = sqlx::query(
            r"
            DELETE FROM articles WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ArticleNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_favorite(&self, user_id: i64, article_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO favorites (user_id, article_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, article_id) DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(article_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_favorite(&self, user_id: i64, article_id: i64) -> RepoResult<()> {
        // No row is a no-op: unfavoriting twice is allowed.
        sqlx::query(
            r"
            DELETE FROM favorites WHERE user_id = $1 AND article_id = $2
            ",
        )
        .bind(user_id)
        .bind(article_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, filter))]
    async fn list(
        &self,
        filter: &ArticleFilter,
        viewer_id: Option<i64>,
    ) -> RepoResult<Page<ArticleView>> {
        let rows = sqlx::query_as::<_, ArticleViewModel>(
            r"
            SELECT a.id, a.slug, a.title, a.description, a.body, a.author_id,
                   a.created_at, a.updated_at,
                   u.username AS author_username, u.bio AS author_bio, u.image AS author_image,
                   (SELECT COUNT(*) FROM favorites f
                     WHERE f.article_id = a.id) AS favorites_count,
                   EXISTS(SELECT 1 FROM favorites f
                           WHERE f.article_id = a.id AND f.user_id = $4::bigint) AS favorited,
                   EXISTS(SELECT 1 FROM follows fo
                           WHERE fo.follower_id = $4::bigint
                             AND fo.following_id = a.author_id) AS following
            FROM articles a
            JOIN users u ON u.id = a.author_id
            WHERE ($1::text IS NULL OR EXISTS (
                    SELECT 1 FROM article_tags at
                    JOIN tags t ON t.id = at.tag_id
                    WHERE at.article_id = a.id AND t.name = $1))
              AND ($2::text IS NULL OR u.username = $2)
              AND ($3::text IS NULL OR EXISTS (
                    SELECT 1 FROM favorites f
                    JOIN users fu ON fu.id = f.user_id
                    WHERE f.article_id = a.id AND fu.username = $3))
            ORDER BY a.created_at DESC, a.id DESC
            LIMIT $5 OFFSET $6
            ",
        )
        .bind(filter.tag.as_deref())
        .bind(filter.author.as_deref())
        .bind(filter.favorited_by.as_deref())
        .bind(viewer_id)
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM articles a
            JOIN users u ON u.id = a.author_id
            WHERE ($1::text IS NULL OR EXISTS (
                    SELECT 1 FROM article_tags at
                    JOIN tags t ON t.id = at.tag_id
                    WHERE at.article_id = a.id AND t.name = $1))
              AND ($2::text IS NULL OR u.username = $2)
              AND ($3::text IS NULL OR EXISTS (
                    SELECT 1 FROM favorites f
                    JOIN users fu ON fu.id = f.user_id
                    WHERE f.article_id = a.id AND fu.username = $3))
            ",
        )
        .bind(filter.tag.as_deref())
        .bind(filter.author.as_deref())
        .bind(filter.favorited_by.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let items = self.hydrate(rows).await?;
        Ok(Page { items, total })
    }

    #[instrument(skip(self))]
    async fn feed(&self, user_id: i64, limit: i64, offset: i64) -> RepoResult<Page<ArticleView>> {
        let rows = sqlx::query_as::<_, ArticleViewModel>(
            r"
            SELECT a.id, a.slug, a.title, a.description, a.body, a.author_id,
                   a.created_at, a.updated_at,
                   u.username AS author_username, u.bio AS author_bio, u.image AS author_image,
                   (SELECT COUNT(*) FROM favorites f
                     WHERE f.article_id = a.id) AS favorites_count,
                   EXISTS(SELECT 1 FROM favorites f
                           WHERE f.article_id = a.id AND f.user_id = $1) AS favorited,
                   TRUE AS following
            FROM articles a
            JOIN users u ON u.id = a.author_id
            WHERE EXISTS (SELECT 1 FROM follows fo
                           WHERE fo.follower_id = $1 AND fo.following_id = a.author_id)
            ORDER BY a.created_at DESC, a.id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM articles a
            WHERE EXISTS (SELECT 1 FROM follows fo
                           WHERE fo.follower_id = $1 AND fo.following_id = a.author_id)
            ",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let items = self.hydrate(rows).await?;
        Ok(Page { items, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgArticleRepository>();
    }
}
