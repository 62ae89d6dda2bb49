use crate::models::{BlogPost, Project, Property};
use crate::routing::slugify;
use anyhow::Result;
use async_trait::async_trait;

/// Read-only access to the content catalog.
/// Lookups are provided on top of the collection accessors; a backend only
/// overrides them when it has a cheaper index.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn properties(&self) -> Result<Vec<Property>>;

    async fn projects(&self) -> Result<Vec<Project>>;

    async fn posts(&self) -> Result<Vec<BlogPost>>;

    /// Get the name of the backing source
    fn source_name(&self) -> &'static str;

    /// Property by id. Paths are lowercased on the way in, so an exact miss
    /// falls back to an ASCII case-insensitive match.
    async fn property(&self, id: &str) -> Result<Option<Property>> {
        let mut properties = self.properties().await?;
        let position = properties
            .iter()
            .position(|property| property.id == id)
            .or_else(|| {
                properties
                    .iter()
                    .position(|property| property.id.eq_ignore_ascii_case(id))
            });

        Ok(position.map(|index| properties.swap_remove(index)))
    }

    /// Project whose name slug (or bare id, ignoring ASCII case) equals `slug`
    async fn project_by_slug(&self, slug: &str) -> Result<Option<Project>> {
        Ok(self.projects().await?.into_iter().find(|project| {
            slugify(&project.name) == slug || project.id.eq_ignore_ascii_case(slug)
        }))
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        Ok(self.posts().await?.into_iter().find(|post| post.slug == slug))
    }
}
