use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, channel::ChannelRepository},
    error::AppError,
    media::{
        lifecycle::MediaLifecycle, path::category_icon_path, storage::MediaStorage,
        validate::validate_file_extension,
    },
    model::{
        category::{Category, CreateCategoryParams, UpdateCategoryParams},
        media::FileUpdate,
    },
    util::text::{ensure_max_chars, NAME_MAX_CHARS},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn MediaStorage,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn MediaStorage) -> Self {
        Self { db, storage }
    }

    /// Gets all categories ordered by id
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let categories = CategoryRepository::new(self.db).get_all().await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Creates a category and stores its icon under the new id.
    ///
    /// The icon is validated before anything is written.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        ensure_max_chars("name", &params.name, NAME_MAX_CHARS)?;
        if let Some(icon) = &params.icon {
            validate_file_extension(&icon.filename)?;
        }

        let repo = CategoryRepository::new(self.db);

        let mut category = repo.create(params.name, params.description).await?;

        if let Some(icon) = params.icon {
            let key = category_icon_path(category.id, &icon.filename);
            let key = MediaLifecycle::new(self.storage).store(key, &icon).await?;

            let id = category.id;
            category.icon = Some(key);
            category = repo.update(category).await?.ok_or_else(|| not_found(id))?;
        }

        Ok(Category::from_entity(category))
    }

    /// Updates a category, replacing or clearing its icon.
    ///
    /// The previous icon is removed when the new key differs from it. A rejected
    /// upload returns before any file is touched.
    ///
    /// # Returns
    /// - `Ok(Category)` - The updated category
    /// - `Err(ValidationError)` - Name too long or unsupported icon extension
    /// - `Err(AppError::NotFound)` - No category with this id
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        if let Some(name) = &params.name {
            ensure_max_chars("name", name, NAME_MAX_CHARS)?;
        }
        if let Some(icon) = params.icon.upload() {
            validate_file_extension(&icon.filename)?;
        }

        let repo = CategoryRepository::new(self.db);

        let existing = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| not_found(params.id))?;

        let mut incoming = existing.clone();
        if let Some(name) = params.name {
            incoming.name = name;
        }
        if let Some(description) = params.description {
            incoming.description = Some(description).filter(|d| !d.is_empty());
        }
        match &params.icon {
            FileUpdate::Keep => {}
            FileUpdate::Clear => incoming.icon = None,
            FileUpdate::Replace(file) => {
                incoming.icon = Some(category_icon_path(existing.id, &file.filename))
            }
        }

        let lifecycle = MediaLifecycle::new(self.storage);
        lifecycle.before_save(&existing, &incoming).await;

        if let (FileUpdate::Replace(file), Some(key)) = (&params.icon, &incoming.icon) {
            lifecycle.store(key.clone(), file).await?;
        }

        let category = repo
            .update(incoming)
            .await?
            .ok_or_else(|| not_found(existing.id))?;

        Ok(Category::from_entity(category))
    }

    /// Deletes a category with its servers and channels, removing every file they own.
    ///
    /// # Returns
    /// - `Ok(())` - Category deleted
    /// - `Err(AppError::NotFound)` - No category with this id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CategoryRepository::new(self.db);

        let category = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let lifecycle = MediaLifecycle::new(self.storage);
        for channel in ChannelRepository::new(self.db).get_by_category(id).await? {
            lifecycle.before_delete(&channel).await;
        }
        lifecycle.before_delete(&category).await;

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted category {} ({})", id, category.name);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Category with id {} not found", id))
}
