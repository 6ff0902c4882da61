use crate::server::{
    error::{validation::ValidationError, AppError},
    media::storage::MemoryStorage,
    model::{
        category::{CreateCategoryParams, UpdateCategoryParams},
        media::{FileUpdate, UploadedFile},
    },
    service::{category::CategoryService, test::png_upload},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod delete;
