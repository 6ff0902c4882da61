use crate::server::{
    data::server::ServerRepository,
    model::server::{CreateServerParams, ServerFilter},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_members;
mod create;
mod exists;
