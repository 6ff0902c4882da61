//! Server domain models, listing query and parameters.

use crate::model::server::{CreateServerDto, ServerDto, ServerListQueryDto};

/// Server with an optional member count annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub category_id: i32,
    pub description: Option<String>,
    /// Set only when the listing asked for member counts.
    pub member_count: Option<u64>,
}

impl Server {
    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            owner: self.owner_id,
            category: self.category_id,
            description: self.description,
            member_count: self.member_count,
        }
    }

    /// Converts an entity model, attaching the member count when one was computed.
    pub fn from_entity(entity: entity::server::Model, member_count: Option<u64>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            category_id: entity.category_id,
            description: entity.description,
            member_count,
        }
    }
}

/// Listing query with lenient interpretation applied.
///
/// Empty values count as absent and flags are only set by the exact value `true`.
/// `by_serverid` and `qty` stay unparsed: their errors are raised by the listing
/// pipeline at the step that uses them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerListQuery {
    pub category: Option<String>,
    pub with_num_members: bool,
    pub by_user: bool,
    pub by_serverid: Option<String>,
    pub qty: Option<String>,
}

impl ServerListQuery {
    pub fn from_dto(dto: ServerListQueryDto) -> Self {
        Self {
            category: non_empty(dto.category),
            with_num_members: is_true(dto.with_num_members.as_deref()),
            by_user: is_true(dto.by_user.as_deref()),
            by_serverid: non_empty(dto.by_serverid),
            qty: non_empty(dto.qty),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Filters handed to the repository once the listing query has been validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerFilter {
    /// Exact category name.
    pub category: Option<String>,
    /// Only servers this account is a member of.
    pub member_id: Option<i32>,
    pub server_id: Option<i32>,
    pub limit: Option<u64>,
}

/// Parameters for creating a server.
#[derive(Debug, Clone)]
pub struct CreateServerParams {
    pub owner_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl CreateServerParams {
    pub fn from_dto(owner_id: i32, dto: CreateServerDto) -> Self {
        Self {
            owner_id,
            category_id: dto.category,
            name: dto.name,
            description: dto.description,
        }
    }
}
