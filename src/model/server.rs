use serde::{Deserialize, Serialize};

/// Server representation returned by the listing endpoint.
///
/// `member_count` is only present when the request asked for it with
/// `with_num_members=true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDto {
    pub id: i32,
    pub name: String,
    pub owner: i32,
    pub category: i32,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServerDto {
    pub name: String,
    pub category: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Raw query string of `GET /api/servers`.
///
/// Every value is kept as sent; interpretation happens server-side so that parse
/// failures surface in filter order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerListQueryDto {
    pub category: Option<String>,
    pub qty: Option<String>,
    pub by_user: Option<String>,
    pub by_serverid: Option<String>,
    pub with_num_members: Option<String>,
}
