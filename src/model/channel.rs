use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDto {
    pub id: i32,
    pub name: String,
    pub owner: i32,
    pub topic: String,
    pub server: i32,
    pub banner: Option<String>,
    pub icon: Option<String>,
}
