//! Static item listing

use axum::{Extension, Json};
use serde::Serialize;
use tracing::info;

use demo_core::UserInfo;

#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub item_number: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub related_id: i64,
    pub sample_date: &'static str,
    pub sample_phone: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

pub fn sample_items() -> Vec<Item> {
    vec![
        Item {
            item_number: "Item 1",
            status: "Foobar",
            description: "This is an example description of item 1.",
            related_id: 1001,
            sample_date: "2016-12-13",
            sample_phone: "(555) 432-1212",
        },
        Item {
            item_number: "Item 2",
            status: "OK",
            description: "This is an example description of item 2.",
            related_id: 1002,
            sample_date: "2015-01-13",
            sample_phone: "(555) 222-3232",
        },
        Item {
            item_number: "Item 3",
            status: "Unknown",
            description: "This is an example description of item 3.",
            related_id: 1003,
            sample_date: "2001-01-01",
            sample_phone: "(555) 611-4141",
        },
    ]
}

/// List items handler - GET /api/items
pub async fn list_items(Extension(user): Extension<UserInfo>) -> Json<ItemsResponse> {
    info!("Items requested by: {}", user.username);
    Json(ItemsResponse {
        items: sample_items(),
    })
}
