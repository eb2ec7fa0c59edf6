#![allow(dead_code)]

use axum::{Json, Router, http::HeaderMap, routing::get};
use querystring_filter::{
    FilterSpec, FilterTarget, Group, Order, Pagination, QueryFilter,
    pagination::calculate_content_range,
};
use serde::Serialize;

#[cfg(feature = "sea-orm")]
pub mod todo_entity;

pub const TOTAL_TODOS: u64 = 135;

/// Output shape that only cares about sorting and grouping.
#[derive(Debug, Default, Serialize)]
pub struct Listing {
    pub order: Order,
    pub group: Group,
}

impl FilterTarget for Listing {
    fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    fn set_group(&mut self, group: Group) {
        self.group = group;
    }
}

async fn list_todos(QueryFilter(filter): QueryFilter) -> (HeaderMap, Json<FilterSpec>) {
    let headers = calculate_content_range(Pagination::from_spec(&filter), TOTAL_TODOS, "todos");
    (headers, Json(filter))
}

async fn list_todo_listing(QueryFilter(listing): QueryFilter<Listing>) -> Json<Listing> {
    Json(listing)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn setup_test_app() -> Router {
    let api = Router::new()
        .route("/todos", get(list_todos))
        .route("/todos/listing", get(list_todo_listing));

    Router::new().nest("/api/v1", api)
}
