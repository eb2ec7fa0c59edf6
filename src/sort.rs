use crate::models::{Order, OrderEntry};

/// Direction used when an `order` field carries no `.direction` suffix.
pub const DEFAULT_DIRECTION: &str = "desc";

/// Parse the value of an `order` parameter.
///
/// `name.asc,age` becomes `[{name, asc}, {age, desc}]`. Only the first two
/// dot-separated segments of a field are used, so `a.asc.extra` reads as
/// `{a, asc}`.
#[must_use]
pub fn parse_order(raw: &str) -> Order {
    raw.split(',').map(parse_order_field).collect()
}

fn parse_order_field(field: &str) -> OrderEntry {
    let mut segments = field.split('.');
    match (segments.next(), segments.next()) {
        (Some(name), Some(direction)) => OrderEntry::new(name, direction),
        _ => OrderEntry::new(field, DEFAULT_DIRECTION),
    }
}

/// True when a direction token asks for ascending order.
///
/// Anything that is not `asc` (in any case) sorts descending.
#[must_use]
pub fn is_ascending(direction: &str) -> bool {
    direction.eq_ignore_ascii_case("asc")
}

/// Map a direction token onto a sea-query [`Order`](sea_orm::sea_query::Order).
#[cfg(feature = "sea-orm")]
#[must_use]
pub fn to_sea_order(direction: &str) -> sea_orm::sea_query::Order {
    if is_ascending(direction) {
        sea_orm::sea_query::Order::Asc
    } else {
        sea_orm::sea_query::Order::Desc
    }
}
