//! Sea-ORM adapter: turn a [`FilterSpec`] into query clauses.
//!
//! Field names are used verbatim as column names. Nothing is checked against
//! the entity's columns, so handlers that expose this to untrusted clients
//! should restrict the keys they accept first.

use sea_orm::{
    Condition, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Alias, Expr, Order, SimpleExpr},
};

use crate::models::FilterSpec;
use crate::pagination::Pagination;
use crate::sort::to_sea_order;

fn column(name: &str) -> SimpleExpr {
    Expr::col(Alias::new(name)).into()
}

/// Conjunction of every `where` entry.
///
/// A single value becomes `col = value`, several become `col IN (...)`.
/// Entries are added in field name order so the generated SQL is stable.
#[must_use]
pub fn where_condition(spec: &FilterSpec) -> Condition {
    let mut fields: Vec<_> = spec.where_clause.iter().collect();
    fields.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut condition = Condition::all();
    for (field, values) in fields {
        let expr = match values.as_slice() {
            [single] => Expr::col(Alias::new(field.as_str())).eq(single.as_str()),
            _ => Expr::col(Alias::new(field.as_str())).is_in(values.iter().map(String::as_str)),
        };
        condition = condition.add(expr);
    }
    condition
}

/// `ORDER BY` expressions, in request order.
#[must_use]
pub fn order_exprs(spec: &FilterSpec) -> Vec<(SimpleExpr, Order)> {
    spec.order
        .iter()
        .map(|entry| (column(&entry.name), to_sea_order(&entry.value)))
        .collect()
}

/// `GROUP BY` expressions, in request order.
#[must_use]
pub fn group_exprs(spec: &FilterSpec) -> Vec<SimpleExpr> {
    spec.group.iter().map(|name| column(name)).collect()
}

/// Apply where, group, order and pagination from `spec` to a query.
///
/// ```rust,ignore
/// let todos = todo::Entity::find();
/// let todos = apply_filter(todos, &spec).all(&db).await?;
/// ```
#[must_use]
pub fn apply_filter<Q>(query: Q, spec: &FilterSpec) -> Q
where
    Q: QueryFilter + QueryOrder + QuerySelect,
{
    let mut query = query;
    if !spec.where_clause.is_empty() {
        query = QueryFilter::filter(query, where_condition(spec));
    }
    for expr in group_exprs(spec) {
        query = QuerySelect::group_by(query, expr);
    }
    for (expr, order) in order_exprs(spec) {
        query = QueryOrder::order_by(query, expr, order);
    }

    let pagination = Pagination::from_spec(spec);
    if let Some(limit) = pagination.limit {
        query = QuerySelect::limit(query, limit);
    }
    if pagination.offset > 0 {
        query = QuerySelect::offset(query, pagination.offset);
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderEntry;

    #[test]
    fn test_order_exprs_directions() {
        let spec = FilterSpec {
            order: vec![
                OrderEntry::new("name", "asc"),
                OrderEntry::new("age", "desc"),
                OrderEntry::new("city", "whatever"),
            ],
            ..Default::default()
        };
        let exprs = order_exprs(&spec);
        assert_eq!(exprs.len(), 3);
        assert!(matches!(exprs[0].1, Order::Asc));
        assert!(matches!(exprs[1].1, Order::Desc));
        assert!(matches!(exprs[2].1, Order::Desc));
    }

    #[test]
    fn test_group_exprs_count() {
        let spec = FilterSpec {
            group: vec!["dept".to_string(), "team".to_string()],
            ..Default::default()
        };
        assert_eq!(group_exprs(&spec).len(), 2);
        assert!(group_exprs(&FilterSpec::default()).is_empty());
    }

    #[test]
    fn test_empty_where_is_empty_condition() {
        assert!(where_condition(&FilterSpec::default()).is_empty());
    }

    #[test]
    fn test_where_condition_has_one_clause_per_field() {
        let mut spec = FilterSpec::default();
        spec.where_clause
            .insert("a".to_string(), vec!["1".to_string()]);
        spec.where_clause
            .insert("b".to_string(), vec!["1".to_string(), "2".to_string()]);
        assert_eq!(where_condition(&spec).len(), 2);
    }
}
