use crate::models::{FilterSpec, Group, Limit, Order, Page, PageSize, Skip, Where};

/// A caller-owned shape that a parsed query can be written into.
///
/// Each setter defaults to a no-op, so a type only implements the setters for
/// the fields it actually has; everything else the parser produced is dropped.
///
/// ```rust
/// use querystring_filter::{FilterTarget, Limit, Order, parse_into};
///
/// #[derive(Default)]
/// struct Listing {
///     order: Order,
///     limit: Limit,
/// }
///
/// impl FilterTarget for Listing {
///     fn set_order(&mut self, order: Order) {
///         self.order = order;
///     }
///     fn set_limit(&mut self, limit: Limit) {
///         self.limit = limit;
///     }
/// }
///
/// let mut listing = Listing::default();
/// parse_into("status=open&order=name.asc&limit=10", &mut listing).unwrap();
/// assert_eq!(listing.limit, 10);
/// assert_eq!(listing.order[0].value, "asc");
/// ```
pub trait FilterTarget {
    fn set_where(&mut self, _where_clause: Where) {}
    fn set_order(&mut self, _order: Order) {}
    fn set_group(&mut self, _group: Group) {}
    fn set_limit(&mut self, _limit: Limit) {}
    fn set_skip(&mut self, _skip: Skip) {}
    fn set_page(&mut self, _page: Page) {}
    fn set_page_size(&mut self, _page_size: PageSize) {}

    /// Copy every field of `spec` into `self`.
    fn assign(&mut self, spec: FilterSpec) {
        let FilterSpec {
            where_clause,
            order,
            group,
            limit,
            skip,
            page,
            page_size,
        } = spec;
        self.set_where(where_clause);
        self.set_order(order);
        self.set_group(group);
        self.set_limit(limit);
        self.set_skip(skip);
        self.set_page(page);
        self.set_page_size(page_size);
    }
}

impl FilterTarget for FilterSpec {
    fn set_where(&mut self, where_clause: Where) {
        self.where_clause = where_clause;
    }

    fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    fn set_group(&mut self, group: Group) {
        self.group = group;
    }

    fn set_limit(&mut self, limit: Limit) {
        self.limit = limit;
    }

    fn set_skip(&mut self, skip: Skip) {
        self.skip = skip;
    }

    fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
    }

    fn assign(&mut self, spec: FilterSpec) {
        *self = spec;
    }
}

impl<T: FilterTarget + ?Sized> FilterTarget for &mut T {
    fn set_where(&mut self, where_clause: Where) {
        (**self).set_where(where_clause);
    }

    fn set_order(&mut self, order: Order) {
        (**self).set_order(order);
    }

    fn set_group(&mut self, group: Group) {
        (**self).set_group(group);
    }

    fn set_limit(&mut self, limit: Limit) {
        (**self).set_limit(limit);
    }

    fn set_skip(&mut self, skip: Skip) {
        (**self).set_skip(skip);
    }

    fn set_page(&mut self, page: Page) {
        (**self).set_page(page);
    }

    fn set_page_size(&mut self, page_size: PageSize) {
        (**self).set_page_size(page_size);
    }

    fn assign(&mut self, spec: FilterSpec) {
        (**self).assign(spec);
    }
}
