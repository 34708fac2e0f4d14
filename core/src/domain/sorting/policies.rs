use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;

use crate::domain::{
    common::entities::app_errors::CoreError, sorting::entities::SortableEntity,
};

static TRADE_ORDER_SORT_FIELDS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    BTreeSet::from([
        "id",
        "orderId",
        "orderType",
        "quantity",
        "quantitySent",
        "tradeTimestamp",
        "submitted",
        "blotter.abbreviation",
    ])
});

static EXECUTION_SORT_FIELDS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    BTreeSet::from([
        "id",
        "executionTimestamp",
        "quantityOrdered",
        "quantityPlaced",
        "quantityFilled",
        "tradeOrderId",
        "executionStatus.abbreviation",
        "blotter.abbreviation",
        "tradeType.abbreviation",
        "destination.abbreviation",
    ])
});

pub(crate) fn sort_whitelist(entity: SortableEntity) -> &'static BTreeSet<&'static str> {
    match entity {
        SortableEntity::TradeOrder => &*TRADE_ORDER_SORT_FIELDS,
        SortableEntity::Execution => &*EXECUTION_SORT_FIELDS,
    }
}

/// Exact match against the whitelist; dotted names are matched whole.
pub fn is_sortable(entity: SortableEntity, field: &str) -> bool {
    sort_whitelist(entity).contains(field)
}

/// Owned copy of the sortable field names for `entity`.
pub fn valid_sort_fields(entity: SortableEntity) -> HashSet<String> {
    sort_whitelist(entity)
        .iter()
        .map(|field| field.to_string())
        .collect()
}

pub(crate) fn invalid_sort_field(entity: SortableEntity, field: impl Into<String>) -> CoreError {
    CoreError::InvalidSortField {
        field: field.into(),
        entity,
        valid_fields: sort_whitelist(entity)
            .iter()
            .map(|field| field.to_string())
            .collect(),
    }
}
