use tracing::{debug, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    sorting::{
        entities::{SortDirection, SortField, SortSpec, SortableEntity},
        policies::{invalid_sort_field, is_sortable},
    },
};

/// Parse a sort parameter like `"id,-orderId,blotter.abbreviation"` into an
/// ordered [`SortSpec`], checking every field against the whitelist of `entity`.
///
/// A missing or blank parameter yields an empty spec. Empty tokens (`"id,,orderId"`,
/// trailing commas) and a bare `-` are skipped. Repeated fields are kept as
/// separate keys.
pub fn parse_sort(sort_param: Option<&str>, entity: SortableEntity) -> Result<SortSpec, CoreError> {
    let mut spec = SortSpec::new();

    for (field, direction) in sort_tokens(sort_param) {
        ensure_sortable(entity, field)?;
        spec.push(SortField::new(field, direction));
    }

    if !spec.is_empty() {
        debug!(entity = %entity, sort = %spec, "parsed sort parameter");
    }

    Ok(spec)
}

/// Same checks as [`parse_sort`] without building the spec.
pub fn validate_sort(sort_param: Option<&str>, entity: SortableEntity) -> Result<(), CoreError> {
    sort_tokens(sort_param).try_for_each(|(field, _)| ensure_sortable(entity, field))
}

fn sort_tokens<'a>(
    sort_param: Option<&'a str>,
) -> impl Iterator<Item = (&'a str, SortDirection)> + 'a {
    sort_param
        .unwrap_or_default()
        .split(',')
        .map(|token| token.trim_matches(|c: char| c <= ' '))
        .map(|token| match token.strip_prefix('-') {
            Some(field) => (field, SortDirection::Desc),
            None => (token, SortDirection::Asc),
        })
        .filter(|(field, _)| !field.is_empty())
}

fn ensure_sortable(entity: SortableEntity, field: &str) -> Result<(), CoreError> {
    if is_sortable(entity, field) {
        return Ok(());
    }

    warn!(entity = %entity, field, "rejected sort field");
    Err(invalid_sort_field(entity, field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sorting::entities::FieldPath;

    const ENTITIES: [SortableEntity; 2] = [SortableEntity::TradeOrder, SortableEntity::Execution];

    #[test]
    fn test_parse_empty_input() {
        for entity in ENTITIES {
            assert!(parse_sort(None, entity).unwrap().is_empty());
            assert!(parse_sort(Some(""), entity).unwrap().is_empty());
            assert!(parse_sort(Some("   "), entity).unwrap().is_empty());
            assert!(parse_sort(Some(" , ,"), entity).unwrap().is_empty());
        }
    }

    #[test]
    fn test_parse_directions() {
        let spec = parse_sort(Some("id,-orderId"), SortableEntity::TradeOrder).unwrap();

        assert_eq!(spec.fields(), &[SortField::asc("id"), SortField::desc("orderId")]);
    }

    #[test]
    fn test_parse_trims_tokens() {
        let spec = parse_sort(Some("  -quantity ,  submitted "), SortableEntity::TradeOrder)
            .unwrap();

        assert_eq!(
            spec.fields(),
            &[SortField::desc("quantity"), SortField::asc("submitted")]
        );
    }

    #[test]
    fn test_parse_trims_only_ascii_whitespace_and_controls() {
        let spec = parse_sort(Some("\tid\n,\r-orderId"), SortableEntity::TradeOrder).unwrap();
        assert_eq!(spec.fields(), &[SortField::asc("id"), SortField::desc("orderId")]);

        let err = parse_sort(Some("\u{a0}id"), SortableEntity::TradeOrder).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidSortField { ref field, .. } if field == "\u{a0}id"
        ));
        assert!(validate_sort(Some("id\u{2003}"), SortableEntity::Execution).is_err());
    }

    #[test]
    fn test_parse_related_field() {
        let spec = parse_sort(Some("blotter.abbreviation"), SortableEntity::TradeOrder).unwrap();

        assert_eq!(spec.len(), 1);
        let field = &spec.fields()[0];
        assert_eq!(field.name(), "blotter.abbreviation");
        assert_eq!(field.direction(), SortDirection::Asc);
        assert_eq!(
            field.path(),
            &FieldPath::Related {
                relation: "blotter".to_string(),
                field: "abbreviation".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_skips_empty_tokens() {
        let spec = parse_sort(Some("id,,orderId,"), SortableEntity::TradeOrder).unwrap();

        assert_eq!(spec.fields(), &[SortField::asc("id"), SortField::asc("orderId")]);
    }

    #[test]
    fn test_parse_skips_bare_minus() {
        let spec = parse_sort(Some("-,id, - "), SortableEntity::Execution).unwrap();

        assert_eq!(spec.fields(), &[SortField::asc("id")]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let spec = parse_sort(Some("id,-id"), SortableEntity::Execution).unwrap();

        assert_eq!(spec.fields(), &[SortField::asc("id"), SortField::desc("id")]);
    }

    #[test]
    fn test_parse_keeps_input_order() {
        let spec = parse_sort(
            Some("-destination.abbreviation,quantityFilled,executionStatus.abbreviation,-id"),
            SortableEntity::Execution,
        )
        .unwrap();

        assert_eq!(
            spec.to_string(),
            "-destination.abbreviation,quantityFilled,executionStatus.abbreviation,-id"
        );
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let err = parse_sort(Some("id,bogusField"), SortableEntity::TradeOrder).unwrap_err();

        match &err {
            CoreError::InvalidSortField {
                field,
                entity,
                valid_fields,
            } => {
                assert_eq!(field, "bogusField");
                assert_eq!(*entity, SortableEntity::TradeOrder);
                assert_eq!(valid_fields.len(), 8);
                assert!(valid_fields.contains(&"blotter.abbreviation".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let message = err.to_string();
        assert!(message.contains("bogusField"));
        assert!(message.contains("TradeOrder"));
        assert!(message.contains("orderId"));
    }

    #[test]
    fn test_parse_rejects_field_of_other_entity() {
        assert!(parse_sort(Some("orderId"), SortableEntity::Execution).is_err());
        assert!(parse_sort(Some("-tradeType.abbreviation"), SortableEntity::TradeOrder).is_err());
    }

    #[test]
    fn test_parse_rejects_descending_unknown_field_without_prefix() {
        let err = parse_sort(Some("-bogusField"), SortableEntity::Execution).unwrap_err();

        assert!(matches!(
            err,
            CoreError::InvalidSortField { ref field, .. } if field == "bogusField"
        ));
    }

    #[test]
    fn test_parse_rejects_deep_paths() {
        let err = parse_sort(Some("blotter.abbreviation.name"), SortableEntity::TradeOrder)
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::InvalidSortField { ref field, .. } if field == "blotter.abbreviation.name"
        ));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(parse_sort(Some("orderid"), SortableEntity::TradeOrder).is_err());
    }

    #[test]
    fn test_validate_matches_parse() {
        let inputs = [
            None,
            Some(""),
            Some("id,-orderId"),
            Some("id,,orderId"),
            Some("blotter.abbreviation"),
            Some("tradeOrderId,-executionTimestamp"),
            Some("bogusField"),
            Some("id, -quantity, nope"),
            Some("-"),
        ];

        for entity in ENTITIES {
            for input in inputs {
                assert_eq!(
                    validate_sort(input, entity),
                    parse_sort(input, entity).map(|_| ()),
                    "input {input:?} for {entity}"
                );
            }
        }
    }
}
