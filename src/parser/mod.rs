//! Catalog document parser.
//!
//! Turns the raw body of the catalog resource into a [`Catalog`]. The
//! document must be JSON with a top-level `tickets` array; each element is
//! read on its own so one bad element does not sink the load.

use crate::model::{Catalog, MalformedTicket, ParseError, Ticket};
use serde_json::Value;

/// Name of the top-level collection field.
pub const TICKETS_FIELD: &str = "tickets";

/// Parse a catalog document.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` if the body is not JSON or `tickets`
/// is not an array, and `ParseError::MissingTickets` if the document is not
/// an object with a `tickets` field.
/// Elements of `tickets` that are not tickets are reported in
/// [`Catalog::malformed`], not as errors.
pub fn parse_catalog(body: &str) -> Result<Catalog, ParseError> {
    let document: Value = serde_json::from_str(body).map_err(|e| ParseError::InvalidJson {
        message: e.to_string(),
    })?;

    // Only an object can carry a top-level field; arrays and scalars cannot.
    let Value::Object(mut fields) = document else {
        return Err(ParseError::MissingTickets);
    };

    let elements = match fields.remove(TICKETS_FIELD) {
        None | Some(Value::Null) => return Err(ParseError::MissingTickets),
        Some(Value::Array(elements)) => elements,
        Some(other) => {
            return Err(ParseError::InvalidJson {
                message: format!("`{}` must be an array, found {}", TICKETS_FIELD, kind(&other)),
            })
        }
    };

    let mut catalog = Catalog::default();
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<Ticket>(element) {
            Ok(ticket) => catalog.tickets.push(ticket),
            Err(e) => catalog
                .malformed
                .push(MalformedTicket::new(index, e.to_string())),
        }
    }

    Ok(catalog)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket_json(id: u64, price: u32) -> String {
        format!(
            r#"{{"id":{id},"from":"Москва","to":"Сочи","company":"Победа","price":{price},"currency":"P","time":{{"departure":"08:00","arrival":"11:00"}},"duration":180,"date":"2024-07-01","connectionAmount":0}}"#
        )
    }

    #[test]
    fn parses_tickets_in_document_order() {
        let body = format!(
            r#"{{"tickets":[{},{},{}]}}"#,
            ticket_json(3, 300),
            ticket_json(1, 100),
            ticket_json(2, 200)
        );

        let catalog = parse_catalog(&body).unwrap();

        let ids: Vec<u64> = catalog.tickets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(catalog.malformed.is_empty());
    }

    #[test]
    fn empty_tickets_array_is_an_empty_catalog() {
        let catalog = parse_catalog(r#"{"tickets":[]}"#).unwrap();
        assert!(catalog.tickets.is_empty());
        assert!(catalog.malformed.is_empty());
    }

    #[test]
    fn ignores_unrelated_top_level_fields() {
        let body = format!(r#"{{"version":2,"tickets":[{}]}}"#, ticket_json(1, 100));
        let catalog = parse_catalog(&body).unwrap();
        assert_eq!(catalog.tickets.len(), 1);
    }

    #[test]
    fn missing_tickets_field_is_an_error() {
        let result = parse_catalog(r#"{"flights":[]}"#);
        assert_eq!(result, Err(ParseError::MissingTickets));
    }

    #[test]
    fn null_tickets_field_is_an_error() {
        let result = parse_catalog(r#"{"tickets":null}"#);
        assert_eq!(result, Err(ParseError::MissingTickets));
    }

    #[test]
    fn array_document_is_not_a_catalog() {
        let body = format!("[[{}]]", ticket_json(1, 100));
        assert_eq!(parse_catalog(&body), Err(ParseError::MissingTickets));
    }

    #[test]
    fn array_of_tickets_without_wrapper_is_not_a_catalog() {
        let body = format!("[{}]", ticket_json(1, 100));
        assert_eq!(parse_catalog(&body), Err(ParseError::MissingTickets));
    }

    #[test]
    fn scalar_document_is_not_a_catalog() {
        assert_eq!(parse_catalog("42"), Err(ParseError::MissingTickets));
    }

    #[test]
    fn non_json_body_is_an_error() {
        let result = parse_catalog("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(ParseError::InvalidJson { .. })));
    }

    #[test]
    fn tickets_of_wrong_type_is_invalid_json() {
        let result = parse_catalog(r#"{"tickets":"soon"}"#);
        assert!(matches!(result, Err(ParseError::InvalidJson { .. })));
    }

    #[test]
    fn malformed_element_is_skipped_and_recorded() {
        let body = format!(
            r#"{{"tickets":[{},{{"id":"not-a-number"}},{}]}}"#,
            ticket_json(1, 100),
            ticket_json(2, 200)
        );

        let catalog = parse_catalog(&body).unwrap();

        assert_eq!(catalog.tickets.len(), 2);
        assert_eq!(catalog.malformed.len(), 1);
        assert_eq!(catalog.malformed[0].index(), 1);
        assert!(!catalog.malformed[0].error_message().is_empty());
    }
}
