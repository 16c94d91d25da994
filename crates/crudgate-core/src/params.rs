//! The route-parameter transform.
//!
//! Turns the raw path-parameter pairs of a request into normalized equality
//! filters and a resolved copy of the route's baseline query options. This
//! is a pure synchronous function; the framework adapter calls it once per
//! request.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;
use crate::numeric;
use crate::result::AppResult;
use crate::schema::{CrudOptions, ParamKind};
use crate::types::{FilterField, FilterOp, FilterValue, QueryOptions};

/// Canonical hyphenated UUID, version 1-5, case-insensitive.
static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("UUID_PATTERN should be a valid regex pattern")
});

/// Output of the transform: request-derived filters plus resolved options.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    /// One equality filter per path parameter, in path order.
    pub filters: Vec<FilterField>,
    /// Baseline options with the combined filter list applied.
    pub options: QueryOptions,
}

/// Validates the raw path parameters of a request against the route schema
/// and resolves the route's query options.
///
/// Parameters are processed in the order given (axum's router yields them
/// in path order). The first failing parameter aborts with a validation
/// error; `config` is never mutated.
pub fn parse_route_params<'a, I>(params: I, config: &CrudOptions) -> AppResult<ParsedRequest>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut filters = Vec::new();

    for (key, value) in params {
        let kind = config
            .params
            .kind_of(key)
            .ok_or_else(|| validation_error(key, "unknown route parameter"))?;

        filters.push(FilterField::new(key, FilterOp::Eq, validate(key, kind, value)?));
    }

    let options = config.options.resolve_with(&filters);

    Ok(ParsedRequest { filters, options })
}

/// Validates a single parameter value against its declared kind.
fn validate(key: &str, kind: ParamKind, value: &str) -> AppResult<FilterValue> {
    match kind {
        ParamKind::Number => {
            let float = numeric::float_prefix(value)
                .filter(|f| f.is_finite())
                .ok_or_else(|| validation_error(key, "numeric string is expected"))?;

            // Integer conversion truncates the string prefix, not the float:
            // "3.9" becomes 3. Digit-less forms like ".5" truncate the float.
            let int = numeric::int_prefix(value).unwrap_or(float.trunc() as i64);

            Ok(FilterValue::Integer(int))
        }
        ParamKind::Uuid => {
            if !UUID_PATTERN.is_match(value) {
                return Err(validation_error(key, "UUID string is expected"));
            }
            Ok(FilterValue::String(value.to_string()))
        }
        ParamKind::Text => Ok(FilterValue::String(value.to_string())),
    }
}

fn validation_error(key: &str, detail: &str) -> AppError {
    AppError::validation(format!("Validation failed. Param '{key}': {detail}"))
}
