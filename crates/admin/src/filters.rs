//! Custom Askama template filters.
//!
//! Askama resolves custom filters through a `filters` module in scope, so
//! every module whose templates use them imports `crate::filters`.

/// Returns the current year, for the layout footer.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(
    _value: impl std::fmt::Display,
    _env: &dyn askama::Values,
) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
