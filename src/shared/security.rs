use crate::shared::{GraphError, Result};

/// Validates a caller-supplied key (version, year, month) before it is
/// joined into a canonical document URL.
///
/// # Security
/// Keys are interpolated into URL paths, so path separators, parent
/// references and URL delimiters are rejected outright rather than escaped.
///
/// # Errors
/// Returns `GraphError::InvalidArgument` if the key is empty or unsafe
pub fn validate_path_key(key: &str, name: &'static str) -> Result<()> {
    require_non_empty(key, name)?;

    if key.contains('/') || key.contains('\\') {
        return Err(GraphError::InvalidArgument {
            name,
            reason: format!("'{}' contains path separators", key),
        });
    }

    if key.contains("..") {
        return Err(GraphError::InvalidArgument {
            name,
            reason: format!("'{}' contains '..'", key),
        });
    }

    if key.contains('#') || key.contains('?') || key.contains('@') {
        return Err(GraphError::InvalidArgument {
            name,
            reason: format!("'{}' contains URL-unsafe characters", key),
        });
    }

    Ok(())
}

/// Validates that a link href is usable as a fetch target.
pub fn validate_href(href: &str) -> Result<()> {
    require_non_empty(href, "href")
}

/// Rejects an empty or whitespace-only required argument.
pub fn require_non_empty(value: &str, name: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GraphError::InvalidArgument {
            name,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
