use anyhow::{anyhow, Result};

use backend_domain::StorageBackend;

/// Database names are interpolated into DDL, so only plain identifiers pass.
pub fn validate_database_name(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("clickhouse_database is empty"));
    }
    let mut chars = value.chars();
    let first_ok = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    if !first_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(anyhow!(
            "clickhouse_database '{}' must be a plain identifier",
            value
        ));
    }
    Ok(())
}

pub fn parse_storage_backend(value: &str) -> Result<StorageBackend> {
    match value.trim().to_lowercase().as_str() {
        "clickhouse" => Ok(StorageBackend::Clickhouse),
        "memory" => Ok(StorageBackend::Memory),
        other => Err(anyhow!(
            "unsupported storage '{}', expected 'clickhouse' or 'memory'",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_name_must_be_identifier() {
        assert!(validate_database_name("github_events").is_ok());
        assert!(validate_database_name("_scratch2").is_ok());
        assert!(validate_database_name("").is_err());
        assert!(validate_database_name("1events").is_err());
        assert!(validate_database_name("events; DROP TABLE x").is_err());
    }

    #[test]
    fn storage_backend_is_case_insensitive() {
        assert_eq!(parse_storage_backend("Memory").unwrap(), StorageBackend::Memory);
        assert_eq!(
            parse_storage_backend(" clickhouse ").unwrap(),
            StorageBackend::Clickhouse
        );
        assert!(parse_storage_backend("mongo").is_err());
    }
}
