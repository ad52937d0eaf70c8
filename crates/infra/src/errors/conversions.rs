//! Conversions from external infrastructure errors into domain errors.

use devlink_domain::DevLinkError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DevLinkError);

impl From<InfraError> for DevLinkError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DevLinkError> for InfraError {
    fn from(value: DevLinkError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDevLinkError {
    fn into_devlink(self) -> DevLinkError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → DevLinkError */
/* -------------------------------------------------------------------------- */

impl IntoDevLinkError for SqlError {
    fn into_devlink(self) -> DevLinkError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => DevLinkError::Store("database is busy".into()),
                    (ErrorCode::DatabaseLocked, _) => {
                        DevLinkError::Store("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067 | 1555) => {
                        DevLinkError::Store("unique constraint violation".into())
                    }
                    _ => DevLinkError::Store(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => DevLinkError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                DevLinkError::Store(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                DevLinkError::Store(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => DevLinkError::Store("invalid UTF-8 returned from sqlite".into()),
            RE::InvalidParameterName(parameter_name) => {
                DevLinkError::Store(format!("invalid parameter name: {parameter_name}"))
            }
            RE::InvalidPath(path) => {
                DevLinkError::Store(format!("invalid database path: {}", path.to_string_lossy()))
            }
            RE::InvalidQuery => DevLinkError::Store("invalid SQL query".into()),
            other => DevLinkError::Store(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_devlink())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DevLinkError */
/* -------------------------------------------------------------------------- */

impl IntoDevLinkError for HttpError {
    fn into_devlink(self) -> DevLinkError {
        if self.is_timeout() {
            return DevLinkError::Upstream("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return DevLinkError::Upstream("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
            return DevLinkError::UpstreamUnavailable(message);
        }

        DevLinkError::Upstream(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_devlink())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
