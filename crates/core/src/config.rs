//! Validation limits, with defaults and environment overrides.

use std::str::FromStr;

use crate::error::CoreError;

/// Every bound the validators enforce.
///
/// The defaults match the rules used by the portal forms. In a deployment
/// they can be overridden through environment variables, see
/// [`ValidationLimits::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationLimits {
    /// Max characters of a single name or last name (default: `50`).
    pub name_max_len: usize,
    /// Max characters of a combined full name (default: `100`).
    pub full_name_max_len: usize,
    /// Lowest valid student code (default: `195000000`).
    pub code_floor: i64,
    /// Shortest national ID (default: `8`).
    pub nuip_min_len: usize,
    /// Longest national ID (default: `10`).
    pub nuip_max_len: usize,
    /// Exact cellphone length (default: `10`).
    pub phone_len: usize,
    /// Highest semester count (default: `11`).
    pub semester_max: i64,
    /// Institutional mailbox domain for students (default: `correounivalle.edu.co`).
    pub student_email_domain: String,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            name_max_len: 50,
            full_name_max_len: 100,
            code_floor: 195_000_000,
            nuip_min_len: 8,
            nuip_max_len: 10,
            phone_len: 10,
            semester_max: 11,
            student_email_domain: "correounivalle.edu.co".to_string(),
        }
    }
}

impl ValidationLimits {
    /// Load limits from environment variables, falling back to the defaults.
    ///
    /// | Env Var                          | Default                 |
    /// |----------------------------------|-------------------------|
    /// | `BIENESTAR_NAME_MAX_LEN`         | `50`                    |
    /// | `BIENESTAR_FULL_NAME_MAX_LEN`    | `100`                   |
    /// | `BIENESTAR_CODE_FLOOR`           | `195000000`             |
    /// | `BIENESTAR_NUIP_MIN_LEN`         | `8`                     |
    /// | `BIENESTAR_NUIP_MAX_LEN`         | `10`                    |
    /// | `BIENESTAR_PHONE_LEN`            | `10`                    |
    /// | `BIENESTAR_SEMESTER_MAX`         | `11`                    |
    /// | `BIENESTAR_STUDENT_EMAIL_DOMAIN` | `correounivalle.edu.co` |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let defaults = Self::default();

        let limits = Self {
            name_max_len: parse_var(&lookup, "BIENESTAR_NAME_MAX_LEN", defaults.name_max_len)?,
            full_name_max_len: parse_var(
                &lookup,
                "BIENESTAR_FULL_NAME_MAX_LEN",
                defaults.full_name_max_len,
            )?,
            code_floor: parse_var(&lookup, "BIENESTAR_CODE_FLOOR", defaults.code_floor)?,
            nuip_min_len: parse_var(&lookup, "BIENESTAR_NUIP_MIN_LEN", defaults.nuip_min_len)?,
            nuip_max_len: parse_var(&lookup, "BIENESTAR_NUIP_MAX_LEN", defaults.nuip_max_len)?,
            phone_len: parse_var(&lookup, "BIENESTAR_PHONE_LEN", defaults.phone_len)?,
            semester_max: parse_var(&lookup, "BIENESTAR_SEMESTER_MAX", defaults.semester_max)?,
            student_email_domain: lookup("BIENESTAR_STUDENT_EMAIL_DOMAIN")
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.student_email_domain),
        };

        limits.validate()?;
        Ok(limits)
    }

    /// Reject combinations no input could ever satisfy.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.nuip_min_len > self.nuip_max_len {
            return Err(CoreError::Config {
                var: "BIENESTAR_NUIP_MIN_LEN",
                message: format!(
                    "minimum {} exceeds maximum {}",
                    self.nuip_min_len, self.nuip_max_len
                ),
            });
        }
        if self.name_max_len > self.full_name_max_len {
            return Err(CoreError::Config {
                var: "BIENESTAR_NAME_MAX_LEN",
                message: format!(
                    "single name limit {} exceeds full name limit {}",
                    self.name_max_len, self.full_name_max_len
                ),
            });
        }
        if self.student_email_domain.is_empty() {
            return Err(CoreError::Config {
                var: "BIENESTAR_STUDENT_EMAIL_DOMAIN",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, CoreError>
where
    T: FromStr + std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => {
            let value = raw.trim().parse::<T>().map_err(|_| CoreError::Config {
                var,
                message: format!("'{raw}' is not a valid number"),
            })?;
            tracing::debug!(var, %value, "Validation limit overridden");
            Ok(value)
        }
    }
}
