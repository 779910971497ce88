use std::env;

use crate::s3::Error;

/// Configuration for obfuscated uploads
#[derive(Debug, Clone)]
pub struct Config {
    pub bucket: String,
    pub region: String,
    pub profile: Option<String>,
}

impl Config {
    /// Load configuration from environment variables and .env file
    ///
    /// # Errors
    ///
    /// Returns an error if `S3_BUCKET_NAME` or `AWS_REGION` is missing or empty
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok(); // Load .env file if it exists

        Self::from_vars(
            env::var("S3_BUCKET_NAME").ok(),
            env::var("AWS_REGION").ok(),
            env::var("AWS_PROFILE").ok(),
        )
    }

    /// Build configuration from already-resolved values
    pub fn from_vars(
        bucket: Option<String>,
        region: Option<String>,
        profile: Option<String>,
    ) -> Result<Self, Error> {
        let bucket = Self::require("S3_BUCKET_NAME", bucket)?;
        let region = Self::require("AWS_REGION", region)?;
        let profile = profile
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Ok(Self {
            bucket,
            region,
            profile,
        })
    }

    fn require(name: &str, value: Option<String>) -> Result<String, Error> {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            Some(_) => Err(Error::config(format!("{name} cannot be empty"))),
            None => Err(Error::config(format!(
                "{name} not found in environment. Please set it in .env file"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_from_vars_valid() {
        let config = Config::from_vars(some("my-bucket"), some("us-west-2"), None).unwrap();
        assert_eq!(config.bucket, "my-bucket");
        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.profile, None);
    }

    #[test]
    fn test_from_vars_trims_whitespace() {
        let config =
            Config::from_vars(some("  backups "), some("eu-west-1\n"), some(" work ")).unwrap();
        assert_eq!(config.bucket, "backups");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.profile.as_deref(), Some("work"));
    }

    #[test]
    fn test_from_vars_missing_values() {
        let err = Config::from_vars(None, some("us-west-2"), None).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("S3_BUCKET_NAME"));

        let err = Config::from_vars(some("my-bucket"), None, None).unwrap_err();
        assert!(err.to_string().contains("AWS_REGION"));
    }

    #[test]
    fn test_from_vars_empty_values() {
        assert!(Config::from_vars(some(""), some("us-west-2"), None).is_err());
        assert!(Config::from_vars(some("my-bucket"), some("   "), None).is_err());
    }

    #[test]
    fn test_bucket_names_are_not_otherwise_validated() {
        // Only presence is checked; the backend is the authority on naming
        assert!(Config::from_vars(some("My_Bucket"), some("local"), None).is_ok());
    }

    #[test]
    fn test_empty_profile_is_ignored() {
        let config = Config::from_vars(some("b"), some("r"), some("")).unwrap();
        assert_eq!(config.profile, None);
    }
}
