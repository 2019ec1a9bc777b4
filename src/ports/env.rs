// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment provider trait definition.
//!
//! The resolver never reads `std::env` directly. It asks an `EnvProvider`, so
//! tests and embedders can substitute a fixed mapping for the process
//! environment.

/// A source of environment-variable overrides.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one provider is shared by every
/// caller of a resolver.
///
/// # Examples
///
/// ```rust
/// use sweester_config::ports::EnvProvider;
///
/// struct OnlyPort;
///
/// impl EnvProvider for OnlyPort {
///     fn name(&self) -> &str {
///         "only-port"
///     }
///
///     fn var(&self, name: &str) -> Option<String> {
///         (name == "DB_PORT").then(|| "13306".to_string())
///     }
/// }
///
/// assert_eq!(OnlyPort.var("DB_PORT").as_deref(), Some("13306"));
/// assert_eq!(OnlyPort.var("DB_USER"), None);
/// ```
pub trait EnvProvider: Send + Sync {
    /// Returns a short name for logging, such as `"process-env"`.
    fn name(&self) -> &str;

    /// Returns the value of the variable `name`, or `None` if it is unset.
    ///
    /// Callers treat an empty value the same as an unset one.
    fn var(&self, name: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoEnv;

    impl EnvProvider for NoEnv {
        fn name(&self) -> &str {
            "none"
        }

        fn var(&self, _name: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_env_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn EnvProvider>();
    }

    #[test]
    fn test_env_provider_boxed() {
        let provider: Box<dyn EnvProvider> = Box::new(NoEnv);
        assert_eq!(provider.name(), "none");
        assert!(provider.var("HOME").is_none());
    }
}
