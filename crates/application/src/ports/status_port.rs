//! Status reporting port
//!
//! A pure side-effecting sink for the one-line panel status. Callable from
//! any component; infallible and synchronous, so no transition ever
//! depends on its outcome.

use domain::value_objects::Severity;
#[cfg(test)]
use mockall::automock;

/// Port for the panel status line
#[cfg_attr(test, automock)]
pub trait StatusPort: Send + Sync {
    /// Publish a status message with the given severity
    fn report(&self, message: &str, severity: Severity);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn StatusPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn StatusPort>();
    }
}
