//! Authorship checks for article mutations.

use gazette_core::{GazetteError, GazetteResult, UserId};

/// Message returned when a user tries to modify someone else's article.
pub const NOT_AUTHORIZED_MESSAGE: &str = "You are not authorized to modify this article";

/// Pure ownership check between a resource author and an acting user.
///
/// Stateless and free of I/O. Only the author may mutate the resource.
pub fn check_access(author_id: UserId, acting_user_id: UserId) -> GazetteResult<()> {
    if author_id == acting_user_id {
        Ok(())
    } else {
        Err(GazetteError::forbidden(NOT_AUTHORIZED_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_user_is_noop() {
        let user = UserId::new();
        assert!(check_access(user, user).is_ok());
    }

    #[test]
    fn test_different_user_is_forbidden() {
        let err = check_access(UserId::new(), UserId::new()).unwrap_err();
        assert!(matches!(err, GazetteError::Forbidden(_)));
        assert_eq!(
            err.to_string(),
            format!("Forbidden: {}", NOT_AUTHORIZED_MESSAGE)
        );
    }
}
