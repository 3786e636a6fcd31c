use teloxide::types::UserId;

/// Empty allow-list admits everyone; otherwise membership decides.
pub fn is_authorized(user_id: UserId, allow_list: &[u64]) -> bool {
    allow_list.is_empty() || allow_list.contains(&user_id.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_allow_list_admits_everyone() {
        assert!(is_authorized(UserId(1), &[]));
        assert!(is_authorized(UserId(u64::MAX), &[]));
    }

    #[test]
    fn member_of_allow_list_is_admitted() {
        assert!(is_authorized(UserId(42), &[42, 7]));
        assert!(is_authorized(UserId(7), &[42, 7]));
    }

    #[test]
    fn non_member_is_rejected() {
        assert!(!is_authorized(UserId(99), &[42, 7]));
    }
}
