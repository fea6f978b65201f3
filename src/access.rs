use serde::Serialize;

/// Structured gate result. Denial is data, not an error: the message is shown
/// to the visitor as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl AccessDecision {
    const fn allow() -> Self {
        Self {
            allowed: true,
            message: None,
        }
    }

    const fn deny(message: &'static str) -> Self {
        Self {
            allowed: false,
            message: Some(message),
        }
    }
}

/// Top-level areas of the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Offers,
    Requests,
    Orders,
    Reviews,
    Profile,
}

const SIGN_IN_TO_CREATE: &str = "Войдите в аккаунт, чтобы разместить объявление";

/// Only listing creation requires an account.
pub const fn can_create_listing(is_authenticated: bool) -> AccessDecision {
    if is_authenticated {
        AccessDecision::allow()
    } else {
        AccessDecision::deny(SIGN_IN_TO_CREATE)
    }
}

/// Browsing is open to everyone; kept as a seam for future per-section rules.
pub const fn check_access_permission(_is_authenticated: bool, _section: Section) -> AccessDecision {
    AccessDecision::allow()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_visitor_cannot_create_listing() {
        let decision = can_create_listing(false);
        assert!(!decision.allowed);
        let message = decision.message.expect("denial carries a prompt");
        assert!(!message.is_empty());
    }

    #[test]
    fn authenticated_user_creates_without_prompt() {
        let decision = can_create_listing(true);
        assert!(decision.allowed);
        assert_eq!(decision.message, None);
    }

    #[test]
    fn every_section_is_open_to_everyone() {
        let sections = [
            Section::Offers,
            Section::Requests,
            Section::Orders,
            Section::Reviews,
            Section::Profile,
        ];
        for section in sections {
            assert!(check_access_permission(false, section).allowed);
            assert!(check_access_permission(true, section).allowed);
        }
    }
}
