use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub action: DecisionAction,
    pub reason: Reason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionAction {
    Allow,
    Deny,
}

/// Why a verdict was reached. Country reasons carry the looked-up code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    Whitelist,
    Blacklist,
    Private,
    CountryMatch(String),
    CountryDeny(String),
}

impl Verdict {
    pub fn allow(reason: Reason) -> Self {
        Self {
            action: DecisionAction::Allow,
            reason,
        }
    }

    pub fn deny(reason: Reason) -> Self {
        Self {
            action: DecisionAction::Deny,
            reason,
        }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self.action, DecisionAction::Allow)
    }
}

impl Reason {
    pub fn tag(&self) -> &'static str {
        match self {
            Reason::Whitelist => "WHITELIST",
            Reason::Blacklist => "BLACKLIST",
            Reason::Private => "PRIVATE",
            Reason::CountryMatch(_) => "COUNTRY_MATCH",
            Reason::CountryDeny(_) => "COUNTRY_DENY",
        }
    }
}

impl fmt::Display for DecisionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            DecisionAction::Allow => "Allow",
            DecisionAction::Deny => "Deny",
        };
        write!(f, "{value}")
    }
}

/// Renders the list tag, or the country code for geographic reasons.
impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::CountryMatch(code) | Reason::CountryDeny(code) => f.write_str(code),
            other => f.write_str(other.tag()),
        }
    }
}
