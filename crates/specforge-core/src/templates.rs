//! Fixed engineering-spec starter templates.
//!
//! The generator maintains a closed mapping from template key to a heading
//! and a markdown body. Lookup is total: unknown keys fall back to the
//! feature template, so there are no error conditions here.

use std::fmt;

/// The three built-in template kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateKey {
    /// Feature specification starter.
    #[default]
    Feature,
    /// Bugfix specification starter.
    Bugfix,
    /// API specification starter.
    Api,
}

impl TemplateKey {
    /// All keys, in selector order.
    pub const ALL: [TemplateKey; 3] = [Self::Feature, Self::Bugfix, Self::Api];

    /// Parse a key string, defaulting to `Feature` for anything unknown.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        match key {
            "bugfix" => Self::Bugfix,
            "api" => Self::Api,
            _ => Self::Feature,
        }
    }

    /// Canonical key string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Bugfix => "bugfix",
            Self::Api => "api",
        }
    }

    /// Human-readable selector label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Feature => "Feature Spec",
            Self::Bugfix => "Bugfix Spec",
            Self::Api => "API Spec",
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A spec starter: heading shown above the output plus the markdown body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecTemplate {
    pub heading: &'static str,
    pub body: &'static str,
}

const FEATURE: SpecTemplate = SpecTemplate {
    heading: "Feature Spec",
    body: "## Problem\n\
           - What user pain is this solving?\n\
           \n\
           ## Proposal\n\
           - Describe the behavior and UX details.\n\
           \n\
           ## Acceptance Criteria\n\
           - [ ] Happy path works for signed-in users.\n\
           - [ ] Validation and error states are handled.\n\
           \n\
           ## Rollout\n\
           - Internal dogfood for 1 week, then 10% rollout.",
};

const BUGFIX: SpecTemplate = SpecTemplate {
    heading: "Bugfix Spec",
    body: "## Bug Summary\n\
           - Explain the observed issue and expected behavior.\n\
           \n\
           ## Reproduction Steps\n\
           1. Step one\n\
           2. Step two\n\
           \n\
           ## Root Cause Hypothesis\n\
           - Why do we think this happens?\n\
           \n\
           ## Verification\n\
           - [ ] Regression test added.\n\
           - [ ] Manual test plan documented.",
};

const API: SpecTemplate = SpecTemplate {
    heading: "API Spec",
    body: "## Endpoint\n\
           - `POST /v1/example`\n\
           \n\
           ## Request Schema\n\
           - Include required fields and validation.\n\
           \n\
           ## Response Schema\n\
           - Success and error payloads with status codes.\n\
           \n\
           ## Backward Compatibility\n\
           - Define migration strategy and deprecation plan.",
};

/// Look up the template for a key.
#[must_use]
pub const fn template(key: TemplateKey) -> &'static SpecTemplate {
    match key {
        TemplateKey::Feature => &FEATURE,
        TemplateKey::Bugfix => &BUGFIX,
        TemplateKey::Api => &API,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bugfix_body_starts_with_bug_summary() {
        let t = template(TemplateKey::parse("bugfix"));
        assert!(t.body.starts_with("## Bug Summary"));
        assert_eq!(t.heading, "Bugfix Spec");
    }

    #[test]
    fn unknown_key_falls_back_to_feature() {
        assert_eq!(TemplateKey::parse("zzz"), TemplateKey::Feature);
        let t = template(TemplateKey::parse("zzz"));
        assert_eq!(t.heading, "Feature Spec");
        assert!(t.body.starts_with("## Problem"));
    }

    #[test]
    fn keys_round_trip_through_as_str() {
        for key in TemplateKey::ALL {
            assert_eq!(TemplateKey::parse(key.as_str()), key);
        }
    }
}
