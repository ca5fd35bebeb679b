// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The signed-in user's profile card.

use serde::{Deserialize, Serialize};

/// Role markers produced by stringifying an object; never shown.
const OBJECT_ROLE_MARKERS: [&str; 2] = ["[object Object]", "object Object"];

/// A role as the user service sends it: either a name or a `{ name }` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleField {
    /// A role record.
    Named {
        /// The role name.
        name: String,
    },
    /// A bare role string.
    Plain(String),
}

impl RoleField {
    /// The role's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Named { name } | Self::Plain(name) => name,
        }
    }
}

/// The authenticated user as delivered by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Role, in either shape.
    #[serde(default)]
    pub role: Option<RoleField>,
    /// Locale tag used by the calendar renderer (e.g. `tr`, `en-GB`).
    #[serde(default)]
    pub language: Option<String>,
}

/// Session values used when the profile lacks a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFallback {
    /// Name stored in the session.
    pub name: String,
    /// Email stored in the session.
    pub email: String,
    /// Roles stored in the session.
    pub roles: String,
}

/// What the profile card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    /// Resolved display name.
    pub name: String,
    /// Resolved email.
    pub email: String,
    /// Resolved role; `None` hides the role line.
    pub role: Option<String>,
}

impl ProfileCard {
    /// Resolves the card from the profile, falling back to the session.
    #[must_use]
    pub fn resolve(profile: Option<&UserProfile>, fallback: &SessionFallback) -> Self {
        let present = |value: Option<&String>| value.filter(|v| !v.is_empty()).cloned();

        let name: String = present(profile.and_then(|p| p.name.as_ref()))
            .unwrap_or_else(|| fallback.name.clone());
        let email: String = present(profile.and_then(|p| p.email.as_ref()))
            .unwrap_or_else(|| fallback.email.clone());

        let raw_role: &str = profile
            .and_then(|p| p.role.as_ref())
            .map_or(fallback.roles.as_str(), RoleField::name);
        let role: Option<String> = (!raw_role.is_empty()
            && !OBJECT_ROLE_MARKERS.contains(&raw_role))
        .then(|| raw_role.to_string());

        Self { name, email, role }
    }

    /// The greeting line.
    #[must_use]
    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fallback() -> SessionFallback {
        SessionFallback {
            name: String::from("Session Name"),
            email: String::from("session@example.com"),
            roles: String::from("viewer"),
        }
    }

    #[test]
    fn test_profile_values_win_over_session() {
        let profile: UserProfile = UserProfile {
            name: Some(String::from("Deniz")),
            email: Some(String::from("deniz@example.com")),
            role: Some(RoleField::Plain(String::from("manager"))),
            language: Some(String::from("tr")),
        };

        let card: ProfileCard = ProfileCard::resolve(Some(&profile), &fallback());

        assert_eq!(card.name, "Deniz");
        assert_eq!(card.email, "deniz@example.com");
        assert_eq!(card.role.as_deref(), Some("manager"));
        assert_eq!(card.greeting(), "Welcome, Deniz");
    }

    #[test]
    fn test_missing_profile_uses_session() {
        let card: ProfileCard = ProfileCard::resolve(None, &fallback());

        assert_eq!(card.name, "Session Name");
        assert_eq!(card.email, "session@example.com");
        assert_eq!(card.role.as_deref(), Some("viewer"));
    }

    #[test]
    fn test_empty_profile_fields_use_session() {
        let profile: UserProfile = UserProfile {
            name: Some(String::new()),
            ..UserProfile::default()
        };

        let card: ProfileCard = ProfileCard::resolve(Some(&profile), &fallback());
        assert_eq!(card.name, "Session Name");
    }

    #[test]
    fn test_role_record_resolves_to_name() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"Ece","role":{"name":"admin"}}"#).unwrap();

        let card: ProfileCard = ProfileCard::resolve(Some(&profile), &fallback());
        assert_eq!(card.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_stringified_object_role_is_hidden() {
        for marker in OBJECT_ROLE_MARKERS {
            let profile: UserProfile = UserProfile {
                role: Some(RoleField::Plain(marker.to_string())),
                ..UserProfile::default()
            };
            let card: ProfileCard = ProfileCard::resolve(Some(&profile), &fallback());
            assert_eq!(card.role, None);
        }
    }

    #[test]
    fn test_empty_role_is_hidden() {
        let session: SessionFallback = SessionFallback {
            roles: String::new(),
            ..fallback()
        };
        let card: ProfileCard = ProfileCard::resolve(None, &session);
        assert_eq!(card.role, None);
    }
}
