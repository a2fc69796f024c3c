//! Profile singleton shown on the listing page.

use serde::{Deserialize, Serialize};

/// Owner profile rendered in the listing hero section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Role line, e.g. `Agentic Developer`.
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    /// External profile link. Serialized as `github` to match bundle naming.
    #[serde(rename = "github")]
    pub link: String,
    /// Free-text biography. Serialized as `about`.
    #[serde(rename = "about")]
    pub bio: String,
    /// Ordered skill labels; display order is preserved.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Profile {
    /// Returns the `mailto:` href for the profile email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::Profile;

    fn sample() -> Profile {
        Profile {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            tagline: "Builds things.".to_string(),
            location: "Somewhere".to_string(),
            email: " ada@example.com ".to_string(),
            phone: "555-0100".to_string(),
            link: "https://example.com/ada".to_string(),
            bio: "Bio".to_string(),
            skills: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn mailto_trims_email() {
        assert_eq!(sample().mailto(), "mailto:ada@example.com");
    }

    #[test]
    fn serializes_with_bundle_field_names() {
        let json = serde_json::to_value(sample()).expect("profile should serialize");
        assert_eq!(json["github"], "https://example.com/ada");
        assert_eq!(json["about"], "Bio");
        assert!(json.get("link").is_none());
    }
}
