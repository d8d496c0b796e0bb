//! Content records
//!
//! Everything here is read-only for the lifetime of the page. Wire names are
//! camelCase to match the JSON collections.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The page owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
}

impl Person {
    /// Text before the first space ("Ada Lovelace" -> "Ada")
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }

    /// First sentence of the bio, period included
    pub fn bio_teaser(&self) -> String {
        let first = self.bio.split('.').next().unwrap_or_default();
        format!("{}.", first)
    }
}

/// Platform -> URL pairs, in the order the author wrote them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SocialLinks(Vec<(String, String)>);

impl SocialLinks {
    pub fn new(links: Vec<(String, String)>) -> Self {
        Self(links)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SocialLinks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (platform, url) in &self.0 {
            map.serialize_entry(platform, url)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SocialLinks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LinksVisitor;

        impl<'de> Visitor<'de> for LinksVisitor {
            type Value = SocialLinks;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of platform to url")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut links = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((platform, url)) = map.next_entry::<String, Option<String>>()? {
                    links.push((platform, url.unwrap_or_default()));
                }
                Ok(SocialLinks(links))
            }
        }

        deserializer.deserialize_map(LinksVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub image: String,
    /// Display order is the author's; filtering only tests membership
    pub technologies: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percent, 0-100 (checked by `ContentStore`)
    pub level: u8,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub image: String,
    #[serde(deserialize_with = "content_date::required")]
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub verify_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(deserialize_with = "content_date::required")]
    pub start_date: NaiveDate,
    #[serde(default, deserialize_with = "content_date::optional")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Option<Vec<String>>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Experience {
    /// End date, or None while the role is current
    pub fn effective_end(&self) -> Option<NaiveDate> {
        if self.current { None } else { self.end_date }
    }
}

/// Content dates: `YYYY-MM-DD`, or `YYYY-MM` meaning the first of the month
pub mod content_date {
    use chrono::NaiveDate;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn parse(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d"))
            .ok()
    }

    pub fn required<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw)))
    }

    pub fn optional<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bio_teaser_first_sentence() {
        let person: Person = serde_json::from_str(
            r#"{"name":"Ada Lovelace","title":"Engineer","bio":"I build things. Mostly software.",
                "location":"London","email":"ada@example.com","phone":"+44 1"}"#,
        )
        .unwrap();
        assert_eq!(person.bio_teaser(), "I build things.");
        assert_eq!(person.first_name(), "Ada");
        assert!(person.resume_url.is_none());
        assert!(person.social.is_empty());
    }

    #[test]
    fn test_bio_without_period_gets_one() {
        let person = Person {
            name: "Solo".into(),
            title: String::new(),
            bio: "No period here".into(),
            location: String::new(),
            email: String::new(),
            phone: String::new(),
            languages: vec![],
            photo: None,
            resume_url: None,
            social: SocialLinks::default(),
        };
        assert_eq!(person.bio_teaser(), "No period here.");
        assert_eq!(person.first_name(), "Solo");
    }

    #[test]
    fn test_social_links_keep_author_order() {
        let links: SocialLinks = serde_json::from_str(
            r#"{"twitter":"https://t.co/x","github":"https://github.com/x","email":null}"#,
        )
        .unwrap();
        let keys: Vec<&str> = links.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["twitter", "github", "email"]);
        let email = links.iter().find(|(k, _)| *k == "email").map(|(_, v)| v);
        assert_eq!(email, Some(""));
    }

    #[test]
    fn test_content_dates() {
        assert_eq!(
            content_date::parse("2022-03-01"),
            NaiveDate::from_ymd_opt(2022, 3, 1)
        );
        assert_eq!(
            content_date::parse("2022-03"),
            NaiveDate::from_ymd_opt(2022, 3, 1)
        );
        assert_eq!(content_date::parse("March 2022"), None);
    }

    #[test]
    fn test_current_role_ignores_end_date() {
        let exp: Experience = serde_json::from_str(
            r#"{"title":"Dev","company":"Acme","location":"Remote","startDate":"2022-03-01",
                "endDate":"2023-06-01","current":true,"description":"d","technologies":["Rust"]}"#,
        )
        .unwrap();
        assert_eq!(exp.effective_end(), None);
        assert!(exp.responsibilities.is_none());
    }
}
