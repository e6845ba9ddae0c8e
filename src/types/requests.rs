use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PortfolioError;

/// Body of `POST /api/contact`. Missing keys and `null` deserialize as empty
/// strings so they surface as validation errors naming the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMessage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

impl NewMessage {
    /// Checks name, email, subject, message in that order.
    pub fn validate(&self) -> Result<(), PortfolioError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)
    }
}

/// Body of `POST /api/projects`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProject {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), PortfolioError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }
}

/// Body of `POST /api/skills`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSkill {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default)]
    pub proficiency: Option<i64>,
}

impl NewSkill {
    /// A proficiency of 0 counts as missing. Existing clients rely on this
    /// rule, so it stays even though 0 is a plausible value.
    pub fn validate(&self) -> Result<(), PortfolioError> {
        require("name", &self.name)?;
        require("category", &self.category)?;
        match self.proficiency {
            Some(p) if p != 0 => Ok(()),
            _ => Err(PortfolioError::Validation {
                field: "proficiency",
            }),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn require(field: &'static str, value: &str) -> Result<(), PortfolioError> {
    if value.is_empty() {
        return Err(PortfolioError::Validation { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_field(result: Result<(), PortfolioError>) -> Option<&'static str> {
        match result {
            Err(PortfolioError::Validation { field }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn message_reports_first_missing_field() {
        let msg = NewMessage {
            name: "Ada".into(),
            ..Default::default()
        };
        assert_eq!(missing_field(msg.validate()), Some("email"));

        let msg = NewMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: String::new(),
        };
        assert_eq!(missing_field(msg.validate()), Some("subject"));
    }

    #[test]
    fn message_with_all_fields_is_valid() {
        let msg = NewMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        };
        assert!(msg.validate().is_ok());
    }

    #[test]
    fn project_optional_fields_default() {
        let project: NewProject =
            serde_json::from_str(r#"{"title":"Folio","description":"This site"}"#).unwrap();
        assert!(project.validate().is_ok());
        assert!(project.technologies.is_none());
        assert!(project.image_url.is_none());
    }

    #[test]
    fn project_requires_description() {
        let project: NewProject = serde_json::from_str(r#"{"title":"Folio"}"#).unwrap();
        assert_eq!(missing_field(project.validate()), Some("description"));
    }

    #[test]
    fn null_fields_count_as_missing() {
        let msg: NewMessage = serde_json::from_str(
            r#"{"name":null,"email":"ada@example.com","subject":"Hi","message":"Hello"}"#,
        )
        .unwrap();
        assert_eq!(missing_field(msg.validate()), Some("name"));

        let project: NewProject =
            serde_json::from_str(r#"{"title":null,"description":"This site"}"#).unwrap();
        assert_eq!(missing_field(project.validate()), Some("title"));

        let skill: NewSkill =
            serde_json::from_str(r#"{"name":"Rust","category":null,"proficiency":null}"#).unwrap();
        assert_eq!(missing_field(skill.validate()), Some("category"));
    }

    #[test]
    fn zero_proficiency_is_rejected() {
        // Suspect legacy behaviour: 0 is treated like an absent value.
        let skill = NewSkill {
            name: "Rust".into(),
            category: "backend".into(),
            proficiency: Some(0),
        };
        assert_eq!(missing_field(skill.validate()), Some("proficiency"));
    }

    #[test]
    fn negative_proficiency_is_accepted() {
        let skill = NewSkill {
            name: "Rust".into(),
            category: "backend".into(),
            proficiency: Some(-1),
        };
        assert!(skill.validate().is_ok());
    }
}
