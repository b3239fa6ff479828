use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    /// Self-assessed proficiency, 0..=100.
    #[serde(default = "default_skill_level")]
    pub level: i32,
}

fn default_skill_level() -> i32 {
    50
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub credential_id: String,
    #[serde(default)]
    pub credential_url: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub currently_studying: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub currently_working: bool,
}

/// Identity record. The password hash never leaves the store boundary in a
/// serialized form.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String, // unique, stored lowercase
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub bio: String,
    pub title: String,
    pub location: String,
    pub avatar: String,
    pub social_links: Json<SocialLinks>,
    pub skills: Json<Vec<SkillEntry>>,
    pub certifications: Json<Vec<Certification>>,
    pub education: Json<Vec<EducationEntry>>,
    pub experience: Json<Vec<ExperienceEntry>>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Fields consumed when creating an identity. The plaintext password is
/// hashed by the caller before it reaches the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial profile update; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
    pub social_links: Option<SocialLinks>,
}

/// Wholesale replacement of one list-valued profile section. Last write wins;
/// there is deliberately no merge logic.
#[derive(Debug, Clone)]
pub enum SectionUpdate {
    Skills(Vec<SkillEntry>),
    Certifications(Vec<Certification>),
    Education(Vec<EducationEntry>),
    Experience(Vec<ExperienceEntry>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_json_never_contains_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ann".into(),
            email: "ann@x.com".into(),
            password_hash: "argon2-hash".into(),
            bio: String::new(),
            title: String::new(),
            location: String::new(),
            avatar: String::new(),
            social_links: Json(SocialLinks::default()),
            skills: Json(vec![]),
            certifications: Json(vec![]),
            education: Json(vec![]),
            experience: Json(vec![]),
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2-hash"));
        assert!(json.contains("ann@x.com"));
    }

    #[test]
    fn skill_level_defaults_to_fifty() {
        let skill: SkillEntry = serde_json::from_str(r#"{"name":"Rust"}"#).unwrap();
        assert_eq!(skill.level, 50);
    }
}
