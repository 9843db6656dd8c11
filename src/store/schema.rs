use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::{Language, Progress, UserProfile, UserType};

pub const PROFILE_KEY: &str = "mysaathi_profile";
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("malformed profile record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported schema version {found} (expected {expected})")]
    UnsupportedVersion { found: u64, expected: u32 },

    #[error("profile record is missing {0}")]
    Incomplete(&'static str),
}

/// On-disk envelope around the profile.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub profile: UserProfile,
}

impl StoredProfile {
    pub fn wrap(profile: &UserProfile) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            saved_at: Utc::now(),
            profile: profile.clone(),
        }
    }
}

/// Flat, unversioned shape written before the envelope existed. Counters sat
/// next to the identity fields and were all optional.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProfile {
    pub name: String,
    pub user_type: Option<UserType>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub nickname: String,
    pub grade: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    pub school: Option<String>,
    #[serde(default)]
    pub teaching_subjects: Vec<String>,
    #[serde(default)]
    pub teaching_classes: Vec<String>,
    pub points: Option<u32>,
    pub streak: Option<u32>,
    pub topics_mastered: Option<u32>,
    pub hours_learned: Option<f64>,
}

impl LegacyProfile {
    fn upgrade(self) -> Result<UserProfile, SchemaError> {
        let role = self.user_type.ok_or(SchemaError::Incomplete("userType"))?;
        let nickname = if self.nickname.is_empty() {
            role.default_nickname().to_string()
        } else {
            self.nickname
        };
        let progress = match role {
            UserType::Student => Some(Progress {
                points: self.points.unwrap_or(0),
                streak: self.streak.unwrap_or(0),
                topics_mastered: self.topics_mastered.unwrap_or(0),
                hours_learned: self.hours_learned.unwrap_or(0.0),
            }),
            UserType::Teacher => None,
        };
        Ok(UserProfile {
            name: self.name,
            user_type: Some(role),
            language: self.language,
            nickname,
            grade: self.grade,
            subjects: self.subjects,
            school: self.school.filter(|s| !s.is_empty()),
            teaching_subjects: self.teaching_subjects,
            teaching_classes: self.teaching_classes,
            progress,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    Current(UserProfile),
    /// Record was in the legacy shape, or its counters did not match its
    /// role, and should be rewritten.
    Upgraded(UserProfile),
}

pub fn encode(profile: &UserProfile) -> Result<String, SchemaError> {
    Ok(serde_json::to_string_pretty(&StoredProfile::wrap(profile))?)
}

pub fn decode(raw: &str) -> Result<Decoded, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let mut decoded = match value.get("schemaVersion") {
        Some(version) => {
            let found = version.as_u64().unwrap_or(0);
            if found != SCHEMA_VERSION as u64 {
                return Err(SchemaError::UnsupportedVersion {
                    found,
                    expected: SCHEMA_VERSION,
                });
            }
            let stored: StoredProfile = serde_json::from_value(value)?;
            Decoded::Current(stored.profile)
        }
        None => {
            let legacy: LegacyProfile = serde_json::from_value(value)?;
            Decoded::Upgraded(legacy.upgrade()?)
        }
    };

    let (Decoded::Current(profile) | Decoded::Upgraded(profile)) = &mut decoded;
    validate(profile)?;
    let realigned = align_counters(profile);
    Ok(match decoded {
        Decoded::Current(profile) if realigned => Decoded::Upgraded(profile),
        other => other,
    })
}

/// Students always carry counters and teachers never do. Returns true if the
/// profile had to be changed.
fn align_counters(profile: &mut UserProfile) -> bool {
    match profile.user_type {
        Some(UserType::Student) if profile.progress.is_none() => {
            profile.progress = Some(Progress::default());
            true
        }
        Some(UserType::Teacher) if profile.progress.is_some() => {
            profile.progress = None;
            true
        }
        _ => false,
    }
}

/// Presence checks a stored profile has to pass to be used as-is.
fn validate(profile: &UserProfile) -> Result<(), SchemaError> {
    if profile.user_type.is_none() {
        return Err(SchemaError::Incomplete("userType"));
    }
    if profile.name.is_empty() {
        return Err(SchemaError::Incomplete("name"));
    }
    if profile.nickname.is_empty() {
        return Err(SchemaError::Incomplete("nickname"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CounterDelta, ProfilePatch};

    fn finished_student() -> UserProfile {
        let mut p = UserProfile::skeleton(UserType::Student, Language::English);
        p.name = "Asha".to_string();
        p.grade = Some("Class 8".to_string());
        p.subjects = vec!["Math".to_string()];
        p.progress = Some(Progress::default());
        p
    }

    #[test]
    fn test_encode_then_decode_is_current() {
        let profile = finished_student();
        let raw = encode(&profile).unwrap();
        assert!(raw.contains("\"schemaVersion\": 1"));
        assert_eq!(decode(&raw).unwrap(), Decoded::Current(profile));
    }

    #[test]
    fn test_future_version_rejected() {
        let raw = r#"{"schemaVersion": 7, "savedAt": "2026-01-01T00:00:00Z", "profile": {}}"#;
        let err = decode(raw).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnsupportedVersion { found: 7, expected: 1 }
        ));
        assert!(err.to_string().contains("unsupported schema version 7"));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(decode("{not json"), Err(SchemaError::Malformed(_))));
        assert!(matches!(decode("[1, 2]"), Err(SchemaError::Malformed(_))));
    }

    #[test]
    fn test_legacy_student_upgraded_with_counters() {
        let raw = r#"{
            "name": "Ravi",
            "userType": "student",
            "language": "hi",
            "nickname": "Dost",
            "grade": "Class 9",
            "subjects": ["Science"],
            "points": 120,
            "streak": 2,
            "topicsMastered": 1,
            "hoursLearned": 0.7
        }"#;
        let Decoded::Upgraded(profile) = decode(raw).unwrap() else {
            panic!("expected legacy upgrade");
        };
        assert_eq!(profile.language, Language::Hindi);
        let progress = profile.progress.unwrap();
        assert_eq!(progress.points, 120);
        assert_eq!(progress.topics_mastered, 1);
    }

    #[test]
    fn test_legacy_student_without_counters_gets_zeroes() {
        let raw = r#"{"name": "Ravi", "userType": "student", "nickname": "Buddy"}"#;
        let Decoded::Upgraded(profile) = decode(raw).unwrap() else {
            panic!("expected legacy upgrade");
        };
        assert_eq!(profile.progress, Some(Progress::default()));
    }

    #[test]
    fn test_legacy_teacher_drops_empty_school() {
        let raw = r#"{"name": "Meena", "userType": "teacher", "nickname": "", "school": ""}"#;
        let Decoded::Upgraded(profile) = decode(raw).unwrap() else {
            panic!("expected legacy upgrade");
        };
        assert_eq!(profile.nickname, "Assistant");
        assert_eq!(profile.school, None);
        assert!(profile.progress.is_none());
    }

    #[test]
    fn test_current_student_without_counters_gets_zeroes() {
        let mut profile = finished_student();
        profile.progress = None;
        let raw = encode(&profile).unwrap();
        let Decoded::Upgraded(decoded) = decode(&raw).unwrap() else {
            panic!("expected counters to be filled in");
        };
        assert_eq!(decoded.progress, Some(Progress::default()));

        let mut decoded = decoded;
        ProfilePatch::new()
            .add(CounterDelta::Points(10))
            .apply(&mut decoded);
        assert_eq!(decoded.progress().points, 10);
    }

    #[test]
    fn test_current_teacher_counters_are_dropped() {
        let mut profile = UserProfile::skeleton(UserType::Teacher, Language::English);
        profile.name = "Meena".to_string();
        profile.progress = Some(Progress {
            points: 5,
            ..Progress::default()
        });
        let raw = encode(&profile).unwrap();
        let Decoded::Upgraded(decoded) = decode(&raw).unwrap() else {
            panic!("expected counters to be dropped");
        };
        assert!(decoded.progress.is_none());
    }

    #[test]
    fn test_record_without_role_rejected() {
        let raw = r#"{"name": "", "userType": null, "nickname": "Buddy"}"#;
        assert!(matches!(
            decode(raw),
            Err(SchemaError::Incomplete("userType"))
        ));
    }

    #[test]
    fn test_record_without_name_rejected() {
        let mut profile = finished_student();
        profile.name.clear();
        let raw = encode(&profile).unwrap();
        assert!(matches!(decode(&raw), Err(SchemaError::Incomplete("name"))));
    }
}
