// ============================================================================
// CANDIDATE - Modelos de candidatos (lista, detalle, contacto)
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct Candidate {
    pub slug: String,
    pub display_name: String,
    pub desired_role: String,
    pub english_level: String,
    pub expected_salary_min_cny: i64,
    pub expected_salary_max_cny: i64,
    pub availability_days: i32,
    pub timezone: String,
    pub bc_experience: bool,
    pub summary: String,
    pub unlocked_contact: bool,
    pub skills: Vec<String>,
}

/// Detalle de candidato. `contact` solo viene si ya fue desbloqueado.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct CandidateDetail {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(default)]
    pub contact: Option<CandidateContact>,
}

impl CandidateDetail {
    /// Aplicar el contacto devuelto por `unlock`
    pub fn with_contact(mut self, contact: CandidateContact) -> Self {
        self.contact = Some(contact);
        self.candidate.unlocked_contact = true;
        self
    }

    pub fn visible_contact(&self) -> Option<&CandidateContact> {
        if self.candidate.unlocked_contact {
            self.contact.as_ref()
        } else {
            None
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct CandidateContact {
    pub tg_username: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct CandidateListResponse {
    #[serde(default)]
    pub items: Vec<Candidate>,
}

/// Parámetros de `GET /api/candidates`. Solo se envían los campos presentes.
#[derive(Clone, PartialEq, Debug)]
pub struct CandidateListParams {
    pub q: Option<String>,
    pub skill: Option<String>,
    pub english: Option<String>,
    pub bc_experience: Option<bool>,
    pub availability_days_max: Option<i32>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for CandidateListParams {
    fn default() -> Self {
        Self {
            q: None,
            skill: None,
            english: None,
            bc_experience: None,
            availability_days_max: None,
            salary_min: None,
            salary_max: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CandidateListParams {
    /// Pares de query string en el orden del API
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(v) = value {
                query.push((key.to_string(), v));
            }
        };
        push("q", self.q.clone());
        push("skill", self.skill.clone());
        push("english", self.english.clone());
        push("bc_experience", self.bc_experience.map(|b| b.to_string()));
        push(
            "availability_days_max",
            self.availability_days_max.map(|v| v.to_string()),
        );
        push("salary_min", self.salary_min.map(|v| v.to_string()));
        push("salary_max", self.salary_max.map(|v| v.to_string()));
        push("page", Some(self.page.max(1).to_string()));
        push(
            "page_size",
            Some(self.page_size.clamp(1, MAX_PAGE_SIZE).to_string()),
        );
        query
    }

    pub fn has_filters(&self) -> bool {
        self.q.is_some()
            || self.skill.is_some()
            || self.english.is_some()
            || self.bc_experience.is_some()
            || self.availability_days_max.is_some()
            || self.salary_min.is_some()
            || self.salary_max.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_query() {
        let params = CandidateListParams::default();
        assert!(!params.has_filters());
        assert_eq!(
            params.to_query(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("page_size".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_filters_query() {
        let params = CandidateListParams {
            q: Some("rust".into()),
            bc_experience: Some(true),
            salary_max: Some(50000),
            page: 3,
            page_size: 500,
            ..Default::default()
        };
        let query = params.to_query();
        assert_eq!(query[0], ("q".to_string(), "rust".to_string()));
        assert_eq!(query[1], ("bc_experience".to_string(), "true".to_string()));
        assert_eq!(query[2], ("salary_max".to_string(), "50000".to_string()));
        assert_eq!(query[3], ("page".to_string(), "3".to_string()));
        assert_eq!(query[4], ("page_size".to_string(), "100".to_string()));
    }

    #[test]
    fn test_detail_without_contact() {
        let json = r#"{
            "slug": "alice-rust",
            "display_name": "Alice",
            "desired_role": "Backend",
            "english_level": "fluent",
            "bc_experience": true,
            "unlocked_contact": false,
            "skills": ["Rust", "Go"]
        }"#;
        let detail: CandidateDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.candidate.slug, "alice-rust");
        assert_eq!(detail.candidate.skills.len(), 2);
        assert_eq!(detail.candidate.expected_salary_min_cny, 0);
        assert!(detail.contact.is_none());
        assert!(detail.visible_contact().is_none());
    }

    #[test]
    fn test_with_contact_marks_unlocked() {
        let detail = CandidateDetail::default().with_contact(CandidateContact {
            tg_username: "alice".into(),
            email: "alice@example.com".into(),
            phone: String::new(),
        });
        assert!(detail.candidate.unlocked_contact);
        assert_eq!(detail.visible_contact().map(|c| c.tg_username.as_str()), Some("alice"));
    }
}
