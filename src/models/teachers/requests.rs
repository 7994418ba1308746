use serde::Deserialize;
use ts_rs::TS;

use super::entities::{TeacherGrade, TeacherType};
use crate::models::{ListQuery, SortOrder};
use crate::utils::validate::{FieldError, Validator};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    #[serde(rename = "type")]
    pub teacher_type: TeacherType,
    pub grade: TeacherGrade,
    pub specialite: Option<String>,
    pub school_id: Option<i64>,
}

impl CreateTeacherRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Validator::new()
            .required("nom", &self.nom)
            .required("prenom", &self.prenom)
            .required("email", &self.email)
            .email("email", Some(self.email.as_str()))
            .required("telephone", &self.telephone)
            .phone("telephone", Some(self.telephone.as_str()))
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    #[serde(rename = "type")]
    pub teacher_type: Option<TeacherType>,
    pub grade: Option<TeacherGrade>,
    pub specialite: Option<String>,
}

impl UpdateTeacherRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        if let Some(nom) = &self.nom {
            v.required("nom", nom);
        }
        if let Some(prenom) = &self.prenom {
            v.required("prenom", prenom);
        }
        if let Some(email) = &self.email {
            v.required("email", email).email("email", Some(email.as_str()));
        }
        if let Some(telephone) = &self.telephone {
            v.required("telephone", telephone)
                .phone("telephone", Some(telephone.as_str()));
        }
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub teacher_type: Option<String>,
    pub grade: Option<String>,
    pub school_id: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl From<TeacherListParams> for ListQuery {
    fn from(p: TeacherListParams) -> Self {
        ListQuery::new()
            .search(p.search)
            .filter("type", p.teacher_type)
            .filter("grade", p.grade)
            .sort_by(p.sort, p.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn awa() -> CreateTeacherRequest {
        serde_json::from_value(serde_json::json!({
            "nom": "Diop",
            "prenom": "Awa",
            "email": "awa@ecole.sn",
            "telephone": "70000000",
            "type": "PERMANENT",
            "grade": "MAITRE_ASSISTANT"
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_teacher_request() {
        let req = awa();
        assert_eq!(req.teacher_type, TeacherType::Permanent);
        assert_eq!(req.grade, TeacherGrade::MaitreAssistant);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_invalid_phone_and_missing_name() {
        let mut req = awa();
        req.nom = String::new();
        req.telephone = "7000".to_string();
        let errors = req.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["nom", "telephone"]);
    }

    #[test]
    fn test_unknown_grade_is_rejected() {
        let result = serde_json::from_value::<CreateTeacherRequest>(serde_json::json!({
            "nom": "Diop", "prenom": "Awa", "email": "awa@ecole.sn",
            "telephone": "70000000", "type": "PERMANENT", "grade": "DOYEN"
        }));
        assert!(result.is_err());
    }
}
