use serde::Deserialize;
use ts_rs::TS;

use super::entities::StudentStatus;
use crate::models::{ListQuery, SortOrder};
use crate::utils::validate::{FieldError, Validator, validate_date};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub matricule: String,
    pub nom: String,
    pub prenom: String,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub filiere: String,
    pub niveau: String,
    pub room_id: Option<i64>,
    pub status: Option<StudentStatus>,
    /// "YYYY-MM-DD"
    pub date_naissance: Option<String>,
    pub school_id: Option<i64>,
}

impl CreateStudentRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("matricule", &self.matricule)
            .required("nom", &self.nom)
            .required("prenom", &self.prenom)
            .email("email", self.email.as_deref())
            .phone("telephone", self.telephone.as_deref())
            .required("filiere", &self.filiere)
            .required("niveau", &self.niveau);
        if let Some(date) = self.date_naissance.as_deref().filter(|d| !d.trim().is_empty()) {
            v.rule("date_naissance", validate_date(date.trim()).map(|_| ()));
        }
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub matricule: Option<String>,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub filiere: Option<String>,
    pub niveau: Option<String>,
    pub room_id: Option<i64>,
    pub status: Option<StudentStatus>,
    pub date_naissance: Option<String>,
}

impl UpdateStudentRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        for (field, value) in [
            ("matricule", &self.matricule),
            ("nom", &self.nom),
            ("prenom", &self.prenom),
            ("filiere", &self.filiere),
            ("niveau", &self.niveau),
        ] {
            if let Some(value) = value {
                v.required(field, value);
            }
        }
        v.email("email", self.email.as_deref())
            .phone("telephone", self.telephone.as_deref());
        if let Some(date) = self.date_naissance.as_deref().filter(|d| !d.trim().is_empty()) {
            v.rule("date_naissance", validate_date(date.trim()).map(|_| ()));
        }
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub filiere: Option<String>,
    pub niveau: Option<String>,
    pub room_id: Option<i64>,
    pub school_id: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl From<StudentListParams> for ListQuery {
    fn from(p: StudentListParams) -> Self {
        ListQuery::new()
            .search(p.search)
            .filter("status", p.status)
            .filter("filiere", p.filiere)
            .filter("niveau", p.niveau)
            .filter("room_id", p.room_id.map(|id| id.to_string()))
            .sort_by(p.sort, p.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_only_checked_when_present() {
        let req: CreateStudentRequest = serde_json::from_value(serde_json::json!({
            "matricule": "ETU-001",
            "nom": "Fall",
            "prenom": "Fatou",
            "email": "",
            "filiere": "Informatique",
            "niveau": "L1"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_bad_birth_date() {
        let req: CreateStudentRequest = serde_json::from_value(serde_json::json!({
            "matricule": "ETU-001",
            "nom": "Fall",
            "prenom": "Fatou",
            "filiere": "Informatique",
            "niveau": "L1",
            "date_naissance": "12/05/2004"
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "date_naissance");
    }
}
