use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{Listable, SortValue};

define_str_enum! {
    /// 学生学籍状态
    #[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
    pub enum StudentStatus {
        Active => "active",
        Suspended => "suspended",
        Graduated => "graduated",
        Withdrawn => "withdrawn",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub school_id: i64,
    /// 学号，学校内唯一
    pub matricule: String,
    pub nom: String,
    pub prenom: String,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub filiere: String,
    pub niveau: String,
    pub room_id: Option<i64>,
    pub status: StudentStatus,
    pub date_naissance: Option<chrono::NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Listable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.nom.as_str(),
            self.prenom.as_str(),
            self.matricule.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.to_string()),
            "filiere" => Some(self.filiere.clone()),
            "niveau" => Some(self.niveau.clone()),
            "room_id" => self.room_id.map(|id| id.to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "matricule" => Some(self.matricule.as_str().into()),
            "nom" => Some(self.nom.as_str().into()),
            "prenom" => Some(self.prenom.as_str().into()),
            "filiere" => Some(self.filiere.as_str().into()),
            "niveau" => Some(self.niveau.as_str().into()),
            "date_naissance" => self
                .date_naissance
                .map(|d| SortValue::from(d.format("%Y-%m-%d").to_string())),
            "created_at" => Some(self.created_at.timestamp().into()),
            _ => None,
        }
    }
}
