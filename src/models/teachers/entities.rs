use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{Listable, SortValue};

define_str_enum! {
    /// 教师聘用类型
    #[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
    pub enum TeacherType {
        Permanent => "PERMANENT",
        Vacataire => "VACATAIRE",
        Contractuel => "CONTRACTUEL",
    }
}

define_str_enum! {
    /// 教师职称
    #[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
    pub enum TeacherGrade {
        Assistant => "ASSISTANT",
        MaitreAssistant => "MAITRE_ASSISTANT",
        MaitreDeConferences => "MAITRE_DE_CONFERENCES",
        Professeur => "PROFESSEUR",
    }
}

impl TeacherGrade {
    /// 职称等级，用于排序
    pub fn rank(&self) -> i64 {
        match self {
            TeacherGrade::Assistant => 1,
            TeacherGrade::MaitreAssistant => 2,
            TeacherGrade::MaitreDeConferences => 3,
            TeacherGrade::Professeur => 4,
        }
    }
}

/// 教师（Enseignant）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub school_id: i64,
    /// 关联的登录账号
    pub user_id: Option<i64>,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    #[serde(rename = "type")]
    pub teacher_type: TeacherType,
    pub grade: TeacherGrade,
    pub specialite: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Teacher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }
}

impl Listable for Teacher {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.nom.as_str(), self.prenom.as_str(), self.email.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "type" => Some(self.teacher_type.to_string()),
            "grade" => Some(self.grade.to_string()),
            "specialite" => self.specialite.clone(),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "nom" => Some(self.nom.as_str().into()),
            "prenom" => Some(self.prenom.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "grade" => Some(self.grade.rank().into()),
            "created_at" => Some(self.created_at.timestamp().into()),
            _ => None,
        }
    }
}
