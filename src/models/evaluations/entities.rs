use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::{Listable, SortValue};

define_str_enum! {
    /// 评测类型
    #[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
    pub enum EvaluationType {
        Devoir => "DEVOIR",
        Controle => "CONTROLE",
        Examen => "EXAMEN",
    }
}

/// 成绩记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Evaluation {
    pub id: i64,
    pub school_id: i64,
    pub student_id: i64,
    pub teacher_id: Option<i64>,
    pub subject: String,
    pub evaluation_type: EvaluationType,
    pub score: f64,
    pub max_score: f64,
    pub coefficient: f64,
    pub term: String,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Evaluation {
    /// 换算为 20 分制
    pub fn score_on_20(&self) -> f64 {
        if self.max_score <= 0.0 {
            return 0.0;
        }
        self.score / self.max_score * 20.0
    }
}

impl Listable for Evaluation {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.subject.as_str(), self.term.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "evaluation_type" => Some(self.evaluation_type.to_string()),
            "term" => Some(self.term.clone()),
            "subject" => Some(self.subject.clone()),
            "student_id" => Some(self.student_id.to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, key: &str) -> Option<SortValue> {
        match key {
            "score" => Some(self.score_on_20().into()),
            "subject" => Some(self.subject.as_str().into()),
            "term" => Some(self.term.as_str().into()),
            "created_at" => Some(self.created_at.timestamp().into()),
            _ => None,
        }
    }
}
