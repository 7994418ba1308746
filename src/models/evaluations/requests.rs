use serde::Deserialize;
use ts_rs::TS;

use super::entities::EvaluationType;
use crate::models::{ListQuery, SortOrder};
use crate::utils::validate::{FieldError, Validator};

/// 分数区间：0 <= score <= max_score，max_score 与系数为正
pub fn score_rule(score: f64, max_score: f64) -> Result<(), &'static str> {
    if max_score <= 0.0 {
        return Err("Max score must be greater than 0");
    }
    if score < 0.0 || score > max_score {
        return Err("Score must be between 0 and max score");
    }
    Ok(())
}

fn coefficient_rule(coefficient: f64) -> Result<(), &'static str> {
    if coefficient <= 0.0 {
        return Err("Coefficient must be greater than 0");
    }
    Ok(())
}

fn default_max_score() -> f64 {
    20.0
}

fn default_coefficient() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct CreateEvaluationRequest {
    pub student_id: i64,
    pub teacher_id: Option<i64>,
    pub subject: String,
    pub evaluation_type: EvaluationType,
    pub score: f64,
    #[serde(default = "default_max_score")]
    pub max_score: f64,
    #[serde(default = "default_coefficient")]
    pub coefficient: f64,
    pub term: String,
    pub comment: Option<String>,
    pub school_id: Option<i64>,
}

impl CreateEvaluationRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Validator::new()
            .required("subject", &self.subject)
            .required("term", &self.term)
            .rule("score", score_rule(self.score, self.max_score))
            .rule("coefficient", coefficient_rule(self.coefficient))
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct UpdateEvaluationRequest {
    pub teacher_id: Option<i64>,
    pub subject: Option<String>,
    pub evaluation_type: Option<EvaluationType>,
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    pub coefficient: Option<f64>,
    pub term: Option<String>,
    pub comment: Option<String>,
}

impl UpdateEvaluationRequest {
    /// 分数需要与现有记录合并后校验，见服务层
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        if let Some(subject) = &self.subject {
            v.required("subject", subject);
        }
        if let Some(term) = &self.term {
            v.required("term", term);
        }
        if let Some(coefficient) = self.coefficient {
            v.rule("coefficient", coefficient_rule(coefficient));
        }
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListParams {
    pub search: Option<String>,
    pub evaluation_type: Option<String>,
    pub term: Option<String>,
    pub subject: Option<String>,
    pub student_id: Option<i64>,
    pub school_id: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl From<EvaluationListParams> for ListQuery {
    fn from(p: EvaluationListParams) -> Self {
        ListQuery::new()
            .search(p.search)
            .filter("evaluation_type", p.evaluation_type)
            .filter("term", p.term)
            .filter("subject", p.subject)
            .filter("student_id", p.student_id.map(|id| id.to_string()))
            .sort_by(p.sort, p.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds() {
        assert!(score_rule(15.0, 20.0).is_ok());
        assert!(score_rule(20.0, 20.0).is_ok());
        assert!(score_rule(21.0, 20.0).is_err());
        assert!(score_rule(-1.0, 20.0).is_err());
        assert!(score_rule(1.0, 0.0).is_err());
    }

    #[test]
    fn test_defaults_applied() {
        let req: CreateEvaluationRequest = serde_json::from_value(serde_json::json!({
            "student_id": 1,
            "subject": "Mathematiques",
            "evaluation_type": "EXAMEN",
            "score": 14.5,
            "term": "S1"
        }))
        .unwrap();
        assert_eq!(req.max_score, 20.0);
        assert_eq!(req.coefficient, 1.0);
        assert!(req.validate().is_ok());
    }
}
