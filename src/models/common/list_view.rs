//! 列表视图：对已取回的完整集合做搜索、分类筛选与排序
//!
//! 列表接口不分页，租户的全部记录一次取回后在内存中处理。
//! 服务端列表接口与 `client::EntityManager` 共用同一套逻辑。

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 空列表时返回的提示文案
pub const EMPTY_LIST_MESSAGE: &str = "No results";

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/list.ts")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// 排序键
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
}

impl SortValue {
    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

/// 可在列表视图中展示的实体
pub trait Listable {
    /// 参与文本搜索的字段
    fn search_fields(&self) -> Vec<&str>;

    /// 分类筛选字段的取值（status / type / filiere 等），未知字段返回 None
    fn filter_value(&self, key: &str) -> Option<String>;

    /// 排序键，未知字段返回 None
    fn sort_value(&self, key: &str) -> Option<SortValue>;
}

/// 列表查询条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
    pub sort: Option<String>,
    pub order: SortOrder,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: Option<String>) -> Self {
        self.search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    /// 添加分类筛选，空值忽略
    pub fn filter(mut self, key: &str, value: Option<String>) -> Self {
        if let Some(value) = value.map(|v| v.trim().to_string())
            && !value.is_empty()
        {
            self.filters.push((key.to_string(), value));
        }
        self
    }

    pub fn sort_by(mut self, sort: Option<String>, order: Option<SortOrder>) -> Self {
        self.sort = sort.filter(|s| !s.trim().is_empty());
        self.order = order.unwrap_or_default();
        self
    }

    fn matches<T: Listable>(&self, item: &T) -> bool {
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            let hit = item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        self.filters.iter().all(|(key, expected)| {
            item.filter_value(key)
                .is_some_and(|actual| actual.eq_ignore_ascii_case(expected))
        })
    }
}

/// 应用搜索、筛选与排序
pub fn apply_list_view<T: Listable>(items: Vec<T>, query: &ListQuery) -> Vec<T> {
    let filtered: Vec<T> = items.into_iter().filter(|item| query.matches(item)).collect();

    let Some(sort_key) = &query.sort else {
        return filtered;
    };

    let mut keyed: Vec<(Option<SortValue>, T)> = filtered
        .into_iter()
        .map(|item| (item.sort_value(sort_key), item))
        .collect();

    // 缺少排序键的条目始终排在末尾
    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match query.order {
            SortOrder::Asc => a.compare(b),
            SortOrder::Desc => b.compare(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, item)| item).collect()
}

/// 列表响应（完整集合）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/list.ts")]
pub struct ListResponse<T: TS> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T: TS> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }

    /// 响应提示：空集合为 "No results"
    pub fn message(&self, found: &str) -> String {
        if self.items.is_empty() {
            EMPTY_LIST_MESSAGE.to_string()
        } else {
            found.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        nom: String,
        prenom: String,
        status: String,
        age: Option<i64>,
    }

    impl Listable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.nom.as_str(), self.prenom.as_str()]
        }

        fn filter_value(&self, key: &str) -> Option<String> {
            match key {
                "status" => Some(self.status.clone()),
                _ => None,
            }
        }

        fn sort_value(&self, key: &str) -> Option<SortValue> {
            match key {
                "nom" => Some(self.nom.as_str().into()),
                "age" => self.age.map(SortValue::from),
                _ => None,
            }
        }
    }

    fn row(nom: &str, prenom: &str, status: &str, age: Option<i64>) -> Row {
        Row {
            nom: nom.to_string(),
            prenom: prenom.to_string(),
            status: status.to_string(),
            age,
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            row("Diop", "Awa", "active", Some(21)),
            row("Ndiaye", "Moussa", "suspended", None),
            row("fall", "Fatou", "active", Some(19)),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let query = ListQuery::new().search(Some("  AW ".to_string()));
        let result = apply_list_view(rows(), &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].nom, "Diop");
    }

    #[test]
    fn test_blank_search_keeps_everything() {
        let query = ListQuery::new().search(Some("   ".to_string()));
        assert_eq!(apply_list_view(rows(), &query).len(), 3);
    }

    #[test]
    fn test_filter_and_unknown_key() {
        let query = ListQuery::new().filter("status", Some("ACTIVE".to_string()));
        assert_eq!(apply_list_view(rows(), &query).len(), 2);

        let query = ListQuery::new().filter("filiere", Some("info".to_string()));
        assert!(apply_list_view(rows(), &query).is_empty());

        let query = ListQuery::new().filter("status", Some(String::new()));
        assert_eq!(apply_list_view(rows(), &query).len(), 3);
    }

    #[test]
    fn test_sort_text_ignores_case() {
        let query = ListQuery::new().sort_by(Some("nom".to_string()), None);
        let names: Vec<_> = apply_list_view(rows(), &query)
            .into_iter()
            .map(|r| r.nom)
            .collect();
        assert_eq!(names, vec!["Diop", "fall", "Ndiaye"]);
    }

    #[test]
    fn test_sort_desc_keeps_missing_last() {
        let query = ListQuery::new().sort_by(Some("age".to_string()), Some(SortOrder::Desc));
        let names: Vec<_> = apply_list_view(rows(), &query)
            .into_iter()
            .map(|r| r.nom)
            .collect();
        assert_eq!(names, vec!["Diop", "fall", "Ndiaye"]);
    }

    #[test]
    fn test_empty_list_message() {
        let response: ListResponse<i32> = ListResponse::new(vec![]);
        assert_eq!(response.message("found"), EMPTY_LIST_MESSAGE);
        let response = ListResponse::new(vec![1, 2]);
        assert_eq!(response.total, 2);
        assert_eq!(response.message("found"), "found");
    }
}
