//! 对话框表单
//!
//! 表单状态是字段名到字符串的平铺映射，每次修改都生成新的整体对象。
//! 对话框状态机：
//!
//! ```text
//! Closed → Open(Create | Edit(id)) → Submitting → Closed（成功）| Open（失败）
//! Closed → ConfirmDelete(id) → Deleting → Closed（成功）| ConfirmDelete（失败）
//! ```
//!
//! 每次提交至多发出一个请求，失败不重试。

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use super::toast::{Toast, ToastSink};
use super::transport::{Method, Transport, TransportError, TransportResponse};
use crate::utils::validate::{FieldError, validate_email, validate_phone};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: BTreeMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 未设置的字段视为空字符串
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// 浅合并一个字段，返回新状态
    pub fn with(&self, field: &str, value: impl Into<String>) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(field.to_string(), value.into());
        Self { fields }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    Email,
    Phone,
}

/// 字段在请求体中的 JSON 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Number,
}

#[derive(Debug, Clone)]
struct FieldDef {
    name: String,
    kind: FieldKind,
    rules: Vec<FieldRule>,
}

#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: Vec<FieldDef>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, kind: FieldKind, rules: &[FieldRule]) -> Self {
        self.fields.push(FieldDef {
            name: name.to_string(),
            kind,
            rules: rules.to_vec(),
        });
        self
    }

    /// 按字段声明顺序收集错误；非必填字段仅在非空时校验
    pub fn validate(&self, state: &FormState) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        for def in &self.fields {
            let value = state.get(&def.name).trim();
            if value.is_empty() {
                if def.rules.contains(&FieldRule::Required) {
                    errors.push(FieldError::new(
                        &def.name,
                        format!("{} is required", def.name),
                    ));
                }
                continue;
            }

            for rule in &def.rules {
                let result = match rule {
                    FieldRule::Required => Ok(()),
                    FieldRule::Email => validate_email(value),
                    FieldRule::Phone => validate_phone(value),
                };
                if let Err(message) = result {
                    errors.push(FieldError::new(&def.name, message));
                }
            }

            let numeric = match def.kind {
                FieldKind::Text => true,
                FieldKind::Integer => value.parse::<i64>().is_ok(),
                FieldKind::Number => value.parse::<f64>().is_ok_and(f64::is_finite),
            };
            if !numeric {
                errors.push(FieldError::new(
                    &def.name,
                    format!("{} must be a number", def.name),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// 请求体：空字段省略，数字字段转为 JSON 数字
    pub fn payload(&self, state: &FormState) -> Value {
        let mut body = Map::new();
        for spec in &self.fields {
            let value = state.get(&spec.name).trim();
            if value.is_empty() {
                continue;
            }
            let json = match spec.kind {
                FieldKind::Text => None,
                FieldKind::Integer => value.parse::<i64>().ok().map(Value::from),
                FieldKind::Number => value
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number),
            };
            body.insert(
                spec.name.clone(),
                json.unwrap_or_else(|| Value::String(value.to_string())),
            );
        }
        Value::Object(body)
    }

    pub fn teacher() -> Self {
        use FieldKind::Text;
        use FieldRule::*;
        Self::new()
            .field("nom", Text, &[Required])
            .field("prenom", Text, &[Required])
            .field("email", Text, &[Required, Email])
            .field("telephone", Text, &[Required, Phone])
            .field("type", Text, &[Required])
            .field("grade", Text, &[Required])
            .field("specialite", Text, &[])
    }

    pub fn student() -> Self {
        use FieldKind::{Integer, Text};
        use FieldRule::*;
        Self::new()
            .field("matricule", Text, &[Required])
            .field("nom", Text, &[Required])
            .field("prenom", Text, &[Required])
            .field("email", Text, &[Email])
            .field("telephone", Text, &[Phone])
            .field("filiere", Text, &[Required])
            .field("niveau", Text, &[Required])
            .field("room_id", Integer, &[])
            .field("status", Text, &[])
            .field("date_naissance", Text, &[])
    }

    pub fn room() -> Self {
        Self::new()
            .field("name", FieldKind::Text, &[FieldRule::Required])
            .field("capacity", FieldKind::Integer, &[FieldRule::Required])
            .field("building", FieldKind::Text, &[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open(DialogMode),
    Submitting(DialogMode),
    ConfirmDelete(i64),
    Deleting(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    Validation(Vec<FieldError>),
    Rejected { status: u16, message: String },
    Transport(String),
    /// 已有请求在进行中
    Busy,
    NotOpen,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Validation(errors) => match errors.first() {
                Some(first) => write!(f, "{first}"),
                None => write!(f, "Validation failed"),
            },
            SubmitError::Rejected { status, message } => write!(f, "{status}: {message}"),
            SubmitError::Transport(message) => write!(f, "{message}"),
            SubmitError::Busy => write!(f, "A request is already in progress"),
            SubmitError::NotOpen => write!(f, "Dialog is not open"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<TransportError> for SubmitError {
    fn from(e: TransportError) -> Self {
        SubmitError::Transport(e.0)
    }
}

pub struct DialogController {
    collection: String,
    schema: FormSchema,
    state: DialogState,
    form: FormState,
}

impl DialogController {
    /// `collection` 为集合路径，例如 `/api/v1/teachers`
    pub fn new(collection: impl Into<String>, schema: FormSchema) -> Self {
        Self {
            collection: collection.into().trim_end_matches('/').to_string(),
            schema,
            state: DialogState::Closed,
            form: FormState::new(),
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.state,
            DialogState::Submitting(_) | DialogState::Deleting(_)
        )
    }

    pub fn open_create(&mut self) {
        if self.is_loading() {
            return;
        }
        self.form = FormState::new();
        self.state = DialogState::Open(DialogMode::Create);
    }

    pub fn open_edit(&mut self, id: i64, current: FormState) {
        if self.is_loading() {
            return;
        }
        self.form = current;
        self.state = DialogState::Open(DialogMode::Edit(id));
    }

    pub fn request_delete(&mut self, id: i64) {
        if self.is_loading() {
            return;
        }
        self.state = DialogState::ConfirmDelete(id);
    }

    pub fn close(&mut self) {
        if self.is_loading() {
            return;
        }
        self.state = DialogState::Closed;
        self.form = FormState::new();
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        self.form = self.form.with(field, value);
    }

    fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.collection, id)
    }

    /// 校验并发出一个 POST（新建）或 PUT（编辑）请求，成功时返回响应中的 data
    pub async fn submit(
        &mut self,
        transport: &dyn Transport,
        toasts: &dyn ToastSink,
    ) -> Result<Value, SubmitError> {
        let mode = match self.state {
            DialogState::Open(mode) => mode,
            DialogState::Submitting(_) | DialogState::Deleting(_) => {
                return Err(SubmitError::Busy);
            }
            DialogState::Closed | DialogState::ConfirmDelete(_) => {
                return Err(SubmitError::NotOpen);
            }
        };

        if let Err(errors) = self.schema.validate(&self.form) {
            let first = errors.first().map(|e| e.message.clone());
            toasts.push(Toast::error("Validation error", first));
            return Err(SubmitError::Validation(errors));
        }

        let (method, path) = match mode {
            DialogMode::Create => (Method::Post, self.collection.clone()),
            DialogMode::Edit(id) => (Method::Put, self.item_path(id)),
        };
        let payload = self.schema.payload(&self.form);

        self.state = DialogState::Submitting(mode);
        debug!("Submitting {:?} {}", method, path);
        let result = transport.send(method, &path, Some(payload)).await;
        self.settle(result, DialogState::Open(mode), toasts)
    }

    /// 确认删除，发出一个 DELETE 请求
    pub async fn confirm_delete(
        &mut self,
        transport: &dyn Transport,
        toasts: &dyn ToastSink,
    ) -> Result<Value, SubmitError> {
        let id = match self.state {
            DialogState::ConfirmDelete(id) => id,
            DialogState::Submitting(_) | DialogState::Deleting(_) => {
                return Err(SubmitError::Busy);
            }
            DialogState::Closed | DialogState::Open(_) => return Err(SubmitError::NotOpen),
        };

        self.state = DialogState::Deleting(id);
        let path = self.item_path(id);
        let result = transport.send(Method::Delete, &path, None).await;
        self.settle(result, DialogState::ConfirmDelete(id), toasts)
    }

    // 成功关闭并清空表单；失败回到原状态，表单保持不变
    fn settle(
        &mut self,
        result: Result<TransportResponse, TransportError>,
        reopen: DialogState,
        toasts: &dyn ToastSink,
    ) -> Result<Value, SubmitError> {
        match result {
            Ok(response) if response.is_success() => {
                toasts.push(Toast::success("Success", response.message()));
                self.state = DialogState::Closed;
                self.form = FormState::new();
                Ok(response.data())
            }
            Ok(response) => {
                let message = response.error_message();
                toasts.push(Toast::error("Error", Some(message.clone())));
                self.state = reopen;
                Err(SubmitError::Rejected {
                    status: response.status,
                    message,
                })
            }
            Err(e) => {
                toasts.push(Toast::error("Error", Some(e.0.clone())));
                self.state = reopen;
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{FakeTransport, PendingTransport};
    use crate::client::toast::{ToastLog, ToastVariant};
    use futures_util::FutureExt;
    use serde_json::json;

    fn awa() -> FormState {
        FormState::from_pairs([
            ("nom", "Diop"),
            ("prenom", "Awa"),
            ("email", "awa@ecole.sn"),
            ("telephone", "70000000"),
            ("type", "PERMANENT"),
            ("grade", "MAITRE_ASSISTANT"),
        ])
    }

    #[test]
    fn test_with_returns_merged_copy() {
        let before = FormState::new().with("nom", "Diop");
        let after = before.with("prenom", "Awa");
        assert_eq!(before.get("prenom"), "");
        assert_eq!(after.get("nom"), "Diop");
        assert_eq!(after.get("prenom"), "Awa");
    }

    #[test]
    fn test_optional_fields_only_checked_when_filled() {
        let schema = FormSchema::student();
        let base = FormState::from_pairs([
            ("matricule", "M-001"),
            ("nom", "Fall"),
            ("prenom", "Fatou"),
            ("filiere", "Informatique"),
            ("niveau", "L1"),
        ]);
        assert!(schema.validate(&base).is_ok());

        let errors = schema
            .validate(&base.with("email", "fatou@").with("telephone", "1234"))
            .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "telephone"]);
    }

    #[test]
    fn test_payload_types() {
        let schema = FormSchema::room();
        let state =
            FormState::from_pairs([("name", "Salle A"), ("capacity", " 40 "), ("building", "")]);
        assert_eq!(
            schema.payload(&state),
            json!({ "name": "Salle A", "capacity": 40 })
        );
        let errors = schema.validate(&state.with("capacity", "forty")).unwrap_err();
        assert_eq!(errors[0].field, "capacity");
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let transport = FakeTransport::ok();
        let toasts = ToastLog::new();
        let mut dialog = DialogController::new("/api/v1/teachers", FormSchema::teacher());
        dialog.open_create();
        dialog.set_field("nom", "Diop");

        let err = dialog.submit(&transport, &toasts).await.unwrap_err();
        assert!(matches!(err, SubmitError::Validation(_)));
        assert!(transport.calls().is_empty());
        assert_eq!(dialog.state(), DialogState::Open(DialogMode::Create));
        let toast = toasts.last().unwrap();
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.description.as_deref(), Some("prenom is required"));
    }

    #[tokio::test]
    async fn test_create_posts_once_and_closes() {
        let transport = FakeTransport::ok();
        let toasts = ToastLog::new();
        let mut dialog = DialogController::new("/api/v1/teachers", FormSchema::teacher());
        dialog.open_edit(9, awa());

        dialog.submit(&transport, &toasts).await.unwrap();
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Method::Put);
        assert_eq!(calls[0].1, "/api/v1/teachers/9");
        assert_eq!(calls[0].2.as_ref().unwrap()["type"], "PERMANENT");
        assert_eq!(dialog.state(), DialogState::Closed);
        assert_eq!(dialog.form(), &FormState::new());
        assert_eq!(toasts.last().unwrap().variant, ToastVariant::Default);
    }

    #[tokio::test]
    async fn test_rejection_reopens_with_form_intact() {
        let transport = FakeTransport::new(|_, _, _| {
            Ok(TransportResponse {
                status: 409,
                body: json!({ "code": 2003, "message": "Email already used" }),
            })
        });
        let toasts = ToastLog::new();
        let mut dialog = DialogController::new("/api/v1/teachers", FormSchema::teacher());
        dialog.open_create();
        for field in ["nom", "prenom", "email", "telephone", "type", "grade"] {
            dialog.set_field(field, awa().get(field));
        }

        let err = dialog.submit(&transport, &toasts).await.unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected {
                status: 409,
                message: "Email already used".into()
            }
        );
        assert_eq!(dialog.state(), DialogState::Open(DialogMode::Create));
        assert_eq!(dialog.form(), &awa());
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_busy() {
        let toasts = ToastLog::new();
        let mut dialog = DialogController::new("/api/v1/teachers", FormSchema::teacher());
        dialog.open_edit(1, awa());

        // 请求挂起时丢弃 future，对话框保持提交中
        assert!(dialog.submit(&PendingTransport, &toasts).now_or_never().is_none());
        assert!(dialog.is_loading());

        let transport = FakeTransport::ok();
        assert_eq!(
            dialog.submit(&transport, &toasts).await.unwrap_err(),
            SubmitError::Busy
        );
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_needs_confirmation() {
        let transport = FakeTransport::ok();
        let toasts = ToastLog::new();
        let mut dialog = DialogController::new("/api/v1/rooms", FormSchema::room());

        assert_eq!(
            dialog.confirm_delete(&transport, &toasts).await.unwrap_err(),
            SubmitError::NotOpen
        );
        dialog.request_delete(4);
        dialog.confirm_delete(&transport, &toasts).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Method::Delete);
        assert_eq!(calls[0].1, "/api/v1/rooms/4");
        assert_eq!(dialog.state(), DialogState::Closed);
    }

    #[tokio::test]
    async fn test_transport_failure_is_terminal() {
        let transport =
            FakeTransport::new(|_, _, _| Err(TransportError("connection refused".into())));
        let toasts = ToastLog::new();
        let mut dialog = DialogController::new("/api/v1/rooms", FormSchema::room());
        dialog.open_create();
        dialog.set_field("name", "Salle B");
        dialog.set_field("capacity", "30");

        let err = dialog.submit(&transport, &toasts).await.unwrap_err();
        assert_eq!(err, SubmitError::Transport("connection refused".into()));
        assert_eq!(transport.calls().len(), 1);
        assert_eq!(dialog.state(), DialogState::Open(DialogMode::Create));
    }
}
