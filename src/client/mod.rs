//! 客户端侧实体管理
//!
//! 不依赖任何界面框架，按"权限门控 → 列表视图 → 对话框表单 → 重新拉取 → 提示"的流程
//! 驱动服务端 API。请求经由 [`Transport`] 发出，生产环境使用 reqwest，测试使用内存实现。

pub mod batch;
pub mod form;
pub mod manager;
pub mod toast;
pub mod transport;

pub use batch::{BatchReport, fan_out_create};
pub use form::{
    DialogController, DialogMode, DialogState, FieldKind, FieldRule, FormSchema, FormState,
    SubmitError,
};
pub use manager::EntityManager;
pub use toast::{Toast, ToastLog, ToastSink, ToastVariant, TracingToasts};
pub use transport::{HttpTransport, Method, Transport, TransportError, TransportResponse};

#[cfg(test)]
pub(crate) mod testing {
    //! 内存中的传输实现

    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::transport::{Method, Transport, TransportError, TransportResponse};

    type Responder = dyn Fn(Method, &str, Option<&Value>) -> Result<TransportResponse, TransportError>
        + Send
        + Sync;

    pub type Call = (Method, String, Option<Value>);

    /// 记录全部请求，按回调生成响应
    pub struct FakeTransport {
        responder: Box<Responder>,
        calls: Mutex<Vec<Call>>,
    }

    impl FakeTransport {
        pub fn new<F>(responder: F) -> Self
        where
            F: Fn(Method, &str, Option<&Value>) -> Result<TransportResponse, TransportError>
                + Send
                + Sync
                + 'static,
        {
            Self {
                responder: Box::new(responder),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// 总是返回成功，并回显请求体
        pub fn ok() -> Self {
            Self::new(|_, _, body| {
                Ok(TransportResponse {
                    status: 200,
                    body: json!({ "code": 0, "message": "OK", "data": body }),
                })
            })
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn send(
            &self,
            method: Method,
            path: &str,
            body: Option<Value>,
        ) -> Result<TransportResponse, TransportError> {
            let response = (self.responder)(method, path, body.as_ref());
            self.calls
                .lock()
                .unwrap()
                .push((method, path.to_string(), body));
            response
        }
    }

    /// 永不返回
    pub struct PendingTransport;

    #[async_trait]
    impl Transport for PendingTransport {
        async fn send(
            &self,
            _method: Method,
            _path: &str,
            _body: Option<Value>,
        ) -> Result<TransportResponse, TransportError> {
            std::future::pending().await
        }
    }
}
