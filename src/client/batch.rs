//! 客户端批量创建：并发发出 N 个独立的 POST，不做补偿

use futures_util::future::join_all;
use serde_json::Value;
use tracing::{info, warn};

use super::transport::{Method, Transport};

/// 失败条目：请求下标与原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub index: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub requested: usize,
    pub created: Vec<Value>,
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub async fn fan_out_create(
    transport: &dyn Transport,
    collection: &str,
    payloads: Vec<Value>,
) -> BatchReport {
    let requested = payloads.len();
    let futures = payloads
        .into_iter()
        .map(|payload| transport.send(Method::Post, collection, Some(payload)));
    let results = join_all(futures).await;

    let mut report = BatchReport {
        requested,
        ..BatchReport::default()
    };
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(response) if response.is_success() => report.created.push(response.data()),
            Ok(response) => report.failed.push(BatchFailure {
                index,
                message: response.error_message(),
            }),
            Err(e) => report.failed.push(BatchFailure {
                index,
                message: e.0,
            }),
        }
    }

    if report.is_complete() {
        info!("Batch create on {}: {} created", collection, report.created.len());
    } else {
        warn!(
            "Batch create on {}: {} created, {} failed",
            collection,
            report.created.len(),
            report.failed.len()
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::FakeTransport;
    use crate::client::transport::TransportResponse;
    use serde_json::json;

    #[tokio::test]
    async fn test_reports_each_failure() {
        // 奇数小时的时段被拒绝
        let transport = FakeTransport::new(|_, _, body| {
            let hour = body.and_then(|b| b["start_time"].as_str()).unwrap_or_default();
            if hour.starts_with("09") || hour.starts_with("11") {
                Ok(TransportResponse {
                    status: 400,
                    body: json!({ "code": 3000, "message": "room_id does not reference a record of this school" }),
                })
            } else {
                Ok(TransportResponse {
                    status: 201,
                    body: json!({ "code": 0, "message": "created", "data": body }),
                })
            }
        });

        let payloads: Vec<_> = ["08:00", "09:00", "10:00", "11:00"]
            .iter()
            .map(|start| json!({ "subject": "Algebre", "start_time": start }))
            .collect();
        let report = fan_out_create(&transport, "/api/v1/schedules", payloads).await;

        assert_eq!(report.requested, 4);
        assert_eq!(report.created.len(), 2);
        let indexes: Vec<_> = report.failed.iter().map(|f| f.index).collect();
        assert_eq!(indexes, vec![1, 3]);
        assert_eq!(transport.calls().len(), 4);
    }
}
