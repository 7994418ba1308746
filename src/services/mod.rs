pub(crate) mod accounts;
pub mod auth;
pub mod evaluations;
pub mod payments;
pub mod rooms;
pub mod schedules;
pub mod schools;
pub mod staff;
pub mod students;
pub mod teachers;
pub(crate) mod tenant;

pub use auth::AuthService;
pub use evaluations::EvaluationService;
pub use payments::PaymentService;
pub use rooms::RoomService;
pub use schedules::ScheduleService;
pub use schools::SchoolService;
pub use staff::StaffService;
pub use students::StudentService;
pub use teachers::TeacherService;

use actix_web::{HttpRequest, Result as ActixResult, web};
use std::sync::Arc;

use crate::storage::Storage;

// 从 app data 中取出存储
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            tracing::error!("Storage not found in app data");
            actix_web::error::ErrorInternalServerError("Storage not found in app data")
        })
}
