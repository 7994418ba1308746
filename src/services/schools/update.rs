use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SchoolService;
use crate::models::schools::requests::UpdateSchoolRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tenant;

pub async fn update_school(
    service: &SchoolService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateSchoolRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = tenant::ensure_visible(&user, id, "School") {
        return Ok(resp);
    }

    if let Err(errors) = update_data.validate() {
        return Ok(tenant::validation_failed(errors));
    }

    match storage.update_school(id, update_data).await {
        Ok(Some(school)) => {
            info!("School {} updated", school.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                school,
                "School updated successfully",
            )))
        }
        Ok(None) => Ok(tenant::not_found("School")),
        Err(e) => Ok(tenant::write_error(
            ErrorCode::UpdateFailed,
            "School code already exists",
            &e,
        )),
    }
}
