//! 学生名单导出

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::students::{entities::Student, requests::StudentListParams};
use crate::models::{ApiResponse, ErrorCode, ListQuery, apply_list_view};
use crate::services::tenant;
use crate::utils::csv_export::{CsvRecord, attachment_response, to_csv_bytes};

impl CsvRecord for Student {
    fn headers() -> &'static [&'static str] {
        &[
            "matricule",
            "nom",
            "prenom",
            "email",
            "telephone",
            "filiere",
            "niveau",
            "status",
            "date_naissance",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.matricule.clone(),
            self.nom.clone(),
            self.prenom.clone(),
            self.email.clone().unwrap_or_default(),
            self.telephone.clone().unwrap_or_default(),
            self.filiere.clone(),
            self.niveau.clone(),
            self.status.to_string(),
            self.date_naissance
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ]
    }
}

pub async fn export_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match tenant::current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let students = match storage
        .list_students(tenant::read_scope(&user, query.school_id))
        .await
    {
        Ok(students) => apply_list_view(students, &ListQuery::from(query)),
        Err(e) => return Ok(tenant::internal_error("Failed to retrieve student list", &e)),
    };

    match to_csv_bytes(&students) {
        Ok(body) => {
            info!("User {} exported {} students", user.id, students.len());
            let file_name = format!("etudiants_{}.csv", chrono::Utc::now().format("%Y%m%d"));
            Ok(attachment_response(&file_name, body))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::ExportFailed,
            format!("Export failed: {e}"),
        ))),
    }
}
