pub mod auth;

pub mod schools;

pub mod staff;

pub mod teachers;

pub mod students;

pub mod rooms;

pub mod schedules;

pub mod payments;

pub mod evaluations;

pub use auth::configure_auth_routes;
pub use evaluations::configure_evaluation_routes;
pub use payments::configure_payment_routes;
pub use rooms::configure_room_routes;
pub use schedules::configure_schedule_routes;
pub use schools::configure_school_routes;
pub use staff::configure_staff_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_school_routes)
        .configure(configure_staff_routes)
        .configure(configure_teacher_routes)
        .configure(configure_student_routes)
        .configure(configure_room_routes)
        .configure(configure_schedule_routes)
        .configure(configure_payment_routes)
        .configure(configure_evaluation_routes);
}
