use actix_web::{web, HttpResponse};
use kennel_api_structs::get_service_health::*;

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Kennel is up and running".into(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
