use actix_web::{web, HttpResponse};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::generator::convert_nodes;

/// Form body of a conversion request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct ConvertForm {
    /// Node descriptions, one or more `{ ... }` records
    pub node_input: String,
}

/// Handler for node conversion
pub async fn convert_handler(form: web::Form<ConvertForm>) -> HttpResponse {
    let lines = convert_nodes(&form.node_input);
    debug!("Converted {} node(s)", lines.len());

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(lines.join("\n"))
}

pub async fn health_handler() -> HttpResponse {
    HttpResponse::Ok().body("nodeconv is running!")
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(health_handler))
            .route(web::post().to(convert_handler)),
    );
}
