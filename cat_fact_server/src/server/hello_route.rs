use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder};

const GREETING: &str = "Hello World";

pub async fn handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(GREETING)
}
