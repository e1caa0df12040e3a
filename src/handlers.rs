use actix_web::web::{Data, Json};
use serde_json::json;

use crate::models::form::EnhanceForm;
use crate::service::EnhanceService;

pub async fn enhance(
    service: Data<EnhanceService>,
    form: Json<EnhanceForm>,
) -> impl actix_web::Responder {
    log::debug!("form: {:?}", form.0);

    match service.enhance(form.0).await {
        Ok(completion) => actix_web::HttpResponse::Ok().json(completion),
        Err(e) => {
            log::error!("enhance error: {:?}", e);
            actix_web::HttpResponse::build(e.status_code()).json(json!({"error": e.to_string()}))
        }
    }
}
