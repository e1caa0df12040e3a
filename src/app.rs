use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::{handlers, service};

pub fn create_app(
    enhance_service: Arc<service::EnhanceService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .app_data(Data::from(enhance_service))
        .service(
            web::scope("/v1")
                .service(web::resource("/enhance").route(web::post().to(handlers::enhance))),
        )
}
