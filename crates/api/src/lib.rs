mod catalog;
mod error;
mod record;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, error::InternalError, middleware, web, App, HttpServer};
pub use error::KennelError;
use kennel_infra::KennelContext;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    catalog::configure_routes(cfg);
    record::configure_routes(cfg);
    status::configure_routes(cfg);
}

/// Malformed ids and bodies are answered with the same envelope as every other error
fn bad_client_data(e: impl std::fmt::Display) -> actix_web::Error {
    let message = e.to_string();
    InternalError::from_response(
        message.clone(),
        actix_web::ResponseError::error_response(&KennelError::BadClientData(message)),
    )
    .into()
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: KennelContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: KennelContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .app_data(web::PathConfig::default().error_handler(|e, _| bad_client_data(e)))
                .app_data(web::JsonConfig::default().error_handler(|e, _| bad_client_data(e)))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
