mod telemetry;

use kennel_api::Application;
use kennel_infra::{run_migration, setup_context};
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("kennel_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await;

    if let Some(connection_string) = context.config.database_url.as_deref() {
        info!("Running database migrations ...");
        run_migration(connection_string)
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        info!("Running database migrations ... [done]");
    }

    let app = Application::new(context).await?;
    app.start().await
}
