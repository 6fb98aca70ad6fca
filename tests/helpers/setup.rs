use kennel_api::Application;
use kennel_infra::{InMemoryDatabase, KennelContext};
use kennel_sdk::KennelSDK;
use std::sync::Arc;

pub struct TestApp {
    pub db: Arc<InMemoryDatabase>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, KennelSDK) {
    let db = Arc::new(InMemoryDatabase::new());
    let mut ctx = KennelContext::create_inmemory(db.clone());
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    (TestApp { db }, KennelSDK::new(address))
}
