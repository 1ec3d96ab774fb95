mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    infrastructure::{
        bcrypt_password_hasher::BcryptPasswordHasher, in_memory_store::InMemoryAccountStore,
    },
    presentation::handlers::account_handler::create_account_router,
    usecase::{login_usecase::LoginUsecase, register_account_usecase::RegisterAccountUsecase},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = InMemoryAccountStore::new();
    let password_hasher = BcryptPasswordHasher::new();
    let login_service = LoginUsecase::new(store.clone(), store.clone(), password_hasher.clone());
    let register_service = RegisterAccountUsecase::new(store.clone(), password_hasher.clone());

    let app = axum::Router::new().nest(
        "/api",
        create_account_router(login_service, register_service),
    );

    let addr: SocketAddr = dotenvy::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "accounts api listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
