pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use std::sync::Arc;

use domain::case_sequence::{
    allocator, InMemorySequenceAllocator, SequenceAllocator, SqliteSequenceAllocator,
};
use shared::config::{self, AllocatorKind};
use tokio::net::TcpListener;

async fn build_allocator(cfg: &config::Config) -> anyhow::Result<Arc<dyn SequenceAllocator>> {
    match cfg.case_id.allocator {
        AllocatorKind::Sqlite => {
            let db_path = config::get_database_path(cfg)?;
            shared::data::db::initialize_database(&db_path)
                .await
                .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;
            let conn = shared::data::db::get_connection()?.clone();
            Ok(Arc::new(SqliteSequenceAllocator::new(conn)))
        }
        AllocatorKind::Memory => {
            tracing::warn!("Using in-memory sequence counters; they are lost on restart");
            Ok(Arc::new(InMemorySequenceAllocator::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let cfg = config::load_config()?;
    allocator::install(build_allocator(&cfg).await?)?;
    let port = cfg.server.port;
    config::install(cfg)?;

    let app = routes::configure_routes();

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
