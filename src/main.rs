mod config;

use api::{App, Database};
use core::convert::Infallible;
use hyper::{server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::{net::TcpListener, runtime::Runtime};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config::Config { port, data_dir, delay } = config::Config::from_env()?;

    let runtime = Runtime::new()?;
    runtime.block_on(async move {
        // Restore the learner's state before accepting anyone
        let db = Database::open(data_dir).await?;
        let app = Arc::new(App::new(db, delay).await);

        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        let tcp = TcpListener::bind(addr).await?;
        log::info!("listening on {addr}");

        loop {
            let stream = tokio::select! {
                biased;
                _ = tokio::signal::ctrl_c() => break,
                conn = tcp.accept() => match conn {
                    Ok((stream, peer)) => {
                        log::debug!("accepted connection from {peer}");
                        stream
                    }
                    Err(err) => {
                        log::error!("failed to accept connection: {err}");
                        continue;
                    }
                },
            };

            let app = app.clone();
            let service = service_fn(move |req| {
                let app = app.clone();
                async move { Ok::<_, Infallible>(app.respond(req).await) }
            });
            tokio::spawn(async move {
                if let Err(err) = http1::Builder::new().serve_connection(TokioIo::new(stream), service).await {
                    log::error!("connection failed: {err}");
                }
            });
        }

        log::info!("shutting down");
        anyhow::Ok(())
    })
}
