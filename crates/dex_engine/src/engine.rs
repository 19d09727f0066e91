use std::sync::{mpsc, Arc};
use std::thread;

use dex_logging::{dex_debug, dex_warn};

use crate::catalog::{fetch_detail, fetch_english_genus, load_catalog};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, RequestId};

/// Receives engine results; called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    LoadCatalog { url: String },
    FetchDetail { request: RequestId, url: String },
    FetchElementType { request: RequestId, url: String },
}

/// Runs fetches on a background tokio runtime. Requests are fire-and-forget;
/// results arrive through the sink in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, sink: Arc<dyn EventSink>) -> std::io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)), sink)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn Fetcher>,
        sink: Arc<dyn EventSink>,
    ) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("dex-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, sink.as_ref()).await;
                    });
                }
                dex_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn load_catalog(&self, url: impl Into<String>) {
        self.send(EngineCommand::LoadCatalog { url: url.into() });
    }

    pub fn fetch_detail(&self, request: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::FetchDetail {
            request,
            url: url.into(),
        });
    }

    pub fn fetch_element_type(&self, request: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::FetchElementType {
            request,
            url: url.into(),
        });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            dex_warn!("Engine thread is gone; dropping command");
        }
    }
}

async fn handle_command(fetcher: &dyn Fetcher, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::LoadCatalog { url } => {
            let result = load_catalog(fetcher, &url).await;
            sink.emit(EngineEvent::CatalogLoaded(result));
        }
        EngineCommand::FetchDetail { request, url } => {
            let result = fetch_detail(fetcher, &url).await;
            sink.emit(EngineEvent::DetailLoaded { request, result });
        }
        EngineCommand::FetchElementType { request, url } => {
            let result = fetch_english_genus(fetcher, &url).await;
            sink.emit(EngineEvent::ElementTypeLoaded { request, result });
        }
    }
}
