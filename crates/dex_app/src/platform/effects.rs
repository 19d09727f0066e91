use std::sync::{mpsc, Arc};

use dex_core::{CatalogEntry, DetailFields, Effect, Msg, TypeSlot};
use dex_engine::{EngineEvent, EngineHandle, EventSink, FetchSettings, PokemonDetail};
use dex_logging::{dex_debug, dex_info};

/// Executes effects produced by `update`.
pub(crate) trait EffectExecutor {
    fn execute(&self, effects: Vec<Effect>);
}

pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, msg_tx: mpsc::Sender<Msg>) -> std::io::Result<Self> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink { msg_tx }))?;
        Ok(Self { engine })
    }
}

impl EffectExecutor for EffectRunner {
    fn execute(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCatalog { url } => {
                    dex_info!("FetchCatalog url={}", url);
                    self.engine.load_catalog(url);
                }
                Effect::FetchDetail { request, url } => {
                    dex_debug!("FetchDetail request={} url={}", request, url);
                    self.engine.fetch_detail(request, url);
                }
                Effect::FetchElementType { request, url } => {
                    dex_debug!("FetchElementType request={} url={}", request, url);
                    self.engine.fetch_element_type(request, url);
                }
            }
        }
    }
}

/// Forwards engine results into the app inbox as core messages.
struct MsgSink {
    msg_tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.msg_tx.send(map_event(event));
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogLoaded(Ok(entries)) => Msg::CatalogLoaded(
            entries
                .into_iter()
                .map(|entry| CatalogEntry {
                    name: entry.name,
                    url: entry.url,
                })
                .collect(),
        ),
        EngineEvent::CatalogLoaded(Err(err)) => Msg::CatalogFailed {
            reason: err.to_string(),
        },
        EngineEvent::DetailLoaded {
            request,
            result: Ok(detail),
        } => Msg::DetailLoaded {
            request,
            detail: map_detail(detail),
        },
        EngineEvent::ElementTypeLoaded {
            request,
            result: Ok(genus),
        } => Msg::ElementTypeLoaded { request, genus },
        EngineEvent::DetailLoaded {
            request,
            result: Err(err),
        }
        | EngineEvent::ElementTypeLoaded {
            request,
            result: Err(err),
        } => Msg::DetailFailed {
            request,
            reason: err.to_string(),
        },
    }
}

fn map_detail(detail: PokemonDetail) -> DetailFields {
    DetailFields {
        id: detail.id,
        height: detail.height,
        types: detail
            .types
            .into_iter()
            .map(|entry| TypeSlot {
                slot: entry.slot,
                type_name: entry.kind.name,
            })
            .collect(),
        species_url: detail.species.and_then(|species| species.url),
    }
}
