use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct EngineMetrics {
    queries_total: AtomicU64,
    fixed_intent_total: AtomicU64,
    specialist_hits_total: AtomicU64,
    catalog_matches_total: AtomicU64,
    fallback_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub queries_total: u64,
    pub fixed_intent_total: u64,
    pub specialist_hits_total: u64,
    pub catalog_matches_total: u64,
    pub fallback_total: u64,
    pub avg_latency_micros: f64,
}

impl EngineMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_query(&self) {
        self.queries_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fixed_intent(&self) {
        self.fixed_intent_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_specialist_hit(&self) {
        self.specialist_hits_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_catalog_match(&self) {
        self.catalog_matches_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fallback(&self) {
        self.fallback_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let queries = self.queries_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            queries_total: queries,
            fixed_intent_total: self.fixed_intent_total.load(Ordering::Relaxed),
            specialist_hits_total: self.specialist_hits_total.load(Ordering::Relaxed),
            catalog_matches_total: self.catalog_matches_total.load(Ordering::Relaxed),
            fallback_total: self.fallback_total.load(Ordering::Relaxed),
            avg_latency_micros: if queries == 0 {
                0.0
            } else {
                latency as f64 / queries as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,vitrin_engine=info,vitrin_specialists=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
