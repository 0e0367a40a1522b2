mod responses;

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument};
use vitrin_core::{
    classify_fixed_intent, find_best_match, normalize, EngineReply, Intent, TenantContext,
};
use vitrin_observability::EngineMetrics;
use vitrin_specialists::{specialist_for, Specialist};

/// One tenant's assistant. Resolves the specialist once at construction and
/// stays immutable afterwards; every query is a pure function of the stored
/// context, so concurrent sessions never interfere.
pub struct ChatEngine {
    tenant: TenantContext,
    specialist: Specialist,
    metrics: Arc<EngineMetrics>,
}

impl ChatEngine {
    pub fn new(tenant: TenantContext, metrics: Arc<EngineMetrics>) -> Self {
        let specialist = specialist_for(&tenant);
        Self {
            tenant,
            specialist,
            metrics,
        }
    }

    pub fn tenant(&self) -> &TenantContext {
        &self.tenant
    }

    pub fn specialist(&self) -> &Specialist {
        &self.specialist
    }

    #[instrument(skip_all, fields(tenant = %self.tenant.profile.company_name))]
    pub fn handle_query(&self, query: &str) -> EngineReply {
        let started = Instant::now();
        self.metrics.inc_query();

        let normalized = normalize(query);
        let reply = self.dispatch(query, &normalized);

        self.metrics.observe_latency(started.elapsed());
        info!(intent = ?reply.intent, query_len = query.len(), "query handled");
        reply
    }

    fn dispatch(&self, raw_query: &str, normalized: &str) -> EngineReply {
        if normalized.is_empty() {
            return self.fallback(raw_query);
        }

        if let Some(intent) = classify_fixed_intent(normalized) {
            self.metrics.inc_fixed_intent();
            let text = match intent {
                Intent::DesignAdvice => self.specialist.design_advice(),
                Intent::Hours => responses::hours_reply(&self.tenant),
                Intent::Location => responses::location_reply(&self.tenant),
                Intent::Appointment => responses::appointment_reply(&self.tenant),
                _ => responses::contact_reply(&self.tenant),
            };
            return EngineReply { text, intent };
        }

        let expanded = self.specialist.synonyms().expand(normalized);

        if self.specialist.triggers_domain(normalized) {
            self.metrics.inc_specialist_hit();
            let text = match find_best_match(&expanded, &self.tenant.catalog) {
                Some(item) => {
                    self.metrics.inc_catalog_match();
                    responses::item_reply(&self.tenant, item)
                }
                None => responses::narrative_reply(&self.specialist, &self.tenant),
            };
            return EngineReply {
                text,
                intent: Intent::SpecialistDomain,
            };
        }

        if let Some(item) = find_best_match(&expanded, &self.tenant.catalog) {
            self.metrics.inc_catalog_match();
            return EngineReply {
                text: responses::item_reply(&self.tenant, item),
                intent: Intent::CatalogMatch,
            };
        }

        self.fallback(raw_query)
    }

    fn fallback(&self, raw_query: &str) -> EngineReply {
        self.metrics.inc_fallback();
        EngineReply {
            text: self.specialist.fallback_response(raw_query.trim()),
            intent: Intent::Fallback,
        }
    }
}
