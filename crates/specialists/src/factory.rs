use tracing::debug;
use vitrin_core::{text, TenantContext};

use crate::{verticals, Specialist};

/// Resolves the tenant's declared industry to a concrete specialist. The
/// registry key is the normalized industry string; unknown industries get a
/// synthesized generic specialist instead of an error.
pub fn specialist_for(tenant: &TenantContext) -> Specialist {
    let industry = text::normalize(&tenant.profile.industry);

    match industry.as_str() {
        "automotive" | "otomotiv" | "oto" | "oto servis" | "garage" | "carwash" => {
            verticals::automotive(tenant)
        }
        "beauty" | "kuafor" | "berber" | "salon" | "hairdresser" | "guzellik" => {
            verticals::beauty(tenant)
        }
        "restaurant" | "restoran" | "cafe" | "kafe" | "lokanta" | "catering" => {
            verticals::restaurant(tenant)
        }
        "construction" | "insaat" | "consulting" | "danismanlik" | "education" | "egitim"
        | "engineering" => verticals::construction(tenant),
        "retail" | "magaza" | "boutique" | "butik" | "market" => verticals::retail(tenant),
        "health" | "saglik" | "klinik" | "clinic" | "dental" | "dis klinigi" => {
            verticals::health(tenant)
        }
        _ => {
            debug!(
                industry = %tenant.profile.industry,
                "industry not in registry, synthesizing generic specialist"
            );
            verticals::generic(tenant)
        }
    }
}
