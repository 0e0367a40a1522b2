mod factory;
mod verticals;

pub use factory::specialist_for;

use serde::Serialize;
use vitrin_core::{contains_any, SynonymTable, TenantContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vertical {
    Automotive,
    Beauty,
    Restaurant,
    Construction,
    Retail,
    Health,
    Generic,
}

/// Visual identity hint the page renderer may apply when the visitor asks
/// for design advice.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemeSpec {
    pub name: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub heading_font: &'static str,
    pub hero_style: &'static str,
}

/// Vertical-specific responder bound to one tenant at construction time.
/// Every variant, the synthesized generic one included, carries the same
/// contract: synonym table, greeting, domain trigger set, narrative, theme
/// spec and fallback text. Nothing is mutated after construction; the
/// generic variant bakes its interpolated templates in up front.
#[derive(Debug, Clone)]
pub struct Specialist {
    vertical: Vertical,
    business_name: String,
    greeting: String,
    narrative: String,
    fallback_note: String,
    domain_keywords: &'static [&'static str],
    synonyms: SynonymTable,
    theme: ThemeSpec,
}

impl Specialist {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        vertical: Vertical,
        tenant: &TenantContext,
        greeting: String,
        narrative: String,
        fallback_note: String,
        domain_keywords: &'static [&'static str],
        synonyms: SynonymTable,
        theme: ThemeSpec,
    ) -> Self {
        Self {
            vertical,
            business_name: tenant.profile.company_name.clone(),
            greeting,
            narrative,
            fallback_note,
            domain_keywords,
            synonyms,
            theme,
        }
    }

    pub fn vertical(&self) -> Vertical {
        self.vertical
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn theme(&self) -> &ThemeSpec {
        &self.theme
    }

    pub fn domain_narrative(&self) -> &str {
        &self.narrative
    }

    /// Whether the normalized query touches this vertical's keyword set.
    pub fn triggers_domain(&self, normalized: &str) -> bool {
        contains_any(normalized, self.domain_keywords)
    }

    pub fn design_advice(&self) -> String {
        format!(
            "Siteniz için {} paletini öneriyoruz: {} ana renk, {} vurgu rengi ve {} başlıklar. Ana sayfada {} düzeni işletmenize çok yakışır.",
            self.theme.name,
            self.theme.primary,
            self.theme.accent,
            self.theme.heading_font,
            self.theme.hero_style
        )
    }

    /// Terminal rung of the dispatch ladder.
    pub fn fallback_response(&self, query: &str) -> String {
        format!(
            "\"{}\" sorunuz için teşekkürler! {} ekibi olarak en kısa sürede size dönüş yapacağız. {}",
            query, self.business_name, self.fallback_note
        )
    }
}
