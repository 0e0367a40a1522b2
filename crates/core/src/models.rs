use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub company_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub house_num: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}

impl CatalogItem {
    /// Whole prices render without a fraction, everything else keeps two
    /// decimals.
    pub fn price_label(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("{:.0}", self.price)
        } else {
            format!("{:.2}", self.price)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub days: String,
    pub opens: String,
    pub closes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_booking_path")]
    pub booking_path: String,
    #[serde(default)]
    pub schedule: Option<Schedule>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            booking_path: default_booking_path(),
            schedule: None,
        }
    }
}

fn default_booking_path() -> String {
    "/randevu".to_string()
}

/// Read-only snapshot of one tenant's profile, catalog and site
/// configuration. Constructed once per chat session by the surrounding
/// application; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantContext {
    pub profile: BusinessProfile,
    #[serde(default)]
    pub catalog: Vec<CatalogItem>,
    #[serde(default)]
    pub site: SiteConfig,
}

impl TenantContext {
    pub fn validate(&self) -> Result<(), TenantContextError> {
        if self.profile.company_name.trim().is_empty() {
            return Err(TenantContextError::MissingCompanyName);
        }

        let mut seen = HashSet::new();
        for item in &self.catalog {
            if !seen.insert(item.id.as_str()) {
                return Err(TenantContextError::DuplicateCatalogId(item.id.clone()));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum TenantContextError {
    #[error("tenant profile is missing a company name")]
    MissingCompanyName,
    #[error("catalog id `{0}` appears more than once")]
    DuplicateCatalogId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    DesignAdvice,
    Hours,
    Location,
    Appointment,
    Contact,
    SpecialistDomain,
    CatalogMatch,
    Fallback,
}

/// Inline control token consumed by the chat widget. The payload is
/// pass-through text; unrecognized types degrade to a plain link on the
/// widget side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionDirective {
    Book(String),
    Cart(String),
    Call(String),
}

impl ActionDirective {
    pub fn call_tel(phone: &str) -> Self {
        Self::Call(format!("tel:{}", phone.trim()))
    }
}

impl fmt::Display for ActionDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book(path) => write!(f, "[ACTION:BOOK:{path}]"),
            Self::Cart(item_id) => write!(f, "[ACTION:CART:{item_id}]"),
            Self::Call(uri) => write!(f, "[ACTION:CALL:{uri}]"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineReply {
    pub text: String,
    pub intent: Intent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant_with_catalog(items: Vec<CatalogItem>) -> TenantContext {
        TenantContext {
            profile: BusinessProfile {
                company_name: "Usta Oto".to_string(),
                ..BusinessProfile::default()
            },
            catalog: items,
            site: SiteConfig::default(),
        }
    }

    fn item(id: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: "Motor Bakımı".to_string(),
            description: String::new(),
            price: 120.0,
        }
    }

    #[test]
    fn directives_render_wire_form() {
        assert_eq!(
            ActionDirective::Book("/randevu?service=srv_1".to_string()).to_string(),
            "[ACTION:BOOK:/randevu?service=srv_1]"
        );
        assert_eq!(
            ActionDirective::Cart("srv_1".to_string()).to_string(),
            "[ACTION:CART:srv_1]"
        );
        assert_eq!(
            ActionDirective::call_tel(" 0212 555 00 00 ").to_string(),
            "[ACTION:CALL:tel:0212 555 00 00]"
        );
    }

    #[test]
    fn validate_rejects_duplicate_catalog_ids() {
        let tenant = tenant_with_catalog(vec![item("srv_1"), item("srv_1")]);
        assert!(matches!(
            tenant.validate(),
            Err(TenantContextError::DuplicateCatalogId(id)) if id == "srv_1"
        ));
    }

    #[test]
    fn validate_requires_company_name() {
        let mut tenant = tenant_with_catalog(Vec::new());
        tenant.profile.company_name = "  ".to_string();
        assert!(matches!(
            tenant.validate(),
            Err(TenantContextError::MissingCompanyName)
        ));
    }

    #[test]
    fn whole_prices_drop_the_fraction() {
        assert_eq!(item("srv_1").price_label(), "120");
        let mut fractional = item("srv_2");
        fractional.price = 89.5;
        assert_eq!(fractional.price_label(), "89.50");
    }
}
