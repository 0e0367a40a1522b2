use crate::models::Intent;

const DESIGN_TRIGGERS: &[&str] = &[
    "tema", "tasarim", "renk", "gorunum", "sablon", "theme", "design",
];

const HOURS_TRIGGERS: &[&str] = &[
    "saat", "kacta", "acik", "kapali", "mesai", "calisma", "hours", "open",
];

const LOCATION_TRIGGERS: &[&str] = &[
    "nerede", "adres", "konum", "yol tarifi", "address", "location", "where",
];

const APPOINTMENT_TRIGGERS: &[&str] = &["randevu", "rezervasyon", "appointment", "booking"];

const CONTACT_TRIGGERS: &[&str] = &[
    "telefon", "iletisim", "numara", "whatsapp", "contact", "phone",
];

/// First five rungs of the dispatch ladder. Evaluated in a fixed order
/// against the normalized query; the first trigger hit is terminal. Design
/// questions are intercepted before everything else since they are unrelated
/// to the catalog, and the cheap universal intents resolve before any
/// vertical-specific work.
pub fn classify_fixed_intent(normalized: &str) -> Option<Intent> {
    if contains_any(normalized, DESIGN_TRIGGERS) {
        return Some(Intent::DesignAdvice);
    }
    if contains_any(normalized, HOURS_TRIGGERS) {
        return Some(Intent::Hours);
    }
    if contains_any(normalized, LOCATION_TRIGGERS) {
        return Some(Intent::Location);
    }
    if contains_any(normalized, APPOINTMENT_TRIGGERS) {
        return Some(Intent::Appointment);
    }
    if contains_any(normalized, CONTACT_TRIGGERS) {
        return Some(Intent::Contact);
    }
    None
}

pub fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
