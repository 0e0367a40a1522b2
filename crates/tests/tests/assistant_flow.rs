use vitrin_core::{
    find_best_match, normalize, BusinessProfile, CatalogItem, Intent, Schedule, SiteConfig,
    TenantContext,
};
use vitrin_engine::ChatEngine;
use vitrin_observability::EngineMetrics;
use vitrin_specialists::specialist_for;

fn tenant(industry: &str, catalog: Vec<CatalogItem>) -> TenantContext {
    TenantContext {
        profile: BusinessProfile {
            company_name: "Usta Garaj".to_string(),
            phone: "0212 555 00 00".to_string(),
            email: "info@ustagaraj.example".to_string(),
            street: "Sanayi Caddesi".to_string(),
            house_num: "12".to_string(),
            zip: "34000".to_string(),
            city: "İstanbul".to_string(),
            industry: industry.to_string(),
            currency: "TL".to_string(),
        },
        catalog,
        site: SiteConfig::default(),
    }
}

fn service(id: &str, name: &str, price: f64) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        price,
    }
}

fn engine(industry: &str, catalog: Vec<CatalogItem>) -> ChatEngine {
    ChatEngine::new(tenant(industry, catalog), EngineMetrics::shared())
}

#[test]
fn automotive_catalog_query_returns_price_and_directives() {
    let engine = engine(
        "automotive",
        vec![service("srv_1", "Motor Bakımı", 120.0)],
    );

    let reply = engine.handle_query("motor bakımı ne kadar");
    assert_eq!(reply.intent, Intent::SpecialistDomain);
    assert!(reply.text.contains("120"));
    assert!(reply.text.contains("[ACTION:BOOK:/randevu?service=srv_1]"));
    assert!(reply.text.contains("[ACTION:CART:srv_1]"));
}

#[test]
fn empty_query_returns_the_terminal_fallback_verbatim() {
    let engine = engine("automotive", vec![service("srv_1", "Motor Bakımı", 120.0)]);

    let reply = engine.handle_query("");
    assert_eq!(reply.intent, Intent::Fallback);
    assert_eq!(reply.text, engine.specialist().fallback_response(""));
    assert!(reply.text.contains("Usta Garaj"));
}

#[test]
fn beauty_synonym_expansion_matches_hair_service() {
    let context = tenant("beauty", vec![service("srv_9", "Saç Kesimi", 250.0)]);
    let specialist = specialist_for(&context);

    let expanded = specialist.synonyms().expand(&normalize("saç kesimi var mı"));
    assert!(expanded.tokens.contains("hair"));

    let matched = find_best_match(&expanded, &context.catalog).expect("score clears threshold");
    assert_eq!(matched.id, "srv_9");

    let engine = ChatEngine::new(context, EngineMetrics::shared());
    let reply = engine.handle_query("saç kesimi var mı");
    assert_eq!(reply.intent, Intent::SpecialistDomain);
    assert!(reply.text.contains("Saç Kesimi"));
    assert!(reply.text.contains("[ACTION:CART:srv_9]"));
}

#[test]
fn hours_trigger_outranks_booking_trigger() {
    let engine = engine("automotive", Vec::new());

    let reply = engine.handle_query("saat kaç randevu alabilir miyim");
    assert_eq!(reply.intent, Intent::Hours);
    assert!(reply.text.contains("08:00 - 18:00"));
    assert!(!reply.text.contains("[ACTION:BOOK:"));
}

#[test]
fn configured_schedule_replaces_the_default_template() {
    let mut context = tenant("automotive", Vec::new());
    context.site.schedule = Some(Schedule {
        days: "Salı - Pazar".to_string(),
        opens: "10:00".to_string(),
        closes: "20:00".to_string(),
    });

    let reply = ChatEngine::new(context, EngineMetrics::shared()).handle_query("kaçta açıksınız");
    assert_eq!(reply.intent, Intent::Hours);
    assert!(reply.text.contains("Salı - Pazar"));
    assert!(reply.text.contains("10:00"));
    assert!(reply.text.contains("20:00"));
}

#[test]
fn location_query_interpolates_the_address() {
    let reply = engine("retail", Vec::new()).handle_query("mağazanız nerede");
    assert_eq!(reply.intent, Intent::Location);
    assert!(reply.text.contains("Sanayi Caddesi"));
    assert!(reply.text.contains("İstanbul"));
}

#[test]
fn appointment_query_carries_a_booking_directive() {
    let reply = engine("health", Vec::new()).handle_query("randevu almak istiyorum");
    assert_eq!(reply.intent, Intent::Appointment);
    assert!(reply.text.contains("[ACTION:BOOK:/randevu]"));
}

#[test]
fn contact_query_carries_a_call_directive() {
    let reply = engine("restaurant", Vec::new()).handle_query("telefon numaranız nedir");
    assert_eq!(reply.intent, Intent::Contact);
    assert!(reply.text.contains("[ACTION:CALL:tel:0212 555 00 00]"));
}

#[test]
fn missing_phone_degrades_to_an_empty_segment() {
    let mut context = tenant("restaurant", Vec::new());
    context.profile.phone = String::new();

    let reply = ChatEngine::new(context, EngineMetrics::shared()).handle_query("iletişim bilgileriniz");
    assert_eq!(reply.intent, Intent::Contact);
    assert!(reply.text.contains("[ACTION:CALL:tel:]"));
}

#[test]
fn design_question_returns_the_specialists_theme() {
    let engine = engine("beauty", Vec::new());
    let reply = engine.handle_query("hangi tema bana uygun olur");
    assert_eq!(reply.intent, Intent::DesignAdvice);
    assert!(reply.text.contains(engine.specialist().theme().name));
}

#[test]
fn unknown_industry_still_answers_catalog_queries() {
    let engine = engine(
        "florist",
        vec![service("srv_3", "Gelin Buketi", 850.0)],
    );

    let reply = engine.handle_query("gelin buketi sipariş edebilir miyim");
    assert_eq!(reply.intent, Intent::CatalogMatch);
    assert!(reply.text.contains("Gelin Buketi"));
    assert!(reply.text.contains("[ACTION:CART:srv_3]"));
}

#[test]
fn zeppelin_repair_gets_a_plausible_specialist() {
    let context = tenant("zeppelin-repair", Vec::new());
    let specialist = specialist_for(&context);

    assert!(specialist.greeting().contains("Usta Garaj"));
    assert!(specialist.greeting().contains("Zeppelin-repair"));

    let reply = ChatEngine::new(context, EngineMetrics::shared()).handle_query("balon tamiri yapıyor musunuz");
    assert_eq!(reply.intent, Intent::Fallback);
    assert!(reply.text.contains("balon tamiri yapıyor musunuz"));
}

#[test]
fn metrics_advance_per_handled_query() {
    let metrics = EngineMetrics::shared();
    let engine = ChatEngine::new(tenant("automotive", Vec::new()), metrics.clone());

    engine.handle_query("saat kaç");
    engine.handle_query("");

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.queries_total, 2);
    assert_eq!(snapshot.fixed_intent_total, 1);
    assert_eq!(snapshot.fallback_total, 1);
}

#[test]
fn reply_serializes_with_snake_case_intent() {
    let reply = engine("automotive", Vec::new()).handle_query("saat kaç");
    let value = serde_json::to_value(&reply).expect("reply serializes");
    assert_eq!(value["intent"], "hours");
    assert!(value["text"].as_str().is_some());
}
