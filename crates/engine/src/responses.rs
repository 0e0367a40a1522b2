use vitrin_core::{ActionDirective, CatalogItem, TenantContext};
use vitrin_specialists::Specialist;

pub(crate) fn hours_reply(tenant: &TenantContext) -> String {
    match &tenant.site.schedule {
        Some(schedule) => format!(
            "Çalışma saatlerimiz: {} günleri {} - {} arası. Sizi bekliyoruz!",
            schedule.days, schedule.opens, schedule.closes
        ),
        None => {
            "Pazartesi - Cumartesi 08:00 - 18:00 saatleri arasında hizmet veriyoruz. Sizi bekliyoruz!"
                .to_string()
        }
    }
}

pub(crate) fn location_reply(tenant: &TenantContext) -> String {
    let profile = &tenant.profile;
    format!(
        "Adresimiz: {} {}, {} {}. Kapıda görüşmek üzere!",
        profile.street, profile.house_num, profile.zip, profile.city
    )
}

pub(crate) fn appointment_reply(tenant: &TenantContext) -> String {
    let book = ActionDirective::Book(tenant.site.booking_path.clone());
    format!("Hemen online randevu oluşturabilirsiniz: {book}")
}

pub(crate) fn contact_reply(tenant: &TenantContext) -> String {
    let call = ActionDirective::call_tel(&tenant.profile.phone);
    format!(
        "Bize her zaman ulaşabilirsiniz: {} {}",
        tenant.profile.phone, call
    )
}

pub(crate) fn item_reply(tenant: &TenantContext, item: &CatalogItem) -> String {
    let book = ActionDirective::Book(format!(
        "{}?service={}",
        tenant.site.booking_path, item.id
    ));
    let cart = ActionDirective::Cart(item.id.clone());

    let mut text = format!(
        "{} hizmetimiz mevcut! Ücret: {} {}.",
        item.name,
        item.price_label(),
        tenant.profile.currency
    );
    if !item.description.is_empty() {
        text.push('\n');
        text.push_str(&item.description);
    }
    text.push('\n');
    text.push_str(&format!("Hemen yerinizi ayırtın: {book} {cart}"));
    text
}

pub(crate) fn narrative_reply(specialist: &Specialist, tenant: &TenantContext) -> String {
    let book = ActionDirective::Book(tenant.site.booking_path.clone());
    let call = ActionDirective::call_tel(&tenant.profile.phone);
    format!("{}\n{} {}", specialist.domain_narrative(), book, call)
}
