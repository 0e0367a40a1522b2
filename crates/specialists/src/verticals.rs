use vitrin_core::{SynonymTable, TenantContext};

use crate::{Specialist, ThemeSpec, Vertical};

const AUTOMOTIVE_KEYWORDS: &[&str] = &[
    "motor", "bakim", "fren", "lastik", "yag", "servis", "muayene", "ariza", "egzoz", "aku",
    "tamir", "kaporta",
];

const AUTOMOTIVE_SYNONYMS: &[(&str, &str)] = &[
    ("araba", "arac"),
    ("otomobil", "arac"),
    ("oto", "arac"),
    ("periyodik", "bakim"),
    ("kontrol", "muayene"),
    ("tamir", "onarim"),
    ("balata", "fren"),
];

const AUTOMOTIVE_THEME: ThemeSpec = ThemeSpec {
    name: "karbon",
    primary: "#1f2933",
    accent: "#f59e0b",
    heading_font: "Oswald",
    hero_style: "split-image",
};

pub(crate) fn automotive(tenant: &TenantContext) -> Specialist {
    Specialist::assemble(
        Vertical::Automotive,
        tenant,
        format!(
            "Merhaba! {} oto servis asistanıyım. Bakım, onarım ve randevu sorularınız için buradayım.",
            tenant.profile.company_name
        ),
        "Aracınızın periyodik bakımından fren ve lastik işlerine kadar tüm servis ihtiyaçlarını karşılıyoruz. Aracınızı ustalarımıza bırakın, çıkışta detaylı servis raporunuzu teslim edelim.".to_string(),
        "Aracınızla ilgili acil bir durum varsa bizi aramaktan çekinmeyin.".to_string(),
        AUTOMOTIVE_KEYWORDS,
        SynonymTable::for_vertical(AUTOMOTIVE_SYNONYMS),
        AUTOMOTIVE_THEME,
    )
}

const BEAUTY_KEYWORDS: &[&str] = &[
    "sac", "kuafor", "kesim", "boya", "fon", "manikur", "pedikur", "cilt", "makyaj", "agda",
    "perma",
];

const BEAUTY_SYNONYMS: &[(&str, &str)] = &[
    ("sac", "hair"),
    ("kuafor", "berber"),
    ("boyama", "boya"),
    ("tirnak", "manikur"),
    ("fondoten", "makyaj"),
    ("bakim", "cilt"),
];

const BEAUTY_THEME: ThemeSpec = ThemeSpec {
    name: "pudra",
    primary: "#b76e79",
    accent: "#f7e1d7",
    heading_font: "Playfair Display",
    hero_style: "centered-portrait",
};

pub(crate) fn beauty(tenant: &TenantContext) -> Specialist {
    Specialist::assemble(
        Vertical::Beauty,
        tenant,
        format!(
            "Hoş geldiniz! {} güzellik asistanınızım. Saç, bakım ve randevu için yardımcı olabilirim.",
            tenant.profile.company_name
        ),
        "Saç kesiminden renklendirmeye, cilt bakımından manikür ve pediküre kadar tüm güzellik hizmetlerini sunuyoruz. Uzman ekibimiz size özel bir uygulama planlar.".to_string(),
        "Size en uygun uygulamayı birlikte seçmek için salonumuza da bekleriz.".to_string(),
        BEAUTY_KEYWORDS,
        SynonymTable::for_vertical(BEAUTY_SYNONYMS),
        BEAUTY_THEME,
    )
}

const RESTAURANT_KEYWORDS: &[&str] = &[
    "menu", "yemek", "tatli", "icecek", "kahvalti", "corba", "pide", "kebap", "siparis", "masa",
    "porsiyon",
];

const RESTAURANT_SYNONYMS: &[(&str, &str)] = &[
    ("aksam", "menu"),
    ("oglen", "menu"),
    ("doner", "kebap"),
    ("baklava", "tatli"),
    ("kahve", "icecek"),
    ("cay", "icecek"),
    ("paket", "siparis"),
];

const RESTAURANT_THEME: ThemeSpec = ThemeSpec {
    name: "safran",
    primary: "#9a3412",
    accent: "#fbbf24",
    heading_font: "Merriweather",
    hero_style: "full-bleed-photo",
};

pub(crate) fn restaurant(tenant: &TenantContext) -> Specialist {
    Specialist::assemble(
        Vertical::Restaurant,
        tenant,
        format!(
            "Afiyet olsun! {} lezzet asistanıyım. Menü, sipariş ve masa sorularınız için buradayım.",
            tenant.profile.company_name
        ),
        "Günlük hazırlanan menümüzde çorbalardan ana yemeklere, pidelerden tatlılara uzanan geniş bir seçki var. Dilerseniz paket sipariş de verebilirsiniz.".to_string(),
        "Masa ayırtmak isterseniz bir telefon kadar yakınız.".to_string(),
        RESTAURANT_KEYWORDS,
        SynonymTable::for_vertical(RESTAURANT_SYNONYMS),
        RESTAURANT_THEME,
    )
}

const CONSTRUCTION_KEYWORDS: &[&str] = &[
    "insaat", "tadilat", "proje", "danismanlik", "egitim", "kurs", "renovasyon", "mimari",
    "dekorasyon", "teklif", "kesif",
];

const CONSTRUCTION_SYNONYMS: &[(&str, &str)] = &[
    ("yenileme", "tadilat"),
    ("ders", "kurs"),
    ("seminer", "egitim"),
    ("plan", "proje"),
    ("fiyatlandirma", "teklif"),
    ("boyama", "tadilat"),
];

const CONSTRUCTION_THEME: ThemeSpec = ThemeSpec {
    name: "beton",
    primary: "#374151",
    accent: "#d97706",
    heading_font: "Archivo",
    hero_style: "grid-showcase",
};

// Professional-services tone; the consulting and education industries alias
// onto this variant.
pub(crate) fn construction(tenant: &TenantContext) -> Specialist {
    Specialist::assemble(
        Vertical::Construction,
        tenant,
        format!(
            "Merhaba! {} proje asistanıyım. Teklif, keşif ve randevu süreçlerinde yardımcı olurum.",
            tenant.profile.company_name
        ),
        "Projelerinizi keşiften teslimata kadar tek elden yürütüyoruz. İhtiyacınızı kısaca anlatın, ekibimiz ücretsiz keşif randevusu ile dönüş yapsın.".to_string(),
        "Detaylı bir teklif için proje bilgilerinizi iletmeniz yeterli.".to_string(),
        CONSTRUCTION_KEYWORDS,
        SynonymTable::for_vertical(CONSTRUCTION_SYNONYMS),
        CONSTRUCTION_THEME,
    )
}

const RETAIL_KEYWORDS: &[&str] = &[
    "urun", "stok", "beden", "kargo", "iade", "siparis", "koleksiyon", "magaza", "sepet", "fiyat",
];

const RETAIL_SYNONYMS: &[(&str, &str)] = &[
    ("gomlek", "urun"),
    ("elbise", "urun"),
    ("ayakkabi", "urun"),
    ("gonderim", "kargo"),
    ("degisim", "iade"),
    ("olcu", "beden"),
];

const RETAIL_THEME: ThemeSpec = ThemeSpec {
    name: "vitrin",
    primary: "#111827",
    accent: "#ef4444",
    heading_font: "Montserrat",
    hero_style: "product-grid",
};

pub(crate) fn retail(tenant: &TenantContext) -> Specialist {
    Specialist::assemble(
        Vertical::Retail,
        tenant,
        format!(
            "Hoş geldiniz! {} mağaza asistanıyım. Ürün, beden ve kargo sorularınız için buradayım.",
            tenant.profile.company_name
        ),
        "Yeni sezon koleksiyonumuz mağazamızda ve sitemizde sizi bekliyor. Beden değişimi ve iade süreçlerinde de yanınızdayız.".to_string(),
        "Aradığınız ürünün adını yazarsanız stok durumuna hemen bakarım.".to_string(),
        RETAIL_KEYWORDS,
        SynonymTable::for_vertical(RETAIL_SYNONYMS),
        RETAIL_THEME,
    )
}

const HEALTH_KEYWORDS: &[&str] = &[
    "muayene", "tedavi", "dis", "kontrol", "tahlil", "doktor", "klinik", "agri", "implant",
    "dolgu", "fizik",
];

const HEALTH_SYNONYMS: &[(&str, &str)] = &[
    ("hekim", "doktor"),
    ("beyazlatma", "dis"),
    ("rontgen", "tahlil"),
    ("terapi", "tedavi"),
    ("checkup", "kontrol"),
];

const HEALTH_THEME: ThemeSpec = ThemeSpec {
    name: "nane",
    primary: "#0f766e",
    accent: "#99f6e4",
    heading_font: "Source Sans Pro",
    hero_style: "calm-gradient",
};

pub(crate) fn health(tenant: &TenantContext) -> Specialist {
    Specialist::assemble(
        Vertical::Health,
        tenant,
        format!(
            "Merhaba! {} klinik asistanıyım. Muayene ve tedavi planlaması için buradayım.",
            tenant.profile.company_name
        ),
        "Muayene, tahlil ve tedavi planlamasını tek çatı altında yürütüyoruz. Uzman hekimlerimiz şikayetinize uygun bir kontrol programı oluşturur.".to_string(),
        "Aciliyeti olan durumlarda kliniğimizi doğrudan arayabilirsiniz.".to_string(),
        HEALTH_KEYWORDS,
        SynonymTable::for_vertical(HEALTH_SYNONYMS),
        HEALTH_THEME,
    )
}

const GENERIC_THEME: ThemeSpec = ThemeSpec {
    name: "atolye",
    primary: "#334155",
    accent: "#38bdf8",
    heading_font: "Inter",
    hero_style: "clean-hero",
};

/// Builder for tenants whose industry is not in the registry. The greeting
/// and fallback templates are interpolated here, once, so the returned value
/// is as fully formed as any concrete variant.
pub(crate) fn generic(tenant: &TenantContext) -> Specialist {
    let industry = capitalize(tenant.profile.industry.trim());
    let display = if industry.is_empty() {
        "İşletme".to_string()
    } else {
        industry
    };

    Specialist::assemble(
        Vertical::Generic,
        tenant,
        format!(
            "Merhaba! {} ekibinin {} asistanıyım. Hizmetlerimiz ve randevu için buradayım.",
            tenant.profile.company_name, display
        ),
        format!(
            "{} alanındaki tüm hizmetlerimiz için bize yazabilirsiniz. İhtiyacınızı kısaca anlatın, size en uygun seçeneği önerelim.",
            display
        ),
        "En kısa sürede size dönüş yapacağız.".to_string(),
        &[],
        SynonymTable::base(),
        GENERIC_THEME,
    )
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
