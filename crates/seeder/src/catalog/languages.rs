use crate::LanguageSeed;

pub const LANGUAGES: &[LanguageSeed] = &[
    LanguageSeed {
        code: "en",
        name: "English",
        flag: Some("🇬🇧"),
        direction: "ltr",
        is_default: true,
        is_active: true,
        sort_order: 1,
    },
    LanguageSeed {
        code: "vi",
        name: "Tiếng Việt",
        flag: Some("🇻🇳"),
        direction: "ltr",
        is_default: false,
        is_active: true,
        sort_order: 2,
    },
];
