//! Built-in rule tables.
//!
//! This is the only place minimum ages are written down. Bump `CATALOG_VERSION` whenever a value
//! changes; region metadata below must stay in step with the rule rows (see `verify`).

use agegate_types::ids::*;

pub const CATALOG_VERSION: &str = "2024.1";

pub type RuleRow = (&'static str, u32);

pub struct RegionRow {
    pub code: &'static str,
    pub rules: &'static [RuleRow],
}

pub struct RegionMetaRow {
    pub code: &'static str,
    pub name: &'static str,
    pub law: &'static str,
    pub general_age: u32,
    pub exceptions: &'static [RuleRow],
    pub description: &'static str,
}

pub struct FeatureRow {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const DEFAULT_RULES: &[RuleRow] = &[
    (FEATURE_FREE_CHAT, 13),
    (FEATURE_USER_GENERATED_CONTENT, 13),
    (FEATURE_LOCATION_SHARING, 13),
    (FEATURE_VOICE_RECORDING, 8),
    (FEATURE_IMAGE_UPLOAD, 8),
    (FEATURE_AI_CHAT, 13),
    (FEATURE_PUSH_NOTIFICATIONS, 5),
    (FEATURE_PERSONALIZED_ADS, 16),
];

pub const REGIONS: &[RegionRow] = &[
    RegionRow {
        code: "AU",
        rules: &[
            (FEATURE_FREE_CHAT, 16),
            (FEATURE_USER_GENERATED_CONTENT, 16),
            (FEATURE_LOCATION_SHARING, 16),
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 12),
            (FEATURE_AI_CHAT, 16),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
    },
    RegionRow {
        code: "BR",
        rules: &[
            (FEATURE_FREE_CHAT, 12),
            (FEATURE_USER_GENERATED_CONTENT, 12),
            (FEATURE_LOCATION_SHARING, 16),
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_AI_CHAT, 12),
            (FEATURE_PUSH_NOTIFICATIONS, 6),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
    },
    RegionRow {
        code: "CA",
        rules: &[
            (FEATURE_FREE_CHAT, 13),
            (FEATURE_USER_GENERATED_CONTENT, 13),
            (FEATURE_LOCATION_SHARING, 14),
            (FEATURE_VOICE_RECORDING, 8),
            (FEATURE_IMAGE_UPLOAD, 8),
            (FEATURE_AI_CHAT, 13),
            (FEATURE_PUSH_NOTIFICATIONS, 5),
            (FEATURE_PERSONALIZED_ADS, 13),
        ],
    },
    RegionRow {
        code: "DE",
        rules: &[
            (FEATURE_FREE_CHAT, 16),
            (FEATURE_USER_GENERATED_CONTENT, 16),
            (FEATURE_LOCATION_SHARING, 16),
            (FEATURE_VOICE_RECORDING, 12),
            (FEATURE_IMAGE_UPLOAD, 16),
            (FEATURE_AI_CHAT, 16),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
    },
    RegionRow {
        code: "ES",
        rules: &[
            (FEATURE_FREE_CHAT, 14),
            (FEATURE_USER_GENERATED_CONTENT, 14),
            (FEATURE_LOCATION_SHARING, 14),
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_AI_CHAT, 14),
            (FEATURE_PUSH_NOTIFICATIONS, 7),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
    },
    RegionRow {
        code: "FR",
        rules: &[
            (FEATURE_FREE_CHAT, 15),
            (FEATURE_USER_GENERATED_CONTENT, 15),
            (FEATURE_LOCATION_SHARING, 16),
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_AI_CHAT, 15),
            (FEATURE_PUSH_NOTIFICATIONS, 7),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
    },
    RegionRow {
        code: "GB",
        rules: &[
            (FEATURE_FREE_CHAT, 13),
            (FEATURE_USER_GENERATED_CONTENT, 13),
            (FEATURE_LOCATION_SHARING, 16),
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_AI_CHAT, 13),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
    },
    RegionRow {
        code: "IE",
        rules: &[
            (FEATURE_FREE_CHAT, 16),
            (FEATURE_USER_GENERATED_CONTENT, 16),
            (FEATURE_LOCATION_SHARING, 16),
            (FEATURE_VOICE_RECORDING, 12),
            (FEATURE_IMAGE_UPLOAD, 12),
            (FEATURE_AI_CHAT, 16),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
    },
    RegionRow {
        code: "IN",
        rules: &[
            (FEATURE_FREE_CHAT, 18),
            (FEATURE_USER_GENERATED_CONTENT, 18),
            (FEATURE_LOCATION_SHARING, 18),
            (FEATURE_VOICE_RECORDING, 13),
            (FEATURE_IMAGE_UPLOAD, 13),
            (FEATURE_AI_CHAT, 18),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
    },
    RegionRow {
        code: "IT",
        rules: &[
            (FEATURE_FREE_CHAT, 14),
            (FEATURE_USER_GENERATED_CONTENT, 14),
            (FEATURE_LOCATION_SHARING, 14),
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_AI_CHAT, 14),
            (FEATURE_PUSH_NOTIFICATIONS, 7),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
    },
    RegionRow {
        code: "KR",
        rules: &[
            (FEATURE_FREE_CHAT, 14),
            (FEATURE_USER_GENERATED_CONTENT, 14),
            (FEATURE_LOCATION_SHARING, 14),
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_AI_CHAT, 14),
            (FEATURE_PUSH_NOTIFICATIONS, 7),
            (FEATURE_PERSONALIZED_ADS, 14),
        ],
    },
    RegionRow {
        code: "NL",
        rules: &[
            (FEATURE_FREE_CHAT, 16),
            (FEATURE_USER_GENERATED_CONTENT, 16),
            (FEATURE_LOCATION_SHARING, 16),
            (FEATURE_VOICE_RECORDING, 12),
            (FEATURE_IMAGE_UPLOAD, 12),
            (FEATURE_AI_CHAT, 16),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
    },
    RegionRow {
        code: "US",
        rules: &[
            (FEATURE_FREE_CHAT, 13),
            (FEATURE_USER_GENERATED_CONTENT, 13),
            (FEATURE_LOCATION_SHARING, 13),
            (FEATURE_VOICE_RECORDING, 8),
            (FEATURE_IMAGE_UPLOAD, 8),
            (FEATURE_AI_CHAT, 13),
            (FEATURE_PUSH_NOTIFICATIONS, 5),
            (FEATURE_PERSONALIZED_ADS, 13),
        ],
    },
];

pub const REGION_METADATA: &[RegionMetaRow] = &[
    RegionMetaRow {
        code: "AU",
        name: "Australia",
        law: "Privacy Act 1988 / Online Safety Amendment (Social Media Minimum Age) Act 2024",
        general_age: 16,
        exceptions: &[
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 12),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
        description: "Social features require age 16 under the social media minimum age regime.",
    },
    RegionMetaRow {
        code: "BR",
        name: "Brazil",
        law: "LGPD (Lei Geral de Proteção de Dados)",
        general_age: 12,
        exceptions: &[
            (FEATURE_LOCATION_SHARING, 16),
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_PUSH_NOTIFICATIONS, 6),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
        description: "Children under 12 need specific parental consent; adolescents receive heightened protection.",
    },
    RegionMetaRow {
        code: "CA",
        name: "Canada",
        law: "PIPEDA",
        general_age: 13,
        exceptions: &[
            (FEATURE_LOCATION_SHARING, 14),
            (FEATURE_VOICE_RECORDING, 8),
            (FEATURE_IMAGE_UPLOAD, 8),
            (FEATURE_PUSH_NOTIFICATIONS, 5),
        ],
        description: "Meaningful consent generally requires age 13; location data treated as sensitive.",
    },
    RegionMetaRow {
        code: "DE",
        name: "Germany",
        law: "GDPR Art. 8 (BDSG)",
        general_age: 16,
        exceptions: &[
            (FEATURE_VOICE_RECORDING, 12),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
        description: "Germany keeps the GDPR default digital consent age of 16.",
    },
    RegionMetaRow {
        code: "ES",
        name: "Spain",
        law: "GDPR / LOPDGDD",
        general_age: 14,
        exceptions: &[
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_PUSH_NOTIFICATIONS, 7),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
        description: "Spain lowers the digital consent age to 14.",
    },
    RegionMetaRow {
        code: "FR",
        name: "France",
        law: "GDPR / Loi Informatique et Libertés",
        general_age: 15,
        exceptions: &[
            (FEATURE_LOCATION_SHARING, 16),
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_PUSH_NOTIFICATIONS, 7),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
        description: "France sets the digital consent age at 15.",
    },
    RegionMetaRow {
        code: "GB",
        name: "United Kingdom",
        law: "UK GDPR / Age Appropriate Design Code",
        general_age: 13,
        exceptions: &[
            (FEATURE_LOCATION_SHARING, 16),
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
        description: "Consent age 13; the Children's Code expects geolocation and profiling off by default.",
    },
    RegionMetaRow {
        code: "IE",
        name: "Ireland",
        law: "GDPR / Data Protection Act 2018",
        general_age: 16,
        exceptions: &[
            (FEATURE_VOICE_RECORDING, 12),
            (FEATURE_IMAGE_UPLOAD, 12),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
        description: "Ireland sets the digital consent age at 16 and restricts profiling of children.",
    },
    RegionMetaRow {
        code: "IN",
        name: "India",
        law: "Digital Personal Data Protection Act 2023",
        general_age: 18,
        exceptions: &[
            (FEATURE_VOICE_RECORDING, 13),
            (FEATURE_IMAGE_UPLOAD, 13),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
        ],
        description: "Verifiable parental consent is required for anyone under 18.",
    },
    RegionMetaRow {
        code: "IT",
        name: "Italy",
        law: "GDPR / Codice in materia di protezione dei dati personali",
        general_age: 14,
        exceptions: &[
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_PUSH_NOTIFICATIONS, 7),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
        description: "Italy sets the digital consent age at 14.",
    },
    RegionMetaRow {
        code: "KR",
        name: "South Korea",
        law: "PIPA (Personal Information Protection Act)",
        general_age: 14,
        exceptions: &[
            (FEATURE_VOICE_RECORDING, 10),
            (FEATURE_IMAGE_UPLOAD, 10),
            (FEATURE_PUSH_NOTIFICATIONS, 7),
        ],
        description: "Legal guardian consent is required to process data of children under 14.",
    },
    RegionMetaRow {
        code: "NL",
        name: "Netherlands",
        law: "GDPR / UAVG",
        general_age: 16,
        exceptions: &[
            (FEATURE_VOICE_RECORDING, 12),
            (FEATURE_IMAGE_UPLOAD, 12),
            (FEATURE_PUSH_NOTIFICATIONS, 8),
            (FEATURE_PERSONALIZED_ADS, 18),
        ],
        description: "The Netherlands keeps the GDPR default digital consent age of 16.",
    },
    RegionMetaRow {
        code: "US",
        name: "United States",
        law: "COPPA",
        general_age: 13,
        exceptions: &[
            (FEATURE_VOICE_RECORDING, 8),
            (FEATURE_IMAGE_UPLOAD, 8),
            (FEATURE_PUSH_NOTIFICATIONS, 5),
        ],
        description: "Verifiable parental consent is required to collect personal information from children under 13.",
    },
];

pub const FEATURES: &[FeatureRow] = &[
    FeatureRow {
        key: FEATURE_FREE_CHAT,
        display_name: "Free Chat",
        description: "Unrestricted text chat with other users.",
        category: CATEGORY_SOCIAL,
    },
    FeatureRow {
        key: FEATURE_USER_GENERATED_CONTENT,
        display_name: "User Generated Content",
        description: "Publishing posts, levels, or other content visible to other users.",
        category: CATEGORY_SOCIAL,
    },
    FeatureRow {
        key: FEATURE_LOCATION_SHARING,
        display_name: "Location Sharing",
        description: "Sharing precise device location with the service or other users.",
        category: CATEGORY_PRIVACY_SENSITIVE,
    },
    FeatureRow {
        key: FEATURE_VOICE_RECORDING,
        display_name: "Voice Recording",
        description: "Capturing and storing voice audio.",
        category: CATEGORY_MEDIA,
    },
    FeatureRow {
        key: FEATURE_IMAGE_UPLOAD,
        display_name: "Image Upload",
        description: "Uploading photos or drawings.",
        category: CATEGORY_MEDIA,
    },
    FeatureRow {
        key: FEATURE_AI_CHAT,
        display_name: "AI Chat",
        description: "Conversational assistant backed by a generative model.",
        category: CATEGORY_AI_POWERED,
    },
    FeatureRow {
        key: FEATURE_PUSH_NOTIFICATIONS,
        display_name: "Push Notifications",
        description: "Notifications delivered while the app is closed.",
        category: CATEGORY_ENGAGEMENT,
    },
    FeatureRow {
        key: FEATURE_PERSONALIZED_ADS,
        display_name: "Personalized Ads",
        description: "Advertising targeted using behavioural profiling.",
        category: CATEGORY_ADVERTISING,
    },
];
