//! Stable identifiers for reason codes, feature keys, and catalog issue codes.
//!
//! Feature keys are snake_case and used verbatim as rule table keys. Region codes are not listed
//! here: any string is a valid region and unknown ones fall back to the default rules.

// Reason codes
pub const REASON_ALLOWED: &str = "ALLOWED";
pub const REASON_AGE_RESTRICTED: &str = "AGE_RESTRICTED";

// Features
pub const FEATURE_FREE_CHAT: &str = "free_chat";
pub const FEATURE_USER_GENERATED_CONTENT: &str = "user_generated_content";
pub const FEATURE_LOCATION_SHARING: &str = "location_sharing";
pub const FEATURE_VOICE_RECORDING: &str = "voice_recording";
pub const FEATURE_IMAGE_UPLOAD: &str = "image_upload";
pub const FEATURE_AI_CHAT: &str = "ai_chat";
pub const FEATURE_PUSH_NOTIFICATIONS: &str = "push_notifications";
pub const FEATURE_PERSONALIZED_ADS: &str = "personalized_ads";

// Feature categories
pub const CATEGORY_SOCIAL: &str = "Social";
pub const CATEGORY_MEDIA: &str = "Media";
pub const CATEGORY_PRIVACY_SENSITIVE: &str = "Privacy-Sensitive";
pub const CATEGORY_AI_POWERED: &str = "AI-Powered";
pub const CATEGORY_ENGAGEMENT: &str = "Engagement";
pub const CATEGORY_ADVERTISING: &str = "Advertising";

// Catalog issue codes
pub const ISSUE_MISSING_FEATURE: &str = "missing_feature";
pub const ISSUE_UNKNOWN_FEATURE_RULE: &str = "unknown_feature_rule";
pub const ISSUE_EXCEPTION_MISMATCH: &str = "exception_mismatch";
pub const ISSUE_MISSING_METADATA: &str = "missing_metadata";

/// Label returned by the age bander when no band matches.
pub const BAND_UNKNOWN: &str = "unknown";

/// All known feature keys in display order.
pub fn all_feature_keys() -> &'static [&'static str] {
    &[
        FEATURE_FREE_CHAT,
        FEATURE_USER_GENERATED_CONTENT,
        FEATURE_LOCATION_SHARING,
        FEATURE_VOICE_RECORDING,
        FEATURE_IMAGE_UPLOAD,
        FEATURE_AI_CHAT,
        FEATURE_PUSH_NOTIFICATIONS,
        FEATURE_PERSONALIZED_ADS,
    ]
}

/// All catalog issue codes.
pub fn all_issue_codes() -> &'static [&'static str] {
    &[
        ISSUE_MISSING_FEATURE,
        ISSUE_UNKNOWN_FEATURE_RULE,
        ISSUE_EXCEPTION_MISMATCH,
        ISSUE_MISSING_METADATA,
    ]
}
