pub const CONFIG_PATH: &str = "matchai.yaml";
pub const PROFILES_PATH: &str = "data/profiles.json";

// Deterministic scoring weights
pub const BASE_SCORE: u32 = 70;
pub const SHARED_INTEREST_POINTS: u32 = 5;
pub const COMPLEMENTARY_SKILL_POINTS: u32 = 3;
pub const SCORE_CEILING: u32 = 95;
pub const MATCH_THRESHOLD: u32 = 60;

pub const ALIGNMENT_WITH_SHARED: f64 = 0.8;
pub const ALIGNMENT_WITHOUT_SHARED: f64 = 0.6;

pub const STARTER_COUNT: usize = 3;
pub const INSIGHT_COUNT: usize = 3;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const API_KEY_VARS: [&str; 2] = ["GOOGLE_AI_API_KEY", "NEXT_PUBLIC_GOOGLE_AI_API_KEY"];
pub const PLACEHOLDER_KEYS: [&str; 2] = ["demo-key", "your_google_ai_api_key"];

pub const MATCH_STATUS_ACTIVE: &str = "active";
