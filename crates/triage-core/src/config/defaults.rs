// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "triage.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Engine ---
pub const DEFAULT_TOP_K: usize = 6;
pub const DEFAULT_SUBSPECIALTY_ALPHA: f64 = 5.0;
pub const DEFAULT_DOCTOR_ALPHA: f64 = 0.5;
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 4;

// --- Questions ---
pub const DEFAULT_INITIAL_QUESTION: &str = crate::constants::INITIAL_QUESTION_SENTINEL;
pub const DEFAULT_EXHAUSTED_QUESTION: &str = "";
pub const DEFAULT_DOMINANT_GROUP_FALLBACK: bool = true;

// --- Session ---
pub const DEFAULT_INACTIVITY_TIMEOUT_SECS: u64 = 3_600; // 1 hour
pub const DEFAULT_MAX_AGE_SECS: u64 = 604_800; // 7 days

// --- Reference ---
pub const DEFAULT_TABLES_PATH: &str = "data/reference.json";
pub const DEFAULT_CLASSIFIER_PATH: &str = "model/classifier.json";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
