// src/config/consts.rs

// Window
pub const APP_TITLE: &str = "Candidate Search Dashboard";

// Data source
pub const DEFAULT_DATASET: &str = "1_candidates.csv";

// Local store (logs only; the dataset is never written back)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Pagination
pub const PAGE_SIZE: usize = 10;

// Display
pub const MISSING_LABEL: &str = "N/A";
pub const NO_RESUME_LABEL: &str = "No Resume";
pub const NO_WHATSAPP_LABEL: &str = "No WhatsApp Number";

// Contact / WhatsApp
pub const WHATSAPP_BASE: &str = "https://web.whatsapp.com/send?phone=";
pub const COUNTRY_CODE: &str = "91";
pub const COUNTRY_PREFIX: &str = "+91";
pub const LOCAL_DIGITS: usize = 10;
