// Application-wide constants: storage keys, DOM ids, copy and chart colours.

pub const APP_TITLE: &str = "Competency Evaluation";

// Backend defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8002";
pub const API_PREFIX: &str = "/api/v1";

// localStorage
pub const TOKEN_STORAGE_KEY: &str = "competency_jwt";

// DOM ids
pub const ID_APP_ROOT: &str = "app-root";
pub const ID_SHELL: &str = "app-shell";
pub const ID_HEADER: &str = "header";
pub const ID_SIDEBAR: &str = "sidebar";
pub const ID_CONTENT: &str = "content";
pub const ID_AUTH_CONTAINER: &str = "auth-container";
pub const ID_RADAR_CANVAS: &str = "radar-chart";
pub const ID_TOAST_ROOT: &str = "toast-root";
pub const ID_APP_STYLES: &str = "app-styles";

// Login / register form inputs
pub const ID_LOGIN_EMAIL: &str = "login-email";
pub const ID_LOGIN_PASSWORD: &str = "login-password";
pub const ID_REGISTER_EMAIL: &str = "register-email";
pub const ID_REGISTER_NAME: &str = "register-name";
pub const ID_REGISTER_DEPARTMENT: &str = "register-department";
pub const ID_REGISTER_POSITION: &str = "register-position";
pub const ID_REGISTER_PASSWORD: &str = "register-password";
pub const ID_REGISTER_CONFIRM: &str = "register-confirm-password";

// Likert scale
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// Answer options shown for every question, lowest score first.
pub const SCORE_OPTIONS: [(u8, &str); 5] = [
    (1, "Strongly disagree"),
    (2, "Disagree"),
    (3, "Neutral"),
    (4, "Agree"),
    (5, "Strongly agree"),
];

// Query flag the evaluation page appends when it hands over to the dashboard
pub const QUERY_EVALUATION: &str = "evaluation";
pub const QUERY_EVALUATION_COMPLETED: &str = "completed";
pub const QUERY_REGISTERED: &str = "registered";

// Radar chart
pub const RADAR_CANVAS_WIDTH: u32 = 560;
pub const RADAR_CANVAS_HEIGHT: u32 = 420;
pub const RADAR_LABEL_MAX_GRAPHEMES: usize = 12;
pub const RADAR_GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";
pub const RADAR_LABEL_COLOR: &str = "#374151";
pub const USER_SERIES_LABEL: &str = "Your score";
pub const USER_SERIES_FILL: &str = "rgba(59, 130, 246, 0.2)";
pub const USER_SERIES_STROKE: &str = "rgba(59, 130, 246, 1)";
pub const COMPANY_SERIES_LABEL: &str = "Company average";
pub const COMPANY_SERIES_FILL: &str = "rgba(239, 68, 68, 0.2)";
pub const COMPANY_SERIES_STROKE: &str = "rgba(239, 68, 68, 1)";

// User-facing messages
pub const MSG_RESULTS_FAILED: &str =
    "Failed to load your results. Please try again in a moment.";
pub const MSG_FEEDBACK_FAILED: &str =
    "Failed to get AI feedback. Please try again in a moment.";
pub const MSG_SUBMIT_FAILED: &str = "Failed to submit your answers.";
pub const MSG_CAREER_PLAN_SAVE_FAILED: &str = "Failed to save the career plan.";
