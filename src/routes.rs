// Route path constants - single source of truth for all API paths

pub const PROCESS: &str = "/api/Process";
pub const PROCESS_ITEM: &str = "/api/Process/{id}";
pub const PROCESS_ROUTES: &[&str] = &[PROCESS, PROCESS_ITEM];

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const PLACEHOLDER_ROUTES: &[&str] = &[ROOT, HEALTH];

pub const SWAGGER_UI: &str = "/swagger";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
