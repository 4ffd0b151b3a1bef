pub const AVG_LINE_BYTES: u64 = 200;
pub const DEFAULT_BATCH_SIZE: usize = 2000;
pub const QUEUE_BATCHES: usize = 100;

/// (level, weight) pairs; weights sum to 100.
pub const LOG_LEVELS: &[(&str, u32)] = &[("INFO", 70), ("DEBUG", 15), ("WARN", 10), ("ERROR", 5)];

pub const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH"];

pub const ENDPOINTS: &[&str] = &[
    "/api/users",
    "/api/products",
    "/api/orders",
    "/api/login",
    "/api/users/profile",
    "/api/products/search",
    "/api/orders/history",
];

pub const ERROR_MESSAGES: &[&str] = &[
    "Database connection timeout",
    "Authentication token expired",
    "Invalid input parameters",
    "Resource not found",
    "Internal Server Error: Null pointer exception",
];

pub const OK_MESSAGE: &str = "Request processed successfully";

/// Status codes a method can answer with. Repeats weight the draw.
pub fn status_codes_for(method: &str) -> &'static [i32] {
    match method {
        "GET" => &[200, 200, 200, 404, 500],
        "POST" => &[201, 201, 400, 500],
        "PUT" => &[200, 404, 400, 500],
        "DELETE" => &[204, 404, 500],
        _ => &[200, 404, 400, 500],
    }
}

/// Saturates instead of overflowing for absurd sizes.
pub fn lines_for_size_mb(size_mb: u64) -> u64 {
    size_mb.saturating_mul(1024 * 1024) / AVG_LINE_BYTES
}
