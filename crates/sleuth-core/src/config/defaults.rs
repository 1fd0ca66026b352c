// Single source of truth for all default values.

// --- Significance ---
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.01;

// --- Anchor spreads (days) ---
pub const YEAR_SIGMA_DAYS: f64 = 180.0;
pub const SEASON_SIGMA_DAYS: f64 = 45.0;
pub const HOLIDAY_SIGMA_DAYS: f64 = 14.0;
pub const BIRTHDAY_SIGMA_DAYS: f64 = 14.0;

// --- Cyclic wrap ---
pub const WRAP_PERIOD_DAYS: f64 = 365.0; // fixed; leap drift accepted

// --- Default evaluation range ---
pub const DEFAULT_RANGE_START: (i32, u32, u32) = (2000, 1, 1);
pub const DEFAULT_RANGE_END: (i32, u32, u32) = (2025, 12, 31);
pub const MAX_RANGE_DAYS: i64 = 36_525; // ~100 years of daily steps

// --- Season midpoints (month, day) ---
pub const SPRING_MIDPOINT: (u32, u32) = (4, 15);
pub const SUMMER_MIDPOINT: (u32, u32) = (7, 15);
pub const FALL_MIDPOINT: (u32, u32) = (10, 15);
pub const WINTER_MIDPOINT: (u32, u32) = (1, 15);

// --- Holidays ---
pub const CHRISTMAS_MONTH_DAY: (u32, u32) = (12, 25);
