//! Constants used throughout the aiguide library.

/// Minimum username length, in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Default session token lifetime in days.
pub const DEFAULT_TOKEN_TTL_DAYS: u64 = 7;

/// Scheme prefix expected on the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Search URL prefix; the percent-encoded search phrase is appended.
pub const VIDEO_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// Search phrase suffix appended after the matched keyword.
pub const VIDEO_SEARCH_SUFFIX: &str = "AI tools tutorial";

/// Video link returned when no keyword matched.
pub const FALLBACK_VIDEO_URL: &str =
    "https://www.youtube.com/results?search_query=AI+tools+for+beginners+2024";

/// Description returned when no keyword matched.
pub const FALLBACK_DESCRIPTION: &str = "I'd be happy to help you learn about AI tools! While your query is quite general, let me introduce you to some powerful AI technology that's transforming how we work and learn. AI tools are becoming essential in today's digital world, offering solutions for automation, creativity, productivity, and learning. Here's a tool that might interest you:";

/// Uniform message for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";
