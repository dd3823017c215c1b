/// Feed name constants to ensure consistency across the codebase

// User-facing feed names (used in CLI output and logs)
pub const ALPHA_FEED: &str = "alpha";
pub const BRAVO_FEED: &str = "bravo";
pub const CHARLIE_FEED: &str = "charlie";

/// Prefix applied to bravo's native ids so they cannot collide with the
/// id spaces of the other feeds.
pub const BRAVO_ID_PREFIX: &str = "B_";

/// Country assumed for bravo records when the deployment does not
/// configure one. The upstream omits the field entirely.
pub const DEFAULT_BRAVO_COUNTRY: &str = "USA";
