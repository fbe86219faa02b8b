pub mod cast;
pub mod collected;
pub mod config;
pub mod count;
pub mod envelope;
pub mod listing;
pub mod rewards;
pub mod user;

pub use cast::Cast;
pub use collected::CollectedSet;
pub use config::{
    AggregatorConfig, CacheConfig, ClientConfig, Config, DirectorySource, LoggingConfig,
    ServerConfig, StoreKind, UpstreamConfig,
};
pub use count::format_count;
pub use envelope::CachedListEnvelope;
pub use listing::{LookupOutcome, OmittedLookup, UserListing};
pub use rewards::{Bio, Picture, ProfileDetails, ProfileRecord, Winner};
pub use user::{CastTab, UserData, UserSummary, PLACEHOLDER_AVATAR};
