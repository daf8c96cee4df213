//! Well-known keys of the storage namespace.
//!
//! Conversation records are stored under their own opaque id and therefore
//! have no constant here.

/// `boolean` - set to `true` once the user confirmed their age.
pub const AGE_VERIFIED: &str = "age_verified";

/// `{ age, location, gender, customGender? }`
pub const USER_METADATA: &str = "user_metadata";

/// `string[]` - index of conversation records awaiting review or publish.
pub const LOCAL_DB_IDS: &str = "local_db_ids";

/// `number` - maintained by the background worker.
pub const MESSAGES_COUNTER: &str = "messages_counter_from_storage";

/// `{ shouldShare: boolean }` - owned by the sharing settings.
pub const SHOULD_SHARE: &str = "shouldShare";

/// `string` - identifier assigned to this installation.
pub const USER_ID: &str = "user_id";
