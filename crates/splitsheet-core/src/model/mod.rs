pub mod alert;
pub mod contributor;
pub mod ids;
pub mod iswc;
pub mod song;
pub mod split;
pub mod user;

pub use alert::{Alert, AlertKind};
pub use contributor::{Contributor, ContributorRole};
pub use ids::{AlertId, ContributorId, SongId, SplitId};
pub use iswc::Iswc;
pub use song::Song;
pub use split::Split;
pub use user::{UserProfile, UserRole};
