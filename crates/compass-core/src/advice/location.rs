//! LocationSource trait definition.

use compass_types::advice::UserLocation;

/// Best-effort source of the user's position and country.
///
/// Implementations never error: denial, timeout, or transport failure
/// all degrade to an empty [`UserLocation`] so the main flow is never
/// blocked on geolocation.
pub trait LocationSource: Send + Sync {
    fn locate(&self) -> impl std::future::Future<Output = UserLocation> + Send;
}
