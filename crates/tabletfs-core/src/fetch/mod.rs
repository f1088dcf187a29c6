//! Listing requests against the device.
//!
//! A [`Transport`] performs the raw request for one location; [`fetch_listing`]
//! decodes the body into a [`Listing`]. Neither retries nor caches.

mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use http::HttpTransport;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;

use tracing::{debug, trace};

use crate::error::FetchError;
use crate::models::{Entry, Listing};

/// Raw request for the listing of one location.
///
/// `location` is empty for root and a folder id otherwise. Implementations
/// return the response body undecoded.
pub trait Transport {
    fn request(&self, location: &str) -> Result<String, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn request(&self, location: &str) -> Result<String, FetchError> {
        (**self).request(location)
    }
}

/// Request and decode the listing of `location`.
pub fn fetch_listing<T: Transport + ?Sized>(
    transport: &T,
    location: &str,
) -> Result<Listing, FetchError> {
    debug!(location, "fetching listing");
    let body = transport.request(location)?;
    let listing = decode_listing(&body)?;
    trace!(
        location,
        folders = listing.folders().len(),
        files = listing.files().len(),
        "decoded listing"
    );
    Ok(listing)
}

/// Decode a response body into a listing.
///
/// Each array element is decoded once by its `Type` discriminant.
pub fn decode_listing(body: &str) -> Result<Listing, FetchError> {
    let entries: Vec<Entry> = serde_json::from_str(body)?;
    Ok(Listing::from_entries(entries))
}
