//! Platform-agnostic types for the Newsdesk news reader.
//!
//! This crate provides the data shapes shared by the store, the capture
//! flows and the command-line front end.
//!
//! # Features
//!
//! - [`PhotoRecord`], the persisted shape of a captured photo
//! - [`Address`] with the place-name and full-address derivation rules
//! - Capability request/response values ([`Capability`], [`PermissionStatus`],
//!   [`CaptureOptions`], [`CaptureResult`], [`LocationAccuracy`])
//! - News feed items ([`NewsItem`], [`Category`])
//!
//! # Example
//!
//! ```
//! use newsdesk_types::{Address, PhotoRecord};
//!
//! let address = Address::builder()
//!     .street("5th Ave")
//!     .city("Metropolis")
//!     .region("NY")
//!     .country("USA")
//!     .build();
//! let record = PhotoRecord::new("file:///photos/1.jpg").with_address(&address);
//! assert_eq!(record.city.as_deref(), Some("Metropolis"));
//! assert_eq!(
//!     record.precise_location.as_deref(),
//!     Some("5th Ave, Metropolis, NY, USA")
//! );
//! ```

pub mod error;
pub mod news;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use news::{Category, NewsItem, format_age};
pub use types::{
    Address, AddressBuilder, Capability, CaptureOptions, CaptureResult, Coordinates,
    LocationAccuracy, PermissionStatus, PhotoRecord,
};
