//! # portal-types
//!
//! Core geographic value types shared by the `portal-geo` engines.
//!
//! - **`LatLng`**: an immutable geographic location, hashable by value so it
//!   can key deduplication maps.
//! - **`Projected`**: a planar coordinate pair produced by a local projection.
//!
//! Both types are serializable with Serde and convert to and from the `geo`
//! crate's `Point`.
//!
//! ## Examples
//!
//! ```rust
//! use portal_types::point::LatLng;
//!
//! let portal = LatLng::parse("37.7749,-122.4194").unwrap();
//! let point: geo::Point = portal.into();
//! assert_eq!(point.x(), -122.4194);
//! ```

pub mod point;

pub use point::{LatLng, ParseLatLngError, Projected};
