// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Builds the per-hop HTLC instructions needed to pay a BOLT11 invoice over one or more
//! pre-selected paths.
//!
//! Paths are not discovered here. The caller hands over a flat list of [`Hop`]s, each tagged with
//! the path it belongs to, and [`build_route`] works out for every hop:
//!
//!  * the amount it has to forward, so that the recipient nets exactly its share of the invoice
//!    after every downstream node took its fee,
//!  * the absolute block height the HTLC expires at, and
//!  * for multi-path payments, the `payment_data` payload the recipient needs to reassemble the
//!    parts.
//!
//! [`Hop`]: crate::routing::hop::Hop
//! [`build_route`]: crate::routing::router::build_route

#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(missing_docs)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[macro_use]
pub mod util;
pub mod ln;
pub mod routing;
