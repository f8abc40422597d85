// This file is Copyright its original authors, visible in version control
// history.
//
// This file is licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your option.
// You may not use this file except in accordance with one or both of these
// licenses.

//! Turning a list of pre-selected hops into the per-hop instructions of a payment.
//!
//! [`router::build_route`] is the entry point. The other modules each cover one step of it and
//! are public so they can be used, and tested, on their own.

pub mod cltv;
pub mod fees;
pub mod hop;
pub mod mpp;
pub mod path;
pub mod router;
