//! Builder utilities for operation requests.

mod request;
