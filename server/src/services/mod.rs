//! Services — domain logic between routes and upstream clients.

pub mod matching;
