// Resume records: plain text the candidate supplies, used as context for
// question generation.

pub mod handlers;
