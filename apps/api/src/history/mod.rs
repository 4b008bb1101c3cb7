// Stored study plans and answered doubts.
// The engine never touches storage; handlers persist its output here.

pub mod handlers;
pub mod queries;
