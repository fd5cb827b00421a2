/// Round-trip verification command.
pub mod check;
/// File-level summary command.
pub mod info;
/// Binary/text conversion commands.
pub mod json;
/// Tree dump command.
pub mod print;
/// Shared file loading and tree statistics.
pub mod util;
