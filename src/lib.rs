// Enable pedantic lints globally, then allow the noisy ones we're not fixing.
#![warn(clippy::pedantic, clippy::nursery)]
// --- Intentionally allowed ---
#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]
// Not a published API, no need for doc sections
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(
    clippy::module_name_repetitions,
    clippy::doc_markdown,
    clippy::derivable_impls,
    clippy::trivially_copy_pass_by_ref
)]

pub mod hotkey;
pub mod settings;
