// Shared prompt constants used by every text-generation call.
// Task-specific templates live next to the feature that uses them
// (see interview/prompts.rs).

/// System instruction sent with every request.
pub const COACH_SYSTEM: &str = "You are an experienced technical recruiter and interview coach. \
    Answer in plain text or light markdown. \
    Follow the requested section headings exactly and do not add a preamble.";
