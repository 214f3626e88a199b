//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every command the view dispatches into the core.
    pub log_commands: bool,

    /// Log section transitions (start, auto-advance).
    pub log_navigation: bool,

    /// Log quiz completion and scoring.
    pub log_quiz: bool,
}

pub const DF: LogFlags = LogFlags {
    log_commands: false,
    log_navigation: true,
    log_quiz: true,
};
