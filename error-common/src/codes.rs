// Stable error codes surfaced in logs and exported transcripts

pub mod graph {
    pub const INTEGRITY_VIOLATION: &str = "GRAPH_1001";
    pub const DEFINITION_UNREADABLE: &str = "GRAPH_1002";
}

pub mod answer {
    pub const UNRESOLVED: &str = "ANSWER_2001";
}

pub mod session {
    pub const INVALID_STATE: &str = "SESSION_3001";
}

pub mod voice {
    pub const ADAPTER_FAILURE: &str = "VOICE_4001";
}

pub mod config {
    pub const INVALID_CONFIGURATION: &str = "CONFIG_5001";
}

pub mod internal {
    pub const IO: &str = "INTERNAL_9002";
}
