pub mod compile_time {
    pub mod file_processing {
        /// Maximum file size allowed for processing (10MB)
        /// SECURITY: Prevents resource exhaustion via oversized inputs
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Threshold for considering a file "large" (1MB)
        /// PERFORMANCE: Large files are flagged in the processing logs
        pub const LARGE_FILE_THRESHOLD: u64 = 1024 * 1024;
    }

    pub mod lexical {
        /// Token count above which a stream is flagged in the logs
        /// RESOURCE: Surfaces pathological inputs without rejecting them
        pub const LARGE_TOKEN_STREAM_THRESHOLD: usize = 100_000;

        /// Initial capacity hint for the token vector
        /// PERFORMANCE: Avoids early reallocation on typical sources
        pub const TOKEN_BUFFER_CAPACITY: usize = 256;
    }

    pub mod logging {
        /// Log buffer size for the in-memory logger
        /// RESOURCE: Controls memory usage for captured events
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log message length
        /// RESOURCE: Prevents runaway messages from bloating logs
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
