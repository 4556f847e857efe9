/// Error code registry for fixer
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Input errors
/// - 3000-3999: Row validation errors
/// - 4000-4999: Output errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;

    // Input errors (2000-2999)
    pub const INPUT_GENERIC: u16 = 2000;
    pub const INPUT_NOT_FOUND: u16 = 2001;
    pub const INPUT_PERMISSION_DENIED: u16 = 2002;
    pub const INPUT_PARSE_ERROR: u16 = 2003;
    pub const INPUT_MISSING_HEADER: u16 = 2004;

    // Row validation errors (3000-3999)
    pub const ROW_TOO_FEW_FIELDS: u16 = 3001;

    // Output errors (4000-4999)
    pub const OUTPUT_GENERIC: u16 = 4000;
    pub const OUTPUT_CREATE_FAILED: u16 = 4001;
    pub const OUTPUT_WRITE_FAILED: u16 = 4002;
    pub const OUTPUT_PERMISSION_DENIED: u16 = 4003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Failed to parse configuration",
        1003 => "Invalid value in configuration",

        2000 => "Generic input error",
        2001 => "Input file not found",
        2002 => "Permission denied reading input",
        2003 => "Input is not valid comma-delimited text",
        2004 => "Input has no header row",

        3001 => "Data row has too few fields",

        4000 => "Generic output error",
        4001 => "Failed to create output file",
        4002 => "Failed to write output file",
        4003 => "Permission denied writing output",

        _ => "Unknown error code",
    }
}
