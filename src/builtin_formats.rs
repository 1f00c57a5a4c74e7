//! Built-in number format IDs and their corresponding format codes.
//!
//! Spreadsheet files store a numFmtId for each cell style. IDs 0-49 refer to
//! built-in formats whose codes are implied rather than written out; custom
//! formats start at 164.
//!
//! The scanner has no classes for date and time letters, so the date, time
//! and `General` codes (0, 14-22, 45-47) still parse, but their letters
//! come out as `Bad` tokens, with any `e` scanned as `Scientific`.

/// Get the format code string for a built-in format ID.
///
/// # Examples
/// ```
/// use xlnumfmt::format_code_from_id;
///
/// assert_eq!(format_code_from_id(2), Some("0.00"));
/// assert_eq!(format_code_from_id(40), Some("#,##0.00;[Red](#,##0.00)"));
/// assert_eq!(format_code_from_id(164), None);
/// ```
pub fn format_code_from_id(id: u32) -> Option<&'static str> {
    let code = match id {
        0 => "General",
        1 => "0",
        2 => "0.00",
        3 => "#,##0",
        4 => "#,##0.00",
        9 => "0%",
        10 => "0.00%",
        11 => "0.00E+00",
        12 => "# ?/?",
        13 => "# ??/??",
        14 => "m/d/yy",
        15 => "d-mmm-yy",
        16 => "d-mmm",
        17 => "mmm-yy",
        18 => "h:mm AM/PM",
        19 => "h:mm:ss AM/PM",
        20 => "h:mm",
        21 => "h:mm:ss",
        22 => "m/d/yy h:mm",
        37 => "#,##0 ;(#,##0)",
        38 => "#,##0 ;[Red](#,##0)",
        39 => "#,##0.00;(#,##0.00)",
        40 => "#,##0.00;[Red](#,##0.00)",
        45 => "mm:ss",
        46 => "[h]:mm:ss",
        47 => "mmss.0",
        48 => "##0.0E+0",
        49 => "@",
        _ => return None,
    };
    Some(code)
}

/// Check if a format ID has a built-in format code.
pub fn is_builtin_format_id(id: u32) -> bool {
    format_code_from_id(id).is_some()
}
