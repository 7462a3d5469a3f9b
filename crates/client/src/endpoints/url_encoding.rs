//! Percent-encoding for values placed in URL path segments.
//!
//! Search job identifiers are caller-influenced (the suffix is free text), so
//! they are encoded before being interpolated into
//! `/services/search/jobs/{sid}/...` paths.
//!
//! ```
//! use stailf_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("rt_0a1b2c3d4e.stailf"), "rt_0a1b2c3d4e.stailf");
//! assert_eq!(encode_path_segment("a/b"), "a%2Fb");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters encoded in a path segment (RFC 3986 section 3.3 plus
/// characters with special meaning to Splunk's REST router).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b';')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'~');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
