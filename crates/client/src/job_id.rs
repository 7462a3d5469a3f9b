//! Search job identifier generation.
//!
//! Identifiers have the shape `<prefix><10 hex chars>.<suffix>`, where the
//! prefix is `rt_` for real-time searches and empty otherwise.
//!
//! # Invariants
//! - The random part comes from the operating system's CSPRNG. A failed read
//!   is an error; there is no fallback to a weaker source.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::{ClientError, Result};
use crate::models::SearchParams;

/// Number of random bytes in an identifier.
pub(crate) const RANDOM_BYTES: usize = 5;

/// Prefix marking real-time job identifiers.
pub(crate) const REALTIME_PREFIX: &str = "rt_";

/// Generate a unique search job identifier.
pub(crate) fn generate_job_id(params: &SearchParams, suffix: &str) -> Result<String> {
    let mut bytes = [0u8; RANDOM_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| ClientError::RandomSource(e.to_string()))?;
    Ok(format_job_id(params, &bytes, suffix))
}

fn format_job_id(params: &SearchParams, bytes: &[u8], suffix: &str) -> String {
    let prefix = if params.is_realtime() {
        REALTIME_PREFIX
    } else {
        ""
    };
    format!("{}{}.{}", prefix, hex::encode(bytes), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_job_id_realtime() {
        let id = format_job_id(
            &SearchParams::realtime(),
            &[0x01, 0x23, 0x45, 0x67, 0x89],
            "stailf",
        );
        assert_eq!(id, "rt_0123456789.stailf");
    }

    #[test]
    fn test_format_job_id_normal() {
        let id = format_job_id(&SearchParams::new(), &[0xff; 5], "stailf");
        assert_eq!(id, "ffffffffff.stailf");
    }

    #[test]
    fn test_generated_ids_differ() {
        let params = SearchParams::realtime();
        let a = generate_job_id(&params, "stailf").unwrap();
        let b = generate_job_id(&params, "stailf").unwrap();
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn prop_job_id_shape(realtime in any::<bool>(), suffix in "[a-z0-9_]{1,16}") {
            let params = if realtime { SearchParams::realtime() } else { SearchParams::new() };
            let id = generate_job_id(&params, &suffix).unwrap();

            let expected_suffix = format!(".{}", suffix);
            prop_assert!(id.ends_with(&expected_suffix));
            prop_assert_eq!(id.starts_with(REALTIME_PREFIX), realtime);

            let body = id
                .strip_prefix(if realtime { REALTIME_PREFIX } else { "" })
                .unwrap()
                .strip_suffix(&expected_suffix)
                .unwrap();
            prop_assert_eq!(body.len(), RANDOM_BYTES * 2);
            prop_assert!(body.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}
