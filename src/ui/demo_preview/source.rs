// SPDX-License-Identifier: MPL-2.0
//! Decoding of URI-component-encoded demo fields.
//!
//! Demo files carry both the raw source and the highlighted markup
//! percent-encoded so they survive being embedded in other documents.
//! Unencoded text passes through unchanged.

use crate::error::DecodeError;

/// Percent-decodes a field. Malformed escapes are kept literally.
pub fn decode_component(encoded: &str) -> Result<String, DecodeError> {
    urlencoding::decode(encoded)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_uri_component() {
        let encoded = "%3Ctemplate%3E%0A%20%20%3Cel-button%3EDefault%3C%2Fel-button%3E%0A%3C%2Ftemplate%3E";
        assert_eq!(
            decode_component(encoded).as_deref(),
            Ok("<template>\n  <el-button>Default</el-button>\n</template>")
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(
            decode_component("<template>...</template>").as_deref(),
            Ok("<template>...</template>")
        );
    }

    #[test]
    fn decodes_multibyte_characters() {
        assert_eq!(
            decode_component("%E5%A4%8D%E5%88%B6").as_deref(),
            Ok("复制")
        );
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        assert_eq!(decode_component("%FF%FE"), Err(DecodeError::InvalidUtf8));
    }

    #[test]
    fn malformed_escape_is_kept() {
        assert_eq!(decode_component("100%").as_deref(), Ok("100%"));
    }
}
