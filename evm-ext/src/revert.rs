/// Extracts a human readable reason from a revert payload.
///
/// The payload of `revert("reason")` is `Error(string)`: a selector, the string offset and the
/// string length followed by the text. The first 64 bytes are skipped and only printable ASCII
/// of the rest is kept, which leaves the text and drops the length tail and the zero padding.
/// Payloads shorter than the header decode to an empty string.
pub fn decode_revert_reason(payload: &[u8]) -> String {
    payload
        .get(64..)
        .unwrap_or_default()
        .iter()
        .filter(|b| (0x20..=0x7e).contains(*b))
        .map(|&b| b as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::solidity_abi::{abi_encode_params, selector, sol_string},
        test_case::test_case,
    };

    fn error_payload(reason: &str) -> Vec<u8> {
        let mut payload = selector("Error(string)").to_vec();
        payload.extend(abi_encode_params(&["string"], vec![sol_string(reason)]).unwrap());
        payload
    }

    #[test_case("boom"; "Short reason")]
    #[test_case("Staking: validator exists"; "Reason with punctuation")]
    fn test_error_string_reason_is_recovered(reason: &str) {
        let actual = decode_revert_reason(&error_payload(reason));

        assert_eq!(actual, reason);
    }

    #[test_case(&[]; "Empty")]
    #[test_case(&[0x08, 0xc3, 0x79, 0xa0]; "Selector only")]
    #[test_case(&[0x41; 64]; "Exactly the header")]
    fn test_payload_without_text_decodes_to_empty_string(payload: &[u8]) {
        assert_eq!(decode_revert_reason(payload), "");
    }

    #[test]
    fn test_non_printable_bytes_are_dropped() {
        let mut payload = vec![0u8; 64];
        payload.extend([b'o', 0x00, b'k', 0x7f, 0x0a]);

        assert_eq!(decode_revert_reason(&payload), "ok");
    }
}
