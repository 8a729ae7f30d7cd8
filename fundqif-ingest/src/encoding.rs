//! The export is ISO-8859-1 encoded: every byte is the code point of the same value.

pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
