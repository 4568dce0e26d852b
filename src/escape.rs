/// Decode the two-character escapes `\r` and `\n` in a raw data argument.
///
/// Only these two sequences are recognized. Every other byte is copied
/// verbatim, backslashes included: `\\` stays two bytes, `\t` stays two
/// bytes, a trailing lone backslash stays a backslash. Single pass, left to
/// right.
pub fn decode_escapes(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            match bytes.get(i + 1).copied() {
                Some(b'r') => {
                    out.push(b'\r');
                    i += 2;
                    continue;
                }
                Some(b'n') => {
                    out.push(b'\n');
                    i += 2;
                    continue;
                }
                _ => {}
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    out
}
