use derive_getters::Getters;

const CRLF: &str = "\r\n";

/// A single HTML email, ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Message {
    to: String,
    from: String,
    subject: String,
    body: String,
}

impl Message {
    pub fn build(to: String, from: String, subject: String, body: String) -> Self {
        Self {
            to,
            from,
            subject,
            body,
        }
    }

    /// Raw message: header fields, an empty line, then the body.
    /// Every line ending, body included, is written as CRLF.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut raw = String::with_capacity(self.body.len() + 256);
        for (name, value) in [
            ("From", self.from.as_str()),
            ("To", self.to.as_str()),
            ("Subject", self.subject.as_str()),
            ("MIME-Version", "1.0"),
            ("Content-Type", "text/html; charset=\"UTF-8\""),
        ] {
            raw.push_str(name);
            raw.push_str(": ");
            raw.push_str(value);
            raw.push_str(CRLF);
        }
        raw.push_str(CRLF);
        push_with_crlf_line_endings(&mut raw, &self.body);
        raw.push_str(CRLF);

        raw.into_bytes()
    }
}

/// Lone `\n` and lone `\r` become `\r\n`, existing `\r\n` are kept.
fn push_with_crlf_line_endings(raw: &mut String, text: &str) {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                raw.push_str(CRLF);
            }
            '\n' => raw.push_str(CRLF),
            c => raw.push(c),
        }
    }
}
