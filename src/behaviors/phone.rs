use log::info;
use web_sys::{Document, HtmlInputElement};

use crate::dom;
use crate::error::Result;

/// Formats whatever was typed into the phone field.
///
/// Numbers starting with 7 or 8 are rendered as `+7 (DDD) DDD-DD-DD`,
/// growing one group at a time and dropping digits past the eleventh.
/// Anything else becomes `+` followed by the bare digits.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    match digits.as_bytes().first() {
        None => String::new(),
        Some(b'7' | b'8') => {
            let group = |from: usize, to: usize| &digits[from.min(digits.len())..to.min(digits.len())];
            let len = digits.len();

            let mut out = String::from("+7");
            if len > 1 {
                out.push_str(" (");
                out.push_str(group(1, 4));
            }
            if len >= 4 {
                out.push_str(") ");
                out.push_str(group(4, 7));
            }
            if len >= 7 {
                out.push('-');
                out.push_str(group(7, 9));
            }
            if len >= 9 {
                out.push('-');
                out.push_str(group(9, 11));
            }
            out
        }
        Some(_) => format!("+{}", digits),
    }
}

pub struct PhoneMask {
    input: HtmlInputElement,
}

impl PhoneMask {
    pub fn find(document: &Document) -> Option<Self> {
        Some(Self {
            input: dom::by_id(document, "form-phone")?,
        })
    }

    pub fn attach(self) -> Result<()> {
        let input = self.input.clone();
        // Replacing the whole value moves the caret to the end.
        dom::listen(&self.input, "input", move |_| {
            input.set_value(&format_phone(&input.value()));
        })?;
        info!("Phone mask wired");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::format_phone;

    #[test]
    fn full_russian_numbers() {
        assert_eq!(format_phone("79991234567"), "+7 (999) 123-45-67");
        assert_eq!(format_phone("89991234567"), "+7 (999) 123-45-67");
    }

    #[test]
    fn other_prefixes_are_ungrouped() {
        assert_eq!(format_phone("123"), "+123");
        assert_eq!(format_phone("4915112345678"), "+4915112345678");
    }

    #[test]
    fn groups_appear_progressively() {
        assert_eq!(format_phone("7"), "+7");
        assert_eq!(format_phone("79"), "+7 (9");
        assert_eq!(format_phone("799"), "+7 (99");
        assert_eq!(format_phone("7999"), "+7 (999) ");
        assert_eq!(format_phone("79991"), "+7 (999) 1");
        assert_eq!(format_phone("7999123"), "+7 (999) 123-");
        assert_eq!(format_phone("79991234"), "+7 (999) 123-4");
        assert_eq!(format_phone("799912345"), "+7 (999) 123-45-");
        assert_eq!(format_phone("7999123456"), "+7 (999) 123-45-6");
    }

    #[test]
    fn reformatting_is_stable_and_truncates() {
        assert_eq!(format_phone("+7 (999) 123-45-67"), "+7 (999) 123-45-67");
        assert_eq!(format_phone("7999123456789"), "+7 (999) 123-45-67");
    }

    #[test]
    fn empty_and_non_digits_clear_the_field() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("abc-()"), "");
    }
}
