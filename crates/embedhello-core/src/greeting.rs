/// Prefix prepended to every greeting.
pub const GREETING_PREFIX: &str = "Hello ";

/// Greet `message`, verbatim: no trimming or case changes.
pub fn hello(message: &str) -> String {
    format!("{GREETING_PREFIX}{message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_cases() {
        let cases = [
            ("World", "Hello World"),
            ("Golang", "Hello Golang"),
            ("", "Hello "),
        ];
        for (input, want) in cases {
            assert_eq!(hello(input), want, "hello({input:?})");
        }
    }

    #[test]
    fn test_hello_keeps_input_untouched() {
        for input in ["  padded  ", "multi\nline", "日本語", "Hello"] {
            let got = hello(input);
            assert_eq!(got.strip_prefix(GREETING_PREFIX), Some(input));
        }
    }
}
