use unicode_segmentation::UnicodeSegmentation;

use crate::platform::Platform;

/// Quote a single token so that the host shell reads it back as one argument.
pub fn quote_arg(arg: &str, platform: Platform) -> String {
    if platform.is_windows() {
        quote_for_cmd(arg)
    } else {
        quote_for_posix(arg)
    }
}

pub fn join_command_line<S: AsRef<str>>(tokens: &[S], platform: Platform) -> String {
    tokens.iter().map(|t| quote_arg(t.as_ref(), platform)).collect::<Vec<_>>().join(" ")
}

fn is_posix_safe(g: &str) -> bool {
    g.chars().all(|c| c.is_ascii_alphanumeric() || "_-./=:,+@%".contains(c))
}

fn quote_for_posix(arg: &str) -> String {
    if !arg.is_empty() && arg.graphemes(true).all(is_posix_safe) {
        return arg.to_string();
    }
    let mut result = String::with_capacity(arg.len() + 2);
    result.push('\'');
    for g in arg.graphemes(true) {
        match g {
            "'" => result.push_str("'\\''"),
            _ => result.push_str(g),
        }
    }
    result.push('\'');
    result
}

// MSVC runtime rules: backslashes are literal unless they precede a quote.
fn quote_for_cmd(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains([' ', '\t', '"']) {
        return arg.to_string();
    }
    let mut result = String::with_capacity(arg.len() + 2);
    result.push('"');
    let mut backslashes = 0;
    for g in arg.graphemes(true) {
        match g {
            "\\" => backslashes += 1,
            "\"" => {
                result.push_str(&"\\".repeat(backslashes * 2 + 1));
                result.push('"');
                backslashes = 0;
            }
            _ => {
                result.push_str(&"\\".repeat(backslashes));
                result.push_str(g);
                backslashes = 0;
            }
        }
    }
    result.push_str(&"\\".repeat(backslashes * 2));
    result.push('"');
    result
}
