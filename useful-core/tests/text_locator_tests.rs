//! End-to-end checks of the text locator through the public API

use useful_core::text::{
    is_all_alpha_or_numbers, join, safe_trim, substring_after_value, substring_before_value,
    substring_or_empty, Comparison,
};
use useful_core::{TextExt, TextLocator};

const FIND_FROM: &str = "some string value to find from";

#[test]
fn test_documented_examples() {
    assert_eq!(
        substring_after_value(FIND_FROM, "string", Comparison::default()),
        " value to find from"
    );
    assert_eq!(
        substring_after_value(FIND_FROM, "another", Comparison::default()),
        FIND_FROM
    );
    assert_eq!(
        substring_before_value(FIND_FROM, "string", Comparison::default()),
        "some "
    );
    assert_eq!(substring_or_empty("Some text to create a test", 0, 1), "S");
    assert_eq!(substring_or_empty(None::<&str>, 1, 10), "");
    assert_eq!(safe_trim("   Some text    "), Some("Some text"));
    assert_eq!(safe_trim(None::<&str>), None);
    assert_eq!(safe_trim(""), Some(""));
}

#[test]
fn test_locator_and_extension_trait_agree() {
    let locator = TextLocator::default();
    assert_eq!(locator.after(FIND_FROM, "VALUE"), FIND_FROM.substring_after_value("VALUE"));
    assert_eq!(locator.before(FIND_FROM, "VALUE"), FIND_FROM.substring_before_value("VALUE"));
    assert_eq!(locator.after_last(FIND_FROM, 'f'), FIND_FROM.substring_after_last_value('f'));
    assert_eq!(locator.before_last(FIND_FROM, 'f'), FIND_FROM.substring_before_last_value('f'));
}

#[test]
fn test_parsing_a_key_value_line() {
    let line = "Content-Type: text/plain; charset=utf-8";
    let locator = TextLocator::case_sensitive();

    let header = locator.before(line, ':');
    let value = safe_trim(locator.after(line, ':'));
    let charset = locator.after_last(line, '=');

    assert_eq!(header, "Content-Type");
    assert_eq!(value, Some("text/plain; charset=utf-8"));
    assert_eq!(charset, "utf-8");
    assert!(is_all_alpha_or_numbers(locator.before(charset, '-')));
}

#[test]
fn test_owned_strings_and_needles() {
    let source = String::from("alpha|beta|gamma");
    let needle = String::from("|");
    assert_eq!(source.substring_after_value(&needle), "beta|gamma");
    assert_eq!(source.substring_before_last_value(needle), "alpha|beta");
}

#[test]
fn test_join_extracted_parts() {
    let path = "/usr/local/share/doc";
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    assert_eq!(join(&parts, ", "), "usr, local, share, doc");
}
