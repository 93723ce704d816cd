use super::*;

#[test]
fn copied_label_resets_after_two_seconds() {
    assert_eq!(COPIED_RESET.as_millis(), 2000);
}

#[test]
fn href_is_empty_outside_the_browser() {
    assert_eq!(current_href(), "");
    write_text("ignored");
}
