use super::*;

fn writer(strings: &[&str], hold: u32) -> Typewriter {
    Typewriter::new(strings.iter().map(|s| (*s).to_owned()).collect(), hold)
}

#[test]
fn types_one_character_per_tick() {
    let mut tw = writer(&["abc"], 2);
    assert_eq!(tw.text(), "");
    tw.tick();
    assert_eq!(tw.text(), "a");
    tw.tick();
    tw.tick();
    assert_eq!(tw.text(), "abc");
    assert_eq!(tw.mode(), Mode::Typing);
}

#[test]
fn holds_then_deletes() {
    let mut tw = writer(&["ab"], 1);
    for _ in 0..3 {
        tw.tick();
    }
    assert_eq!(tw.mode(), Mode::Holding(1));
    tw.tick();
    assert_eq!(tw.mode(), Mode::Holding(0));
    tw.tick();
    assert_eq!(tw.mode(), Mode::Deleting);
    tw.tick();
    assert_eq!(tw.text(), "a");
}

#[test]
fn advances_and_loops_over_strings() {
    let mut tw = writer(&["a", "b"], 0);
    // type 1, hold, leave hold, delete 1, advance
    for _ in 0..5 {
        tw.tick();
    }
    assert_eq!(tw.index(), 1);
    assert_eq!(tw.text(), "");
    for _ in 0..5 {
        tw.tick();
    }
    assert_eq!(tw.index(), 0);
}

#[test]
fn respects_multibyte_characters() {
    let mut tw = writer(&["né"], 0);
    tw.tick();
    tw.tick();
    assert_eq!(tw.text(), "né");
}

#[test]
fn empty_list_is_inert() {
    let mut tw = writer(&[], 0);
    tw.tick();
    assert_eq!(tw.text(), "");
    assert_eq!(tw.mode(), Mode::Typing);
}
