use super::*;

#[test]
fn view_box_covers_the_logical_space() {
    assert_eq!(view_box(), "0 0 400 300");
}
