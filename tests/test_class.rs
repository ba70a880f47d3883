use microlib_utils::{add_class, has_class, remove_class, Dom, ElementTree, Node};
use rstest::rstest;

fn element_with_class(dom: &mut Dom, class_name: &str) -> Node {
    let div = dom.new_element("div");
    dom.element_mut(div).unwrap().set_class_name(class_name);
    div
}

#[rstest]
#[case("a b c", "b", true)]
#[case("a b c", "a", true)]
#[case("a b c", "c", true)]
#[case("a b c", "x", false)]
#[case("a b c", "B", false)]
#[case("abc", "b", false)]
#[case("a b c", "a b", false)]
#[case("a b c", "", false)]
#[case("a  b", "", true)]
#[case(" a", "", true)]
#[case("a ", "", true)]
#[case("", "", true)]
#[case("", "a", false)]
fn test_has_class(#[case] class_name: &str, #[case] search: &str, #[case] expected: bool) {
    let mut dom = Dom::new();
    let div = element_with_class(&mut dom, class_name);
    assert_eq!(has_class(&dom, div, search), expected);
}

#[rstest]
#[case("a b", "d", "a b d")]
#[case("a b d", "d", "a b d")]
#[case("a", "a", "a")]
#[case("", "d", " d")]
#[case("a  b", "c", "a  b c")]
#[case("a  b", "", "a  b")]
fn test_add_class(#[case] class_name: &str, #[case] add: &str, #[case] expected: &str) {
    let mut dom = Dom::new();
    let div = element_with_class(&mut dom, class_name);
    add_class(&mut dom, div, add);
    assert_eq!(dom.class_name(div), expected);
}

#[rstest]
#[case("a b c", "b", "a c")]
#[case("a b c", "z", "a b c")]
#[case("a b c", "a", "b c")]
#[case("a b c", "c", "a b")]
#[case("b a b", "b", "a b")]
#[case("a", "a", "")]
#[case("a  b", "", "a b")]
#[case(" a", "", "a")]
fn test_remove_class(#[case] class_name: &str, #[case] remove: &str, #[case] expected: &str) {
    let mut dom = Dom::new();
    let div = element_with_class(&mut dom, class_name);
    remove_class(&mut dom, div, remove);
    assert_eq!(dom.class_name(div), expected);
}

#[test]
fn test_add_class_twice_is_idempotent() {
    let mut dom = Dom::new();
    let div = element_with_class(&mut dom, "a b");
    add_class(&mut dom, div, "d");
    assert_eq!(dom.class_name(div), "a b d");
    add_class(&mut dom, div, "d");
    assert_eq!(dom.class_name(div), "a b d");
}

#[test]
fn test_remove_class_duplicates_one_per_call() {
    let mut dom = Dom::new();
    let div = element_with_class(&mut dom, "x y x x");
    remove_class(&mut dom, div, "x");
    assert_eq!(dom.class_name(div), "y x x");
    remove_class(&mut dom, div, "x");
    assert_eq!(dom.class_name(div), "y x");
    remove_class(&mut dom, div, "x");
    assert_eq!(dom.class_name(div), "y");
    assert!(!has_class(&dom, div, "x"));
}

#[test]
fn test_add_then_remove_restores() {
    let mut dom = Dom::new();
    let div = element_with_class(&mut dom, "a b");
    add_class(&mut dom, div, "c");
    remove_class(&mut dom, div, "c");
    assert_eq!(dom.class_name(div), "a b");
}

#[test]
fn test_class_helpers_on_parsed_markup() {
    let mut dom = Dom::new();
    let button = dom
        .parse(r#"<button class="btn" type="submit">Go</button>"#)
        .unwrap();
    add_class(&mut dom, button, "btn-primary");
    remove_class(&mut dom, button, "btn");
    assert_eq!(
        dom.to_string(button),
        r#"<button class="btn-primary" type="submit">Go</button>"#
    );
}

// A store that counts writes, to check the mutators always write back.
struct Recorder {
    class_name: String,
    writes: usize,
}

impl ElementTree for Recorder {
    type Node = ();

    fn class_name(&self, _element: ()) -> &str {
        &self.class_name
    }

    fn set_class_name(&mut self, _element: (), class_name: String) {
        self.writes += 1;
        self.class_name = class_name;
    }

    fn id(&self, _element: ()) -> &str {
        ""
    }

    fn children(&self, _element: ()) -> impl Iterator<Item = ()> + '_ {
        std::iter::empty()
    }
}

#[test]
fn test_mutators_always_write() {
    let mut recorder = Recorder {
        class_name: "a b".to_string(),
        writes: 0,
    };
    add_class(&mut recorder, (), "a");
    remove_class(&mut recorder, (), "z");
    has_class(&recorder, (), "a");
    assert_eq!(recorder.writes, 2);
    assert_eq!(recorder.class_name, "a b");
}
