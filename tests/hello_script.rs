use playpage::interaction::Interaction;
use playpage::runtime::events::RenderEvent;
use playpage::runtime::Runner;
use playpage::scripts::hello::{BUTTON_LABEL, IDLE_TEXT, MESSAGE_DEFAULT, TITLE};
use playpage::scripts;

const MESSAGE_KEY: &str = "text_input:Message";
const BUTTON_KEY: &str = "button:Say it";

fn runner() -> Runner {
    Runner::new(scripts::find("hello").expect("hello script"))
}

#[test]
fn initial_load_shows_title_and_default_branch() {
    let mut runner = runner();
    let pass = runner.load().unwrap();

    assert_eq!(pass.events.first(), Some(&RenderEvent::Title(TITLE.into())));
    assert_eq!(pass.text_value(MESSAGE_KEY), Some(MESSAGE_DEFAULT));
    assert!(pass.displays(IDLE_TEXT));
    assert!(!pass.displays("You said"));
    assert!(pass
        .events
        .iter()
        .any(|ev| matches!(ev, RenderEvent::Button { label, .. } if label == BUTTON_LABEL)));
}

#[test]
fn click_shows_alternate_text_then_resets() {
    let mut runner = runner();
    runner.load().unwrap();

    let clicked = runner.interact(&Interaction::click(BUTTON_KEY)).unwrap().clone();
    assert!(clicked.displays("You said: Hello"));
    assert!(!clicked.displays(IDLE_TEXT));
    assert_eq!(clicked.text_value(MESSAGE_KEY), Some("Hello"));

    let next = runner.rerun().unwrap();
    assert!(next.displays(IDLE_TEXT));
    assert!(!next.displays("You said"));
}

#[test]
fn text_input_reflects_values_verbatim() {
    for value in ["", "<b>bold</b> & \"quotes\"", "  spaced  ", "multi\nline", "Xin chào"] {
        let mut runner = runner();
        runner.load().unwrap();
        let pass = runner.interact(&Interaction::set(MESSAGE_KEY, value)).unwrap();
        assert_eq!(pass.text_value(MESSAGE_KEY), Some(value));
        assert_eq!(
            runner.session().value(MESSAGE_KEY).and_then(|v| v.as_text()),
            Some(value)
        );
    }
}

#[test]
fn typed_value_survives_click() {
    let mut runner = runner();
    runner.load().unwrap();
    runner.interact(&Interaction::set(MESSAGE_KEY, "<i>hi</i>")).unwrap();
    let pass = runner.interact(&Interaction::click(BUTTON_KEY)).unwrap();
    assert!(pass.displays("You said: <i>hi</i>"));
    assert_eq!(pass.text_value(MESSAGE_KEY), Some("<i>hi</i>"));
}

#[test]
fn identical_state_gives_identical_output() {
    let mut first = runner();
    let mut second = runner();
    let a = first.load().unwrap().clone();
    let b = second.load().unwrap().clone();
    assert_eq!(a.events, b.events);

    let again = first.rerun().unwrap();
    assert_eq!(again.events, a.events);

    let json_a = serde_json::to_string(&a).unwrap();
    let json_b = serde_json::to_string(&b).unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn script_is_registered() {
    let names: Vec<&str> = scripts::all().iter().map(|s| s.name()).collect();
    assert!(names.contains(&"hello"));
    assert!(names.contains(&"landing"));
    assert!(scripts::find("missing").is_none());
}
