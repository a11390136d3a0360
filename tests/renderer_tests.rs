use playpage::interaction::Interaction;
use playpage::renderer::html::render_error_page;
use playpage::renderer::{self, render_cli_to_string, render_html, render_json, RenderMode};
use playpage::runtime::events::{Block, Pass, RenderEvent};
use playpage::runtime::value::WidgetKey;
use playpage::runtime::Runner;
use playpage::scripts;

fn pass_of(events: Vec<RenderEvent>) -> Pass {
    Pass {
        number: 1,
        script: "sample".into(),
        events,
    }
}

fn hello_pass(interactions: &[Interaction]) -> Pass {
    let mut runner = Runner::new(scripts::find("hello").unwrap());
    let mut pass = runner.load().unwrap().clone();
    for interaction in interactions {
        pass = runner.interact(interaction).unwrap().clone();
    }
    pass
}

#[test]
fn html_escapes_widget_values_and_text() {
    let pass = hello_pass(&[Interaction::set("text_input:Message", "<script>x</script>")]);
    let html = render_html(&pass, true);
    assert!(html.contains("value=\"&lt;script&gt;x&lt;/script&gt;\""));
    assert!(!html.contains("<script>x"));
}

#[test]
fn interactive_page_is_a_form_posting_clicks() {
    let html = render_html(&hello_pass(&[]), true);
    assert!(html.contains("<form method=\"post\" action=\"/\">"));
    assert!(html.contains("name=\"__click\" value=\"button:Say it\""));
    assert!(html.contains("name=\"text_input:Message\""));
    assert!(!html.contains(" disabled"));

    let static_html = render_html(&hello_pass(&[]), false);
    assert!(!static_html.contains("<form"));
    assert!(static_html.contains(" disabled"));
}

#[test]
fn html_uses_script_name_without_page_config() {
    let html = render_html(&pass_of(vec![RenderEvent::Title("T".into())]), false);
    assert!(html.contains("<title>sample</title>"));
    assert!(html.contains("<h1>T</h1>"));
}

#[test]
fn sidebar_and_columns_layout() {
    let events = vec![
        RenderEvent::BlockStart(Block::Sidebar),
        RenderEvent::Header("Side".into()),
        RenderEvent::BlockEnd,
        RenderEvent::BlockStart(Block::Columns { weights: vec![2, 1] }),
        RenderEvent::BlockStart(Block::Column { index: 0 }),
        RenderEvent::Text("left".into()),
        RenderEvent::BlockEnd,
        RenderEvent::BlockStart(Block::Column { index: 1 }),
        RenderEvent::Text("right".into()),
        RenderEvent::BlockEnd,
        RenderEvent::BlockEnd,
    ];
    let html = render_html(&pass_of(events), false);
    let aside = html.find("<aside class=\"sidebar\">\n<h2>Side</h2>").expect("sidebar");
    let main = html.find("<main>").expect("main");
    assert!(aside < main);
    assert!(html.contains("<div class=\"column\" style=\"flex: 2\">\n<p class=\"text\">left</p>"));
    assert!(html.contains("<div class=\"column\" style=\"flex: 1\">\n<p class=\"text\">right</p>"));
    assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
}

#[test]
fn checkbox_carries_hidden_false_field() {
    let events = vec![RenderEvent::Checkbox {
        key: WidgetKey::new("cb"),
        label: "Box".into(),
        checked: true,
    }];
    let html = render_html(&pass_of(events), true);
    let hidden = html.find("type=\"hidden\" name=\"cb\" value=\"false\"").unwrap();
    let visible = html.find("type=\"checkbox\" name=\"cb\" value=\"true\" checked").unwrap();
    assert!(hidden < visible);
}

#[test]
fn page_style_lands_in_head() {
    let mut runner = Runner::new(scripts::find("landing").unwrap());
    let html = render_html(runner.load().unwrap(), true);
    let head_end = html.find("</head>").unwrap();
    assert!(html.find(".placeholder-box").unwrap() < head_end);
    assert!(html.contains("<title>🎨 Mini Layout Playground</title>"));
    assert!(html.contains("<main class=\"wide\">"));
    assert!(html.contains("<div class='placeholder-box'>Add your image here</div>"));
}

#[test]
fn rendering_is_deterministic() {
    let pass = hello_pass(&[Interaction::click("button:Say it")]);
    for mode in [RenderMode::Cli, RenderMode::Html, RenderMode::Json] {
        let a = renderer::render(&pass, mode).unwrap();
        let b = renderer::render(&pass.clone(), mode).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn cli_output_lists_elements_in_order() {
    let text = render_cli_to_string(&hello_pass(&[]));
    let title = text.find("# Playground").unwrap();
    let input = text.find("Message: [Hello]").unwrap();
    let button = text.find("[ Say it ]").unwrap();
    let info = text.find("Press the button to see a response.").unwrap();
    assert!(title < input && input < button && button < info);
}

#[test]
fn cli_indents_block_contents() {
    let events = vec![
        RenderEvent::BlockStart(Block::Sidebar),
        RenderEvent::Checkbox {
            key: WidgetKey::new("cb"),
            label: "Box".into(),
            checked: false,
        },
        RenderEvent::BlockEnd,
        RenderEvent::Text("after".into()),
    ];
    let text = render_cli_to_string(&pass_of(events));
    assert!(text.contains("\n  [ ] Box\n"));
    assert!(text.ends_with("\nafter\n"));
}

#[test]
fn json_is_adjacently_tagged() {
    let json = render_json(&pass_of(vec![RenderEvent::Title("T".into()), RenderEvent::Divider])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["script"], "sample");
    assert_eq!(value["events"][0]["type"], "title");
    assert_eq!(value["events"][0]["value"], "T");
    assert_eq!(value["events"][1]["type"], "divider");
}

#[test]
fn error_page_escapes_message() {
    let html = render_error_page("Script error", "bad <key>");
    assert!(html.contains("bad &lt;key&gt;"));
}
