use std::io::Write;
use std::sync::Arc;

use form_widgets::mapping::{ArticleMapBuilder, DatabaseMap};
use form_widgets::records::InMemoryRecords;
use form_widgets::value::{json, value_map};
use form_widgets::{FormDefinition, FormWidget, ModelSelectMany, RenderContext, WidgetError};
use tempfile::NamedTempFile;

const ARTICLE_FORM: &str = r#"
[render]
charset = "UTF-8"
xhtml = true

[[fields]]
name = "article[title]"
widget = "input"
value = "Rust & <HTML>"
attributes = { class = "title", size = 40 }

[[fields]]
name = "article[body]"
widget = "textarea"
value = "Already &amp; escaped"

[[fields]]
name = "article[online]"
widget = "select"
value = "1"
options = { choices = { "0" = "no", "1" = "yes" } }

[[fields]]
name = "article[categories]"
widget = "model_select_many"
value = [2]
options = { model = "category", order_by = ["name", "asc"] }

[[records.category]]
id = 1
name = "News"

[[records.category]]
id = 2
name = "Arts"
"#;

fn write_form(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_render_form_file() {
    let file = write_form(ARTICLE_FORM);
    let definition = FormDefinition::load(file.path()).unwrap();

    let html = definition.render().unwrap();
    let lines: Vec<&str> = html.lines().collect();

    assert_eq!(
        lines[0],
        "<input class=\"title\" size=\"40\" type=\"text\" name=\"article[title]\" value=\"Rust &amp; &lt;HTML&gt;\" />"
    );
    assert_eq!(
        lines[1],
        "<textarea rows=\"4\" cols=\"30\" name=\"article[body]\">Already &amp; escaped</textarea>"
    );
    assert!(html.contains("<option value=\"1\" selected=\"selected\">yes</option>"));
    assert!(html.contains("<select name=\"article[categories][]\" multiple=\"multiple\">"));
    assert!(html.contains(
        "<option value=\"2\" selected=\"selected\">Arts</option>\n<option value=\"1\">News</option>"
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = FormDefinition::load("/nonexistent/form.toml").unwrap_err();
    assert!(matches!(err, WidgetError::Io(_)));
}

#[test]
fn test_unknown_option_in_file_fails() {
    let file = write_form(
        r#"
[[fields]]
name = "title"
widget = "input"
options = { type = "text", maxlength = 10 }
"#,
    );
    let definition = FormDefinition::load(file.path()).unwrap();

    match definition.render() {
        Err(WidgetError::InvalidOption { widget, options }) => {
            assert_eq!(widget, "Input");
            assert_eq!(options, vec!["maxlength"]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_select_many_over_article_metadata() {
    let source = InMemoryRecords::new()
        .with_database(DatabaseMap::new("main").with(&ArticleMapBuilder))
        .with_table(
            "article",
            vec![
                value_map([("id", json!(5)), ("title", json!("First"))]),
                value_map([("id", json!(6)), ("title", json!("Second"))]),
            ],
        );

    let widget = ModelSelectMany::new(
        Arc::new(source),
        value_map([("model", "article"), ("label_column", "title")]),
        value_map([("size", "5")]),
    )
    .unwrap();

    assert_eq!(widget.widget().option("multiple"), Some(&json!(true)));

    let html = widget.render(
        &RenderContext::default(),
        "related",
        &json!(["6"]),
        &value_map([("id", "related")]),
        &[],
    );

    assert_eq!(
        html,
        "<select size=\"5\" name=\"related[]\" id=\"related\" multiple=\"multiple\">\n\
         <option value=\"5\">First</option>\n\
         <option value=\"6\" selected=\"selected\">Second</option>\n\
         </select>"
    );
}
