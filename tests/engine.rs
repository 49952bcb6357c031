use std::thread;

use quill::Engine;
use serde_json::json;

#[cfg(feature = "builtins")]
#[test]
fn engine_debug() {
    let s = format!("{:?}", Engine::new());
    assert!(s.contains("toDateTime"));
}

#[test]
fn engine_send_and_sync() {
    let engine = Engine::new();
    thread::spawn(move || {
        let result = engine
            .compile("{lorem}")
            .unwrap()
            .render(json!({ "lorem": "ipsum" }))
            .unwrap();
        assert_eq!(result, "ipsum");
    })
    .join()
    .unwrap();
}

#[test]
fn engine_compile_non_static_source() -> quill::Result<()> {
    let engine = Engine::new();
    let source = String::from("{lorem}");
    let result = engine.compile(&source)?.render(json!({ "lorem": "ipsum" }))?;
    assert_eq!(result, "ipsum");
    Ok(())
}

#[test]
fn engine_add_template_non_static_source() -> quill::Result<()> {
    let mut engine = Engine::new();
    let source = String::from("{lorem}");
    engine.add_template("test", &source)?;
    let result = engine
        .get_template("test")
        .unwrap()
        .render(json!({ "lorem": "ipsum" }))?;
    assert_eq!(result, "ipsum");
    Ok(())
}

#[test]
fn engine_get_template_unknown() {
    assert!(Engine::new().get_template("nope").is_none());
}

#[test]
fn engine_template_source() -> quill::Result<()> {
    let mut engine = Engine::new();
    engine.add_template("page", "<p>{x}</p>")?;
    assert_eq!(engine.get_template("page").unwrap().source(), "<p>{x}</p>");
    assert_eq!(engine.compile("{y}")?.source(), "{y}");
    Ok(())
}

#[cfg(feature = "builtins")]
#[test]
fn engine_utc_offset() -> quill::Result<()> {
    let mut engine = Engine::new();
    engine.set_utc_offset(chrono::FixedOffset::east_opt(8 * 3600).unwrap());
    let result = engine
        .compile("{ts.toDateTime()}")?
        .render(json!({ "ts": 1_709_629_622 }))?;
    assert_eq!(result, "2024-03-05 17:07:02");
    Ok(())
}
