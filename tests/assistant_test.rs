//! End-to-end dispatch tests: transcript in, effects and session state out

mod common;

use common::{Canned, assistant, assistant_with_config};
use sagx::assistant::messages;
use sagx::config::Config;
use sagx::intent::{Intent, Site};
use sagx::{Effect, Session, Theme};

fn urls(effects: &[Effect]) -> Vec<&str> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::OpenUrl(url) => Some(url.as_str()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_weather_runs_exactly_once() {
    let canned = Canned::new();
    let assistant = assistant(&canned);
    let mut session = Session::new();

    let dispatch = assistant
        .handle(&mut session, "Tell me the WEATHER in Chennai today")
        .await;

    assert_eq!(dispatch.intent, Intent::Weather);
    assert_eq!(canned.requests(), ["weather chennai"]);
    assert_eq!(
        dispatch.spoken(),
        Some("The weather in chennai is 20.5°C with few clouds.")
    );
}

#[tokio::test]
async fn test_weather_default_location_from_config() {
    let canned = Canned::new();
    let mut config = Config::default();
    config.assistant.default_location = "Kolkata".to_string();
    let assistant = assistant_with_config(&canned, &config);

    assistant.handle(&mut Session::new(), "temperature").await;
    assert_eq!(canned.requests(), ["weather Kolkata"]);
}

#[tokio::test]
async fn test_open_and_dark_mode_resolves_to_theme() {
    let canned = Canned::new();
    let assistant = assistant(&canned);
    let mut session = Session::new();

    let dispatch = assistant
        .handle(&mut session, "open youtube and turn on dark mode")
        .await;

    assert_eq!(dispatch.intent, Intent::SetTheme(Theme::Dark));
    assert!(urls(&dispatch.effects).is_empty());
    assert_eq!(session.theme, Theme::Dark);
}

#[tokio::test]
async fn test_todo_flow() {
    let canned = Canned::new();
    let assistant = assistant(&canned);
    let mut session = Session::new();

    let dispatch = assistant.handle(&mut session, "show my todo list").await;
    assert_eq!(dispatch.spoken(), Some("Your to-do list is empty."));

    let dispatch = assistant
        .handle(&mut session, "add buy milk to my todo list")
        .await;
    assert_eq!(
        dispatch.spoken(),
        Some("Added buy milk to your to-do list.")
    );
    assert_eq!(session.todo.tasks(), ["buy milk"]);

    assistant
        .handle(&mut session, "Add call the plumber in my to-do list")
        .await;
    let dispatch = assistant.handle(&mut session, "show my to do list").await;
    assert_eq!(
        dispatch.spoken(),
        Some("Your to-do list contains: buy milk, call the plumber")
    );

    let dispatch = assistant.handle(&mut session, "clear my todo list").await;
    assert_eq!(dispatch.spoken(), Some("Your to-do list has been cleared."));

    let dispatch = assistant.handle(&mut session, "show the todo list").await;
    assert_eq!(dispatch.spoken(), Some("Your to-do list is empty."));
    assert!(canned.requests().is_empty());
}

#[tokio::test]
async fn test_two_tasks_render_in_order() {
    let canned = Canned::new();
    let assistant = assistant(&canned);
    let mut session = Session::new();

    assistant.handle(&mut session, "add a to my todo list").await;
    assistant.handle(&mut session, "add b to my todo list").await;

    let dispatch = assistant.handle(&mut session, "show my todo list").await;
    assert_eq!(dispatch.spoken(), Some("Your to-do list contains: a, b"));
}

#[tokio::test]
async fn test_put_without_add_is_not_a_task() {
    let canned = Canned::new();
    let assistant = assistant(&canned);
    let mut session = Session::new();

    // Routing needs "add"; "put" is only stripped once routed
    let dispatch = assistant
        .handle(&mut session, "put socks in my todo list")
        .await;
    assert_eq!(dispatch.intent, Intent::Fallback);
    assert!(session.todo.is_empty());
}

#[tokio::test]
async fn test_add_without_task_leaves_list_unchanged() {
    let canned = Canned::new();
    let assistant = assistant(&canned);
    let mut session = Session::new();
    assistant.handle(&mut session, "add eggs to my todo list").await;

    let dispatch = assistant.handle(&mut session, "add to todo list").await;

    assert_eq!(dispatch.intent, Intent::AddTask);
    assert_eq!(dispatch.spoken(), Some(messages::TASK_NOT_UNDERSTOOD));
    assert_eq!(session.todo.tasks(), ["eggs"]);
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let canned = Canned::new();
    let assistant = assistant(&canned);
    let mut first = Session::new();
    let mut second = Session::new();

    assistant.handle(&mut first, "add laundry to my todo list").await;
    assistant.handle(&mut second, "turn on dark mode").await;

    assert_eq!(first.todo.len(), 1);
    assert!(second.todo.is_empty());
    assert_eq!(first.theme, Theme::Light);
    assert_eq!(second.theme, Theme::Dark);
}

#[tokio::test]
async fn test_open_calculator() {
    let canned = Canned::new();
    let assistant = assistant(&canned);

    let dispatch = assistant
        .handle(&mut Session::new(), "Open calculator please")
        .await;

    assert_eq!(dispatch.intent, Intent::OpenSite);
    assert_eq!(dispatch.spoken(), Some("Opening an online calculator."));
    assert_eq!(urls(&dispatch.effects), ["https://www.calculatorsoup.com/"]);
}

#[tokio::test]
async fn test_open_unknown_site_searches() {
    let canned = Canned::new();
    let assistant = assistant(&canned);

    let dispatch = assistant
        .handle(&mut Session::new(), "open nothingknown")
        .await;

    assert_eq!(dispatch.spoken(), Some(messages::UNKNOWN_SITE));
    assert_eq!(
        urls(&dispatch.effects),
        ["https://www.google.com/search?q=open%20nothingknown"]
    );
    // No lookup is made for an unknown site
    assert!(canned.requests().is_empty());
}

#[tokio::test]
async fn test_open_configured_site() {
    let canned = Canned::new();
    let mut config = Config::default();
    config.sites.push(
        Site::new("wikipedia", "https://www.wikipedia.org").with_message("Opening Wikipedia."),
    );
    let assistant = assistant_with_config(&canned, &config);

    let dispatch = assistant
        .handle(&mut Session::new(), "open wikipedia")
        .await;
    assert_eq!(dispatch.spoken(), Some("Opening Wikipedia."));
    assert_eq!(urls(&dispatch.effects), ["https://www.wikipedia.org"]);
}

#[tokio::test]
async fn test_fallback_speaks_short_answer() {
    let canned = Canned::new();
    canned.set_answer("Hamlet was written by William Shakespeare.");
    let assistant = assistant(&canned);

    let dispatch = assistant
        .handle(&mut Session::new(), "Who wrote Hamlet")
        .await;

    assert_eq!(dispatch.intent, Intent::Fallback);
    assert_eq!(canned.requests(), ["answer who wrote hamlet"]);
    assert_eq!(
        dispatch.spoken(),
        Some("Hamlet was written by William Shakespeare.")
    );
}

#[tokio::test]
async fn test_fallback_truncates_long_answer() {
    let canned = Canned::new();
    let first = "Rust is a general-purpose programming language";
    canned.set_answer(&format!(
        "{}. It emphasizes performance, type safety, and concurrency, and enforces memory safety without a garbage collector.",
        first
    ));
    let assistant = assistant(&canned);

    let dispatch = assistant
        .handle(&mut Session::new(), "what is rust")
        .await;
    assert_eq!(dispatch.spoken(), Some(format!("{}.", first).as_str()));
}

#[tokio::test]
async fn test_fallback_empty_answer_searches() {
    let canned = Canned::new();
    canned.set_answer("   ");
    let assistant = assistant(&canned);

    let dispatch = assistant
        .handle(&mut Session::new(), "best pizza near me")
        .await;

    assert_eq!(dispatch.spoken(), Some(messages::NO_ANSWER));
    assert_eq!(
        urls(&dispatch.effects),
        ["https://www.google.com/search?q=best%20pizza%20near%20me"]
    );
}

#[tokio::test]
async fn test_fallback_transport_failure_recovers() {
    let canned = Canned::new();
    canned.fail_answers();
    let assistant = assistant(&canned);
    let mut session = Session::new();

    let dispatch = assistant.handle(&mut session, "why is the sky blue").await;
    assert_eq!(dispatch.spoken(), Some(messages::ANSWER_FAILED));
    assert!(urls(&dispatch.effects).is_empty());

    // The session stays usable afterwards
    let dispatch = assistant
        .handle(&mut session, "add sleep to my todo list")
        .await;
    assert_eq!(dispatch.spoken(), Some("Added sleep to your to-do list."));
}

#[tokio::test]
async fn test_joke() {
    let canned = Canned::new();
    *canned.joke.lock().unwrap() = Some("Why do Java developers wear glasses?".to_string());
    let assistant = assistant(&canned);

    let dispatch = assistant.handle(&mut Session::new(), "make me laugh").await;
    assert_eq!(
        dispatch.spoken(),
        Some("Why do Java developers wear glasses?")
    );
    assert_eq!(canned.requests(), ["joke"]);
}

#[tokio::test]
async fn test_status_tracks_last_output() {
    let canned = Canned::new();
    let assistant = assistant(&canned);
    let mut session = Session::new();

    let dispatch = assistant.handle(&mut session, "Activate Light Mode").await;
    assert_eq!(
        dispatch.effects[0],
        Effect::status("You said: activate light mode")
    );
    assert_eq!(session.status, "Light mode activated.");
}

#[tokio::test]
async fn test_dispatch_serializes_effects() {
    let canned = Canned::new();
    let assistant = assistant(&canned);

    let dispatch = assistant.handle(&mut Session::new(), "open github").await;
    let json = serde_json::to_value(&dispatch).unwrap();

    assert_eq!(json["rule"], "open_site");
    assert_eq!(json["intent"], "open_site");
    assert_eq!(json["effects"][1]["type"], "speak");
    assert_eq!(json["effects"][1]["value"], "Opening github.");
    assert_eq!(json["effects"][2]["type"], "open_url");
    assert_eq!(json["effects"][2]["value"], "https://www.github.com");
}
