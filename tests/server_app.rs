use std::io::{Read, Write};
use std::net::TcpStream;
use std::thread;
use std::time::Duration;

use playpage::scripts;
use playpage::server::{App, Request, Server, SessionLimits};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn app() -> App {
    init_logging();
    App::new(scripts::find("hello").unwrap())
}

#[test]
fn first_visit_issues_a_session_cookie() {
    let mut app = app();
    let resp = app.handle(&Request::get("/", None));
    assert_eq!(resp.status, 200);
    assert_eq!(resp.set_session.as_deref(), Some("s1"));
    assert!(resp.body.contains("Press the button to see a response."));

    let again = app.handle(&Request::get("/", Some("s1")));
    assert_eq!(again.status, 200);
    assert!(again.set_session.is_none());
    assert_eq!(app.session_count(), 1);
}

#[test]
fn unknown_cookie_starts_a_new_session() {
    let mut app = app();
    let resp = app.handle(&Request::get("/", Some("stale")));
    assert_eq!(resp.set_session.as_deref(), Some("s1"));
}

#[test]
fn form_post_redirects_to_the_clicked_pass() {
    let mut app = app();
    app.handle(&Request::get("/", None));
    let resp = app.handle(&Request::post_form(
        "/",
        Some("s1"),
        "text_input%3AMessage=Hi+%3Cthere%3E&__click=button%3ASay+it",
    ));
    assert_eq!(resp.status, 303);
    assert_eq!(resp.location.as_deref(), Some("/"));
    assert!(resp.set_session.is_none());

    let landed = app.handle(&Request::get("/", Some("s1")));
    assert_eq!(landed.status, 200);
    assert!(landed.body.contains("You said: Hi &lt;there&gt;"));

    let refresh = app.handle(&Request::get("/", Some("s1")));
    assert!(refresh.body.contains("Press the button to see a response."));
    assert!(refresh.body.contains("value=\"Hi &lt;there&gt;\""));
}

#[test]
fn sessions_are_isolated() {
    let mut app = app();
    app.handle(&Request::get("/", None));
    app.handle(&Request::get("/", None));
    app.handle(&Request::post_form("/", Some("s1"), "text_input%3AMessage=one"));
    let other = app.handle(&Request::get("/", Some("s2")));
    assert!(other.body.contains("value=\"Hello\""));
}

#[test]
fn bad_interaction_is_a_400_and_session_survives() {
    let mut app = app();
    app.handle(&Request::get("/", None));
    let resp = app.handle(&Request::post_form("/", Some("s1"), "__click=nope"));
    assert_eq!(resp.status, 400);
    assert!(resp.location.is_none());
    assert!(resp.body.contains("no widget `nope`"));

    let ok = app.handle(&Request::get("/", Some("s1")));
    assert_eq!(ok.status, 200);
}

#[test]
fn other_paths_and_methods_are_refused() {
    let mut app = app();
    assert_eq!(app.handle(&Request::get("/favicon.ico", None)).status, 404);
    let mut put = Request::get("/", None);
    put.method = "PUT".into();
    assert_eq!(app.handle(&put).status, 405);
    assert_eq!(app.session_count(), 0);
}

#[test]
fn idle_sessions_expire() {
    init_logging();
    let limits = SessionLimits {
        idle: Duration::ZERO,
        max: 16,
    };
    let mut app = App::with_limits(scripts::find("hello").unwrap(), limits);
    assert_eq!(app.handle(&Request::get("/", None)).set_session.as_deref(), Some("s1"));

    let resp = app.handle(&Request::get("/", Some("s1")));
    assert_eq!(resp.set_session.as_deref(), Some("s2"));
    assert_eq!(app.session_count(), 1);
}

#[test]
fn session_count_is_capped() {
    init_logging();
    let limits = SessionLimits {
        idle: Duration::from_secs(3600),
        max: 8,
    };
    let mut app = App::with_limits(scripts::find("hello").unwrap(), limits);
    for _ in 0..1000 {
        app.handle(&Request::get("/", None));
    }
    assert_eq!(app.session_count(), 8);

    // The newest session survives eviction.
    let resp = app.handle(&Request::get("/", Some("s1000")));
    assert!(resp.set_session.is_none());
}

#[test]
fn silent_connection_does_not_block_the_next_client() {
    init_logging();
    let mut server = Server::bind("127.0.0.1:0", scripts::find("hello").unwrap(), SessionLimits::default())
        .unwrap()
        .with_io_timeout(Duration::from_millis(200));
    let addr = server.local_addr().unwrap();

    let idle = TcpStream::connect(addr).unwrap();
    let client = thread::spawn(move || {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    });

    server.serve_next().unwrap();
    server.serve_next().unwrap();
    let response = client.join().unwrap();
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    drop(idle);
}

#[test]
fn serves_one_connection_over_tcp() {
    init_logging();
    let mut server = Server::bind("127.0.0.1:0", scripts::find("hello").unwrap(), SessionLimits::default()).unwrap();
    let addr = server.local_addr().unwrap();

    let client = thread::spawn(move || {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    });

    server.serve_next().unwrap();
    let response = client.join().unwrap();
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("Set-Cookie: playpage_session=s1;"));
    assert!(response.contains("<h1>Playground</h1>"));
}
