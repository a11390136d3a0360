use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_IDLE_SECS};
use crate::error::PlaypageError;
use crate::interaction::Interaction;
use crate::renderer::html::{render_error_page, render_html};
use crate::runtime::run::{Runner, RunnerError};
use crate::scripts::Script;

pub const SESSION_COOKIE: &str = "playpage_session";
const MAX_BODY_BYTES: usize = 1 << 20;
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(5);

/// How long an untouched session is kept, and how many are kept at most.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub idle: Duration,
    pub max: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
            max: DEFAULT_MAX_SESSIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub session: Option<String>,
    pub body: Vec<u8>,
}

impl Request {
    pub fn get(path: &str, session: Option<&str>) -> Self {
        Self {
            method: "GET".into(),
            path: path.into(),
            session: session.map(str::to_string),
            body: Vec::new(),
        }
    }

    pub fn post_form(path: &str, session: Option<&str>, body: &str) -> Self {
        Self {
            method: "POST".into(),
            path: path.into(),
            session: session.map(str::to_string),
            body: body.as_bytes().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
    pub set_session: Option<String>,
    pub location: Option<String>,
}

impl Response {
    fn page(status: u16, body: String) -> Self {
        Self {
            status,
            body,
            set_session: None,
            location: None,
        }
    }

    fn see_other(location: &str) -> Self {
        Self {
            status: 303,
            body: String::new(),
            set_session: None,
            location: Some(location.to_string()),
        }
    }

    fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            303 => "See Other",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            _ => "Internal Server Error",
        }
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "HTTP/1.1 {} {}\r\n", self.status, self.reason())?;
        write!(out, "Content-Type: text/html; charset=utf-8\r\n")?;
        write!(out, "Content-Length: {}\r\n", self.body.len())?;
        if let Some(location) = &self.location {
            write!(out, "Location: {}\r\n", location)?;
        }
        if let Some(id) = &self.set_session {
            write!(out, "Set-Cookie: {}={}; Path=/; HttpOnly; SameSite=Lax\r\n", SESSION_COOKIE, id)?;
        }
        write!(out, "Cache-Control: no-store\r\nConnection: close\r\n\r\n")?;
        out.write_all(self.body.as_bytes())?;
        out.flush()
    }
}

/// Local HTTP front end. One connection at a time, one runner per browser session.
pub struct Server {
    listener: TcpListener,
    addr: String,
    app: App,
    io_timeout: Duration,
}

impl Server {
    pub fn bind(addr: &str, script: &'static dyn Script, limits: SessionLimits) -> Result<Self, PlaypageError> {
        let listener = TcpListener::bind(addr).map_err(|source| PlaypageError::Server {
            addr: addr.to_string(),
            source,
        })?;
        Ok(Self {
            listener,
            addr: addr.to_string(),
            app: App::with_limits(script, limits),
            io_timeout: DEFAULT_IO_TIMEOUT,
        })
    }

    /// Read and write timeout applied to every accepted connection.
    pub fn with_io_timeout(mut self, timeout: Duration) -> Self {
        self.io_timeout = timeout;
        self
    }

    pub fn local_addr(&self) -> Result<SocketAddr, PlaypageError> {
        self.listener.local_addr().map_err(|source| PlaypageError::Server {
            addr: self.addr.clone(),
            source,
        })
    }

    pub fn run(mut self) -> Result<(), PlaypageError> {
        info!(
            "serving `{}` on http://{}",
            self.app.script.name(),
            self.local_addr()?
        );
        loop {
            self.serve_next()?;
        }
    }

    /// Accepts and answers a single connection. Per-connection failures,
    /// including peers that stay silent past the timeout, are logged and
    /// dropped; only accept failures are returned.
    pub fn serve_next(&mut self) -> Result<(), PlaypageError> {
        let (stream, peer) = self.listener.accept().map_err(|source| PlaypageError::Server {
            addr: self.addr.clone(),
            source,
        })?;
        match self.app.serve_connection(stream, self.io_timeout) {
            Ok(()) => {}
            Err(err) if matches!(err.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {
                debug!("dropping idle connection from {}", peer);
            }
            Err(err) => warn!("connection from {} failed: {}", peer, err),
        }
        Ok(())
    }
}

struct Session {
    runner: Runner,
    last_seen: Instant,
    /// Page rendered by the last `POST`, shown once by the `GET` it redirects to.
    pending_page: Option<String>,
}

/// Request handling, independent of sockets.
pub struct App {
    script: &'static dyn Script,
    sessions: BTreeMap<String, Session>,
    next_session: u64,
    limits: SessionLimits,
}

impl App {
    pub fn new(script: &'static dyn Script) -> Self {
        Self::with_limits(script, SessionLimits::default())
    }

    pub fn with_limits(script: &'static dyn Script, limits: SessionLimits) -> Self {
        Self {
            script,
            sessions: BTreeMap::new(),
            next_session: 1,
            limits,
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn serve_connection(&mut self, stream: TcpStream, timeout: Duration) -> io::Result<()> {
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;
        let mut reader = BufReader::new(stream.try_clone()?);
        let response = match read_request(&mut reader) {
            Ok(request) => self.handle(&request),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                Response::page(400, render_error_page("Bad Request", &err.to_string()))
            }
            Err(err) => return Err(err),
        };
        let mut stream = stream;
        response.write_to(&mut stream)
    }

    pub fn handle(&mut self, request: &Request) -> Response {
        let path = request.path.split('?').next().unwrap_or("");
        debug!("{} {}", request.method, request.path);
        if path != "/" {
            return Response::page(404, render_error_page("Not Found", &format!("no page at {}", path)));
        }
        if request.method != "GET" && request.method != "POST" {
            return Response::page(
                405,
                render_error_page("Method Not Allowed", &format!("{} is not supported", request.method)),
            );
        }

        let now = Instant::now();
        self.expire_sessions(now);
        let (id, fresh) = match request.session.as_deref() {
            Some(id) if self.sessions.contains_key(id) => (id.to_string(), false),
            _ => (self.open_session(now), true),
        };
        let Some(session) = self.sessions.get_mut(&id) else {
            return Response::page(500, render_error_page("Internal Server Error", "session lost"));
        };
        session.last_seen = now;

        let outcome = if request.method == "POST" {
            let pairs: Vec<(String, String)> = url::form_urlencoded::parse(&request.body).into_owned().collect();
            let interactions = Interaction::from_form(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            debug!("session {} submitted {} interactions", id, interactions.len());
            session
                .runner
                .interact_all(&interactions)
                .map(|pass| render_html(pass, true))
                .map(|page| {
                    session.pending_page = Some(page);
                    None
                })
        } else if let Some(page) = session.pending_page.take() {
            Ok(Some(page))
        } else {
            session
                .runner
                .rerun()
                .map(|pass| Some(render_html(pass, true)))
                .map_err(RunnerError::from)
        };

        let mut response = match outcome {
            Ok(Some(page)) => Response::page(200, page),
            Ok(None) => Response::see_other("/"),
            Err(RunnerError::Interaction(err)) => {
                warn!("session {}: {}", id, err);
                Response::page(400, render_error_page("Interaction rejected", &err.to_string()))
            }
            Err(RunnerError::Runtime(err)) => {
                warn!("session {}: {}", id, err);
                Response::page(500, render_error_page("Script error", &err.to_string()))
            }
        };
        if fresh {
            response.set_session = Some(id);
        }
        response
    }

    fn open_session(&mut self, now: Instant) -> String {
        while self.sessions.len() >= self.limits.max.max(1) {
            let Some(oldest) = self
                .sessions
                .iter()
                .min_by_key(|(_, session)| session.last_seen)
                .map(|(id, _)| id.clone())
            else {
                break;
            };
            debug!("evicting session {}", oldest);
            self.sessions.remove(&oldest);
        }
        let id = format!("s{}", self.next_session);
        self.next_session += 1;
        info!("new session {}", id);
        self.sessions.insert(
            id.clone(),
            Session {
                runner: Runner::new(self.script),
                last_seen: now,
                pending_page: None,
            },
        );
        id
    }

    fn expire_sessions(&mut self, now: Instant) {
        let idle = self.limits.idle;
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| now.saturating_duration_since(session.last_seen) < idle);
        if self.sessions.len() < before {
            debug!("expired {} idle sessions", before - self.sessions.len());
        }
    }
}

/// Reads one HTTP/1.x request. Malformed input is `InvalidData`.
pub fn read_request(reader: &mut impl BufRead) -> io::Result<Request> {
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let (method, path) = match (parts.next(), parts.next(), parts.next()) {
        (Some(method), Some(path), Some(version)) if version.starts_with("HTTP/") => {
            (method.to_string(), path.to_string())
        }
        _ => return Err(invalid(format!("bad request line `{}`", request_line.trim_end()))),
    };

    let mut content_length = 0usize;
    let mut session = None;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 {
            break;
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        let Some((name, value)) = header.split_once(':') else {
            return Err(invalid(format!("bad header `{}`", header)));
        };
        let value = value.trim();
        if name.eq_ignore_ascii_case("content-length") {
            content_length = value
                .parse()
                .map_err(|_| invalid(format!("bad content length `{}`", value)))?;
        } else if name.eq_ignore_ascii_case("cookie") {
            session = session_from_cookie(value).or(session);
        }
    }

    if content_length > MAX_BODY_BYTES {
        return Err(invalid(format!("body of {} bytes is too large", content_length)));
    }
    let mut body = vec![0; content_length];
    reader.read_exact(&mut body)?;

    Ok(Request {
        method,
        path,
        session,
        body,
    })
}

fn session_from_cookie(header: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}
