use crate::harness::{CapturedEvent, init_test_tracing};
use logpipe_core::conf::load_config;
use logpipe_core::server::build_pingora_server;
use reqwest::blocking::{Client, RequestBuilder};
use std::net::TcpStream;
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::{Duration, Instant};

/// Handle to a running logpipe test server.
pub struct TestServer {
    base_url: String,
    client: Client,
}

impl TestServer {
    /// Start a logpipe instance from a fixture config directory.
    ///
    /// The listen port is allocated dynamically and patched into the config,
    /// so tests can run in parallel.
    pub fn start(fixture: &str) -> Self {
        // Initialize tracing (this must happen first).
        init_test_tracing(events());

        let listen_port = free_port();

        let config_path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("config")
            .join(fixture)
            .join("logpipe.hcl");

        assert!(
            config_path.exists(),
            "fixture config does not exist: {:?}",
            config_path
        );

        let mut cfg = load_config(&config_path).expect("failed to load fixture config");
        cfg.server.listen = format!("127.0.0.1:{listen_port}");

        let server = build_pingora_server(cfg).expect("failed to build logpipe server");

        // Run server in background thread
        thread::spawn(move || {
            server.run_forever();
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");

        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("failed to build client");

        Self { base_url, client }
    }

    /// GET with the given query parameters.
    pub fn get(&self, path: &str, params: &[(&str, &str)]) -> RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(params)
    }

    /// POST with the given parameters as a form body.
    pub fn post_form(&self, path: &str, params: &[(&str, &str)]) -> RequestBuilder {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .form(params)
    }

    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        events().lock().unwrap().clone()
    }
}

/// Poll until the server accepts connections (or panic).
fn wait_for_server(listen_addr: &str) {
    let addr = listen_addr.strip_prefix("http://").unwrap_or(listen_addr);

    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", listen_addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}

/// Allocate a free port on localhost.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
