use page_scraper::networking::{ClientOptions, HttpClient, ReqwestClient};
use page_scraper::{PageScraper, ScrapeError};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Serve one canned HTTP/1.1 response on 127.0.0.1 and hand back the request line
fn serve_once(status_line: &str, content_type: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/page", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        content_type,
        body.len(),
        body
    );
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
        }
        reader.get_mut().write_all(response.as_bytes()).unwrap();
        request_line.trim_end().to_string()
    });
    (url, handle)
}

/// A url on a port nothing listens on
fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

/// Keep system proxy settings away from requests to 127.0.0.1
fn local_options() -> ClientOptions {
    ClientOptions {
        no_proxy: true,
        ..ClientOptions::default()
    }
}

fn local_scraper(url: impl Into<String>) -> PageScraper {
    PageScraper::with_options(url, local_options()).unwrap()
}

const PAGE: &str = "<html>\n  <body>\n    <h1>Title 1</h1>\n    <h1>Title 2</h1>\n  </body>\n</html>\n";

#[test]
fn fetch_returns_body_over_http() {
    let (url, server) = serve_once("200 OK", "text/html; charset=utf-8", PAGE);
    let scraper = local_scraper(url);
    assert_eq!(scraper.fetch().unwrap(), PAGE);
    assert_eq!(server.join().unwrap(), "GET /page HTTP/1.1");
}

#[test]
fn fetch_returns_json_unchanged() {
    let body = r#"{"key": "value"}"#;
    let (url, server) = serve_once("200 OK", "application/json", body);
    let scraper = local_scraper(url);
    assert_eq!(scraper.fetch().unwrap(), body);
    server.join().unwrap();
}

#[test]
fn not_found_is_http_error() {
    let (url, server) = serve_once("404 Not Found", "text/plain", "404 Not Found");
    let scraper = local_scraper(url);
    match scraper.fetch() {
        Err(ScrapeError::HttpError { status }) => assert_eq!(status, 404),
        other => panic!("expected HttpError, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn refused_connection_is_network_error() {
    let scraper = local_scraper(refused_url());
    assert!(matches!(scraper.fetch(), Err(ScrapeError::NetworkError(_))));
}

#[test]
fn unparseable_url_fails_only_on_fetch() {
    let scraper = local_scraper("not a url");
    assert!(matches!(scraper.fetch(), Err(ScrapeError::NetworkError(_))));
}

#[test]
fn reqwest_client_reports_status_without_judging_it() {
    let (url, server) = serve_once("500 Internal Server Error", "text/plain", "boom");
    let client = ReqwestClient::new(ClientOptions {
        user_agent: Some("page-scraper-test".to_string()),
        timeout_secs: Some(10),
        no_proxy: true,
    });
    let response = client.get(&url).unwrap();
    assert_eq!(response.status, 500);
    server.join().unwrap();
}

#[test]
fn fetch_then_parse_matches_direct_parse() {
    let (url, server) = serve_once("200 OK", "text/html", PAGE);
    let scraper = local_scraper(url);
    let html = scraper.fetch().unwrap();
    assert_eq!(scraper.parse(&html, "h1"), vec!["Title 1", "Title 2"]);
    assert_eq!(scraper.parse(&html, "h1"), scraper.parse(PAGE, "h1"));
    server.join().unwrap();
}
